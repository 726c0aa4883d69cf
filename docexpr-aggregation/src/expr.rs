//! The [`Expr`] namespace.
//!
//! Expression operators are spread over the modules of this crate by family
//! (arithmetic, array, date, string, ...); each module adds its constructors
//! to [`Expr`] in its own `impl` block.

/// Helper struct for constructing aggregation expression operators.
///
/// Arguments are anything convertible into [`Bson`](bson::Bson): literals,
/// field paths such as `"$price"`, or the output of other constructors.
///
/// # Example
///
/// ```ignore
/// use docexpr_aggregation::Expr;
///
/// let total = Expr::multiply("$price", Expr::add(["$qty", "$bonus"]));
/// ```
pub struct Expr;
