//! Convenient re-exports of commonly used types from docexpr.
//!
//! Import this prelude module to reach the operator namespaces without
//! importing from each sub-crate:
//!
//! ```ignore
//! use docexpr::prelude::*;
//! ```
//!
//! This provides access to:
//! - The document model and the `doc!` macro
//! - Composition utilities and error types
//! - The query namespaces (`Filter`, `Projection`, `Modifier`, `Update`)
//! - The aggregation namespaces (`Expr`, `Accumulator`, `Window`, `Stage`)

pub use docexpr_core::{
    compose::{collapse, merge, unless},
    document::{Array, Bson, Document, JavaScript, doc, field_path},
    error::{OperatorError, OperatorResult},
};

#[cfg(feature = "query")]
pub use docexpr_query::{Filter, Modifier, Projection, Update, merge_operators};

#[cfg(feature = "aggregation")]
pub use docexpr_aggregation::{
    Accumulator, Expr, Precision, Stage, TimeUnit, Window, WindowOutput, date_trunc, match_expr,
};
