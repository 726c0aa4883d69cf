//! Typed builders for database query, update and aggregation documents.
//!
//! This crate is the entry point of the docexpr project. It re-exports the
//! sub-crates so callers depend on a single crate, and gates each operator
//! family behind a feature.
//!
//! # Features
//!
//! - **Pure document assembly** - Every constructor returns an ordered BSON document; nothing talks to a database
//! - **Fluent option builders** - Operators with optional fields return builders whose setters chain
//! - **Composition** - Last-write-wins merging of independently built documents
//!
//! # Quick Start
//!
//! ```ignore
//! use docexpr::prelude::*;
//!
//! let filter = doc! {
//!     "status": Filter::in_(vec!["A", "D"]),
//!     "qty": Filter::lt(30),
//! };
//!
//! let update = merge_operators([
//!     Update::set(doc! { "status": "done" }),
//!     Update::inc(doc! { "count": 1 }),
//! ]);
//!
//! let pipeline = vec![
//!     match_expr(Expr::gt("$spent", "$budget")),
//!     Stage::group(doc! { "_id": "$dept", "total": Accumulator::sum(["$spent"]) }),
//! ];
//! ```
//!
//! The documents are handed to a driver as-is, e.g. `collection.find(filter)`
//! or `collection.aggregate(pipeline)`.
//!
//! # Operator families
//!
//! - [`query`] - Query predicates, projection, legacy modifiers and update operators (requires `query` feature)
//! - [`aggregation`] - Expressions, accumulators, window operators and stages (requires `aggregation` feature)

#![warn(missing_docs)]

pub mod prelude;

pub use docexpr_core::{builder, compose, document, error, payload, positional};

// Re-export BSON types for convenience
pub use bson;

/// Query, projection, modifier and update operators.
///
/// This module is only available when the `query` feature is enabled.
#[cfg(feature = "query")]
pub mod query {
    pub use docexpr_query::*;
}

/// Aggregation expressions, accumulators, window operators and stages.
///
/// This module is only available when the `aggregation` feature is enabled.
#[cfg(feature = "aggregation")]
pub mod aggregation {
    pub use docexpr_aggregation::*;
}
