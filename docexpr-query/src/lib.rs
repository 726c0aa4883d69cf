//! Query, projection and update operators.
//!
//! This crate provides:
//!
//! - **Query predicates** ([`filter`]) - Comparison, logical, element, evaluation, array and bitwise operators
//! - **Geospatial predicates** ([`geospatial`]) - GeoJSON and legacy coordinate operators plus shape specifiers
//! - **Projection** ([`projection`]) - `$elemMatch`, `$meta` and `$slice` projections
//! - **Query modifiers** ([`modifier`]) - Legacy cursor modifiers such as `$orderBy` and `$hint`
//! - **Update operators** ([`update`]) - Field, array and bitwise update operators
//!
//! # Example
//!
//! ```ignore
//! use docexpr_query::{Filter, Update, merge_operators};
//! use bson::doc;
//!
//! let filter = doc! {
//!     "status": Filter::in_(vec!["A", "D"]),
//!     "qty": Filter::lt(30),
//! };
//! let update = merge_operators([
//!     Update::set(doc! { "status": "done" }),
//!     Update::inc(doc! { "count": 1 }),
//! ]);
//! ```

#![warn(missing_docs)]

#[allow(unused_extern_crates)]
extern crate self as docexpr_query;

pub mod filter;
pub mod geospatial;
pub mod modifier;
pub mod projection;
pub mod update;

pub use docexpr_core::compose::merge as merge_operators;
pub use filter::{Filter, TextOperator};
pub use geospatial::{GeometryOperator, LegacyNearOperator, NearOperator, NearSphereOperator};
pub use modifier::Modifier;
pub use projection::Projection;
pub use update::{EachModifier, Update};
