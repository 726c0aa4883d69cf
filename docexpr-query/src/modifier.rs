//! Legacy query modifiers.
//!
//! These wrap a query as `{ $query: ..., $orderBy: ... }`, so they are usually
//! combined with [`merge`](docexpr_core::compose::merge).

use bson::{Bson, Document};
use docexpr_core::builder::operator;

/// Helper struct for constructing legacy cursor modifiers.
pub struct Modifier;

impl Modifier {
    /// Returns the query plan instead of the results, as `{ $explain: 1 }`.
    pub fn explain() -> Document {
        operator("$explain", 1)
    }

    /// Forces the given index, by name or key pattern.
    pub fn hint(index: impl Into<Bson>) -> Document {
        operator("$hint", index)
    }

    /// Exclusive upper index bound.
    pub fn max_index(bound: impl Into<Bson>) -> Document {
        operator("$max", bound)
    }

    /// Caps the processing time of the query in milliseconds.
    pub fn max_time_ms(ms: i64) -> Document {
        operator("$maxTimeMS", ms)
    }

    /// Inclusive lower index bound.
    pub fn min_index(bound: impl Into<Bson>) -> Document {
        operator("$min", bound)
    }

    /// Sorts the results.
    pub fn order_by(sort: impl Into<Bson>) -> Document {
        operator("$orderBy", sort)
    }

    /// Wraps the query predicate.
    pub fn query(filter: impl Into<Bson>) -> Document {
        operator("$query", filter)
    }

    /// Returns only the index keys.
    pub fn return_key() -> Document {
        operator("$returnKey", true)
    }

    /// Adds the disk location of each document.
    pub fn show_disk_loc() -> Document {
        operator("$showDiskLoc", true)
    }

    /// Forces a collection scan in natural order, `1` or `-1`.
    pub fn natural(direction: i32) -> Document {
        operator("$natural", direction)
    }
}
