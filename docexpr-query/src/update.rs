//! Update operators.
//!
//! Each operator takes the `{ field: value }` specification it applies to.
//! Separate operators are combined into one update document with
//! [`merge_operators`](crate::merge_operators):
//!
//! ```ignore
//! use docexpr_query::{Update, merge_operators};
//! use bson::doc;
//!
//! let update = merge_operators([
//!     Update::set(doc! { "status": "done" }),
//!     Update::inc(doc! { "count": 1 }),
//! ]);
//! ```

use bson::{Bson, Document};
use docexpr_core::{builder::operator, compose::array, impl_into_document};

/// Helper struct for constructing update operators.
pub struct Update;

impl Update {
    /// Sets fields to the current date, e.g. `{ lastModified: true }`.
    pub fn current_date(spec: impl Into<Bson>) -> Document {
        operator("$currentDate", spec)
    }

    /// Increments fields by the given amounts.
    pub fn inc(spec: impl Into<Bson>) -> Document {
        operator("$inc", spec)
    }

    /// Updates fields only when the given value is lower.
    pub fn min(spec: impl Into<Bson>) -> Document {
        operator("$min", spec)
    }

    /// Updates fields only when the given value is greater.
    pub fn max(spec: impl Into<Bson>) -> Document {
        operator("$max", spec)
    }

    /// Multiplies fields by the given amounts.
    pub fn mul(spec: impl Into<Bson>) -> Document {
        operator("$mul", spec)
    }

    /// Renames fields, e.g. `{ nickname: "alias" }`.
    pub fn rename(spec: impl Into<Bson>) -> Document {
        operator("$rename", spec)
    }

    /// Sets field values.
    pub fn set(spec: impl Into<Bson>) -> Document {
        operator("$set", spec)
    }

    /// Sets field values only when an upsert inserts a document.
    pub fn set_on_insert(spec: impl Into<Bson>) -> Document {
        operator("$setOnInsert", spec)
    }

    /// Removes fields.
    pub fn unset(spec: impl Into<Bson>) -> Document {
        operator("$unset", spec)
    }

    /// Adds values to an array unless already present. Use [`Update::each`]
    /// to add several values at once.
    pub fn add_to_set(spec: impl Into<Bson>) -> Document {
        operator("$addToSet", spec)
    }

    /// Removes the first (`-1`) or last (`1`) array element.
    pub fn pop(spec: impl Into<Bson>) -> Document {
        operator("$pop", spec)
    }

    /// Removes array elements matching a value or condition.
    pub fn pull(spec: impl Into<Bson>) -> Document {
        operator("$pull", spec)
    }

    /// Appends values to arrays; combine with [`Update::each`] for several.
    pub fn push(spec: impl Into<Bson>) -> Document {
        operator("$push", spec)
    }

    /// Removes every listed value from arrays.
    pub fn pull_all(spec: impl Into<Bson>) -> Document {
        operator("$pullAll", spec)
    }

    /// Bitwise `and`, `or` or `xor` update of an integer field.
    pub fn bit(spec: impl Into<Bson>) -> Document {
        operator("$bit", spec)
    }

    /// Lists several values for `$push` or `$addToSet`.
    pub fn each<V: Into<Bson>>(values: impl IntoIterator<Item = V>) -> EachModifier {
        EachModifier {
            document: operator("$each", array(values)),
        }
    }
}

/// Builder returned from [`Update::each`].
///
/// `$position`, `$slice` and `$sort` are written next to `$each`.
#[derive(Debug, Clone, PartialEq)]
pub struct EachModifier {
    document: Document,
}

impl EachModifier {
    /// Sets the array index at which the values are inserted.
    pub fn set_position(mut self, at: i64) -> Self {
        self.document.insert("$position", at);
        self
    }

    /// Limits the array to `n` elements after the push.
    pub fn set_slice(mut self, n: i64) -> Self {
        self.document.insert("$slice", n);
        self
    }

    /// Sorts the array after the push.
    pub fn set_sort(mut self, sort: impl Into<Bson>) -> Self {
        self.document.insert("$sort", sort.into());
        self
    }

    /// Returns the finished `{ $each: [...], ... }` document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl_into_document!(EachModifier);
