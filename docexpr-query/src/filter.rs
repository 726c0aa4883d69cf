//! Query predicate operators.
//!
//! The [`Filter`] struct collects constructors for the operators that appear
//! inside a query filter, e.g. `{ "qty": Filter::gt(20) }`. Each returns a
//! single-key document such as `{ $gt: 20 }` and performs no validation of its
//! arguments.
//!
//! - Comparison: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `in_`, `nin`
//! - Element: `exists`, `type_`
//! - Evaluation: `expr`, `json_schema`, `mod_`, `regex`, `text`, `where_`
//! - Logical: `and`, `or`, `nor`, `not`
//! - Array: `all`, `elem_match`, `size`
//! - Bitwise: `bits_all_clear`, `bits_all_set`, `bits_any_clear`, `bits_any_set`
//! - Miscellaneous: `comment`, `rand`
//!
//! Geospatial predicates live in [`crate::geospatial`].

use bson::{Bson, Document, Regex};
use docexpr_core::{builder::{fields, operator}, compose::array, document::JavaScript, operator_builder};

/// Helper struct for constructing query predicate operators.
///
/// # Example
///
/// ```ignore
/// use docexpr_query::Filter;
/// use bson::doc;
///
/// let query = doc! {
///     "qty": Filter::gte(20),
///     "tags": Filter::all(vec!["a", "b"]),
/// };
/// ```
pub struct Filter;

impl Filter {
    /// Matches values equal to `value`.
    pub fn eq(value: impl Into<Bson>) -> Document {
        operator("$eq", value)
    }

    /// Matches values greater than `value`.
    pub fn gt(value: impl Into<Bson>) -> Document {
        operator("$gt", value)
    }

    /// Matches values greater than or equal to `value`.
    pub fn gte(value: impl Into<Bson>) -> Document {
        operator("$gte", value)
    }

    /// Matches any of the values in the given array.
    pub fn in_(values: impl Into<Bson>) -> Document {
        operator("$in", values)
    }

    /// Matches values less than `value`.
    pub fn lt(value: impl Into<Bson>) -> Document {
        operator("$lt", value)
    }

    /// Matches values less than or equal to `value`.
    pub fn lte(value: impl Into<Bson>) -> Document {
        operator("$lte", value)
    }

    /// Matches values not equal to `value`.
    pub fn ne(value: impl Into<Bson>) -> Document {
        operator("$ne", value)
    }

    /// Matches none of the values in the given array.
    pub fn nin(values: impl Into<Bson>) -> Document {
        operator("$nin", values)
    }

    /// Matches documents that have (or lack) the field.
    pub fn exists(exists: bool) -> Document {
        operator("$exists", exists)
    }

    /// Matches fields of the given BSON type, by number or alias.
    pub fn type_(number_or_alias: impl Into<Bson>) -> Document {
        operator("$type", number_or_alias)
    }

    /// Allows aggregation expressions inside a query.
    pub fn expr(expr: impl Into<Bson>) -> Document {
        operator("$expr", expr)
    }

    /// Validates documents against a JSON schema.
    pub fn json_schema(schema: impl Into<Bson>) -> Document {
        operator("$jsonSchema", schema)
    }

    /// Matches values where `value % divisor == remainder`.
    pub fn mod_(divisor: i64, remainder: i64) -> Document {
        operator("$mod", Bson::Array(vec![divisor.into(), remainder.into()]))
    }

    /// Matches strings against a regular expression.
    pub fn regex(regex: Regex) -> Document {
        operator("$regex", regex)
    }

    /// Performs a text search on the text-indexed fields.
    pub fn text(search: impl Into<String>) -> TextOperator {
        TextOperator::from_spec(fields([("$search", Bson::String(search.into()))]))
    }

    /// Matches documents satisfying a JavaScript predicate.
    pub fn where_(js: impl Into<JavaScript>) -> Document {
        let js: JavaScript = js.into();
        operator("$where", js)
    }

    /// Joins clauses with a logical AND.
    pub fn and<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$and", array(exprs))
    }

    /// Inverts an operator expression.
    pub fn not(expr: impl Into<Bson>) -> Document {
        operator("$not", expr)
    }

    /// Joins clauses with a logical NOR.
    pub fn nor<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$nor", array(exprs))
    }

    /// Joins clauses with a logical OR.
    pub fn or<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$or", array(exprs))
    }

    /// Matches arrays containing all the given elements.
    pub fn all(values: impl Into<Bson>) -> Document {
        operator("$all", values)
    }

    /// Matches arrays with at least one element matching `query`.
    pub fn elem_match(query: impl Into<Bson>) -> Document {
        operator("$elemMatch", query)
    }

    /// Matches arrays with exactly `n` elements.
    pub fn size(n: i64) -> Document {
        operator("$size", n)
    }

    /// Matches when all the bit positions in `mask` are clear.
    pub fn bits_all_clear(mask: impl Into<Bson>) -> Document {
        operator("$bitsAllClear", mask)
    }

    /// Matches when all the bit positions in `mask` are set.
    pub fn bits_all_set(mask: impl Into<Bson>) -> Document {
        operator("$bitsAllSet", mask)
    }

    /// Matches when any of the bit positions in `mask` is clear.
    pub fn bits_any_clear(mask: impl Into<Bson>) -> Document {
        operator("$bitsAnyClear", mask)
    }

    /// Matches when any of the bit positions in `mask` is set.
    pub fn bits_any_set(mask: impl Into<Bson>) -> Document {
        operator("$bitsAnySet", mask)
    }

    /// Attaches a comment to a query predicate.
    pub fn comment(comment: impl Into<String>) -> Document {
        operator("$comment", Bson::String(comment.into()))
    }

    /// Generates a random float between 0 and 1.
    pub fn rand() -> Document {
        operator("$rand", Document::new())
    }
}

operator_builder! {
    /// Builder returned from [`Filter::text`].
    ///
    /// Options are written next to `$search` inside the `$text` payload.
    pub struct TextOperator => "$text";
}

impl TextOperator {
    /// Sets the language that determines stop words and stemming.
    pub fn set_language(self, language: impl Into<String>) -> Self {
        self.with("$language", Bson::String(language.into()))
    }

    /// Enables or disables case sensitive search.
    pub fn set_case_sensitive(self, case_sensitive: bool) -> Self {
        self.with("$caseSensitive", case_sensitive)
    }

    /// Enables or disables diacritic sensitive search.
    pub fn set_diacritic_sensitive(self, diacritic_sensitive: bool) -> Self {
        self.with("$diacriticSensitive", diacritic_sensitive)
    }
}
