//! Literal, variable, field access and data size operators.

use bson::{Bson, Document};
use docexpr_core::builder::{fields, operator};

use crate::expr::Expr;

impl Expr {
    /// Returns `value` without parsing it as an expression.
    pub fn literal(value: impl Into<Bson>) -> Document {
        operator("$literal", value)
    }

    /// Binds the variables in `vars` for use in `in_`.
    pub fn let_(vars: impl Into<Bson>, in_: impl Into<Bson>) -> Document {
        operator("$let", fields([("vars", vars.into()), ("in", in_.into())]))
    }

    /// Reads the text search score or index key metadata, e.g. `"textScore"`.
    pub fn meta(keyword: impl Into<String>) -> Document {
        operator("$meta", Bson::String(keyword.into()))
    }

    /// Reads a field whose name may contain `.` or start with `$`.
    pub fn get_field(field: impl Into<String>, input: impl Into<Bson>) -> Document {
        operator(
            "$getField",
            fields([("field", Bson::String(field.into())), ("input", input.into())]),
        )
    }

    /// Random float between 0 and 1.
    pub fn rand() -> Document {
        operator("$rand", Document::new())
    }

    /// Matches a random selection of documents at the given rate.
    pub fn sample_rate(rate: f64) -> Document {
        operator("$sampleRate", rate)
    }

    /// Adds, updates or replaces `field` in `input`.
    pub fn set_field(
        field: impl Into<String>,
        input: impl Into<Bson>,
        value: impl Into<Bson>,
    ) -> Document {
        operator(
            "$setField",
            fields([
                ("field", Bson::String(field.into())),
                ("input", input.into()),
                ("value", value.into()),
            ]),
        )
    }

    /// Removes `field` from `input`.
    pub fn unset_field(field: impl Into<String>, input: impl Into<Bson>) -> Document {
        operator(
            "$unsetField",
            fields([("field", Bson::String(field.into())), ("input", input.into())]),
        )
    }

    /// Size in bytes of a string or binary value.
    pub fn binary_size(expr: impl Into<Bson>) -> Document {
        operator("$binarySize", expr)
    }

    /// Size in bytes of a document encoded as BSON.
    pub fn bson_size(expr: impl Into<Bson>) -> Document {
        operator("$bsonSize", expr)
    }
}
