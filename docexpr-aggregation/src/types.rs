//! Type conversion expression operators.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    operator_builder,
};

use crate::expr::Expr;

impl Expr {
    /// Converts `input` to the type named or numbered by `to`.
    pub fn convert(input: impl Into<Bson>, to: impl Into<Bson>) -> ConvertOperator {
        ConvertOperator::from_spec(fields([("input", input.into()), ("to", to.into())]))
    }

    /// Converts `expr` to a boolean.
    pub fn to_bool(expr: impl Into<Bson>) -> Document {
        operator("$toBool", expr)
    }

    /// Converts `expr` to a date.
    pub fn to_date(expr: impl Into<Bson>) -> Document {
        operator("$toDate", expr)
    }

    /// Converts `expr` to a decimal128.
    pub fn to_decimal(expr: impl Into<Bson>) -> Document {
        operator("$toDecimal", expr)
    }

    /// Converts `expr` to a double.
    pub fn to_double(expr: impl Into<Bson>) -> Document {
        operator("$toDouble", expr)
    }

    /// Converts `expr` to a 32-bit integer.
    pub fn to_int(expr: impl Into<Bson>) -> Document {
        operator("$toInt", expr)
    }

    /// Converts `expr` to a 64-bit integer.
    pub fn to_long(expr: impl Into<Bson>) -> Document {
        operator("$toLong", expr)
    }

    /// Converts `expr` to an ObjectId.
    pub fn to_object_id(expr: impl Into<Bson>) -> Document {
        operator("$toObjectId", expr)
    }

    /// Converts `expr` to a string.
    pub fn to_string(expr: impl Into<Bson>) -> Document {
        operator("$toString", expr)
    }

    /// Returns the BSON type name of `expr`.
    pub fn type_(expr: impl Into<Bson>) -> Document {
        operator("$type", expr)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::convert`].
    pub struct ConvertOperator => "$convert";
}

impl ConvertOperator {
    /// Sets the value returned when the conversion fails.
    pub fn set_on_error(self, on_error: impl Into<Bson>) -> Self {
        self.with("onError", on_error)
    }

    /// Sets the value returned when the input is null or missing.
    pub fn set_on_null(self, on_null: impl Into<Bson>) -> Self {
        self.with("onNull", on_null)
    }
}
