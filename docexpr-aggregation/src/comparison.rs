//! Comparison expression operators. Each takes `[left, right]`.

use bson::{Bson, Document};
use docexpr_core::builder::operator;

use crate::expr::Expr;

fn compare(name: &str, left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
    operator(name, Bson::Array(vec![left.into(), right.into()]))
}

impl Expr {
    /// Returns `-1`, `0` or `1` as `left` is less than, equal to or greater than `right`.
    pub fn cmp(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$cmp", left, right)
    }

    /// True when `left` equals `right`.
    pub fn eq(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$eq", left, right)
    }

    /// True when `left` is greater than `right`.
    pub fn gt(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$gt", left, right)
    }

    /// True when `left` is greater than or equal to `right`.
    pub fn gte(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$gte", left, right)
    }

    /// True when `left` is less than `right`.
    pub fn lt(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$lt", left, right)
    }

    /// True when `left` is less than or equal to `right`.
    pub fn lte(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$lte", left, right)
    }

    /// True when `left` differs from `right`.
    pub fn ne(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        compare("$ne", left, right)
    }
}
