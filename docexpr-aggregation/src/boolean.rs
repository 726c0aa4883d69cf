//! Boolean expression operators.

use bson::{Bson, Document};
use docexpr_core::{builder::operator, compose::array};

use crate::expr::Expr;

impl Expr {
    /// True when every expression is true.
    pub fn and<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$and", array(exprs))
    }

    /// True when any expression is true.
    pub fn or<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$or", array(exprs))
    }

    /// Negates `expr`. Written as a one element array.
    pub fn not(expr: impl Into<Bson>) -> Document {
        operator("$not", Bson::Array(vec![expr.into()]))
    }
}
