//! Set expression operators.

use bson::{Bson, Document};
use docexpr_core::{builder::operator, compose::array};

use crate::expr::Expr;

impl Expr {
    /// Written as `[set]`.
    pub fn all_elements_true(set: impl Into<Bson>) -> Document {
        operator("$allElementsTrue", Bson::Array(vec![set.into()]))
    }

    /// Written as `[set]`.
    pub fn any_element_true(set: impl Into<Bson>) -> Document {
        operator("$anyElementTrue", Bson::Array(vec![set.into()]))
    }

    /// Elements of `left` that are not in `right`.
    pub fn set_difference(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$setDifference", Bson::Array(vec![left.into(), right.into()]))
    }

    /// True when all the sets have the same distinct elements.
    pub fn set_equals<E: Into<Bson>>(sets: impl IntoIterator<Item = E>) -> Document {
        operator("$setEquals", array(sets))
    }

    /// Elements present in every set.
    pub fn set_intersection<E: Into<Bson>>(sets: impl IntoIterator<Item = E>) -> Document {
        operator("$setIntersection", array(sets))
    }

    /// True when every element of `subset` is in `superset`.
    pub fn set_is_subset(subset: impl Into<Bson>, superset: impl Into<Bson>) -> Document {
        operator("$setIsSubset", Bson::Array(vec![subset.into(), superset.into()]))
    }

    /// Elements present in any set.
    pub fn set_union<E: Into<Bson>>(sets: impl IntoIterator<Item = E>) -> Document {
        operator("$setUnion", array(sets))
    }
}
