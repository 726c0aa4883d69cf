//! Accumulators for `$group`, `$bucket`, `$bucketAuto` and `$setWindowFields`.
//!
//! The operators that are also valid in `$project` take one or more
//! expressions. Given exactly one, they write it bare (`{ $sum: "$qty" }`);
//! given any other number, they write an array (`{ $sum: ["$a", "$b"] }`).

use bson::{Bson, Document};
use docexpr_core::{builder::operator, compose::collapse};

/// Helper struct for constructing accumulator operators.
pub struct Accumulator;

impl Accumulator {
    /// Collects the unique values of `expr` in the group into an array.
    pub fn add_to_set(expr: impl Into<Bson>) -> Document {
        operator("$addToSet", expr)
    }

    /// Average of the numeric values. `{ $avg: expr }` for one argument, an array otherwise.
    pub fn avg<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$avg", collapse(exprs))
    }

    /// Value of `expr` for the first document in the group.
    pub fn first(expr: impl Into<Bson>) -> Document {
        operator("$first", expr)
    }

    /// Value of `expr` for the last document in the group.
    pub fn last(expr: impl Into<Bson>) -> Document {
        operator("$last", expr)
    }

    /// Highest value. `{ $max: expr }` for one argument, an array otherwise.
    pub fn max<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$max", collapse(exprs))
    }

    /// Combines documents into one; later fields win. Bare for one argument, an array otherwise.
    pub fn merge_objects<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$mergeObjects", collapse(exprs))
    }

    /// Lowest value. `{ $min: expr }` for one argument, an array otherwise.
    pub fn min<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$min", collapse(exprs))
    }

    /// Collects the values of `expr` in the group into an array, duplicates kept.
    pub fn push(expr: impl Into<Bson>) -> Document {
        operator("$push", expr)
    }

    /// Population standard deviation. Bare for one argument, an array otherwise.
    pub fn std_dev_pop<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$stdDevPop", collapse(exprs))
    }

    /// Sample standard deviation. Bare for one argument, an array otherwise.
    pub fn std_dev_samp<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$stdDevSamp", collapse(exprs))
    }

    /// Sum of the numeric values. `{ $sum: expr }` for one argument, an array otherwise.
    pub fn sum<E: Into<Bson>>(exprs: impl IntoIterator<Item = E>) -> Document {
        operator("$sum", collapse(exprs))
    }

    /// Counts the documents in the group.
    pub fn count() -> Document {
        operator("$count", Document::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use proptest::prelude::*;
    use rstest::rstest;

    type Variadic = fn(Vec<Bson>) -> Document;

    #[rstest]
    #[case(|exprs| Accumulator::avg(exprs), "$avg")]
    #[case(|exprs| Accumulator::max(exprs), "$max")]
    #[case(|exprs| Accumulator::merge_objects(exprs), "$mergeObjects")]
    #[case(|exprs| Accumulator::min(exprs), "$min")]
    #[case(|exprs| Accumulator::std_dev_pop(exprs), "$stdDevPop")]
    #[case(|exprs| Accumulator::std_dev_samp(exprs), "$stdDevSamp")]
    #[case(|exprs| Accumulator::sum(exprs), "$sum")]
    fn test_single_argument_collapses(#[case] build: Variadic, #[case] name: &str) {
        let single = build(vec![Bson::from("$qty")]);
        let pair = build(vec![Bson::from("$a"), Bson::from("$b")]);

        assert_eq!(single.get(name), Some(&Bson::from("$qty")));
        assert_eq!(
            pair.get(name),
            Some(&Bson::Array(vec![Bson::from("$a"), Bson::from("$b")]))
        );
    }

    #[test]
    fn test_unary_accumulators() {
        assert_eq!(Accumulator::first("$date"), doc! { "$first": "$date" });
        assert_eq!(Accumulator::last("$date"), doc! { "$last": "$date" });
        assert_eq!(Accumulator::push("$item"), doc! { "$push": "$item" });
        assert_eq!(Accumulator::add_to_set("$item"), doc! { "$addToSet": "$item" });
        assert_eq!(Accumulator::count(), doc! { "$count": {} });
    }

    proptest! {
        #[test]
        fn prop_sum_payload_arity(values in prop::collection::vec(any::<i32>(), 1..8)) {
            let sum = Accumulator::sum(values.clone());

            match sum.get("$sum") {
                Some(Bson::Array(array)) => prop_assert_eq!(array.len(), values.len()),
                Some(Bson::Int32(value)) => {
                    prop_assert_eq!(values.len(), 1);
                    prop_assert_eq!(*value, values[0]);
                }
                other => prop_assert!(false, "unexpected payload {:?}", other),
            }
        }
    }
}
