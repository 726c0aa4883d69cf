//! Array expression operators.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    compose::array,
    error::OperatorResult,
    impl_into_document, operator_builder, positional_builder,
};

use crate::expr::Expr;

impl Expr {
    /// Element of `array` at `index`; negative indexes count from the end.
    pub fn array_elem_at(array: impl Into<Bson>, index: impl Into<Bson>) -> Document {
        operator("$arrayElemAt", Bson::Array(vec![array.into(), index.into()]))
    }

    /// Converts an array of `[k, v]` pairs or `{ k, v }` documents into a document.
    pub fn array_to_object(expr: impl Into<Bson>) -> Document {
        operator("$arrayToObject", expr)
    }

    /// Concatenates arrays into one.
    pub fn concat_arrays<E: Into<Bson>>(arrays: impl IntoIterator<Item = E>) -> Document {
        operator("$concatArrays", array(arrays))
    }

    /// Selects the elements of `input` for which `cond` holds. `cond` refers to
    /// the current element as `$$this`, or by the name given with
    /// [`FilterOperator::set_as`].
    pub fn filter(input: impl Into<Bson>, cond: impl Into<Bson>) -> FilterOperator {
        FilterOperator::from_spec(fields([("input", input.into()), ("cond", cond.into())]))
    }

    /// Tests whether `elem` is in `array`.
    pub fn in_(elem: impl Into<Bson>, array: impl Into<Bson>) -> Document {
        operator("$in", Bson::Array(vec![elem.into(), array.into()]))
    }

    /// Searches `array` for `search`; the range is narrowed with
    /// [`IndexOfArrayOperator::set_start`] and [`IndexOfArrayOperator::set_end`].
    pub fn index_of_array(array: impl Into<Bson>, search: impl Into<Bson>) -> IndexOfArrayOperator {
        IndexOfArrayOperator::from_args(vec![array.into(), search.into()])
    }

    /// Tests whether `expr` is an array. Written as a one element array.
    pub fn is_array(expr: impl Into<Bson>) -> Document {
        operator("$isArray", Bson::Array(vec![expr.into()]))
    }

    /// Applies `in_` to each element of `input`.
    pub fn map(input: impl Into<Bson>, in_: impl Into<Bson>) -> MapOperator {
        MapOperator::from_spec(fields([("input", input.into()), ("in", in_.into())]))
    }

    /// Converts a document into an array of `{ k, v }` documents.
    pub fn object_to_array(object: impl Into<Bson>) -> Document {
        operator("$objectToArray", object)
    }

    /// Generates the integers from `start` up to but excluding `end`.
    pub fn range(start: impl Into<Bson>, end: impl Into<Bson>) -> RangeOperator {
        RangeOperator::from_args(vec![start.into(), end.into()])
    }

    /// Folds `input` into a single value, starting from `initial_value`.
    pub fn reduce(
        input: impl Into<Bson>,
        initial_value: impl Into<Bson>,
        in_: impl Into<Bson>,
    ) -> Document {
        operator(
            "$reduce",
            fields([
                ("input", input.into()),
                ("initialValue", initial_value.into()),
                ("in", in_.into()),
            ]),
        )
    }

    /// Returns `array` in reverse order.
    pub fn reverse_array(array: impl Into<Bson>) -> Document {
        operator("$reverseArray", array)
    }

    /// Number of elements in `array`.
    pub fn size(array: impl Into<Bson>) -> Document {
        operator("$size", array)
    }

    /// Returns `n` elements from the start of `array`, or `-n` from its end.
    /// A start position is set with [`SliceOperator::set_position`].
    pub fn slice(array: impl Into<Bson>, n: impl Into<Bson>) -> SliceOperator {
        SliceOperator {
            array: array.into(),
            position: None,
            n: n.into(),
        }
    }

    /// Transposes arrays, stopping at the shortest unless
    /// [`ZipOperator::set_use_longest_length`] is set.
    pub fn zip<E: Into<Bson>>(inputs: impl IntoIterator<Item = E>) -> ZipOperator {
        ZipOperator::from_spec(fields([("inputs", array(inputs))]))
    }
}

operator_builder! {
    /// Builder returned from [`Expr::filter`].
    pub struct FilterOperator => "$filter";
}

impl FilterOperator {
    /// Names the variable holding the current element.
    pub fn set_as(self, name: impl Into<String>) -> Self {
        self.with("as", Bson::String(name.into()))
    }

    /// Caps the number of matching elements returned.
    pub fn set_limit(self, limit: impl Into<Bson>) -> Self {
        self.with("limit", limit)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::map`].
    pub struct MapOperator => "$map";
}

impl MapOperator {
    /// Names the variable holding the current element.
    pub fn set_as(self, name: impl Into<String>) -> Self {
        self.with("as", Bson::String(name.into()))
    }
}

operator_builder! {
    /// Builder returned from [`Expr::zip`].
    pub struct ZipOperator => "$zip";
}

impl ZipOperator {
    /// Pads shorter arrays with null (or the defaults) instead of stopping at the shortest.
    pub fn set_use_longest_length(self, use_longest_length: bool) -> Self {
        self.with("useLongestLength", use_longest_length)
    }

    /// Sets the values used for missing elements of shorter arrays. Defaults
    /// only apply to the longest length mode, which is switched on as well.
    pub fn set_defaults(self, defaults: impl Into<Bson>) -> Self {
        self.set_use_longest_length(true).with("defaults", defaults)
    }
}

positional_builder! {
    /// Builder returned from [`Expr::index_of_array`].
    pub struct IndexOfArrayOperator => "$indexOfArray" ["start", "end"];
}

impl IndexOfArrayOperator {
    /// Sets the start of the search range, appended after the search value.
    pub fn set_start(mut self, start: impl Into<Bson>) -> Self {
        self.args.fill_first(start);
        self
    }

    /// Sets the end of the search range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBuilderState`](docexpr_core::error::OperatorError::InvalidBuilderState)
    /// if no start has been set.
    pub fn set_end(mut self, end: impl Into<Bson>) -> OperatorResult<Self> {
        self.args.fill("end", end)?;
        Ok(self)
    }
}

positional_builder! {
    /// Builder returned from [`Expr::range`].
    pub struct RangeOperator => "$range" ["step"];
}

impl RangeOperator {
    /// Sets the increment, appended after the end.
    pub fn set_step(mut self, step: impl Into<Bson>) -> Self {
        self.args.fill_first(step);
        self
    }
}

/// Builder returned from [`Expr::slice`].
///
/// The position sits between the array and the count on the wire:
/// `[array, n]` becomes `[array, position, n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOperator {
    array: Bson,
    position: Option<Bson>,
    n: Bson,
}

impl SliceOperator {
    /// Sets the start position, written between the array and the count.
    pub fn set_position(mut self, position: impl Into<Bson>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Returns the finished `{ $slice: [...] }` document.
    pub fn into_document(self) -> Document {
        let args = match self.position {
            Some(position) => vec![self.array, position, self.n],
            None => vec![self.array, self.n],
        };

        operator("$slice", Bson::Array(args))
    }
}

impl_into_document!(SliceOperator);

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use docexpr_core::error::OperatorError;

    #[test]
    fn test_index_of_array_slots() {
        let op = Expr::index_of_array("$items", 2);
        assert_eq!(op.args().len(), 2);

        let op = op.set_start(1);
        assert_eq!(op.args().len(), 3);
        assert_eq!(op.args()[2], Bson::from(1));

        let op = op.set_end(5).unwrap();
        assert_eq!(op.args().len(), 4);
        assert_eq!(op.args()[3], Bson::from(5));

        let op = op.set_start(7).set_end(9).unwrap();
        assert_eq!(
            op.into_document(),
            doc! { "$indexOfArray": ["$items", 2, 7, 9] }
        );
    }

    #[test]
    fn test_index_of_array_end_before_start() {
        let err = Expr::index_of_array("$items", 2).set_end(5).unwrap_err();

        assert!(matches!(err, OperatorError::InvalidBuilderState(_)));
    }

    #[test]
    fn test_range_step() {
        assert_eq!(Expr::range(0, 10).into_document(), doc! { "$range": [0, 10] });
        assert_eq!(
            Expr::range(0, 10).set_step(2).set_step(3).into_document(),
            doc! { "$range": [0, 10, 3] }
        );
    }

    #[test]
    fn test_slice_position_goes_in_the_middle() {
        assert_eq!(Expr::slice("$items", 3).into_document(), doc! { "$slice": ["$items", 3] });

        let slice = Expr::slice("$items", 3).set_position(1);
        assert_eq!(slice.clone().into_document(), doc! { "$slice": ["$items", 1, 3] });

        assert_eq!(
            slice.set_position(2).into_document(),
            doc! { "$slice": ["$items", 2, 3] }
        );
    }

    #[test]
    fn test_filter_and_map() {
        let filter = Expr::filter("$items", doc! { "$gte": ["$$item.price", 100] })
            .set_as("item")
            .set_limit(1);
        let map = Expr::map("$quizzes", doc! { "$add": ["$$grade", 2] }).set_as("grade");

        assert_eq!(
            Document::from(filter),
            doc! {
                "$filter": {
                    "input": "$items",
                    "cond": { "$gte": ["$$item.price", 100] },
                    "as": "item",
                    "limit": 1,
                }
            }
        );
        assert_eq!(
            Document::from(map),
            doc! {
                "$map": {
                    "input": "$quizzes",
                    "in": { "$add": ["$$grade", 2] },
                    "as": "grade",
                }
            }
        );
    }

    #[test]
    fn test_zip_defaults_imply_longest_length() {
        let zip = Expr::zip(["$a", "$b"]).set_defaults(vec![0, 0]);

        assert_eq!(
            zip.into_document(),
            doc! {
                "$zip": {
                    "inputs": ["$a", "$b"],
                    "useLongestLength": true,
                    "defaults": [0, 0],
                }
            }
        );
    }

    #[test]
    fn test_fixed_arity() {
        assert_eq!(Expr::is_array("$a"), doc! { "$isArray": ["$a"] });
        assert_eq!(Expr::in_("x", "$tags"), doc! { "$in": ["x", "$tags"] });
        assert_eq!(
            Expr::array_elem_at("$items", -1),
            doc! { "$arrayElemAt": ["$items", -1] }
        );
        assert_eq!(
            Expr::reduce("$items", 0, doc! { "$add": ["$$value", "$$this"] }),
            doc! {
                "$reduce": {
                    "input": "$items",
                    "initialValue": 0,
                    "in": { "$add": ["$$value", "$$this"] },
                }
            }
        );
    }
}
