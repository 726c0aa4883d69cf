//! Projection operators.

use bson::{Bson, Document};
use docexpr_core::builder::operator;

/// Helper struct for constructing projection operators.
pub struct Projection;

impl Projection {
    /// Projects the first array element matching `spec`.
    pub fn elem_match(spec: impl Into<Bson>) -> Document {
        operator("$elemMatch", spec)
    }

    /// Projects metadata such as `"textScore"` or `"indexKey"`.
    pub fn meta(keyword: impl Into<String>) -> Document {
        operator("$meta", Bson::String(keyword.into()))
    }

    /// Projects the first `n` elements of an array, or the last `-n`.
    pub fn slice(n: i64) -> Document {
        operator("$slice", n)
    }

    /// Projects `limit` elements of an array after skipping `skip`.
    pub fn slice_skip(skip: i64, limit: i64) -> Document {
        operator("$slice", Bson::Array(vec![skip.into(), limit.into()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_slice() {
        assert_eq!(Projection::slice(-5), doc! { "$slice": -5_i64 });
        assert_eq!(Projection::slice_skip(20, 10), doc! { "$slice": [20_i64, 10_i64] });
    }

    #[test]
    fn test_meta_and_elem_match() {
        assert_eq!(Projection::meta("textScore"), doc! { "$meta": "textScore" });
        assert_eq!(
            Projection::elem_match(doc! { "school": 102 }),
            doc! { "$elemMatch": { "school": 102 } }
        );
    }
}
