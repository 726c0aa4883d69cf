//! Utilities for combining documents that were built independently.

use bson::{Bson, Document};

/// Merges documents in a last-write-wins manner.
///
/// Only top-level keys are merged; when a key occurs in several inputs the
/// value from the latest input replaces the earlier ones wholesale. Nested
/// payloads are never merged.
///
/// ```ignore
/// use docexpr_core::{compose::merge, document::doc};
///
/// let update = merge([doc! { "$set": { "status": "done" } }, doc! { "$inc": { "count": 1 } }]);
/// ```
pub fn merge<D: Into<Document>>(documents: impl IntoIterator<Item = D>) -> Document {
    let mut merged = Document::new();

    for document in documents {
        let document: Document = document.into();
        for (key, value) in document {
            if merged.contains_key(&key) {
                log::trace!("merge: `{key}` overwritten by a later document");
            }
            merged.insert(key, value);
        }
    }

    merged
}

/// Returns `expr` when `condition` holds, and `{ $not: expr }` otherwise.
pub fn unless(expr: impl Into<Document>, condition: bool) -> Document {
    let expr = expr.into();

    if condition {
        return expr;
    }

    let mut negated = Document::new();
    negated.insert("$not", expr);
    negated
}

/// Collects a variadic argument list into an array value.
pub fn array<V: Into<Bson>>(values: impl IntoIterator<Item = V>) -> Bson {
    Bson::Array(values.into_iter().map(Into::into).collect())
}

/// Collapses a variadic argument list.
///
/// Exactly one value is returned bare; any other count, including zero, is
/// returned as an array of that length.
pub fn collapse<V: Into<Bson>>(values: impl IntoIterator<Item = V>) -> Bson {
    let mut values = values.into_iter().map(Into::into).collect::<Vec<Bson>>();

    if values.len() == 1 {
        values.remove(0)
    } else {
        Bson::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_merge_last_write_wins() {
        let merged = merge([doc! { "a": 1 }, doc! { "b": 2 }, doc! { "a": 3 }]);

        assert_eq!(merged, doc! { "a": 3, "b": 2 });
    }

    #[test]
    fn test_merge_later_argument_wins() {
        assert_eq!(merge([doc! { "a": 1 }, doc! { "a": 2 }]), doc! { "a": 2 });
    }

    #[test]
    fn test_merge_is_shallow() {
        let merged = merge([
            doc! { "$set": { "a": 1 } },
            doc! { "$set": { "b": 2 } },
        ]);

        assert_eq!(merged, doc! { "$set": { "b": 2 } });
    }

    #[test]
    fn test_merge_nothing() {
        assert_eq!(merge(Vec::<Document>::new()), Document::new());
    }

    #[test]
    fn test_unless() {
        let expr = doc! { "$eq": [1, 1] };

        assert_eq!(unless(expr.clone(), true), expr);
        assert_eq!(unless(expr.clone(), false), doc! { "$not": expr });
    }

    #[test]
    fn test_array() {
        assert_eq!(
            array(["$a", "$b"]),
            Bson::Array(vec![Bson::from("$a"), Bson::from("$b")])
        );
        assert_eq!(array(Vec::<Bson>::new()), Bson::Array(vec![]));
    }

    #[rstest]
    #[case(vec![], Bson::Array(vec![]))]
    #[case(vec![Bson::from("$qty")], Bson::from("$qty"))]
    #[case(vec![Bson::from("$a"), Bson::from("$b")], Bson::Array(vec![Bson::from("$a"), Bson::from("$b")]))]
    fn test_collapse(#[case] values: Vec<Bson>, #[case] expected: Bson) {
        assert_eq!(collapse(values), expected);
    }

    proptest! {
        #[test]
        fn prop_merge_takes_last_value_per_key(
            entries in prop::collection::vec(("[a-d]", any::<i32>()), 0..20)
        ) {
            let documents = entries
                .iter()
                .map(|(key, value)| {
                    let mut document = Document::new();
                    document.insert(key.as_str(), *value);
                    document
                })
                .collect::<Vec<_>>();

            let merged = merge(documents);

            for (key, _) in &entries {
                let last = entries
                    .iter()
                    .rev()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| *v);
                prop_assert_eq!(merged.get_i32(key).ok(), last);
            }
        }

        #[test]
        fn prop_collapse_keeps_arity(values in prop::collection::vec(any::<i64>(), 0..8)) {
            let collapsed = collapse(values.iter().copied().map(Bson::from));

            match values.len() {
                1 => prop_assert_eq!(collapsed, Bson::Int64(values[0])),
                n => match collapsed {
                    Bson::Array(array) => prop_assert_eq!(array.len(), n),
                    other => prop_assert!(false, "expected array, got {:?}", other),
                },
            }
        }
    }
}
