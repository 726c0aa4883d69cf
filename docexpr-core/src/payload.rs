//! Shorthand payloads and their promotion to document form.
//!
//! Several operators accept either a bare value or a document of named fields,
//! e.g. `{ $year: "$createdAt" }` and
//! `{ $year: { date: "$createdAt", timezone: "Europe/Paris" } }`. A builder for
//! such an operator starts in the shorthand form and is promoted the first time
//! an option is attached. Promotion is idempotent: an already expanded payload
//! is never wrapped a second time.

use bson::{Bson, Document};

/// The two states of a payload that has a scalar shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The bare value form, e.g. the `"$createdAt"` in `{ $year: "$createdAt" }`.
    Shorthand(Bson),
    /// The document form holding the canonical field and any options.
    Expanded(Document),
}

impl Payload {
    /// Classifies `value` against the operator's canonical `field`.
    ///
    /// A document that already contains `field` is expanded; anything else,
    /// including documents without that field, is a shorthand value.
    pub fn classify(value: Bson, field: &str) -> Self {
        match value {
            Bson::Document(document) if document.contains_key(field) => Payload::Expanded(document),
            other => Payload::Shorthand(other),
        }
    }

    /// Returns `true` once the payload is in document form.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Payload::Expanded(_))
    }

    /// Converts the payload to document form, wrapping a shorthand value as
    /// `{ field: value }`.
    pub fn promote(self, field: &str) -> Document {
        match self {
            Payload::Shorthand(value) => {
                let mut document = Document::new();
                document.insert(field, value);
                document
            }
            Payload::Expanded(document) => document,
        }
    }

    /// Promotes the payload and inserts `key` next to the canonical field.
    pub fn set(self, field: &str, key: &str, value: impl Into<Bson>) -> Self {
        let mut document = self.promote(field);
        document.insert(key, value.into());
        Payload::Expanded(document)
    }

    /// Returns the payload as a value suitable for the operator key.
    pub fn into_bson(self) -> Bson {
        match self {
            Payload::Shorthand(value) => value,
            Payload::Expanded(document) => Bson::Document(document),
        }
    }
}

/// Returns `value` unchanged if it is a document containing `field`,
/// otherwise wraps it as `{ field: value }`.
pub fn wrap(value: impl Into<Bson>, field: &str) -> Document {
    Payload::classify(value.into(), field).promote(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_wrap_scalar() {
        assert_eq!(wrap("$createdAt", "date"), doc! { "date": "$createdAt" });
    }

    #[test]
    fn test_wrap_keeps_document_with_field() {
        let document = doc! { "date": "$createdAt", "timezone": "UTC" };

        assert_eq!(wrap(document.clone(), "date"), document);
    }

    #[test]
    fn test_wrap_document_without_field() {
        let expr = doc! { "$toDate": "$ts" };

        assert_eq!(wrap(expr.clone(), "date"), doc! { "date": expr });
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let once = wrap("$createdAt", "date");
        let twice = wrap(once.clone(), "date");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_classify() {
        assert!(!Payload::classify(Bson::from("$a"), "date").is_expanded());
        assert!(Payload::classify(Bson::from(doc! { "date": "$a" }), "date").is_expanded());
        assert!(!Payload::classify(Bson::from(doc! { "path": "$a" }), "date").is_expanded());
    }

    #[test]
    fn test_set_promotes_then_adds_sibling() {
        let payload = Payload::Shorthand(Bson::from("$createdAt"))
            .set("date", "timezone", "UTC")
            .set("date", "timezone", "Asia/Tokyo");

        assert_eq!(
            payload,
            Payload::Expanded(doc! { "date": "$createdAt", "timezone": "Asia/Tokyo" })
        );
    }

    #[test]
    fn test_into_bson() {
        assert_eq!(Payload::Shorthand(Bson::from(1)).into_bson(), Bson::from(1));
        assert_eq!(
            Payload::Expanded(doc! { "path": "$a" }).into_bson(),
            Bson::Document(doc! { "path": "$a" })
        );
    }
}
