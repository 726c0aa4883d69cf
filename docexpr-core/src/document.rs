//! The Document Model every constructor produces.
//!
//! Documents are `bson` documents: ordered maps from unique string keys to
//! [`Bson`] values where re-inserting a key replaces its value. Arrays are plain
//! `Vec<Bson>`. Values are stored exactly as given and read back unchanged; no
//! key is ever validated, including the `$`-prefixed operator names.

use bson::ser::serialize_to_bson;
use serde::Serialize;
use serde_json::Value;

use crate::error::{OperatorError, OperatorResult};

pub use bson::{Bson, Document, bson, doc};

/// An ordered, index-addressable sequence of values.
pub type Array = Vec<Bson>;

/// The sentinel every operator name starts with.
pub const OPERATOR_PREFIX: char = '$';

/// An inline JavaScript source literal, used by `$where`, `$function` and
/// `$accumulator`.
///
/// Converts to [`Bson::JavaScriptCode`] so drivers encode it as code rather than
/// as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaScript(pub String);

impl JavaScript {
    /// Wraps the given source text.
    pub fn new(code: impl Into<String>) -> Self {
        JavaScript(code.into())
    }

    /// Returns the source text.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<JavaScript> for Bson {
    fn from(js: JavaScript) -> Self {
        Bson::JavaScriptCode(js.0)
    }
}

impl From<&str> for JavaScript {
    fn from(code: &str) -> Self {
        JavaScript(code.to_string())
    }
}

impl From<String> for JavaScript {
    fn from(code: String) -> Self {
        JavaScript(code)
    }
}

/// Returns a field path reference for `name`.
///
/// Names that already start with `$` are returned unchanged, so
/// `field_path("qty")` and `field_path("$qty")` both yield `"$qty"`.
pub fn field_path(name: &str) -> String {
    if name.starts_with(OPERATOR_PREFIX) {
        name.to_string()
    } else {
        format!("{OPERATOR_PREFIX}{name}")
    }
}

/// Serializes any serde value into a [`Document`].
///
/// Useful for building update specifications such as `$set` from typed structs.
///
/// # Errors
///
/// Returns [`OperatorError::Serialization`] if serialization fails and
/// [`OperatorError::InvalidDocument`] if the value does not serialize to a document.
pub fn to_document<T: Serialize>(value: &T) -> OperatorResult<Document> {
    match serialize_to_bson(value)? {
        Bson::Document(document) => Ok(document),
        other => Err(OperatorError::InvalidDocument(format!(
            "expected a document, found {:?}",
            other.element_type()
        ))),
    }
}

/// Renders a built document as JSON, mainly for logging and debugging.
///
/// # Errors
///
/// Returns [`OperatorError::Serialization`] if the document cannot be represented as JSON.
pub fn to_json(document: &Document) -> OperatorResult<Value> {
    serde_json::to_value(document).map_err(|err| {
        log::error!("Failed to render document as JSON: {err}");
        OperatorError::from(err)
    })
}
