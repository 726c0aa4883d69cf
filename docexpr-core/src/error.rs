//! Error types and result types for operator construction.
//!
//! Constructors never validate the values they are given; the database engine
//! rejects domain-invalid values at execution time. The errors here cover
//! builder misuse and conversions between serde, BSON and JSON.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur while assembling operator documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// A builder was driven into a state its operator cannot express, such as
    /// filling a positional slot before the slots that precede it.
    #[error("Invalid builder state: {0}")]
    InvalidBuilderState(String),
    /// A value that must be a document was something else.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// Serialization error when converting between serde values, BSON and JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A specialized `Result` type for operator construction.
pub type OperatorResult<T> = Result<T, OperatorError>;

impl From<BsonError> for OperatorError {
    fn from(err: BsonError) -> Self {
        OperatorError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for OperatorError {
    fn from(err: SerdeJsonError) -> Self {
        OperatorError::Serialization(err.to_string())
    }
}
