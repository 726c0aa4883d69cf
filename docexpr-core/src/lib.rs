//! Core building blocks for assembling query, update and aggregation documents.
//!
//! This crate is the foundation of the docexpr project and provides:
//!
//! - **Document model** ([`document`]) - The ordered document and array types every constructor returns
//! - **Error handling** ([`error`]) - Error and result types for builder misuse and conversions
//! - **Payload promotion** ([`payload`]) - Scalar shorthand payloads and their idempotent promotion
//! - **Positional slots** ([`positional`]) - Array payloads with named optional trailing arguments
//! - **Composition** ([`compose`]) - Last-write-wins merging, conditional negation and arity collapsing
//! - **Builders** ([`builder`]) - The `operator_builder!` and `positional_builder!` macros behind every fluent option builder
//!
//! Nothing in this crate talks to a database. Every function is a pure
//! transformation of in-memory values; the documents produced are handed to a
//! driver, which encodes and sends them.
//!
//! # Example
//!
//! ```ignore
//! use docexpr_core::{compose::{merge, unless}, document::doc};
//!
//! let update = merge([
//!     doc! { "$set": { "status": "done" } },
//!     doc! { "$inc": { "count": 1 } },
//! ]);
//!
//! let filter = unless(doc! { "$eq": ["$status", "done"] }, false);
//! ```

#![warn(missing_docs)]

#[allow(unused_extern_crates)]
extern crate self as docexpr_core;

pub mod builder;
pub mod compose;
pub mod document;
pub mod error;
pub mod payload;
pub mod positional;

pub use bson;
