//! Aggregation expressions, accumulators, window operators and pipeline stages.
//!
//! This crate provides:
//!
//! - **Expressions** ([`Expr`]) - Arithmetic, array, boolean, comparison, conditional, date, set, string, trigonometry and type operators
//! - **Accumulators** ([`accumulator`]) - `$group` accumulators such as `$sum` and `$push`
//! - **Window operators** ([`window`]) - `$setWindowFields` operators such as `$rank` and `$derivative`
//! - **Stages** ([`stage`]) - Pipeline stages from `$addFields` to `$unwind`
//! - **Composites** ([`composite`]) - `match_expr` and the `date_trunc` precision cascade
//!
//! Every constructor returns a plain [`Document`](bson::Document), or a builder
//! that converts into one. Builders take ownership on each setter, so a chain
//! reads top to bottom and ends in `into_document()` or a `From` conversion.
//!
//! # Example
//!
//! ```ignore
//! use docexpr_aggregation::{Accumulator, Expr, Stage};
//! use bson::doc;
//!
//! let pipeline = vec![
//!     Stage::unwind("items").into_document(),
//!     Stage::group(doc! {
//!         "_id": Expr::year("$date").set_timezone("Europe/Paris"),
//!         "revenue": Accumulator::sum([Expr::multiply("$items.price", "$items.qty")]),
//!     }),
//! ];
//! ```

#![warn(missing_docs)]

#[allow(unused_extern_crates)]
extern crate self as docexpr_aggregation;

pub mod accumulator;
pub mod arithmetic;
pub mod array;
pub mod boolean;
pub mod comparison;
pub mod composite;
pub mod conditional;
pub mod custom;
pub mod date;
pub mod expr;
pub mod object;
pub mod set;
pub mod stage;
pub mod string;
pub mod trigonometry;
pub mod types;
pub mod window;

pub use accumulator::Accumulator;
pub use arithmetic::TruncOperator;
pub use array::{
    FilterOperator, IndexOfArrayOperator, MapOperator, RangeOperator, SliceOperator, ZipOperator,
};
pub use composite::{Precision, date_trunc, match_expr};
pub use conditional::SwitchOperator;
pub use custom::AccumulatorOperator;
pub use date::{
    DateFromPartsOperator, DateFromStringOperator, DatePartOperator, DateToPartsOperator,
    DateToStringOperator, IsoDateFromPartsOperator,
};
pub use expr::Expr;
pub use stage::{
    BucketAutoStage, BucketStage, CollStatsStage, GeoNearStage, GraphLookupStage,
    LookupPipelineStage, MergeStage, SetWindowFieldsStage, Stage, UnionWithStage, UnwindStage,
    WindowOutput,
};
pub use string::{
    IndexOfBytesOperator, IndexOfCpOperator, LtrimOperator, RegexFindAllOperator,
    RegexFindOperator, RegexMatchOperator, RtrimOperator, TrimOperator,
};
pub use types::ConvertOperator;
pub use window::{DerivativeOperator, IntegralOperator, ShiftOperator, TimeUnit, Window};
