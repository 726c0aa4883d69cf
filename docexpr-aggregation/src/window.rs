//! Window operators for `$setWindowFields`.

use std::fmt;

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    operator_builder,
};

/// Helper struct for constructing window operators.
pub struct Window;

/// Time units accepted by `$derivative`, `$integral` and range based windows.
///
/// `Year`, `Quarter` and `Month` are only valid for window ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar year.
    Year,
    /// Calendar quarter.
    Quarter,
    /// Calendar month.
    Month,
    /// Week of seven days.
    Week,
    /// Day.
    Day,
    /// Hour.
    Hour,
    /// Minute.
    Minute,
    /// Second.
    Second,
    /// Millisecond.
    Millisecond,
}

impl TimeUnit {
    /// Returns the wire name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TimeUnit> for Bson {
    fn from(unit: TimeUnit) -> Self {
        Bson::String(unit.as_str().to_string())
    }
}

impl Window {
    /// Population covariance of two numeric expressions, written `[left, right]`.
    pub fn covariance_pop(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$covariancePop", Bson::Array(vec![left.into(), right.into()]))
    }

    /// Sample covariance of two numeric expressions, written `[left, right]`.
    pub fn covariance_samp(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$covarianceSamp", Bson::Array(vec![left.into(), right.into()]))
    }

    /// Rank without gaps for ties.
    pub fn dense_rank() -> Document {
        operator("$denseRank", Document::new())
    }

    /// Average rate of change of `input` within the window.
    pub fn derivative(input: impl Into<Bson>) -> DerivativeOperator {
        DerivativeOperator::from_spec(fields([("input", input.into())]))
    }

    /// Position of the document in its partition, starting at 1.
    pub fn document_number() -> Document {
        operator("$documentNumber", Document::new())
    }

    /// Exponential moving average weighted over `n` documents.
    pub fn exp_moving_avg(input: impl Into<Bson>, n: i64) -> Document {
        operator(
            "$expMovingAvg",
            fields([("input", input.into()), ("N", Bson::Int64(n))]),
        )
    }

    /// Exponential moving average with an explicit smoothing factor.
    pub fn exp_moving_avg_alpha(input: impl Into<Bson>, alpha: f64) -> Document {
        operator(
            "$expMovingAvg",
            fields([("input", input.into()), ("alpha", Bson::Double(alpha))]),
        )
    }

    /// Area under the curve of `input` within the window.
    pub fn integral(input: impl Into<Bson>) -> IntegralOperator {
        IntegralOperator::from_spec(fields([("input", input.into())]))
    }

    /// Rank with gaps for ties.
    pub fn rank() -> Document {
        operator("$rank", Document::new())
    }

    /// Reads `output` from the document `by` positions away from the current one.
    pub fn shift(output: impl Into<Bson>, by: i64) -> ShiftOperator {
        ShiftOperator::from_spec(fields([("output", output.into()), ("by", Bson::Int64(by))]))
    }
}

operator_builder! {
    /// Builder returned from [`Window::derivative`].
    pub struct DerivativeOperator => "$derivative";
}

impl DerivativeOperator {
    /// Sets the time unit of the rate of change.
    pub fn set_unit(self, unit: TimeUnit) -> Self {
        self.with("unit", unit)
    }
}

operator_builder! {
    /// Builder returned from [`Window::integral`].
    pub struct IntegralOperator => "$integral";
}

impl IntegralOperator {
    /// Sets the time unit of the area.
    pub fn set_unit(self, unit: TimeUnit) -> Self {
        self.with("unit", unit)
    }
}

operator_builder! {
    /// Builder returned from [`Window::shift`].
    pub struct ShiftOperator => "$shift";
}

impl ShiftOperator {
    /// Sets the value used when the shifted position is outside the partition.
    pub fn set_default(self, default: impl Into<Bson>) -> Self {
        self.with("default", default)
    }
}
