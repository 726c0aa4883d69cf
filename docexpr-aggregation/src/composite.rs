//! Operators assembled from several primitives.

use bson::{Bson, Document};
use docexpr_query::Filter;
use serde::{Deserialize, Serialize};

use crate::{expr::Expr, stage::Stage};

/// Target precision of [`date_trunc`], ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Keeps the year only.
    Year,
    /// Keeps year and month.
    Month,
    /// Keeps the calendar date.
    Day,
    /// Keeps the date and hour.
    Hour,
    /// Keeps the date, hour and minute.
    Minute,
    /// Keeps every part down to the second.
    Second,
}

/// `{ $match: { $expr: expr } }`, a match stage on an aggregation expression.
pub fn match_expr(expr: impl Into<Bson>) -> Document {
    Stage::match_(Filter::expr(expr))
}

/// Truncates `date` to `precision` in `timezone`.
///
/// The result is a `$dateFromParts` expression with the year and every part
/// down to `precision` taken from `date`; finer parts are left unset so they
/// take their zero value. Truncating to [`Precision::Day`] sets `year`,
/// `month` and `day`, while [`Precision::Second`] sets all six.
pub fn date_trunc(precision: Precision, date: impl Into<Bson>, timezone: &str) -> Document {
    let date: Bson = date.into();

    log::trace!("date_trunc: truncating to {precision:?} in {timezone}");

    let mut parts = Expr::date_from_parts(Expr::year(date.clone()).set_timezone(timezone))
        .set_timezone(timezone);

    if precision >= Precision::Second {
        parts = parts.set_second(Expr::second(date.clone()).set_timezone(timezone));
    }
    if precision >= Precision::Minute {
        parts = parts.set_minute(Expr::minute(date.clone()).set_timezone(timezone));
    }
    if precision >= Precision::Hour {
        parts = parts.set_hour(Expr::hour(date.clone()).set_timezone(timezone));
    }
    if precision >= Precision::Day {
        parts = parts.set_day(Expr::day_of_month(date.clone()).set_timezone(timezone));
    }
    if precision >= Precision::Month {
        parts = parts.set_month(Expr::month(date).set_timezone(timezone));
    }

    parts.into_document()
}
