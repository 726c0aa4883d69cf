//! Date expression operators.
//!
//! The date part operators (`$year`, `$month`, `$hour`, ...) accept either a
//! bare date, `{ $year: "$createdAt" }`, or a document with a timezone,
//! `{ $year: { date: "$createdAt", timezone: "Europe/Paris" } }`. They all
//! share [`DatePartOperator`], which starts in the shorthand form and is
//! promoted to the document form by [`DatePartOperator::set_timezone`].

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    impl_into_document, operator_builder,
    payload::Payload,
};

use crate::expr::Expr;

const DATE_FIELD: &str = "date";

impl Expr {
    /// Constructs a date from calendar parts, starting with the year.
    pub fn date_from_parts(year: impl Into<Bson>) -> DateFromPartsOperator {
        DateFromPartsOperator::from_spec(fields([("year", year.into())]))
    }

    /// Constructs a date from ISO week date parts, starting with the ISO week year.
    pub fn iso_date_from_parts(iso_week_year: impl Into<Bson>) -> IsoDateFromPartsOperator {
        IsoDateFromPartsOperator::from_spec(fields([("isoWeekYear", iso_week_year.into())]))
    }

    /// Parses `date_string` into a date.
    pub fn date_from_string(date_string: impl Into<Bson>) -> DateFromStringOperator {
        DateFromStringOperator::from_spec(fields([("dateString", date_string.into())]))
    }

    /// Splits `date` into its calendar parts.
    pub fn date_to_parts(date: impl Into<Bson>) -> DateToPartsOperator {
        DateToPartsOperator::from_spec(fields([(DATE_FIELD, date.into())]))
    }

    /// Formats `date` as a string.
    pub fn date_to_string(date: impl Into<Bson>) -> DateToStringOperator {
        DateToStringOperator::from_spec(fields([(DATE_FIELD, date.into())]))
    }

    /// Day of the month, from 1 to 31.
    pub fn day_of_month(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$dayOfMonth", date)
    }

    /// Day of the week, from 1 (Sunday) to 7 (Saturday).
    pub fn day_of_week(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$dayOfWeek", date)
    }

    /// Day of the year, from 1 to 366.
    pub fn day_of_year(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$dayOfYear", date)
    }

    /// Hour, from 0 to 23.
    pub fn hour(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$hour", date)
    }

    /// ISO 8601 weekday, from 1 (Monday) to 7 (Sunday).
    pub fn iso_day_of_week(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$isoDayOfWeek", date)
    }

    /// ISO 8601 week number, from 1 to 53.
    pub fn iso_week(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$isoWeek", date)
    }

    /// ISO 8601 week numbering year.
    pub fn iso_week_year(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$isoWeekYear", date)
    }

    /// Milliseconds, from 0 to 999.
    pub fn millisecond(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$millisecond", date)
    }

    /// Minute, from 0 to 59.
    pub fn minute(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$minute", date)
    }

    /// Month, from 1 to 12.
    pub fn month(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$month", date)
    }

    /// Seconds, from 0 to 59 (60 for leap seconds).
    pub fn second(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$second", date)
    }

    /// Week of the year, from 0 to 53, with weeks starting on Sunday.
    pub fn week(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$week", date)
    }

    /// Calendar year.
    pub fn year(date: impl Into<Bson>) -> DatePartOperator {
        DatePartOperator::new("$year", date)
    }
}

/// Builder shared by all date part operators.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePartOperator {
    operator: &'static str,
    payload: Payload,
}

impl DatePartOperator {
    fn new(operator: &'static str, date: impl Into<Bson>) -> Self {
        Self {
            operator,
            payload: Payload::classify(date.into(), DATE_FIELD),
        }
    }

    /// Sets the timezone, promoting the payload to `{ date, timezone }`.
    pub fn set_timezone(mut self, timezone: impl Into<Bson>) -> Self {
        self.payload = self.payload.set(DATE_FIELD, "timezone", timezone);
        self
    }

    /// Returns the wire name of the operator.
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Returns the payload in its current form.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns `{ $op: date }`, or `{ $op: { date, timezone } }` once a timezone is set.
    pub fn into_document(self) -> Document {
        operator(self.operator, self.payload.into_bson())
    }
}

impl_into_document!(DatePartOperator);

operator_builder! {
    /// Builder returned from [`Expr::date_from_parts`].
    pub struct DateFromPartsOperator => "$dateFromParts";
}

impl DateFromPartsOperator {
    /// Sets the month, from 1 to 12.
    pub fn set_month(self, month: impl Into<Bson>) -> Self {
        self.with("month", month)
    }

    /// Sets the day of the month.
    pub fn set_day(self, day: impl Into<Bson>) -> Self {
        self.with("day", day)
    }

    /// Sets the hour.
    pub fn set_hour(self, hour: impl Into<Bson>) -> Self {
        self.with("hour", hour)
    }

    /// Sets the minute.
    pub fn set_minute(self, minute: impl Into<Bson>) -> Self {
        self.with("minute", minute)
    }

    /// Sets the second.
    pub fn set_second(self, second: impl Into<Bson>) -> Self {
        self.with("second", second)
    }

    /// Sets the millisecond.
    pub fn set_millisecond(self, millisecond: impl Into<Bson>) -> Self {
        self.with("millisecond", millisecond)
    }

    /// Sets the timezone the parts are interpreted in.
    pub fn set_timezone(self, timezone: impl Into<Bson>) -> Self {
        self.with("timezone", timezone)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::iso_date_from_parts`].
    pub struct IsoDateFromPartsOperator => "$dateFromParts";
}

impl IsoDateFromPartsOperator {
    /// Sets the ISO week of the year.
    pub fn set_week(self, iso_week: impl Into<Bson>) -> Self {
        self.with("isoWeek", iso_week)
    }

    /// Sets the ISO day of the week, from 1 (Monday) to 7 (Sunday).
    pub fn set_day_of_week(self, iso_day_of_week: impl Into<Bson>) -> Self {
        self.with("isoDayOfWeek", iso_day_of_week)
    }

    /// Sets the hour.
    pub fn set_hour(self, hour: impl Into<Bson>) -> Self {
        self.with("hour", hour)
    }

    /// Sets the minute.
    pub fn set_minute(self, minute: impl Into<Bson>) -> Self {
        self.with("minute", minute)
    }

    /// Sets the second.
    pub fn set_second(self, second: impl Into<Bson>) -> Self {
        self.with("second", second)
    }

    /// Sets the millisecond.
    pub fn set_millisecond(self, millisecond: impl Into<Bson>) -> Self {
        self.with("millisecond", millisecond)
    }

    /// Sets the timezone the parts are interpreted in.
    pub fn set_timezone(self, timezone: impl Into<Bson>) -> Self {
        self.with("timezone", timezone)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::date_from_string`].
    pub struct DateFromStringOperator => "$dateFromString";
}

impl DateFromStringOperator {
    /// Sets the format specifier used to parse the string.
    pub fn set_format(self, format: impl Into<Bson>) -> Self {
        self.with("format", format)
    }

    /// Sets the timezone used when the string has none.
    pub fn set_timezone(self, timezone: impl Into<Bson>) -> Self {
        self.with("timezone", timezone)
    }

    /// Sets the value returned when the string cannot be parsed.
    pub fn set_on_error(self, on_error: impl Into<Bson>) -> Self {
        self.with("onError", on_error)
    }

    /// Sets the value returned when the string is null or missing.
    pub fn set_on_null(self, on_null: impl Into<Bson>) -> Self {
        self.with("onNull", on_null)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::date_to_parts`].
    pub struct DateToPartsOperator => "$dateToParts";
}

impl DateToPartsOperator {
    /// Sets the timezone the parts are computed in.
    pub fn set_timezone(self, timezone: impl Into<Bson>) -> Self {
        self.with("timezone", timezone)
    }

    /// Returns ISO week date parts instead of calendar parts.
    pub fn set_iso8601(self, iso8601: bool) -> Self {
        self.with("iso8601", iso8601)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::date_to_string`].
    pub struct DateToStringOperator => "$dateToString";
}

impl DateToStringOperator {
    /// Sets the format specifier, e.g. `"%Y-%m-%d"`.
    pub fn set_format(self, format: impl Into<String>) -> Self {
        self.with("format", Bson::String(format.into()))
    }

    /// Sets the timezone the date is formatted in.
    pub fn set_timezone(self, timezone: impl Into<Bson>) -> Self {
        self.with("timezone", timezone)
    }

    /// Sets the value returned when the date is null or missing.
    pub fn set_on_null(self, on_null: impl Into<Bson>) -> Self {
        self.with("onNull", on_null)
    }
}
