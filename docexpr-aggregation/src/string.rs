//! String expression operators.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    compose::array,
    error::OperatorResult,
    operator_builder, positional_builder,
};

use crate::expr::Expr;

impl Expr {
    /// Concatenates strings.
    pub fn concat<E: Into<Bson>>(strings: impl IntoIterator<Item = E>) -> Document {
        operator("$concat", array(strings))
    }

    /// Byte index of the first occurrence of `substring` in `string`.
    pub fn index_of_bytes(string: impl Into<Bson>, substring: impl Into<Bson>) -> IndexOfBytesOperator {
        IndexOfBytesOperator::from_args(vec![string.into(), substring.into()])
    }

    /// Code point index of the first occurrence of `substring` in `string`.
    pub fn index_of_cp(string: impl Into<Bson>, substring: impl Into<Bson>) -> IndexOfCpOperator {
        IndexOfCpOperator::from_args(vec![string.into(), substring.into()])
    }

    /// Removes whitespace, or the given characters, from the start of `input`.
    pub fn ltrim(input: impl Into<Bson>) -> LtrimOperator {
        LtrimOperator::from_spec(fields([("input", input.into())]))
    }

    /// Removes whitespace, or the given characters, from the end of `input`.
    pub fn rtrim(input: impl Into<Bson>) -> RtrimOperator {
        RtrimOperator::from_spec(fields([("input", input.into())]))
    }

    /// Removes whitespace, or the given characters, from both ends of `input`.
    pub fn trim(input: impl Into<Bson>) -> TrimOperator {
        TrimOperator::from_spec(fields([("input", input.into())]))
    }

    /// First match of `regex` in `input`, or null.
    pub fn regex_find(input: impl Into<Bson>, regex: impl Into<Bson>) -> RegexFindOperator {
        RegexFindOperator::from_spec(fields([("input", input.into()), ("regex", regex.into())]))
    }

    /// All matches of `regex` in `input`.
    pub fn regex_find_all(input: impl Into<Bson>, regex: impl Into<Bson>) -> RegexFindAllOperator {
        RegexFindAllOperator::from_spec(fields([("input", input.into()), ("regex", regex.into())]))
    }

    /// True when `regex` matches `input`.
    pub fn regex_match(input: impl Into<Bson>, regex: impl Into<Bson>) -> RegexMatchOperator {
        RegexMatchOperator::from_spec(fields([("input", input.into()), ("regex", regex.into())]))
    }

    /// Splits `string` on `delimiter` into an array.
    pub fn split(string: impl Into<Bson>, delimiter: impl Into<Bson>) -> Document {
        operator("$split", Bson::Array(vec![string.into(), delimiter.into()]))
    }

    /// Length of `string` in UTF-8 bytes.
    pub fn str_len_bytes(string: impl Into<Bson>) -> Document {
        operator("$strLenBytes", string)
    }

    /// Length of `string` in code points.
    pub fn str_len_cp(string: impl Into<Bson>) -> Document {
        operator("$strLenCP", string)
    }

    /// Case insensitive comparison returning `-1`, `0` or `1`.
    pub fn strcasecmp(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$strcasecmp", Bson::Array(vec![left.into(), right.into()]))
    }

    /// `count` bytes of `string` starting at byte `start`.
    pub fn substr_bytes(
        string: impl Into<Bson>,
        start: impl Into<Bson>,
        count: impl Into<Bson>,
    ) -> Document {
        operator(
            "$substrBytes",
            Bson::Array(vec![string.into(), start.into(), count.into()]),
        )
    }

    /// `count` code points of `string` starting at code point `start`.
    pub fn substr_cp(
        string: impl Into<Bson>,
        start: impl Into<Bson>,
        count: impl Into<Bson>,
    ) -> Document {
        operator(
            "$substrCP",
            Bson::Array(vec![string.into(), start.into(), count.into()]),
        )
    }

    /// Lowercases `string`.
    pub fn to_lower(string: impl Into<Bson>) -> Document {
        operator("$toLower", string)
    }

    /// Uppercases `string`.
    pub fn to_upper(string: impl Into<Bson>) -> Document {
        operator("$toUpper", string)
    }
}

positional_builder! {
    /// Builder returned from [`Expr::index_of_bytes`].
    pub struct IndexOfBytesOperator => "$indexOfBytes" ["start", "end"];
}

impl IndexOfBytesOperator {
    /// Sets the byte index the search starts at.
    pub fn set_start(mut self, start: impl Into<Bson>) -> Self {
        self.args.fill_first(start);
        self
    }

    /// Sets the end of the search range.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidBuilderState` if no start has been set.
    pub fn set_end(mut self, end: impl Into<Bson>) -> OperatorResult<Self> {
        self.args.fill("end", end)?;
        Ok(self)
    }
}

positional_builder! {
    /// Builder returned from [`Expr::index_of_cp`].
    pub struct IndexOfCpOperator => "$indexOfCP" ["start", "end"];
}

impl IndexOfCpOperator {
    /// Sets the code point index the search starts at.
    pub fn set_start(mut self, start: impl Into<Bson>) -> Self {
        self.args.fill_first(start);
        self
    }

    /// Sets the end of the search range.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidBuilderState` if no start has been set.
    pub fn set_end(mut self, end: impl Into<Bson>) -> OperatorResult<Self> {
        self.args.fill("end", end)?;
        Ok(self)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::ltrim`].
    pub struct LtrimOperator => "$ltrim";
}

impl LtrimOperator {
    /// Sets the characters to trim instead of whitespace.
    pub fn set_chars(self, chars: impl Into<Bson>) -> Self {
        self.with("chars", chars)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::rtrim`].
    pub struct RtrimOperator => "$rtrim";
}

impl RtrimOperator {
    /// Sets the characters to trim instead of whitespace.
    pub fn set_chars(self, chars: impl Into<Bson>) -> Self {
        self.with("chars", chars)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::trim`].
    pub struct TrimOperator => "$trim";
}

impl TrimOperator {
    /// Sets the characters to trim instead of whitespace.
    pub fn set_chars(self, chars: impl Into<Bson>) -> Self {
        self.with("chars", chars)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::regex_find`].
    pub struct RegexFindOperator => "$regexFind";
}

impl RegexFindOperator {
    /// Sets the regex options, e.g. `"i"`.
    pub fn set_options(self, options: impl Into<Bson>) -> Self {
        self.with("options", options)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::regex_find_all`].
    pub struct RegexFindAllOperator => "$regexFindAll";
}

impl RegexFindAllOperator {
    /// Sets the regex options, e.g. `"i"`.
    pub fn set_options(self, options: impl Into<Bson>) -> Self {
        self.with("options", options)
    }
}

operator_builder! {
    /// Builder returned from [`Expr::regex_match`].
    pub struct RegexMatchOperator => "$regexMatch";
}

impl RegexMatchOperator {
    /// Sets the regex options, e.g. `"i"`.
    pub fn set_options(self, options: impl Into<Bson>) -> Self {
        self.with("options", options)
    }
}
