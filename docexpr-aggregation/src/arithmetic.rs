//! Arithmetic expression operators.

use bson::{Bson, Document};
use docexpr_core::{
    builder::operator, compose::array, impl_into_document, positional::PositionalArgs,
};

use crate::expr::Expr;

impl Expr {
    /// Absolute value of `number`.
    pub fn abs(number: impl Into<Bson>) -> Document {
        operator("$abs", number)
    }

    /// Adds numbers, or numbers and a date.
    pub fn add<E: Into<Bson>>(numbers_or_date: impl IntoIterator<Item = E>) -> Document {
        operator("$add", array(numbers_or_date))
    }

    /// Smallest integer greater than or equal to `number`.
    pub fn ceil(number: impl Into<Bson>) -> Document {
        operator("$ceil", number)
    }

    /// `[dividend, divisor]`.
    pub fn divide(dividend: impl Into<Bson>, divisor: impl Into<Bson>) -> Document {
        operator("$divide", Bson::Array(vec![dividend.into(), divisor.into()]))
    }

    /// Euler's number raised to `exponent`.
    pub fn exp(exponent: impl Into<Bson>) -> Document {
        operator("$exp", exponent)
    }

    /// Largest integer less than or equal to `number`.
    pub fn floor(number: impl Into<Bson>) -> Document {
        operator("$floor", number)
    }

    /// Natural logarithm of `number`.
    pub fn ln(number: impl Into<Bson>) -> Document {
        operator("$ln", number)
    }

    /// Logarithm of `number` in `base`, written `[number, base]`.
    pub fn log(number: impl Into<Bson>, base: impl Into<Bson>) -> Document {
        operator("$log", Bson::Array(vec![number.into(), base.into()]))
    }

    /// Base 10 logarithm of `number`.
    pub fn log10(number: impl Into<Bson>) -> Document {
        operator("$log10", number)
    }

    /// Remainder of `dividend` divided by `divisor`.
    pub fn mod_(dividend: impl Into<Bson>, divisor: impl Into<Bson>) -> Document {
        operator("$mod", Bson::Array(vec![dividend.into(), divisor.into()]))
    }

    /// Product of `left` and `right`.
    pub fn multiply(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$multiply", Bson::Array(vec![left.into(), right.into()]))
    }

    /// `number` raised to `exponent`.
    pub fn pow(number: impl Into<Bson>, exponent: impl Into<Bson>) -> Document {
        operator("$pow", Bson::Array(vec![number.into(), exponent.into()]))
    }

    /// Rounds to `place` decimal places; a negative place rounds left of the point.
    pub fn round(number: impl Into<Bson>, place: impl Into<Bson>) -> Document {
        operator("$round", Bson::Array(vec![number.into(), place.into()]))
    }

    /// Square root of `number`.
    pub fn sqrt(number: impl Into<Bson>) -> Document {
        operator("$sqrt", number)
    }

    /// Subtracts `right` from `left`. Works on numbers and dates.
    pub fn subtract(left: impl Into<Bson>, right: impl Into<Bson>) -> Document {
        operator("$subtract", Bson::Array(vec![left.into(), right.into()]))
    }

    /// Truncates a number to an integer, or to a decimal place set with
    /// [`TruncOperator::set_place`].
    pub fn trunc(number: impl Into<Bson>) -> TruncOperator {
        let number: Bson = number.into();

        TruncOperator {
            args: PositionalArgs::new("$trunc", [number], &["place"]),
        }
    }
}

/// Builder returned from [`Expr::trunc`].
///
/// The payload is the bare number until a place is set, and `[number, place]`
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncOperator {
    args: PositionalArgs,
}

impl TruncOperator {
    /// Sets the decimal place, turning the payload into `[number, place]`.
    pub fn set_place(mut self, place: impl Into<Bson>) -> Self {
        self.args.fill_first(place);
        self
    }

    /// Returns the finished `{ $trunc: ... }` document.
    pub fn into_document(self) -> Document {
        operator(self.args.operator(), self.args.into_collapsed())
    }
}

impl_into_document!(TruncOperator);

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use rstest::rstest;

    #[rstest]
    #[case(Expr::divide("$a", "$b"), doc! { "$divide": ["$a", "$b"] })]
    #[case(Expr::subtract("$a", "$b"), doc! { "$subtract": ["$a", "$b"] })]
    #[case(Expr::mod_("$a", 3), doc! { "$mod": ["$a", 3] })]
    #[case(Expr::pow("$a", 2), doc! { "$pow": ["$a", 2] })]
    #[case(Expr::log("$a", 2), doc! { "$log": ["$a", 2] })]
    #[case(Expr::round("$a", 1), doc! { "$round": ["$a", 1] })]
    #[case(Expr::multiply("$a", "$b"), doc! { "$multiply": ["$a", "$b"] })]
    fn test_binary_argument_order(#[case] built: Document, #[case] expected: Document) {
        assert_eq!(built, expected);
    }

    #[test]
    fn test_add_is_variadic() {
        assert_eq!(
            Expr::add(["$a", "$b", "$c"]),
            doc! { "$add": ["$a", "$b", "$c"] }
        );
        assert_eq!(Expr::add(["$a"]), doc! { "$add": ["$a"] });
    }

    #[test]
    fn test_trunc_is_scalar_without_place() {
        assert_eq!(Expr::trunc("$price").into_document(), doc! { "$trunc": "$price" });
    }

    #[test]
    fn test_trunc_with_place() {
        let trunc = Expr::trunc("$price").set_place(2);
        assert_eq!(trunc.clone().into_document(), doc! { "$trunc": ["$price", 2] });

        assert_eq!(trunc.set_place(-1).into_document(), doc! { "$trunc": ["$price", -1] });
    }
}
