//! Trigonometry expression operators. Angles are in radians.

use bson::{Bson, Document};
use docexpr_core::builder::operator;

use crate::expr::Expr;

impl Expr {
    /// Sine of an angle in radians.
    pub fn sin(number: impl Into<Bson>) -> Document {
        operator("$sin", number)
    }

    /// Cosine of an angle in radians.
    pub fn cos(number: impl Into<Bson>) -> Document {
        operator("$cos", number)
    }

    /// Tangent of an angle in radians.
    pub fn tan(number: impl Into<Bson>) -> Document {
        operator("$tan", number)
    }

    /// Inverse sine, in radians.
    pub fn asin(number: impl Into<Bson>) -> Document {
        operator("$asin", number)
    }

    /// Inverse cosine, in radians.
    pub fn acos(number: impl Into<Bson>) -> Document {
        operator("$acos", number)
    }

    /// Inverse tangent, in radians.
    pub fn atan(number: impl Into<Bson>) -> Document {
        operator("$atan", number)
    }

    /// Inverse tangent of `y / x`.
    pub fn atan2(y: impl Into<Bson>, x: impl Into<Bson>) -> Document {
        operator("$atan2", Bson::Array(vec![y.into(), x.into()]))
    }

    /// Inverse hyperbolic sine.
    pub fn asinh(number: impl Into<Bson>) -> Document {
        operator("$asinh", number)
    }

    /// Inverse hyperbolic cosine.
    pub fn acosh(number: impl Into<Bson>) -> Document {
        operator("$acosh", number)
    }

    /// Inverse hyperbolic tangent.
    pub fn atanh(number: impl Into<Bson>) -> Document {
        operator("$atanh", number)
    }

    /// Converts degrees to radians.
    pub fn degrees_to_radians(number: impl Into<Bson>) -> Document {
        operator("$degreesToRadians", number)
    }

    /// Converts radians to degrees.
    pub fn radians_to_degrees(number: impl Into<Bson>) -> Document {
        operator("$radiansToDegrees", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_atan2_order() {
        assert_eq!(Expr::atan2("$y", "$x"), doc! { "$atan2": ["$y", "$x"] });
    }

    #[test]
    fn test_unary() {
        assert_eq!(
            Expr::sin(Expr::degrees_to_radians("$angle")),
            doc! { "$sin": { "$degreesToRadians": "$angle" } }
        );
        assert_eq!(Expr::acosh("$x"), doc! { "$acosh": "$x" });
    }
}
