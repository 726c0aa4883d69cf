//! Conditional expression operators.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    impl_into_document,
};

use crate::expr::Expr;

impl Expr {
    /// Evaluates to `then` when `if_` holds, and to `else_` otherwise.
    pub fn cond(if_: impl Into<Bson>, then: impl Into<Bson>, else_: impl Into<Bson>) -> Document {
        operator("$cond", Bson::Array(vec![if_.into(), then.into(), else_.into()]))
    }

    /// Evaluates to `replacement` when `expr` is null or missing.
    pub fn if_null(expr: impl Into<Bson>, replacement: impl Into<Bson>) -> Document {
        operator("$ifNull", Bson::Array(vec![expr.into(), replacement.into()]))
    }

    /// Starts a `$switch` with no branches.
    pub fn switch() -> SwitchOperator {
        SwitchOperator {
            branches: Vec::new(),
            default: None,
        }
    }
}

/// Builder returned from [`Expr::switch`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchOperator {
    branches: Vec<Bson>,
    default: Option<Bson>,
}

impl SwitchOperator {
    /// Appends a `{ case, then }` branch. Branches are evaluated in order.
    pub fn add_branch(mut self, case: impl Into<Bson>, then: impl Into<Bson>) -> Self {
        self.branches.push(Bson::Document(fields([
            ("case", case.into()),
            ("then", then.into()),
        ])));
        self
    }

    /// Sets the value used when no branch matches.
    pub fn set_default(mut self, default: impl Into<Bson>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the finished `{ $switch: { branches, default } }` document.
    pub fn into_document(self) -> Document {
        let mut spec = Document::new();
        spec.insert("branches", self.branches);
        if let Some(default) = self.default {
            spec.insert("default", default);
        }

        operator("$switch", spec)
    }
}

impl_into_document!(SwitchOperator);

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_cond_order() {
        assert_eq!(
            Expr::cond(Expr::gte("$qty", 250), 30, 20),
            doc! { "$cond": [{ "$gte": ["$qty", 250] }, 30, 20] }
        );
        assert_eq!(
            Expr::if_null("$description", "Unspecified"),
            doc! { "$ifNull": ["$description", "Unspecified"] }
        );
    }

    #[test]
    fn test_switch() {
        let switch = Expr::switch()
            .add_branch(Expr::gte("$score", 90), "A")
            .add_branch(Expr::gte("$score", 80), "B")
            .set_default("C");

        assert_eq!(
            switch.into_document(),
            doc! {
                "$switch": {
                    "branches": [
                        { "case": { "$gte": ["$score", 90] }, "then": "A" },
                        { "case": { "$gte": ["$score", 80] }, "then": "B" },
                    ],
                    "default": "C",
                }
            }
        );
    }

    #[test]
    fn test_switch_without_default() {
        assert_eq!(
            Expr::switch().into_document(),
            doc! { "$switch": { "branches": [] } }
        );
    }
}
