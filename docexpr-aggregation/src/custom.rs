//! JavaScript backed operators. The language is always `js`.

use bson::{Bson, Document};
use docexpr_core::{builder::{fields, operator}, document::JavaScript, operator_builder};

use crate::expr::Expr;

fn script(code: impl Into<JavaScript>) -> Bson {
    let code: JavaScript = code.into();
    Bson::from(code)
}

impl Expr {
    /// Defines a custom aggregation function.
    pub fn function(body: impl Into<JavaScript>, args: impl Into<Bson>) -> Document {
        operator(
            "$function",
            fields([
                ("body", script(body)),
                ("args", args.into()),
                ("lang", Bson::from("js")),
            ]),
        )
    }

    /// Defines a custom accumulator for `$group`, `$bucket` and `$setWindowFields`.
    pub fn accumulator(
        init: impl Into<JavaScript>,
        accumulate: impl Into<JavaScript>,
        accumulate_args: impl Into<Bson>,
        merge: impl Into<JavaScript>,
    ) -> AccumulatorOperator {
        AccumulatorOperator::from_spec(fields([
            ("init", script(init)),
            ("accumulate", script(accumulate)),
            ("accumulateArgs", accumulate_args.into()),
            ("merge", script(merge)),
            ("lang", Bson::from("js")),
        ]))
    }
}

operator_builder! {
    /// Builder returned from [`Expr::accumulator`].
    pub struct AccumulatorOperator => "$accumulator";
}

impl AccumulatorOperator {
    /// Sets the arguments passed to the `init` function.
    pub fn set_init_args(self, args: impl Into<Bson>) -> Self {
        self.with("initArgs", args)
    }

    /// Sets the function that turns the final state into the result.
    pub fn set_finalize(self, finalize: impl Into<JavaScript>) -> Self {
        self.with("finalize", script(finalize))
    }
}
