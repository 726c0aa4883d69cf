//! Array payloads with optional trailing slots.
//!
//! Operators such as `$indexOfArray` take a fixed list of required arguments
//! followed by optional ones that may only be given in order:
//! `[array, search]`, `[array, search, start]`, `[array, search, start, end]`.
//! [`PositionalArgs`] tracks the optional slots by name. Filling a slot that is
//! already present overwrites it, filling the next free slot appends it, and
//! filling a slot whose predecessors are missing fails.

use std::cmp::Ordering;

use bson::Bson;

use crate::error::{OperatorError, OperatorResult};

/// The argument array of an operator with named optional trailing slots.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalArgs {
    operator: &'static str,
    required: usize,
    slots: &'static [&'static str],
    args: Vec<Bson>,
}

impl PositionalArgs {
    /// Creates the argument list from the operator's required arguments.
    ///
    /// `slots` names the optional trailing arguments in wire order.
    pub fn new(
        operator: &'static str,
        required: impl IntoIterator<Item = Bson>,
        slots: &'static [&'static str],
    ) -> Self {
        let args = required.into_iter().collect::<Vec<_>>();

        Self {
            operator,
            required: args.len(),
            slots,
            args,
        }
    }

    /// Fills the optional slot named `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorError::InvalidBuilderState`] if `slot` is not one of this
    /// operator's slots, or if an earlier slot has not been filled yet.
    pub fn fill(&mut self, slot: &str, value: impl Into<Bson>) -> OperatorResult<()> {
        let Some(index) = self.slots.iter().position(|name| *name == slot) else {
            log::warn!("{} has no `{}` argument", self.operator, slot);
            return Err(OperatorError::InvalidBuilderState(format!(
                "{} has no `{}` argument",
                self.operator, slot
            )));
        };
        let position = self.required + index;

        match position.cmp(&self.args.len()) {
            Ordering::Less => self.args[position] = value.into(),
            Ordering::Equal => self.args.push(value.into()),
            Ordering::Greater => {
                let missing = self.slots[self.filled()];
                log::warn!(
                    "{}: cannot set `{}` before `{}`",
                    self.operator, slot, missing
                );
                return Err(OperatorError::InvalidBuilderState(format!(
                    "{}: cannot set `{}` before `{}`",
                    self.operator, slot, missing
                )));
            }
        }

        Ok(())
    }

    /// Fills the first optional slot, overwriting it when already present.
    ///
    /// The first slot never has a missing predecessor, so this cannot fail.
    pub fn fill_first(&mut self, value: impl Into<Bson>) {
        let value = value.into();

        match self.args.get_mut(self.required) {
            Some(slot) => *slot = value,
            None => self.args.push(value),
        }
    }

    /// Returns the value of an optional slot, if filled.
    pub fn get(&self, slot: &str) -> Option<&Bson> {
        self.slots
            .iter()
            .position(|name| *name == slot)
            .and_then(|index| self.args.get(self.required + index))
    }

    /// Returns the number of optional slots filled so far.
    pub fn filled(&self) -> usize {
        self.args.len() - self.required
    }

    /// Returns the wire name of the operator these arguments belong to.
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Returns all arguments in wire order.
    pub fn as_slice(&self) -> &[Bson] {
        &self.args
    }

    /// Renders the arguments as an array.
    pub fn into_array(self) -> Bson {
        Bson::Array(self.args)
    }

    /// Renders the arguments as a bare value when there is exactly one of them,
    /// and as an array otherwise.
    pub fn into_collapsed(self) -> Bson {
        crate::compose::collapse(self.args)
    }
}
