//! Named, provenance-tracked slots wrapping a `Quantity`.
//!
//! A parameter is either a user-supplied input or a formula output. Its value
//! may only be read once it has resolved; an unresolved operand makes every
//! downstream result invalid instead of producing a number.
use crate::error::{Error, Result};
use crate::quantity::Quantity;
use tracing::{debug, warn};

mod ops;
mod state;

pub use self::state::{Provenance, State};

const ANONYMOUS: &str = "<anonymous>";

#[derive(Debug, Clone)]
pub struct Parameter {
    name: Option<String>,
    state: State,
}

impl Parameter {
    /// A named slot with no value yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), state: State::Uninitialized }
    }

    /// A named slot holding a value taken from configuration.
    pub fn input(name: impl Into<String>, quantity: Quantity) -> Self {
        Self { name: Some(name.into()), state: State::DeclaredInput(quantity) }
    }

    pub(crate) fn anonymous(state: State) -> Self {
        Self { name: None, state }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn provenance(&self) -> Provenance {
        self.state.provenance()
    }

    pub fn is_valid(&self) -> bool {
        self.state.quantity().is_some()
    }

    pub fn is_user_input(&self) -> bool {
        self.state.is_user_input()
    }

    /// The resolved value, or the invalidity a consumer must propagate.
    ///
    /// An upstream `PropagatedInvalidity` is passed through unchanged so the
    /// error keeps naming the slot where resolution first failed.
    pub fn quantity(&self) -> Result<&Quantity> {
        match &self.state {
            State::Invalid(e @ Error::PropagatedInvalidity { .. }) => Err(e.clone()),
            state => state.quantity().ok_or_else(|| Error::PropagatedInvalidity {
                source_name: self.label().to_string(),
            }),
        }
    }

    /// Why the slot is invalid, if resolution was attempted and failed.
    pub fn invalidity(&self) -> Option<&Error> {
        match &self.state {
            State::Invalid(e) => Some(e),
            _ => None,
        }
    }

    /// Assigns a configuration literal. Computed slots cannot be turned back
    /// into inputs.
    pub fn declare(&mut self, quantity: Quantity) -> Result<()> {
        match self.state {
            State::Uninitialized | State::DeclaredInput(_) | State::Invalid(_) => {
                self.state = State::DeclaredInput(quantity);
                Ok(())
            }
            State::DeclaredComputed { .. } | State::OperationResult(_) => Err(Error::IllegalTransition {
                name: self.label().to_string(),
                state: self.state.describe(),
            }),
        }
    }

    /// Marks the slot invalid, e.g. when its configured literal is malformed.
    pub fn invalidate(&mut self, reason: Error) {
        self.state = State::Invalid(reason);
    }

    /// Re-binds the value of `source` to this slot.
    ///
    /// On success the slot becomes `DeclaredComputed` and inherits the
    /// source's user-input flag. An unresolved source leaves this slot
    /// invalid with `SourceNotReady`, which is also returned.
    pub fn adopt(&mut self, source: &Parameter) -> Result<()> {
        let Some(&quantity) = source.state.quantity() else {
            let err = Error::SourceNotReady { source_name: source.label().to_string() };
            debug!(slot = self.label(), source = source.label(), "adopt from unresolved source");
            self.state = State::Invalid(err.clone());
            return Err(err);
        };
        if let State::DeclaredInput(_) = self.state {
            warn!(slot = self.label(), "declared input overwritten by adopt");
        }
        debug!(slot = self.label(), source = source.label(), value = %quantity, "adopt");
        self.state = State::DeclaredComputed { quantity, user_input: source.is_user_input() };
        Ok(())
    }
}
