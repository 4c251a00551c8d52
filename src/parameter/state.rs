//! Provenance states a parameter slot moves through.
use crate::error::Error;
use crate::quantity::Quantity;
use serde::Serialize;

/// The quantity travels inside the variant, so a slot without a trustworthy
/// value has nothing to read.
#[derive(Debug, Clone)]
pub enum State {
    Uninitialized,
    /// Set directly from configuration.
    DeclaredInput(Quantity),
    /// A computed value re-bound to a persistent slot via `adopt`.
    DeclaredComputed { quantity: Quantity, user_input: bool },
    /// Transient output of an operator.
    OperationResult(Quantity),
    /// Resolution failed: an upstream operand was invalid, an adopt source
    /// was not ready, or the configured literal was malformed.
    Invalid(Error),
}

/// Tag-only view of `State`, for reports and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Provenance {
    Uninitialized,
    DeclaredInput,
    DeclaredComputed,
    OperationResult,
    Invalid,
}

impl State {
    pub fn provenance(&self) -> Provenance {
        match self {
            State::Uninitialized => Provenance::Uninitialized,
            State::DeclaredInput(_) => Provenance::DeclaredInput,
            State::DeclaredComputed { .. } => Provenance::DeclaredComputed,
            State::OperationResult(_) => Provenance::OperationResult,
            State::Invalid(_) => Provenance::Invalid,
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            State::Uninitialized => "uninitialized",
            State::DeclaredInput(_) => "a declared input",
            State::DeclaredComputed { .. } => "a declared computed value",
            State::OperationResult(_) => "an operation result",
            State::Invalid(_) => "invalid",
        }
    }

    pub fn quantity(&self) -> Option<&Quantity> {
        match self {
            State::DeclaredInput(q) | State::OperationResult(q) => Some(q),
            State::DeclaredComputed { quantity, .. } => Some(quantity),
            State::Uninitialized | State::Invalid(_) => None,
        }
    }

    pub fn is_user_input(&self) -> bool {
        match self {
            State::DeclaredInput(_) => true,
            State::DeclaredComputed { user_input, .. } => *user_input,
            _ => false,
        }
    }
}
