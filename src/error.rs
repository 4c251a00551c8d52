//! Defines the error type shared by the whole algebra.
use crate::units::Dimension;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown dimension '{0}'")]
    UnknownDimension(String),
    #[error("Unknown scale prefix '{0}'")]
    UnknownPrefix(String),
    #[error("Scale 10^{exponent} is not on the {dimension} ladder")]
    InvalidScale { dimension: Dimension, exponent: i32 },
    #[error("Dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch { lhs: Dimension, rhs: Dimension },
    #[error("No derived dimension for {lhs} {op} {rhs}")]
    UnsupportedDimensionCombination { lhs: Dimension, op: char, rhs: Dimension },
    #[error("Operand '{source_name}' is invalid")]
    PropagatedInvalidity { source_name: String },
    #[error("Cannot adopt from '{source_name}': source is not resolved")]
    SourceNotReady { source_name: String },
    #[error("Unsupported output mode '{0}'")]
    UnsupportedOutputMode(String),
    #[error("Illegal transition for '{name}': slot is {state}")]
    IllegalTransition { name: String, state: &'static str },
    #[error("Parameter '{0}' is already declared")]
    DuplicateParameter(String),
    #[error("Parameter '{0}' not found")]
    UnknownParameter(String),
    #[error("Model '{0}' has no slot handles left")]
    ModelFull(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Wrong units wired together by the calling model. These abort loudly
    /// instead of degrading a report field.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Error::UnknownDimension(_)
                | Error::UnknownPrefix(_)
                | Error::InvalidScale { .. }
                | Error::DimensionMismatch { .. }
                | Error::UnsupportedDimensionCombination { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
