//! Operators over parameters. Operands are never mutated; every call yields
//! a fresh anonymous parameter.
use super::{Parameter, State};
use crate::error::Result;
use crate::units::Operation;

impl Parameter {
    /// Applies `op` to two parameters.
    ///
    /// Returns `Err` only for dimensional defects. An unresolved operand
    /// produces `Ok` of an invalid parameter carrying `PropagatedInvalidity`.
    pub fn apply(&self, op: Operation, rhs: &Parameter) -> Result<Parameter> {
        let (l, r) = match (self.quantity(), rhs.quantity()) {
            (Ok(l), Ok(r)) => (l, r),
            (Err(e), _) | (_, Err(e)) => return Ok(Parameter::anonymous(State::Invalid(e))),
        };
        Ok(Parameter::anonymous(State::OperationResult(l.apply(op, r)?)))
    }

    pub fn add(&self, rhs: &Parameter) -> Result<Parameter> {
        self.apply(Operation::Add, rhs)
    }

    pub fn subtract(&self, rhs: &Parameter) -> Result<Parameter> {
        self.apply(Operation::Subtract, rhs)
    }

    pub fn multiply(&self, rhs: &Parameter) -> Result<Parameter> {
        self.apply(Operation::Multiply, rhs)
    }

    pub fn divide(&self, rhs: &Parameter) -> Result<Parameter> {
        self.apply(Operation::Divide, rhs)
    }

    /// Dimensionless scaling; cannot hit a dimensional defect.
    pub fn scale_by(&self, factor: f64) -> Parameter {
        match self.quantity() {
            Ok(q) => Parameter::anonymous(State::OperationResult(q.scale_by(factor))),
            Err(e) => Parameter::anonymous(State::Invalid(e)),
        }
    }

    fn to_result(&self) -> Parameter {
        self.scale_by(1.0)
    }

    /// Left fold of `op` over `operands`, e.g. summing a chain of delays.
    /// An empty slice yields an uninitialized result.
    pub fn fold(op: Operation, operands: &[&Parameter]) -> Result<Parameter> {
        let Some((first, rest)) = operands.split_first() else {
            return Ok(Parameter::anonymous(State::Uninitialized));
        };
        rest.iter().try_fold(first.to_result(), |acc, p| acc.apply(op, p))
    }
}
