//! Rules for dimensional inference under multiplication and division.
//!
//! Only the closed set of relationships the array models actually use is
//! listed; anything else is a wiring defect in the caller.
use super::catalog::Dimension;
use super::catalog::Dimension::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

/// `lhs * rhs = product`. Multiplication is looked up in both operand orders.
const PRODUCTS: &[(Dimension, Dimension, Dimension)] = &[
    (Length, Length, Area),
    (Resistance, Length, Resistivity),
    (Voltage, Current, Power),
    (Resistance, Current, Voltage),
    (Capacitance, Voltage, Charge),
    (Current, Time, Charge),
    (Power, Time, Energy),
    (Resistance, Capacitance, Time),
    (Voltage, Charge, Energy),
    (Energy, Frequency, Power),
    (Charge, Frequency, Current),
];

/// `numerator / denominator = quotient`.
const QUOTIENTS: &[(Dimension, Dimension, Dimension)] = &[
    (Area, Length, Length),
    (Resistivity, Length, Resistance),
    (Resistivity, Resistance, Length),
    (Voltage, Current, Resistance),
    (Voltage, Resistance, Current),
    (Power, Voltage, Current),
    (Power, Current, Voltage),
    (Charge, Time, Current),
    (Charge, Current, Time),
    (Charge, Voltage, Capacitance),
    (Charge, Capacitance, Voltage),
    (Energy, Time, Power),
    (Energy, Power, Time),
    (Energy, Charge, Voltage),
    (Energy, Voltage, Charge),
    (Time, Resistance, Capacitance),
    (Time, Capacitance, Resistance),
    (Power, Frequency, Energy),
    (Current, Frequency, Charge),
];

/// Infers the dimension produced by `lhs op rhs`.
pub fn infer(op: Operation, lhs: Dimension, rhs: Dimension) -> Result<Dimension> {
    match op {
        Operation::Add | Operation::Subtract => {
            if lhs == rhs {
                Ok(lhs)
            } else {
                Err(Error::DimensionMismatch { lhs, rhs })
            }
        }
        Operation::Multiply => PRODUCTS
            .iter()
            .find(|&&(a, b, _)| (a, b) == (lhs, rhs) || (b, a) == (lhs, rhs))
            .map(|&(_, _, product)| product)
            .ok_or(Error::UnsupportedDimensionCombination { lhs, op: op.symbol(), rhs }),
        Operation::Divide => QUOTIENTS
            .iter()
            .find(|&&(a, b, _)| (a, b) == (lhs, rhs))
            .map(|&(_, _, quotient)| quotient)
            .ok_or(Error::UnsupportedDimensionCombination { lhs, op: op.symbol(), rhs }),
    }
}
