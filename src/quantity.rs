//! quantity.rs
//! An immutable magnitude at one rung of one dimension's ladder.

use crate::error::{Error, Result};
use crate::units::{self, Dimension, Operation, Prefix, ScaleRung};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// `magnitude × 10^exponent` in the dimension's base unit.
///
/// The rung is stored as a prefix so that an off-ladder exponent cannot be
/// represented at all once construction has succeeded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawQuantity")]
pub struct Quantity {
    dimension: Dimension,
    magnitude: f64,
    prefix: Prefix,
}

/// Unchecked wire form; validated through `Quantity::with_prefix` on load.
#[derive(Deserialize)]
struct RawQuantity {
    dimension: Dimension,
    magnitude: f64,
    prefix: Prefix,
}

impl TryFrom<RawQuantity> for Quantity {
    type Error = Error;

    fn try_from(raw: RawQuantity) -> Result<Self> {
        Quantity::with_prefix(raw.dimension, raw.magnitude, raw.prefix)
    }
}

/// Moves `magnitude` from `10^from` to `10^to`. Dividing by an exact power of
/// ten keeps decimal inputs like 2.5e6 → 2.5 exact.
#[inline]
fn shift(magnitude: f64, from: i32, to: i32) -> f64 {
    let diff = from - to;
    if diff >= 0 {
        magnitude * 10f64.powi(diff)
    } else {
        magnitude / 10f64.powi(-diff)
    }
}

impl Quantity {
    /// Builds a quantity at an explicit power of ten.
    pub fn new(dimension: Dimension, magnitude: f64, exponent: i32) -> Result<Self> {
        let rung = units::rung_at(dimension, exponent)?;
        Ok(Self { dimension, magnitude, prefix: rung.prefix })
    }

    pub fn with_prefix(dimension: Dimension, magnitude: f64, prefix: Prefix) -> Result<Self> {
        units::rung_for_prefix(dimension, prefix)?;
        Ok(Self { dimension, magnitude, prefix })
    }

    /// Every ladder carries the base rung, so this cannot fail.
    pub fn base(dimension: Dimension, magnitude: f64) -> Self {
        Self { dimension, magnitude, prefix: Prefix::Base }
    }

    pub fn dimension(&self) -> Dimension { self.dimension }
    pub fn magnitude(&self) -> f64 { self.magnitude }
    pub fn prefix(&self) -> Prefix { self.prefix }

    pub fn rung(&self) -> ScaleRung {
        ScaleRung { dimension: self.dimension, prefix: self.prefix }
    }

    pub fn exponent(&self) -> i32 {
        self.rung().exponent()
    }

    /// The magnitude expressed in the base unit.
    pub fn base_value(&self) -> f64 {
        shift(self.magnitude, self.exponent(), 0)
    }

    /// The same value expressed at `target_exponent`.
    pub fn rescale(&self, target_exponent: i32) -> Result<Self> {
        let target = units::rung_at(self.dimension, target_exponent)?;
        Ok(self.at(target))
    }

    pub fn rescale_to(&self, rung: ScaleRung) -> Result<Self> {
        if rung.dimension != self.dimension {
            return Err(Error::DimensionMismatch { lhs: self.dimension, rhs: rung.dimension });
        }
        self.rescale(rung.exponent())
    }

    /// Rescale to a rung already known to be on this dimension's ladder.
    pub(crate) fn at(&self, rung: ScaleRung) -> Self {
        Self {
            dimension: self.dimension,
            magnitude: shift(self.magnitude, self.exponent(), rung.exponent()),
            prefix: rung.prefix,
        }
    }

    pub fn add(&self, rhs: &Quantity) -> Result<Self> {
        self.combine_linear(Operation::Add, rhs, |l, r| l + r)
    }

    pub fn subtract(&self, rhs: &Quantity) -> Result<Self> {
        self.combine_linear(Operation::Subtract, rhs, |l, r| l - r)
    }

    /// Both operands are brought to the smaller of their two rungs, which is
    /// also where the result stays.
    fn combine_linear(&self, op: Operation, rhs: &Quantity, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        let dimension = units::infer(op, self.dimension, rhs.dimension)?;
        let common = if self.exponent() <= rhs.exponent() { self.rung() } else { rhs.rung() };
        let magnitude = f(self.at(common).magnitude, rhs.at(common).magnitude);
        Ok(Self { dimension, magnitude, prefix: common.prefix })
    }

    /// Result is stored at the base rung of the derived dimension.
    pub fn multiply(&self, rhs: &Quantity) -> Result<Self> {
        let dimension = units::infer(Operation::Multiply, self.dimension, rhs.dimension)?;
        Ok(Self::base(dimension, self.base_value() * rhs.base_value()))
    }

    pub fn divide(&self, rhs: &Quantity) -> Result<Self> {
        let dimension = units::infer(Operation::Divide, self.dimension, rhs.dimension)?;
        Ok(Self::base(dimension, self.base_value() / rhs.base_value()))
    }

    pub fn apply(&self, op: Operation, rhs: &Quantity) -> Result<Self> {
        match op {
            Operation::Add => self.add(rhs),
            Operation::Subtract => self.subtract(rhs),
            Operation::Multiply => self.multiply(rhs),
            Operation::Divide => self.divide(rhs),
        }
    }

    /// Dimensionless scaling, e.g. the ½ in ½·C·V².
    pub fn scale_by(&self, factor: f64) -> Self {
        Self { magnitude: self.magnitude * factor, ..*self }
    }

    pub fn negate(&self) -> Self {
        self.scale_by(-1.0)
    }

    /// Orders two quantities by value. `None` when either magnitude is NaN.
    pub fn compare(&self, other: &Quantity) -> Result<Option<Ordering>> {
        if self.dimension != other.dimension {
            return Err(Error::DimensionMismatch { lhs: self.dimension, rhs: other.dimension });
        }
        let exp = self.exponent().min(other.exponent());
        let l = shift(self.magnitude, self.exponent(), exp);
        let r = shift(other.magnitude, other.exponent(), exp);
        Ok(l.partial_cmp(&r))
    }

    /// Equality within a relative tolerance, after normalizing both sides.
    pub fn approx_eq(&self, other: &Quantity, rel_tol: f64) -> Result<bool> {
        if self.dimension != other.dimension {
            return Err(Error::DimensionMismatch { lhs: self.dimension, rhs: other.dimension });
        }
        let (l, r) = (self.base_value(), other.base_value());
        if l == r {
            return Ok(true);
        }
        let scale = l.abs().max(r.abs());
        Ok((l - r).abs() <= rel_tol * scale)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.rung().symbol())
    }
}
