//! Picks the most readable ladder rung for displaying a quantity.
use crate::quantity::Quantity;
use crate::units::{self, Prefix, ScaleRung};
use tracing::trace;

// Absorbs representation error so 1e-9 s still lands on the nano rung.
const BOUNDARY_EPS: f64 = 1e-9;

/// Chooses the largest rung at which the magnitude is still at least 1, so
/// that exactly 1000 base units shows as 1 of the next rung up.
///
/// When even the smallest rung leaves the magnitude below 1, that smallest
/// rung is used and a sub-unity value is displayed. Zero and non-finite
/// magnitudes stay at the base unit. Only rungs listed for the dimension are
/// considered.
pub fn select_rung(q: &Quantity) -> ScaleRung {
    let base = ScaleRung { dimension: q.dimension(), prefix: Prefix::Base };
    let size = q.magnitude().abs();
    if size == 0.0 || !size.is_finite() {
        return base;
    }

    let ladder = units::rungs(q.dimension());
    let chosen = ladder
        .iter()
        .rev()
        .copied()
        .find(|&rung| q.at(rung).magnitude().abs() >= 1.0 - BOUNDARY_EPS)
        .or_else(|| ladder.first().copied())
        .unwrap_or(base);

    trace!(value = %q, rung = %chosen.symbol(), "selected display rung");
    chosen
}

/// `q` rescaled to its display rung.
pub fn for_display(q: &Quantity) -> Quantity {
    q.at(select_rung(q))
}
