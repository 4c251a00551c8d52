//! Property-based tests for the quantity algebra.
//!
//! Uses proptest to check that rescaling composes, that addition behaves
//! like addition across rungs, and that invalidity always propagates.

use memchar_core::units::{self, rungs};
use memchar_core::{select_rung, Dimension, Error, Operation, Parameter, Provenance, Quantity};
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = Dimension> {
    prop::sample::select(Dimension::ALL.to_vec())
}

/// A quantity at an arbitrary rung of an arbitrary dimension.
fn quantity() -> impl Strategy<Value = Quantity> {
    (dimension(), any::<prop::sample::Index>(), -1.0e6f64..1.0e6).prop_map(|(d, idx, mag)| {
        let ladder = rungs(d);
        let rung = ladder[idx.index(ladder.len())];
        Quantity::with_prefix(d, mag, rung.prefix).unwrap()
    })
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * scale.abs().max(f64::MIN_POSITIVE)
}

// =============================================================================
// Rescaling
// =============================================================================

proptest! {
    /// rescale(rescale(q, r1), r2) == rescale(q, r2)
    #[test]
    fn prop_rescale_composes(q in quantity(), i1 in any::<prop::sample::Index>(), i2 in any::<prop::sample::Index>()) {
        let ladder = rungs(q.dimension());
        let r1 = ladder[i1.index(ladder.len())].exponent();
        let r2 = ladder[i2.index(ladder.len())].exponent();

        let direct = q.rescale(r2).unwrap();
        let via = q.rescale(r1).unwrap().rescale(r2).unwrap();
        prop_assert_eq!(via.exponent(), r2);
        prop_assert!(close(via.magnitude(), direct.magnitude(), direct.magnitude()));
        prop_assert!(close(direct.base_value(), q.base_value(), q.base_value()));
    }

    /// Off-ladder exponents are always rejected.
    #[test]
    fn prop_rescale_rejects_off_ladder(q in quantity(), exp in -30i32..30) {
        let on_ladder = units::rung_at(q.dimension(), exp).is_ok();
        prop_assert_eq!(q.rescale(exp).is_ok(), on_ladder);
    }
}

// =============================================================================
// Addition / Subtraction
// =============================================================================

fn same_dimension_pair() -> impl Strategy<Value = (Quantity, Quantity)> {
    (dimension(), any::<prop::sample::Index>(), any::<prop::sample::Index>(), -1.0e6f64..1.0e6, -1.0e6f64..1.0e6)
        .prop_map(|(d, i, j, a, b)| {
            let ladder = rungs(d);
            let qa = Quantity::with_prefix(d, a, ladder[i.index(ladder.len())].prefix).unwrap();
            let qb = Quantity::with_prefix(d, b, ladder[j.index(ladder.len())].prefix).unwrap();
            (qa, qb)
        })
}

proptest! {
    /// add(a, b) == add(b, a)
    #[test]
    fn prop_add_commutes((a, b) in same_dimension_pair()) {
        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        prop_assert_eq!(ab.exponent(), ba.exponent());
        prop_assert_eq!(ab.magnitude(), ba.magnitude());
    }

    /// subtract(add(a, b), b) == a, up to the precision of the larger operand
    #[test]
    fn prop_subtract_undoes_add((a, b) in same_dimension_pair()) {
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        let scale = a.base_value().abs().max(b.base_value().abs());
        prop_assert!(close(back.base_value(), a.base_value(), scale));
    }

    /// Mixed dimensions never add.
    #[test]
    fn prop_add_requires_same_dimension(a in quantity(), b in quantity()) {
        prop_assume!(a.dimension() != b.dimension());
        let is_mismatch = matches!(a.add(&b), Err(Error::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}

// =============================================================================
// Parameters
// =============================================================================

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(vec![Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide])
}

proptest! {
    /// An invalid operand yields an invalid result whatever the other side holds.
    #[test]
    fn prop_invalidity_is_contagious(q in quantity(), op in operation(), invalid_first: bool) {
        let valid = Parameter::input("x", q);
        let missing = Parameter::new("y");
        let result = if invalid_first { missing.apply(op, &valid) } else { valid.apply(op, &missing) };
        let result = result.unwrap();
        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.invalidity(), Some(&Error::PropagatedInvalidity { source_name: "y".into() }));
    }

    /// adopt from a valid source succeeds and keeps the user-input flag.
    #[test]
    fn prop_adopt_preserves_user_input(q in quantity(), from_input: bool) {
        let source = if from_input {
            Parameter::input("src", q)
        } else {
            Parameter::input("src", q).scale_by(1.0)
        };
        let mut dest = Parameter::new("dest");
        prop_assert!(dest.adopt(&source).is_ok());
        prop_assert_eq!(dest.provenance(), Provenance::DeclaredComputed);
        prop_assert_eq!(dest.is_user_input(), from_input);
    }

    /// adopt from an unresolved source always fails with SourceNotReady.
    #[test]
    fn prop_adopt_from_invalid_fails(q in quantity(), op in operation()) {
        let source = Parameter::new("late").apply(op, &Parameter::input("x", q)).unwrap();
        let mut dest = Parameter::new("dest");
        let is_not_ready = matches!(dest.adopt(&source), Err(Error::SourceNotReady { .. }));
        prop_assert!(is_not_ready);
        prop_assert!(!dest.is_valid());
    }
}

// =============================================================================
// Scale selection
// =============================================================================

proptest! {
    /// The selected rung is always one the dimension declares.
    #[test]
    fn prop_select_rung_stays_on_ladder(d in dimension(), mantissa in 1.0f64..1000.0, exp in -25i32..20) {
        let q = Quantity::base(d, mantissa * 10f64.powi(exp));
        let rung = select_rung(&q);
        prop_assert!(rungs(d).contains(&rung));
    }

    /// Exactly 1000^k base units selects the k-th rung above base.
    #[test]
    fn prop_boundary_prefers_larger_rung(k in 0i32..=5) {
        let q = Quantity::base(Dimension::Time, 1000f64.powi(k));
        prop_assert_eq!(select_rung(&q).exponent(), 3 * k);
    }
}
