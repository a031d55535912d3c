//! Vector integration tests.

#![expect(clippy::float_cmp, reason = "exact arithmetic on small integers")]

use datamodel::{Vector, VectorError};
use proptest::prelude::*;

#[test]
fn construction_defaults_to_origin() {
    assert_eq!(Vector::default(), Vector::new(0.0, 0.0));
    assert_eq!(Vector::ZERO, Vector::default());
    assert_eq!(Vector::from((1.0, 2.0)), Vector::new(1.0, 2.0));
}

#[test]
fn addition_produces_a_new_vector() {
    let v1 = Vector::new(2.0, 4.0);
    let v2 = Vector::new(2.0, 1.0);
    assert_eq!(v1 + v2, Vector::new(4.0, 5.0));
    assert_eq!(v1, Vector::new(2.0, 4.0));
    assert_eq!(v2, Vector::new(2.0, 1.0));

    let mut total = Vector::ZERO;
    total += v1;
    total += v2;
    assert_eq!(total, Vector::new(4.0, 5.0));
    assert_eq!(total - v2, v1);
    assert_eq!(-v1, Vector::new(-2.0, -4.0));
}

#[test]
fn magnitude_and_truthiness() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    assert!(v.is_truthy());
    assert!(!Vector::new(0.0, 0.0).is_truthy());
    assert!(Vector::new(0.0, 1.0).is_truthy());
}

#[test]
fn scaling_multiplies_both_coordinates() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v * 3.0, Vector::new(9.0, 12.0));
    assert_eq!(3.0 * v, v * 3.0);
    assert_eq!(v.scale(0.5), Vector::new(1.5, 2.0));
    assert_eq!((v * 3.0).magnitude(), 15.0);
    assert!(!(v * 0.0).is_truthy());
}

#[test]
fn repr_reads_like_a_constructor() {
    assert_eq!(Vector::new(3.0, 4.0).to_string(), "Vector(3,4)");
    assert_eq!(Vector::new(-1.5, 0.25).to_string(), "Vector(-1.5,0.25)");
    assert_eq!("Vector(3,4)".parse::<Vector>(), Ok(Vector::new(3.0, 4.0)));
    assert_eq!("Vector(3 4)".parse::<Vector>(), Err(VectorError::Parse));
}

#[test]
fn wrong_arity_operand_is_rejected() {
    let pair: &[f64] = &[1.0, 2.0];
    assert_eq!(Vector::try_from(pair), Ok(Vector::new(1.0, 2.0)));

    let triple: &[f64] = &[1.0, 2.0, 3.0];
    assert_eq!(
        Vector::try_from(triple),
        Err(VectorError::InvalidOperand {
            expected: 2,
            found: 3
        })
    );

    let empty: &[f64] = &[];
    assert_eq!(
        Vector::try_from(empty),
        Err(VectorError::InvalidOperand {
            expected: 2,
            found: 0
        })
    );
}

fn small() -> impl Strategy<Value = f64> {
    // Integers keep addition exact so equality is meaningful.
    (-1_000_000i32..1_000_000).prop_map(f64::from)
}

fn vector() -> impl Strategy<Value = Vector> {
    (small(), small()).prop_map(|(x, y)| Vector::new(x, y))
}

proptest! {
    #[test]
    fn addition_commutes(a in vector(), b in vector()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn addition_associates(a in vector(), b in vector(), c in vector()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn repr_round_trips(x in any::<f64>(), y in any::<f64>()) {
        prop_assume!(!x.is_nan() && !y.is_nan());
        let v = Vector::new(x, y);
        prop_assert_eq!(v.to_string().parse::<Vector>(), Ok(v));
    }

    #[test]
    fn truthy_iff_nonzero(v in vector()) {
        prop_assert_eq!(v.is_truthy(), v.x != 0.0 || v.y != 0.0);
    }
}
