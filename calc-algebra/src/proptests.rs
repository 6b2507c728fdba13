//! Property-based tests for fraction arithmetic and term simplification.

use crate::{reduce, Arithmetic, Factor, Fraction, Simplify, Term};
use crate::error::kind::DivisionByZero;
use crate::primitive::int;
use proptest::prelude::*;

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn reduce_idempotent(n in small_int(), d in non_zero_int()) {
        let (n1, d1) = reduce(&int(n), &int(d)).unwrap();
        let (n2, d2) = reduce(&n1, &d1).unwrap();
        prop_assert_eq!((n1, d1), (n2, d2));
    }

    #[test]
    fn reduce_positive_denominator(n in small_int(), d in non_zero_int()) {
        let (_, d) = reduce(&int(n), &int(d)).unwrap();
        prop_assert!(d > 0);
    }

    #[test]
    fn reduce_coprime(n in small_int(), d in non_zero_int()) {
        let (n, d) = reduce(&int(n), &int(d)).unwrap();
        prop_assert_eq!(n.gcd(&d), 1);
    }

    #[test]
    fn zero_denominator(n in small_int()) {
        prop_assert!(reduce(&int(n), &int(0)).unwrap_err().is::<DivisionByZero>());
        prop_assert!(Fraction::new(n, 0).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn equal_under_scaling(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
        prop_assert_eq!(Fraction::new(n, d).unwrap(), Fraction::new(n * k, d * k).unwrap());
    }

    #[test]
    fn multiply_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn results_are_reduced(a in fraction(), b in fraction()) {
        prop_assert!(a.multiply(&b).unwrap().is_reduced());
        prop_assert!(a.add(&b).unwrap().is_reduced());
    }

    #[test]
    fn term_simplify_idempotent(fractions in prop::collection::vec(fraction(), 0..8)) {
        let term = fractions.into_iter().map(Factor::new).collect::<Term>();
        let once = term.simplify().unwrap();
        let twice = once.simplify().unwrap();
        prop_assert!(once.factors().len() <= 1);
        prop_assert_eq!(once, twice);
    }
}
