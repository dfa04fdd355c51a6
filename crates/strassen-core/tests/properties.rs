//! Property-based tests for the Strassen engine.
//!
//! These tests compare the engine against the naive kernel and exercise
//! the public `multiply` entry point from many threads at once.

use std::sync::Arc;

use proptest::prelude::*;

use strassen_core::multiplier::{Multiplier, ValidatedMultiplier};
use strassen_core::naive::naive_multiply;
use strassen_core::quadrants::{combine, split};
use strassen_core::{
    multiply, CancellationToken, CoreError, Matrix, OverflowPolicy, Options, StrassenEngine,
};

/// A power-of-two order from {1, 2, 4, 8}.
fn order() -> impl Strategy<Value = usize> {
    (0u32..4).prop_map(|k| 1usize << k)
}

fn matrix_of(n: usize, entries: impl Strategy<Value = i64>) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(entries, n * n).prop_map(move |data| {
        let rows = data.chunks(n).map(<[i64]>::to_vec).collect();
        Matrix::from_rows(rows).unwrap()
    })
}

fn pair(entries: std::ops::RangeInclusive<i64>) -> impl Strategy<Value = (Matrix, Matrix)> {
    order().prop_flat_map(move |n| {
        (matrix_of(n, entries.clone()), matrix_of(n, entries.clone()))
    })
}

fn strassen_with(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, CoreError> {
    let m = ValidatedMultiplier::new(Arc::new(StrassenEngine::new()));
    m.multiply(&CancellationToken::new(), a, b, opts)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Strassen agrees with the conventional product for bounded entries.
    #[test]
    fn strassen_equals_naive((a, b) in pair(-1_000..=1_000)) {
        let expected = naive_multiply(&a, &b, OverflowPolicy::Checked).unwrap();
        prop_assert_eq!(multiply(&a, &b).unwrap(), expected);
    }

    /// Checked policy gives the same product whenever no intermediate overflows.
    #[test]
    fn checked_equals_naive((a, b) in pair(-1_000_000..=1_000_000)) {
        let opts = Options { overflow: OverflowPolicy::Checked, parallel_threshold: 1, ..Options::default() };
        let expected = naive_multiply(&a, &b, OverflowPolicy::Checked).unwrap();
        prop_assert_eq!(strassen_with(&a, &b, &opts).unwrap(), expected);
    }

    /// With wrapping arithmetic both algorithms agree modulo 2^64 for any entries.
    #[test]
    fn wrapping_equals_wrapping_naive((a, b) in pair(i64::MIN..=i64::MAX)) {
        let expected = naive_multiply(&a, &b, OverflowPolicy::Wrapping).unwrap();
        prop_assert_eq!(multiply(&a, &b).unwrap(), expected);
    }

    /// combine(split(M)) == M for even orders.
    #[test]
    fn combine_split_roundtrip(m in (1usize..9).prop_flat_map(|h| matrix_of(2 * h, any::<i64>()))) {
        let q = split(&m);
        prop_assert_eq!(combine(&q.a11, &q.a12, &q.a21, &q.a22), m);
    }

    /// 1x1 operands give the scalar product.
    #[test]
    fn scalar_base_case(a in -3_000_000_000i64..3_000_000_000, b in -3_000_000_000i64..3_000_000_000) {
        let ma = Matrix::from_rows(vec![vec![a]]).unwrap();
        let mb = Matrix::from_rows(vec![vec![b]]).unwrap();
        let product = multiply(&ma, &mb).unwrap();
        let expected = [a * b];
        prop_assert_eq!(product.as_slice(), &expected[..]);
    }

    /// Multiplying by the identity on either side returns the operand.
    #[test]
    fn identity_is_neutral(a in order().prop_flat_map(|n| matrix_of(n, any::<i64>()))) {
        let id = Matrix::identity(a.order());
        prop_assert_eq!(multiply(&a, &id).unwrap(), a.clone());
        prop_assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    /// Engine thresholds never change the product.
    #[test]
    fn thresholds_are_transparent(
        (a, b) in pair(-100..=100),
        parallel_threshold in 1usize..16,
        leaf_order in 1usize..16,
    ) {
        let opts = Options { parallel_threshold, leaf_order, ..Options::default() };
        prop_assert_eq!(strassen_with(&a, &b, &opts).unwrap(), multiply(&a, &b).unwrap());
    }
}

#[test]
fn order_two_scenario() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    assert_eq!(
        multiply(&a, &b).unwrap().to_rows(),
        vec![vec![19, 22], vec![43, 50]]
    );
}

#[test]
fn validation_scenarios() {
    let three = Matrix::zeros(3);
    assert_eq!(multiply(&three, &three), Err(CoreError::InvalidOrder(3)));

    assert_eq!(
        multiply(&Matrix::zeros(4), &Matrix::zeros(8)),
        Err(CoreError::DimensionMismatch { left: 4, right: 8 })
    );
}

#[test]
fn deterministic_across_concurrent_callers() {
    let n = 32;
    let inputs: Vec<(Matrix, Matrix)> = (0..4i64)
        .map(|seed| {
            let a = Matrix::from_fn(n, |i, j| (i as i64 * 31 + j as i64 * 17 + seed) % 23 - 11);
            let b = Matrix::from_fn(n, |i, j| (i as i64 * 7 + j as i64 * 13 + seed * 5) % 19 - 9);
            (a, b)
        })
        .collect();
    let expected: Vec<Matrix> = inputs
        .iter()
        .map(|(a, b)| naive_multiply(a, b, OverflowPolicy::Wrapping).unwrap())
        .collect();

    let opts = Options {
        parallel_threshold: 1,
        ..Options::default()
    };

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|t| {
                let idx = t % inputs.len();
                let (a, b) = &inputs[idx];
                let opts = &opts;
                s.spawn(move || (idx, strassen_with(a, b, opts).unwrap()))
            })
            .collect();
        for h in handles {
            let (idx, result) = h.join().unwrap();
            assert_eq!(result, expected[idx]);
        }
    });

    // Repeated calls on one thread stay identical too.
    let (a, b) = &inputs[0];
    let first = multiply(a, b).unwrap();
    for _ in 0..8 {
        assert_eq!(multiply(a, b).unwrap(), first);
    }
}

#[test]
fn overflow_error_wins_over_sibling_cancellation() {
    let a = Matrix::from_fn(16, |_, _| i64::MAX / 2);
    let opts = Options {
        overflow: OverflowPolicy::Checked,
        parallel_threshold: 1,
        ..Options::default()
    };
    for _ in 0..16 {
        let err = strassen_with(&a, &a, &opts).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)), "got {err:?}");
    }
}
