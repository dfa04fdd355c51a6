//! Property-based tests for the JSON payload format.

use proptest::prelude::*;

use strassen_core::Matrix;
use strassen_lib::payload::{self, PayloadError, Response};

fn matrix(order: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(any::<i64>(), order * order).prop_map(move |entries| {
        Matrix::from_fn(order, |i, j| entries[i * order + j])
    })
}

fn operands() -> impl Strategy<Value = (Matrix, Matrix)> {
    (0u32..4).prop_flat_map(|k| {
        let order = 1usize << k;
        (matrix(order), matrix(order))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Encoded operands decode to the same matrices.
    #[test]
    fn encode_decode_preserves_operands((a, b) in operands()) {
        let body = payload::encode(&a, &b).unwrap();
        let (da, db) = payload::decode(body.as_bytes()).unwrap();
        prop_assert_eq!(da, a);
        prop_assert_eq!(db, b);
    }

    /// A product response parses back to the same product.
    #[test]
    fn response_json_preserves_product(m in (0u32..4).prop_flat_map(|k| matrix(1 << k))) {
        let json = Response::product(m.clone()).to_json().unwrap();
        let parsed: Response = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, Response::product(m));
    }

    /// Rows of arbitrary lengths decode only when they form a square.
    #[test]
    fn arbitrary_row_lengths_never_panic(
        lengths in prop::collection::vec(0usize..6, 0..6),
    ) {
        let rows: Vec<Vec<i64>> = lengths.iter().map(|&n| vec![1; n]).collect();
        let order = rows.len();
        let body = serde_json::json!([
            {"order": order, "data": rows},
            {"order": 1, "data": [[1]]},
        ])
        .to_string();
        let square = lengths.iter().all(|&n| n == order);
        match payload::decode(body.as_bytes()) {
            Ok((a, _)) => {
                prop_assert!(square);
                prop_assert_eq!(a.order(), order);
            }
            Err(e) => {
                prop_assert!(!square, "unexpected error {}", e);
                let is_matrix_0 = matches!(e, PayloadError::Matrix { index: 0, .. });
                prop_assert!(is_matrix_0);
            }
        }
    }
}
