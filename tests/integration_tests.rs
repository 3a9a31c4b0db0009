// tests/integration_tests.rs
//! Integration tests for the matrix algebra laws across modules

use smallmat::{inverse, Matrix, MatrixError, Vector2d};

fn close<const R: usize, const C: usize>(a: &Matrix<f64, R, C>, b: &Matrix<f64, R, C>) -> bool {
    (a - b).norm() < 1e-9
}

#[test]
fn test_identity_is_neutral_on_both_sides() {
    let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);

    assert_eq!(Matrix::<i32, 2, 2>::identity() * a, a);
    assert_eq!(a * Matrix::<i32, 3, 3>::identity(), a);

    let sq = Matrix::<f64, 4, 4>::from_fn(|i, j| (i as f64) - 2.0 * (j as f64));
    assert_eq!(Matrix::identity() * sq, sq);
    assert_eq!(sq * Matrix::identity(), sq);
}

#[test]
fn test_inverse_round_trip_integers_are_exact() {
    let m2 = Matrix::from_rows([[3i64, 5], [1, 2]]);
    assert_eq!(m2 * m2.inverse().unwrap(), Matrix::identity());
    assert_eq!(m2.inverse().unwrap() * m2, Matrix::identity());

    let m3 = Matrix::from_rows([[2i64, 3, 1], [1, 2, 1], [1, 1, 1]]);
    assert_eq!(m3.determinant(), 1);
    assert_eq!(m3 * m3.inverse().unwrap(), Matrix::identity());
    assert_eq!(m3.inverse().unwrap() * m3, Matrix::identity());

    let m4 = Matrix::from_rows([
        [1i64, 0, 0, 0],
        [2, 1, 0, 0],
        [3, 4, 1, 0],
        [5, 6, 7, 1],
    ]);
    assert_eq!(m4 * m4.inverse().unwrap(), Matrix::identity());
    assert_eq!(m4.inverse().unwrap() * m4, Matrix::identity());
}

#[test]
fn test_inverse_round_trip_floats_within_rounding() {
    let m3 = Matrix::from_rows([[0.5, -1.25, 2.0], [3.0, 0.75, -1.0], [1.5, 2.5, 4.0]]);
    let inv3 = m3.inverse().unwrap();
    assert!(close(&(m3 * inv3), &Matrix::identity()));
    assert!(close(&(inv3 * m3), &Matrix::identity()));

    let m4 = Matrix::<f64, 4, 4>::from_fn(|i, j| if i == j { 4.0 } else { 1.0 / (1.0 + (i + j) as f64) });
    let inv4 = inverse(&m4).unwrap();
    assert!(close(&(m4 * inv4), &Matrix::identity()));
    assert!(close(&(inv4 * m4), &Matrix::identity()));
}

#[test]
fn test_transpose_is_an_involution() {
    let a = Matrix::<i32, 3, 2>::from_fn(|i, j| (10 * i + j) as i32);
    assert_eq!(a.transpose().transpose(), a);

    let row = Matrix::from_rows([[1.0, 2.0, 3.0, 4.0]]);
    assert_eq!(row.transpose().transpose(), row);
}

#[test]
fn test_add_sub_and_scale_undo_each_other() {
    let a = Matrix::from_rows([[1.0, -2.0], [0.5, 8.0], [3.0, 4.0]]);
    let b = Matrix::from_rows([[0.25, 7.0], [-3.0, 1.0], [2.0, 2.0]]);

    assert_eq!((a + b) - b, a);
    assert_eq!((a * 4.0) / 4.0, a);

    let ints = Matrix::from_rows([[1, 2], [3, 4]]);
    assert_eq!((ints * -3) / -3, ints);
}

#[test]
fn test_homogeneous_round_trip() {
    let v = Matrix::<f64, 3, 1>::from_row_major(&[1.5, -2.0, 8.0]).unwrap();
    let h = v.extend::<4>().unwrap();
    assert_eq!(h.project::<3>().unwrap().extend::<4>().unwrap(), h);

    let scaled = h * 4.0;
    assert_eq!(scaled.project::<3>().unwrap(), v);
}

#[test]
fn test_list_construction_is_row_major() {
    let m = Matrix::<f64, 2, 2>::from_row_major(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn test_list_construction_never_truncates_or_pads() {
    fn check<const R: usize, const C: usize>() {
        let n = R * C;
        for len in [0, n.saturating_sub(1), n + 1, 2 * n + 3] {
            if len == n {
                continue;
            }
            let values = vec![1.0; len];
            assert_eq!(
                Matrix::<f64, R, C>::from_row_major(&values),
                Err(MatrixError::LengthMismatch { expected: n, got: len }),
                "{R}x{C} accepted {len} elements"
            );
        }
        assert!(Matrix::<f64, R, C>::from_row_major(&vec![1.0; n]).is_ok());
    }

    check::<1, 1>();
    check::<2, 2>();
    check::<2, 3>();
    check::<3, 1>();
    check::<1, 4>();
    check::<4, 4>();
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let short = Matrix::<f64, 2, 2>::from_row_major(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(short.is_precondition());

    let singular = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]).inverse().unwrap_err();
    assert!(singular.is_singular());
    assert!(!singular.is_precondition());

    let unsupported = Matrix::<f64, 6, 6>::identity().inverse().unwrap_err();
    assert!(unsupported.is_unsupported());

    let not_vector = Matrix::<f64, 2, 2>::zeros().extend::<3>().unwrap_err();
    assert!(not_vector.is_precondition());
}

#[test]
fn test_copies_are_independent_values() {
    let a = Matrix::<f64, 2, 2>::identity();
    let mut b = a;
    b[(0, 1)] = 9.0;
    b *= 2.0;

    assert_eq!(a, Matrix::identity());
    assert_eq!(b.row(0), [2.0, 18.0]);
}

#[test]
fn test_text_round_trip() {
    let m = Matrix::from_rows([[1.5, -2.0, 0.125], [4.0, 5.0, 6.0]]);
    let parsed: Matrix<f64, 2, 3> = m.to_string().parse().unwrap();
    assert_eq!(parsed, m);
}

#[test]
fn test_serde_json_round_trip_for_vector() {
    let v = Vector2d::new(0.5, -4.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"rows":2,"cols":1,"data":[0.5,-4.0]}"#);

    let back: Vector2d = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let as_matrix: Matrix<f64, 2, 1> = serde_json::from_str(&json).unwrap();
    assert_eq!(Vector2d::from(as_matrix), v);
}
