//! Integration tests for region operations: resize, copy, paste and concatenate.

use redeem_linalg::{ErrorKind, LinalgError, Matrix, Vector};

fn grid() -> Matrix<i32> {
    // 3 rows, 4 columns
    Matrix::from_rows(vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
    ])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Resize
// ---------------------------------------------------------------------------

#[test]
fn resize_grow_pads_with_zeros() {
    let m = grid();
    let grown = m.resize(5, 4);
    assert_eq!(grown.shape(), (4, 5));
    assert_eq!(
        grown.to_rows(),
        vec![
            vec![1, 2, 3, 4, 0],
            vec![5, 6, 7, 8, 0],
            vec![9, 10, 11, 12, 0],
            vec![0, 0, 0, 0, 0],
        ]
    );
    // receiver untouched
    assert_eq!(m, grid());
}

#[test]
fn resize_shrink_keeps_top_left() {
    let shrunk = grid().resize(2, 2);
    assert_eq!(shrunk.to_rows(), vec![vec![1, 2], vec![5, 6]]);
}

#[test]
fn resize_mixed_axes() {
    let m = grid().resize(2, 5);
    assert_eq!(
        m.to_rows(),
        vec![vec![1, 2], vec![5, 6], vec![9, 10], vec![0, 0], vec![0, 0]]
    );
}

#[test]
fn resize_to_empty() {
    let m = grid().resize(0, 0);
    assert_eq!(m.shape(), (0, 0));
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

#[test]
fn copy_extracts_region_by_column_and_row() {
    let region = grid().copy(1, 1, 3, 2).unwrap();
    assert_eq!(region.width(), 3);
    assert_eq!(region.height(), 2);
    assert_eq!(region.to_rows(), vec![vec![6, 7, 8], vec![10, 11, 12]]);
}

#[test]
fn copy_whole_matrix() {
    let m = grid();
    assert_eq!(m.copy(0, 0, 4, 3).unwrap(), m);
}

#[test]
fn copy_rejects_region_past_bounds() {
    let m = grid();
    let err = m.copy(2, 0, 3, 1).unwrap_err();
    assert_eq!(
        err,
        LinalgError::RegionOutOfBounds {
            x: 2,
            y: 0,
            width: 3,
            height: 1,
            bounds: (3, 4)
        }
    );
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert!(m.copy(0, 2, 1, 2).is_err());
}

#[test]
fn copy_with_huge_extent_is_out_of_range() {
    let m: Matrix<i32> = Matrix::new(3, 3);
    assert_eq!(
        m.copy(1, 0, usize::MAX, 1).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(
        m.copy(0, usize::MAX, 1, 1).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
}

// ---------------------------------------------------------------------------
// Paste
// ---------------------------------------------------------------------------

#[test]
fn paste_overwrites_region() {
    let mut m = grid();
    let patch = Matrix::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
    m.paste(&patch, 2, 1).unwrap();
    assert_eq!(
        m.to_rows(),
        vec![vec![1, 2, 3, 4], vec![5, 6, 0, 0], vec![9, 10, 0, 0]]
    );
}

#[test]
fn paste_out_of_bounds_leaves_receiver_untouched() {
    let mut m = grid();
    let patch: Matrix<i32> = Matrix::new(2, 2);
    assert_eq!(
        m.paste(&patch, 3, 0).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert!(m.paste(&patch, 0, 2).is_err());
    assert_eq!(m, grid());
}

#[test]
fn paste_at_huge_origin_is_out_of_range() {
    let mut m: Matrix<i32> = Matrix::new(3, 3);
    let patch: Matrix<i32> = Matrix::new(1, 1);
    assert_eq!(
        m.paste(&patch, usize::MAX, 0).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(
        m.paste(&patch, 0, usize::MAX).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(m, Matrix::new(3, 3));
}

#[test]
fn copy_then_paste_reproduces_region() {
    let source = grid();
    let region = source.copy(1, 0, 2, 3).unwrap();
    let mut target: Matrix<i32> = Matrix::new(4, 3);
    target.paste(&region, 1, 0).unwrap();
    assert_eq!(target.copy(1, 0, 2, 3).unwrap(), region);
    assert_eq!(target.get_column(0).unwrap().to_vec(), vec![0, 0, 0]);
}

#[test]
fn paste_row_and_column() {
    let mut m = grid();
    m.paste_row(0, &Vector::from_vec(vec![-1, -2, -3, -4])).unwrap();
    m.paste_column(3, &Vector::from_vec(vec![100, 200, 300])).unwrap();
    assert_eq!(
        m.to_rows(),
        vec![vec![-1, -2, -3, 100], vec![5, 6, 7, 200], vec![9, 10, 11, 300]]
    );
}

#[test]
fn paste_row_and_column_validate_inputs() {
    let mut m = grid();
    assert_eq!(
        m.paste_row(3, &Vector::from_vec(vec![0, 0, 0, 0])),
        Err(LinalgError::IndexOutOfRange { index: 3, bound: 3 })
    );
    assert_eq!(
        m.paste_row(0, &Vector::from_vec(vec![0, 0, 0])),
        Err(LinalgError::SizeMismatch { expected: 4, found: 3 })
    );
    assert_eq!(
        m.paste_column(4, &Vector::from_vec(vec![0, 0, 0])),
        Err(LinalgError::IndexOutOfRange { index: 4, bound: 4 })
    );
    assert_eq!(
        m.paste_column(0, &Vector::from_vec(vec![0, 0, 0, 0])),
        Err(LinalgError::SizeMismatch { expected: 3, found: 4 })
    );
    assert_eq!(m, grid());
}

// ---------------------------------------------------------------------------
// Concatenate
// ---------------------------------------------------------------------------

#[test]
fn concatenate_appends_on_the_right() {
    let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let other = Matrix::from_rows(vec![vec![5], vec![6]]).unwrap();
    m.concatenate(&other).unwrap();
    assert_eq!(m.width(), 3);
    assert_eq!(m.height(), 2);
    assert_eq!(m.to_rows(), vec![vec![1, 2, 5], vec![3, 4, 6]]);
}

#[test]
fn concatenate_rejects_different_heights() {
    let mut m = grid();
    let other: Matrix<i32> = Matrix::new(2, 2);
    let err = m.concatenate(&other).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SizeMismatch);
    assert_eq!(m, grid());
}

#[test]
fn concatenate_onto_zero_width_matrix() {
    let mut m: Matrix<i32> = Matrix::new(0, 3);
    m.concatenate(&grid()).unwrap();
    assert_eq!(m, grid());
}
