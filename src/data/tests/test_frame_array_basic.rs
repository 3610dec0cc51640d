use crate::data::{
    DataError, ErrorMode, FrameAxis, FrameValues, ScatteredPoints, ScatteredValueArrayByFrame,
};
use crate::geom::Point3;

use super::snapshot;

fn array(points: usize, frames: usize) -> ScatteredValueArrayByFrame {
    ScatteredValueArrayByFrame::new(points, FrameAxis::indexed(frames))
}

fn populated(points: usize, frames: usize) -> ScatteredValueArrayByFrame {
    let mut a = array(points, frames);
    for p in 0..points {
        let row: Vec<f64> = (0..frames).map(|f| (p * 10 + f) as f64).collect();
        a.set(p, Point3::new(p as f64, 0.0, 0.0), &row).expect("valid row");
    }
    a
}

#[test]
fn frame_count_comes_from_axis() {
    let axis = FrameAxis::new(vec![0.5, 1.5, 4.0]).expect("ascending");
    let a = ScatteredValueArrayByFrame::new(2, axis.clone());
    assert_eq!(a.num_frames(), 3);
    assert_eq!(a.frame_axis(), &axis);
    assert_eq!(a.len(), 2);
}

#[test]
fn set_requires_a_value_per_frame() {
    let mut a = array(2, 3);
    let before = a.clone();
    let err = a.set(0, Point3::ORIGIN, &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        DataError::TooShort {
            what: "values",
            needed: 3,
            got: 2
        }
    );
    assert_eq!(snapshot(&a), snapshot(&before));

    a.set(0, Point3::ORIGIN, &[1.0, 2.0, 3.0, 4.0]).expect("extra entries ignored");
    assert_eq!(a.values_at_point(0), Ok(vec![1.0, 2.0, 3.0]));
}

#[test]
fn set_clears_explicit_errors_of_that_point() {
    let mut a = array(2, 2);
    assert!(a.set_errors(&[vec![0.1, 0.2], vec![0.3, 0.4]]));
    a.set(1, Point3::ORIGIN, &[5.0, 6.0]).expect("valid row");
    assert_eq!(a.errors_at_point(0), Ok(vec![0.1, 0.2]));
    assert!(a.errors_at_point(1).expect("in range").iter().all(|e| e.is_nan()));
}

#[test]
fn frame_slices_are_consistent() {
    let a = populated(4, 3);
    for p in 0..4 {
        assert_eq!(a.values_at_point(p).expect("in range").len(), a.num_frames());
    }
    for f in 0..3 {
        let column = a.values_at_frame(f).expect("in range");
        assert_eq!(column.len(), 4);
        for (p, value) in column.iter().enumerate() {
            assert_eq!(a.value(p, f), Ok(*value));
        }
    }
    let matrix = a.values();
    assert_eq!(matrix.len(), 4);
    assert_eq!(matrix[2], vec![20.0, 21.0, 22.0]);
}

#[test]
fn index_validation_covers_points_and_frames() {
    let mut a = array(2, 3);
    assert_eq!(
        a.value(2, 0),
        Err(DataError::PointIndex { index: 2, count: 2 })
    );
    assert_eq!(
        a.value(0, 3),
        Err(DataError::FrameIndex { index: 3, count: 3 })
    );
    assert!(a.set_value(0, 3, 1.0).is_err());
    assert!(a.values_at_frame(3).is_err());
    assert!(a.values_at_point(2).is_err());
    assert!(a.error_value(0, 3).is_err());
    assert!(a.errors_at_frame(5).is_err());
    assert_eq!(snapshot(&a), snapshot(&array(2, 3)));
}

#[test]
fn row_and_column_setters() {
    let mut a = array(3, 2);
    a.set_values_at_frame(1, &[7.0, 8.0, 9.0]).expect("one per point");
    a.set_values_at_point(0, &[1.0, 2.0]).expect("one per frame");
    assert!(a.set_values_at_frame(0, &[1.0]).is_err());
    assert!(a.set_values_at_point(1, &[1.0]).is_err());
    assert_eq!(a.values(), vec![vec![1.0, 2.0], vec![0.0, 8.0], vec![0.0, 9.0]]);

    a.set_all_values(-1.0);
    assert_eq!(a.values_at_frame(0), Ok(vec![-1.0; 3]));
}

#[test]
fn returned_slices_are_copies() {
    let a = populated(2, 2);
    let mut row = a.values_at_point(1).expect("in range");
    row[0] = 1e9;
    let mut matrix = a.values();
    matrix[0][1] = 1e9;
    assert_eq!(a.value(1, 0), Ok(10.0));
    assert_eq!(a.value(0, 1), Ok(1.0));
}

#[test]
fn square_root_errors_per_frame() {
    let mut a = array(1, 3);
    a.set(0, Point3::ORIGIN, &[1.0, -4.0, 9.0]).expect("valid row");
    a.set_square_root_errors(true);
    assert_eq!(a.error_mode(), ErrorMode::SquareRoot);
    assert_eq!(a.errors_at_point(0), Ok(vec![1.0, 2.0, 3.0]));
    assert_eq!(a.errors_at_frame(1), Ok(vec![2.0]));
    a.set_square_root_errors(false);
    assert!(a.error_value(0, 2).expect("in range").is_nan());
}

#[test]
fn error_matrix_is_best_effort_per_row() {
    let mut a = array(3, 2);
    assert!(!a.set_errors(&[vec![0.1, 0.2], vec![0.3]]));
    let errors = a.errors();
    assert_eq!(errors[0], vec![0.1, 0.2]);
    assert_eq!(errors[1][0], 0.3);
    assert!(errors[1][1].is_nan());
    assert!(errors[2].iter().all(|e| e.is_nan()));

    assert!(a.set_errors(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]));
    assert_eq!(a.errors_at_frame(1), Ok(vec![1.0, 2.0, 3.0]));
}

#[test]
fn set_range_validates_every_row_first() {
    let mut a = array(3, 2);
    let before = a.clone();
    let rows = vec![vec![1.0, 2.0], vec![3.0]];
    assert!(a
        .set_range(0..2, &[Point3::ORIGIN, Point3::ORIGIN], &rows)
        .is_err());
    assert_eq!(snapshot(&a), snapshot(&before));

    let rows = [[1.0, 2.0], [3.0, 4.0]];
    a.set_range(1..3, &[Point3::ORIGIN, Point3::ORIGIN], &rows)
        .expect("valid rows");
    assert_eq!(a.values_at_frame(1), Ok(vec![0.0, 2.0, 4.0]));
    assert_eq!(a.value_range_at_frame(0), Ok(Some((0.0, 3.0))));
}
