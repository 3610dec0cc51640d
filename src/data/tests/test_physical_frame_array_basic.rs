use crate::data::{
    Extent3, ExtentSource, FrameAxis, FrameValues, Orientation, PhysicalPointArrayByFrame,
    ScatteredPoints,
};
use crate::geom::{Point3, Vec3};

use super::snapshot;

fn array(points: usize) -> PhysicalPointArrayByFrame {
    let frames = FrameAxis::new(vec![1.0, 2.0, 4.0]).expect("ascending");
    PhysicalPointArrayByFrame::new(points, frames)
}

#[test]
fn full_set_stores_every_frame() {
    let mut a = array(2);
    a.set(
        0,
        Point3::new(1.0, 1.0, 1.0),
        Extent3::new(1.0, 2.0, 3.0),
        Orientation::GLOBAL,
        &[10.0, 20.0, 30.0],
    )
    .expect("valid sample");

    assert_eq!(a.num_frames(), 3);
    assert_eq!(a.values_at_point(0), Ok(vec![10.0, 20.0, 30.0]));
    assert_eq!(a.values_at_frame(2), Ok(vec![30.0, 0.0]));
    assert_eq!(a.extent(0), Ok(Extent3::new(1.0, 2.0, 3.0)));
    assert_eq!(a.value_array().value(0, 1), Ok(20.0));
    assert_eq!(a.min_edges(), Vec3::splat(-0.5));
    assert_eq!(a.max_edges(), Vec3::splat(2.5));
}

#[test]
fn short_value_row_rejects_the_whole_call() {
    let mut a = array(2);
    let before = snapshot(&a);
    assert!(a
        .set(
            0,
            Point3::ORIGIN,
            Extent3::new(1.0, 1.0, 1.0),
            Orientation::GLOBAL,
            &[1.0, 2.0],
        )
        .is_err());
    assert!(a
        .set_range(
            0..2,
            &[Point3::ORIGIN; 2],
            &[Extent3::ZERO; 2],
            &[Orientation::GLOBAL; 2],
            &[vec![1.0, 2.0, 3.0], vec![1.0]],
        )
        .is_err());
    assert_eq!(snapshot(&a), before);
    assert!(a.extent_list().extent_bounds().is_empty());
}

#[test]
fn set_range_updates_edges_for_every_index() {
    let mut a = array(3);
    a.set_range(
        0..3,
        &[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(0.0, -5.0, 0.0),
        ],
        &[
            Extent3::new(2.0, 0.0, 0.0),
            Extent3::new(0.0, 4.0, 0.0),
            Extent3::ZERO,
        ],
        &[Orientation::GLOBAL; 3],
        &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
    )
    .expect("valid batch");
    assert_eq!(a.min_edges(), Vec3::new(-1.0, -5.0, -2.0));
    assert_eq!(a.max_edges(), Vec3::new(7.0, 2.0, 2.0));
    assert_eq!(a.values_at_frame(0), Ok(vec![1.0, 4.0, 7.0]));
}

#[test]
fn moving_a_point_grows_edges_until_recalc() {
    let mut a = array(1);
    a.set_extents(0, Extent3::new(2.0, 2.0, 2.0)).expect("valid extent");
    a.set_point(0, Point3::new(10.0, 0.0, 0.0)).expect("in range");
    a.set_point_values(0, Point3::ORIGIN, &[0.0, 0.0, 0.0])
        .expect("valid row");
    assert_eq!(a.max_edges().x, 11.0);
    assert_eq!(a.min_edges().x, -1.0);

    a.recalc_max_min_edges();
    assert_eq!(a.max_edges(), Vec3::splat(1.0));
    assert_eq!(a.min_edges(), Vec3::splat(-1.0));
}

#[test]
fn frame_values_and_errors_delegate() {
    let mut a = array(2);
    a.set_values_at_frame(0, &[4.0, 16.0]).expect("one per point");
    a.set_value(1, 2, 9.0).expect("in range");
    a.set_square_root_errors(true);
    assert_eq!(a.errors_at_frame(0), Ok(vec![2.0, 4.0]));
    assert_eq!(a.error_value(1, 2), Ok(3.0));

    assert!(a.set_errors(&[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]));
    assert_eq!(a.errors_at_point(1), Ok(vec![0.4, 0.5, 0.6]));
    assert_eq!(a.errors()[0], vec![0.1, 0.2, 0.3]);

    a.set_all_values(1.0);
    assert_eq!(a.values(), vec![vec![1.0; 3]; 2]);
}

#[test]
fn orientation_and_array_id() {
    let mut a = array(2);
    a.set_array_id(3);
    let o = Orientation::new(Vec3::new(1.0, 1.0, 0.0), Vec3::new(-1.0, 1.0, 0.0));
    a.set_orientations(0..2, &[o, o]).expect("in range");
    assert_eq!(a.array_id(), 3);
    assert_eq!(a.orientations(), vec![o, o]);
    assert!(a.edge_bounds().is_empty());
}
