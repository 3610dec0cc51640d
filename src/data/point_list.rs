use std::ops::Range;

use super::{AxisInfo, DataResult, check_index, check_len, check_range};
use crate::geom::{Axis, Bounds3, Point3};

/// Number of spatial dimensions every container reports.
pub const DIMENSIONS: usize = 3;

/// Fixed-size array of sample positions plus per-axis metadata and a title.
///
/// Points start out as [`Point3::UNSET`]. The point count is fixed for the
/// lifetime of the list.
#[derive(Debug, Clone)]
pub struct PointList {
    points: Vec<Point3>,
    axes: [AxisInfo; 3],
    title: String,
}

impl PointList {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            points: vec![Point3::UNSET; count],
            axes: Default::default(),
            title: String::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> DataResult<Point3> {
        check_index(index, self.len())?;
        Ok(self.points[index])
    }

    pub fn points_in(&self, range: Range<usize>) -> DataResult<Vec<Point3>> {
        check_range(&range, self.len())?;
        Ok(self.points[range].to_vec())
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        self.points.clone()
    }

    pub fn set_point(&mut self, index: usize, point: Point3) -> DataResult<()> {
        check_index(index, self.len())?;
        self.points[index] = point;
        Ok(())
    }

    /// Overwrite `range` with the leading `range.len()` entries of `points`.
    pub fn set_points(&mut self, range: Range<usize>, points: &[Point3]) -> DataResult<()> {
        check_range(&range, self.len())?;
        check_len("points", points.len(), range.len())?;
        let n = range.len();
        self.points[range].copy_from_slice(&points[..n]);
        Ok(())
    }

    #[must_use]
    pub fn axis_info(&self, axis: Axis) -> AxisInfo {
        self.axes[axis.index()].clone()
    }

    pub fn set_axis_info(&mut self, axis: Axis, info: &AxisInfo) {
        self.axes[axis.index()] = info.clone();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    /// Component-wise bounds of every assigned point.
    #[must_use]
    pub fn bounds(&self) -> Bounds3 {
        let mut bounds = Bounds3::UNBOUNDED;
        for p in self.points.iter().filter(|p| !p.is_unset()) {
            bounds.include(p.to_vec3());
        }
        bounds
    }

    pub(crate) fn as_slice(&self) -> &[Point3] {
        &self.points
    }
}

/// Read/write surface shared by every container that stores point positions.
///
/// Reads are provided through [`ScatteredPoints::point_list`]; writes are
/// implemented per container so composites can refresh derived state.
pub trait ScatteredPoints {
    /// Borrow the underlying point storage.
    fn point_list(&self) -> &PointList;

    fn set_point(&mut self, index: usize, point: Point3) -> DataResult<()>;

    fn set_points(&mut self, range: Range<usize>, points: &[Point3]) -> DataResult<()>;

    fn set_axis_info(&mut self, axis: Axis, info: &AxisInfo);

    fn set_title(&mut self, title: &str);

    fn len(&self) -> usize {
        self.point_list().len()
    }

    fn is_empty(&self) -> bool {
        self.point_list().is_empty()
    }

    fn point(&self, index: usize) -> DataResult<Point3> {
        self.point_list().point(index)
    }

    fn points_in(&self, range: Range<usize>) -> DataResult<Vec<Point3>> {
        self.point_list().points_in(range)
    }

    fn points(&self) -> Vec<Point3> {
        self.point_list().points()
    }

    fn axis_info(&self, axis: Axis) -> AxisInfo {
        self.point_list().axis_info(axis)
    }

    fn title(&self) -> &str {
        self.point_list().title()
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }
}

impl ScatteredPoints for PointList {
    fn point_list(&self) -> &PointList {
        self
    }

    fn set_point(&mut self, index: usize, point: Point3) -> DataResult<()> {
        PointList::set_point(self, index, point)
    }

    fn set_points(&mut self, range: Range<usize>, points: &[Point3]) -> DataResult<()> {
        PointList::set_points(self, range, points)
    }

    fn set_axis_info(&mut self, axis: Axis, info: &AxisInfo) {
        PointList::set_axis_info(self, axis, info);
    }

    fn set_title(&mut self, title: &str) {
        PointList::set_title(self, title);
    }
}
