use std::ops::Range;

use super::edges::EdgeBounds;
use super::{
    AxisInfo, DataResult, ErrorMode, Extent3, ExtentList, ExtentSource, FrameAxis, FrameValues,
    Orientation, PointList, ScatteredPoints, ScatteredValueArrayByFrame, check_index, check_len,
    check_range,
};
use crate::geom::{Axis, Bounds3, Point3, Vec3};

/// Physical sample volumes whose values vary over a [`FrameAxis`].
///
/// The frame counterpart of [`super::PhysicalPointArray`]: positions and
/// extents are shared by all frames, so the edge aggregate is frame
/// independent.
#[derive(Debug, Clone)]
pub struct PhysicalPointArrayByFrame {
    values: ScatteredValueArrayByFrame,
    extents: ExtentList,
    edges: EdgeBounds,
    array_id: i32,
}

impl PhysicalPointArrayByFrame {
    #[must_use]
    pub fn new(count: usize, frames: FrameAxis) -> Self {
        Self {
            values: ScatteredValueArrayByFrame::new(count, frames),
            extents: ExtentList::new(count),
            edges: EdgeBounds::new(),
            array_id: 0,
        }
    }

    #[must_use]
    pub const fn array_id(&self) -> i32 {
        self.array_id
    }

    pub fn set_array_id(&mut self, id: i32) {
        self.array_id = id;
    }

    /// Borrow the owned value container without copying.
    #[must_use]
    pub const fn value_array(&self) -> &ScatteredValueArrayByFrame {
        &self.values
    }

    /// Set every per-sample attribute of one index; `values` needs one entry
    /// per frame.
    pub fn set(
        &mut self,
        index: usize,
        point: Point3,
        extent: Extent3,
        orientation: Orientation,
        values: &[f64],
    ) -> DataResult<()> {
        check_index(index, self.values.len())?;
        check_len("values", values.len(), self.values.num_frames())?;
        self.extents.set_extents(index, extent)?;
        self.extents
            .set_orientation(index, orientation.x_axis, orientation.y_axis)?;
        self.values.set(index, point, values)?;
        self.update_edges(index..index + 1);
        Ok(())
    }

    /// Range form of [`PhysicalPointArrayByFrame::set`]. Every slice, value
    /// row and extent is validated before anything is written.
    pub fn set_range<V: AsRef<[f64]>>(
        &mut self,
        range: Range<usize>,
        points: &[Point3],
        extents: &[Extent3],
        orientations: &[Orientation],
        values: &[V],
    ) -> DataResult<()> {
        check_range(&range, self.values.len())?;
        check_len("points", points.len(), range.len())?;
        check_len("orientations", orientations.len(), range.len())?;
        check_len("value rows", values.len(), range.len())?;
        let frames = self.values.num_frames();
        for row in &values[..range.len()] {
            check_len("values", row.as_ref().len(), frames)?;
        }
        self.extents.set_extents_range(range.clone(), extents)?;
        self.extents.set_orientations(range.clone(), orientations)?;
        self.values.set_range(range.clone(), points, values)?;
        self.update_edges(range);
        Ok(())
    }

    /// Set position and all frame values of one index, keeping its extent.
    pub fn set_point_values(
        &mut self,
        index: usize,
        point: Point3,
        values: &[f64],
    ) -> DataResult<()> {
        self.values.set(index, point, values)?;
        self.update_edges(index..index + 1);
        Ok(())
    }

    #[must_use]
    pub fn min_edges(&self) -> Vec3 {
        self.edges.bounds().min
    }

    #[must_use]
    pub fn max_edges(&self) -> Vec3 {
        self.edges.bounds().max
    }

    #[must_use]
    pub fn edge_bounds(&self) -> Bounds3 {
        self.edges.bounds()
    }

    /// Rebuild the edge aggregate from every stored point and extent.
    pub fn recalc_max_min_edges(&mut self) {
        self.edges.recalc(
            self.values.point_list().as_slice(),
            self.extents.as_slice(),
        );
    }

    fn update_edges(&mut self, range: Range<usize>) {
        let points = &self.values.point_list().as_slice()[range.clone()];
        let extents = &self.extents.as_slice()[range];
        self.edges.include_all(points, extents);
    }
}

impl ScatteredPoints for PhysicalPointArrayByFrame {
    fn point_list(&self) -> &PointList {
        self.values.point_list()
    }

    fn set_point(&mut self, index: usize, point: Point3) -> DataResult<()> {
        self.values.set_point(index, point)?;
        self.update_edges(index..index + 1);
        Ok(())
    }

    fn set_points(&mut self, range: Range<usize>, points: &[Point3]) -> DataResult<()> {
        self.values.set_points(range.clone(), points)?;
        self.update_edges(range);
        Ok(())
    }

    fn set_axis_info(&mut self, axis: Axis, info: &AxisInfo) {
        self.values.set_axis_info(axis, info);
    }

    fn set_title(&mut self, title: &str) {
        self.values.set_title(title);
    }
}

impl FrameValues for PhysicalPointArrayByFrame {
    fn frame_axis(&self) -> &FrameAxis {
        self.values.frame_axis()
    }

    fn value(&self, point: usize, frame: usize) -> DataResult<f64> {
        self.values.value(point, frame)
    }

    fn set_value(&mut self, point: usize, frame: usize, value: f64) -> DataResult<()> {
        self.values.set_value(point, frame, value)
    }

    fn values_at_point(&self, point: usize) -> DataResult<Vec<f64>> {
        self.values.values_at_point(point)
    }

    fn values_at_frame(&self, frame: usize) -> DataResult<Vec<f64>> {
        self.values.values_at_frame(frame)
    }

    fn set_values_at_point(&mut self, point: usize, values: &[f64]) -> DataResult<()> {
        self.values.set_values_at_point(point, values)
    }

    fn set_values_at_frame(&mut self, frame: usize, values: &[f64]) -> DataResult<()> {
        self.values.set_values_at_frame(frame, values)
    }

    fn values(&self) -> Vec<Vec<f64>> {
        self.values.values()
    }

    fn set_all_values(&mut self, value: f64) {
        self.values.set_all_values(value);
    }

    fn set_errors(&mut self, errors: &[Vec<f64>]) -> bool {
        self.values.set_errors(errors)
    }

    fn set_square_root_errors(&mut self, enabled: bool) {
        self.values.set_square_root_errors(enabled);
    }

    fn error_mode(&self) -> ErrorMode {
        self.values.error_mode()
    }

    fn error_value(&self, point: usize, frame: usize) -> DataResult<f64> {
        self.values.error_value(point, frame)
    }

    fn errors_at_point(&self, point: usize) -> DataResult<Vec<f64>> {
        self.values.errors_at_point(point)
    }

    fn errors_at_frame(&self, frame: usize) -> DataResult<Vec<f64>> {
        self.values.errors_at_frame(frame)
    }

    fn errors(&self) -> Vec<Vec<f64>> {
        self.values.errors()
    }
}

impl ExtentSource for PhysicalPointArrayByFrame {
    fn extent_list(&self) -> &ExtentList {
        &self.extents
    }

    fn set_extents(&mut self, index: usize, extent: Extent3) -> DataResult<()> {
        self.extents.set_extents(index, extent)?;
        self.update_edges(index..index + 1);
        Ok(())
    }

    fn set_extents_range(&mut self, range: Range<usize>, extents: &[Extent3]) -> DataResult<()> {
        self.extents.set_extents_range(range.clone(), extents)?;
        self.update_edges(range);
        Ok(())
    }

    fn set_orientation(&mut self, index: usize, x_axis: Vec3, y_axis: Vec3) -> DataResult<()> {
        self.extents.set_orientation(index, x_axis, y_axis)
    }

    fn set_orientations(
        &mut self,
        range: Range<usize>,
        orientations: &[Orientation],
    ) -> DataResult<()> {
        self.extents.set_orientations(range, orientations)
    }

    fn recalc_max_min_extents(&mut self) {
        self.extents.recalc_max_min_extents();
    }
}
