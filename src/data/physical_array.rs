use std::ops::Range;

use super::edges::EdgeBounds;
use super::{
    AxisInfo, DataResult, ErrorMode, Extent3, ExtentList, ExtentSource, Orientation, PointList,
    ScatteredPoints, ScatteredValueArray, ScatteredValues, check_index, check_len, check_range,
};
use crate::geom::{Axis, Bounds3, Point3, Vec3};

/// Scattered values with a physical volume around every point.
///
/// Owns a [`ScatteredValueArray`] and an [`ExtentList`] and delegates to
/// them. Every call that moves a point or changes an extent also folds that
/// sample's edges into the edge aggregate; like the extent aggregate it only
/// grows until [`PhysicalPointArray::recalc_max_min_edges`] is called.
#[derive(Debug, Clone)]
pub struct PhysicalPointArray {
    values: ScatteredValueArray,
    extents: ExtentList,
    edges: EdgeBounds,
    array_id: i32,
}

impl PhysicalPointArray {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            values: ScatteredValueArray::new(count),
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
    pub const fn value_array(&self) -> &ScatteredValueArray {
        &self.values
    }

    /// Set every per-sample attribute of one index.
    pub fn set(
        &mut self,
        index: usize,
        point: Point3,
        extent: Extent3,
        orientation: Orientation,
        value: f64,
    ) -> DataResult<()> {
        check_index(index, self.values.len())?;
        self.extents.set_extents(index, extent)?;
        self.extents
            .set_orientation(index, orientation.x_axis, orientation.y_axis)?;
        self.values.set(index, point, value)?;
        self.update_edges(index..index + 1);
        Ok(())
    }

    /// Range form of [`PhysicalPointArray::set`]. All slices and extents are
    /// validated before anything is written.
    pub fn set_range(
        &mut self,
        range: Range<usize>,
        points: &[Point3],
        extents: &[Extent3],
        orientations: &[Orientation],
        values: &[f64],
    ) -> DataResult<()> {
        check_range(&range, self.values.len())?;
        check_len("points", points.len(), range.len())?;
        check_len("orientations", orientations.len(), range.len())?;
        check_len("values", values.len(), range.len())?;
        self.extents.set_extents_range(range.clone(), extents)?;
        self.extents.set_orientations(range.clone(), orientations)?;
        self.values.set_range(range.clone(), points, values)?;
        self.update_edges(range);
        Ok(())
    }

    /// Set position and value of one index, keeping its extent.
    pub fn set_point_value(&mut self, index: usize, point: Point3, value: f64) -> DataResult<()> {
        self.values.set(index, point, value)?;
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

impl ScatteredPoints for PhysicalPointArray {
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

impl ScatteredValues for PhysicalPointArray {
    fn value(&self, index: usize) -> DataResult<f64> {
        self.values.value(index)
    }

    fn values_in(&self, range: Range<usize>) -> DataResult<Vec<f64>> {
        self.values.values_in(range)
    }

    fn values(&self) -> Vec<f64> {
        self.values.values()
    }

    fn set_value(&mut self, index: usize, value: f64) -> DataResult<()> {
        self.values.set_value(index, value)
    }

    fn set_values(&mut self, range: Range<usize>, values: &[f64]) -> DataResult<()> {
        self.values.set_values(range, values)
    }

    fn set_all_values(&mut self, value: f64) {
        self.values.set_all_values(value);
    }

    fn set_errors(&mut self, errors: &[f64]) -> bool {
        self.values.set_errors(errors)
    }

    fn set_square_root_errors(&mut self, enabled: bool) {
        self.values.set_square_root_errors(enabled);
    }

    fn error_mode(&self) -> ErrorMode {
        self.values.error_mode()
    }

    fn error_value(&self, index: usize) -> DataResult<f64> {
        self.values.error_value(index)
    }

    fn errors(&self) -> Vec<f64> {
        self.values.errors()
    }
}

impl ExtentSource for PhysicalPointArray {
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
