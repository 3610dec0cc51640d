use std::ops::Range;

use super::values::{ValueGrid, finite_range};
use super::{
    AxisInfo, DataResult, ErrorMode, PointList, ScatteredPoints, check_index, check_len,
    check_range,
};
use crate::geom::{Axis, Point3};

/// Single-frame value/error surface of a scattered point container.
pub trait ScatteredValues: ScatteredPoints {
    fn value(&self, index: usize) -> DataResult<f64>;

    fn values_in(&self, range: Range<usize>) -> DataResult<Vec<f64>>;

    fn values(&self) -> Vec<f64>;

    fn set_value(&mut self, index: usize, value: f64) -> DataResult<()>;

    fn set_values(&mut self, range: Range<usize>, values: &[f64]) -> DataResult<()>;

    fn set_all_values(&mut self, value: f64);

    /// Copy up to `len` explicit errors and switch to [`ErrorMode::Explicit`].
    ///
    /// Entries past the end of `errors` read as NaN. Returns `false` when the
    /// length of `errors` differs from the point count; the copy happens
    /// either way.
    fn set_errors(&mut self, errors: &[f64]) -> bool;

    /// Toggle between square-root and explicit errors without discarding
    /// stored explicit values.
    fn set_square_root_errors(&mut self, enabled: bool);

    fn error_mode(&self) -> ErrorMode;

    fn error_value(&self, index: usize) -> DataResult<f64>;

    fn errors(&self) -> Vec<f64>;

    /// Smallest and largest non-NaN value.
    fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.values())
    }
}

/// Scattered points carrying one value and one error each.
#[derive(Debug, Clone)]
pub struct ScatteredValueArray {
    points: PointList,
    grid: ValueGrid,
}

impl ScatteredValueArray {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            points: PointList::new(count),
            grid: ValueGrid::new(count, 1),
        }
    }

    /// Set position and value of one point together.
    pub fn set(&mut self, index: usize, point: Point3, value: f64) -> DataResult<()> {
        check_index(index, self.points.len())?;
        self.points.set_point(index, point)?;
        self.grid.set(index, 0, value);
        Ok(())
    }

    /// Set positions and values over `range`; both slices are checked before
    /// anything is written.
    pub fn set_range(
        &mut self,
        range: Range<usize>,
        points: &[Point3],
        values: &[f64],
    ) -> DataResult<()> {
        check_range(&range, self.points.len())?;
        check_len("points", points.len(), range.len())?;
        check_len("values", values.len(), range.len())?;
        let n = range.len();
        self.grid.set_rows_flat(range.start, &values[..n]);
        self.points.set_points(range, points)
    }
}

impl ScatteredPoints for ScatteredValueArray {
    fn point_list(&self) -> &PointList {
        &self.points
    }

    fn set_point(&mut self, index: usize, point: Point3) -> DataResult<()> {
        self.points.set_point(index, point)
    }

    fn set_points(&mut self, range: Range<usize>, points: &[Point3]) -> DataResult<()> {
        self.points.set_points(range, points)
    }

    fn set_axis_info(&mut self, axis: Axis, info: &AxisInfo) {
        self.points.set_axis_info(axis, info);
    }

    fn set_title(&mut self, title: &str) {
        self.points.set_title(title);
    }
}

impl ScatteredValues for ScatteredValueArray {
    fn value(&self, index: usize) -> DataResult<f64> {
        check_index(index, self.points.len())?;
        Ok(self.grid.get(index, 0))
    }

    fn values_in(&self, range: Range<usize>) -> DataResult<Vec<f64>> {
        check_range(&range, self.points.len())?;
        Ok(self.grid.as_slice()[range].to_vec())
    }

    fn values(&self) -> Vec<f64> {
        self.grid.as_slice().to_vec()
    }

    fn set_value(&mut self, index: usize, value: f64) -> DataResult<()> {
        check_index(index, self.points.len())?;
        self.grid.set(index, 0, value);
        Ok(())
    }

    fn set_values(&mut self, range: Range<usize>, values: &[f64]) -> DataResult<()> {
        check_range(&range, self.points.len())?;
        check_len("values", values.len(), range.len())?;
        self.grid.set_rows_flat(range.start, &values[..range.len()]);
        Ok(())
    }

    fn set_all_values(&mut self, value: f64) {
        self.grid.fill(value);
    }

    fn set_errors(&mut self, errors: &[f64]) -> bool {
        let exact = self.grid.set_errors_flat(errors);
        if !exact {
            log::warn!(
                "set_errors: got {} errors for {} points, copied what fits",
                errors.len(),
                self.points.len()
            );
        }
        exact
    }

    fn set_square_root_errors(&mut self, enabled: bool) {
        self.grid.set_square_root(enabled);
    }

    fn error_mode(&self) -> ErrorMode {
        self.grid.mode()
    }

    fn error_value(&self, index: usize) -> DataResult<f64> {
        check_index(index, self.points.len())?;
        Ok(self.grid.error(index, 0))
    }

    fn errors(&self) -> Vec<f64> {
        self.grid.errors_flat()
    }
}
