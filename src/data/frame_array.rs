use std::ops::Range;

use super::values::{ValueGrid, finite_range};
use super::{
    AxisInfo, DataResult, ErrorMode, FrameAxis, PointList, ScatteredPoints, check_frame,
    check_index, check_len, check_range,
};
use crate::geom::{Axis, Point3};

/// Per-frame value/error surface of a scattered point container.
///
/// Values form a `points x frames` matrix; "at point" accessors return one
/// row, "at frame" accessors one column.
pub trait FrameValues: ScatteredPoints {
    fn frame_axis(&self) -> &FrameAxis;

    fn num_frames(&self) -> usize {
        self.frame_axis().len()
    }

    fn value(&self, point: usize, frame: usize) -> DataResult<f64>;

    fn set_value(&mut self, point: usize, frame: usize, value: f64) -> DataResult<()>;

    fn values_at_point(&self, point: usize) -> DataResult<Vec<f64>>;

    fn values_at_frame(&self, frame: usize) -> DataResult<Vec<f64>>;

    /// Needs at least [`FrameValues::num_frames`] entries.
    fn set_values_at_point(&mut self, point: usize, values: &[f64]) -> DataResult<()>;

    /// Needs at least one entry per point.
    fn set_values_at_frame(&mut self, frame: usize, values: &[f64]) -> DataResult<()>;

    /// Copy of the whole matrix, one row per point.
    fn values(&self) -> Vec<Vec<f64>>;

    fn set_all_values(&mut self, value: f64);

    /// Row-wise best-effort copy of explicit errors, switching to
    /// [`ErrorMode::Explicit`].
    ///
    /// Missing rows and missing trailing entries of short rows read as NaN;
    /// surplus entries are ignored. Returns `true` only when exactly one row of
    /// exactly `num_frames` entries was given per point.
    fn set_errors(&mut self, errors: &[Vec<f64>]) -> bool;

    fn set_square_root_errors(&mut self, enabled: bool);

    fn error_mode(&self) -> ErrorMode;

    fn error_value(&self, point: usize, frame: usize) -> DataResult<f64>;

    fn errors_at_point(&self, point: usize) -> DataResult<Vec<f64>>;

    fn errors_at_frame(&self, frame: usize) -> DataResult<Vec<f64>>;

    fn errors(&self) -> Vec<Vec<f64>>;

    /// Smallest and largest non-NaN value of one frame.
    fn value_range_at_frame(&self, frame: usize) -> DataResult<Option<(f64, f64)>> {
        Ok(finite_range(self.values_at_frame(frame)?))
    }
}

/// Scattered points whose values and errors vary over a [`FrameAxis`].
#[derive(Debug, Clone)]
pub struct ScatteredValueArrayByFrame {
    points: PointList,
    frames: FrameAxis,
    grid: ValueGrid,
}

impl ScatteredValueArrayByFrame {
    #[must_use]
    pub fn new(count: usize, frames: FrameAxis) -> Self {
        let grid = ValueGrid::new(count, frames.len());
        Self {
            points: PointList::new(count),
            frames,
            grid,
        }
    }

    /// Set a point's position and every frame value; the point's explicit
    /// errors are cleared back to NaN.
    pub fn set(&mut self, index: usize, point: Point3, values: &[f64]) -> DataResult<()> {
        check_index(index, self.points.len())?;
        check_len("values", values.len(), self.frames.len())?;
        self.points.set_point(index, point)?;
        self.grid.set_row(index, values);
        self.grid.clear_error_row(index);
        Ok(())
    }

    /// Range form of [`ScatteredValueArrayByFrame::set`]; every row is checked
    /// before anything is written.
    pub fn set_range<V: AsRef<[f64]>>(
        &mut self,
        range: Range<usize>,
        points: &[Point3],
        values: &[V],
    ) -> DataResult<()> {
        check_range(&range, self.points.len())?;
        check_len("points", points.len(), range.len())?;
        check_len("value rows", values.len(), range.len())?;
        for row in &values[..range.len()] {
            check_len("values", row.as_ref().len(), self.frames.len())?;
        }
        for (index, row) in range.clone().zip(values) {
            self.grid.set_row(index, row.as_ref());
            self.grid.clear_error_row(index);
        }
        self.points.set_points(range, points)
    }
}

impl ScatteredPoints for ScatteredValueArrayByFrame {
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

impl FrameValues for ScatteredValueArrayByFrame {
    fn frame_axis(&self) -> &FrameAxis {
        &self.frames
    }

    fn value(&self, point: usize, frame: usize) -> DataResult<f64> {
        check_index(point, self.points.len())?;
        check_frame(frame, self.frames.len())?;
        Ok(self.grid.get(point, frame))
    }

    fn set_value(&mut self, point: usize, frame: usize, value: f64) -> DataResult<()> {
        check_index(point, self.points.len())?;
        check_frame(frame, self.frames.len())?;
        self.grid.set(point, frame, value);
        Ok(())
    }

    fn values_at_point(&self, point: usize) -> DataResult<Vec<f64>> {
        check_index(point, self.points.len())?;
        Ok(self.grid.row(point).to_vec())
    }

    fn values_at_frame(&self, frame: usize) -> DataResult<Vec<f64>> {
        check_frame(frame, self.frames.len())?;
        Ok(self.grid.column(frame))
    }

    fn set_values_at_point(&mut self, point: usize, values: &[f64]) -> DataResult<()> {
        check_index(point, self.points.len())?;
        check_len("values", values.len(), self.frames.len())?;
        self.grid.set_row(point, values);
        Ok(())
    }

    fn set_values_at_frame(&mut self, frame: usize, values: &[f64]) -> DataResult<()> {
        check_frame(frame, self.frames.len())?;
        check_len("values", values.len(), self.points.len())?;
        self.grid.set_column(frame, values);
        Ok(())
    }

    fn values(&self) -> Vec<Vec<f64>> {
        self.grid.rows_to_vecs()
    }

    fn set_all_values(&mut self, value: f64) {
        self.grid.fill(value);
    }

    fn set_errors(&mut self, errors: &[Vec<f64>]) -> bool {
        let exact = self.grid.set_errors_rows(errors);
        if !exact {
            log::warn!(
                "set_errors: error rows do not match {} points x {} frames, copied what fits",
                self.points.len(),
                self.frames.len()
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

    fn error_value(&self, point: usize, frame: usize) -> DataResult<f64> {
        check_index(point, self.points.len())?;
        check_frame(frame, self.frames.len())?;
        Ok(self.grid.error(point, frame))
    }

    fn errors_at_point(&self, point: usize) -> DataResult<Vec<f64>> {
        check_index(point, self.points.len())?;
        Ok(self.grid.error_row(point))
    }

    fn errors_at_frame(&self, frame: usize) -> DataResult<Vec<f64>> {
        check_frame(frame, self.frames.len())?;
        Ok(self.grid.error_column(frame))
    }

    fn errors(&self) -> Vec<Vec<f64>> {
        self.grid.errors_to_vecs()
    }
}
