use super::{DataError, DataResult, check_frame};

/// Ordered frame coordinates (time steps, energy bins, ...) shared by every
/// point of a by-frame container. Coordinates are finite and strictly
/// ascending; the frame count is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAxis {
    coords: Vec<f64>,
}

impl FrameAxis {
    pub fn new(coords: impl Into<Vec<f64>>) -> DataResult<Self> {
        let coords = coords.into();
        if let Some(pos) = coords.iter().position(|c| !c.is_finite()) {
            return Err(DataError::FrameAxis(format!(
                "coordinate {pos} is not finite ({})",
                coords[pos]
            )));
        }
        if let Some(pos) = coords.windows(2).position(|w| w[0] >= w[1]) {
            return Err(DataError::FrameAxis(format!(
                "coordinates must be strictly ascending, found {} then {} at frame {}",
                coords[pos],
                coords[pos + 1],
                pos + 1
            )));
        }
        Ok(Self { coords })
    }

    /// `count` frames at `0, 1, ..., count - 1`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn indexed(count: usize) -> Self {
        Self {
            coords: (0..count).map(|i| i as f64).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coordinate(&self, frame: usize) -> DataResult<f64> {
        check_frame(frame, self.len())?;
        Ok(self.coords[frame])
    }

    #[must_use]
    pub fn coordinates(&self) -> Vec<f64> {
        self.coords.clone()
    }

    /// Index of the frame whose coordinate is closest to `coord`. Ties go to
    /// the lower frame; `None` for an empty axis or a NaN query.
    #[must_use]
    pub fn nearest_frame(&self, coord: f64) -> Option<usize> {
        if self.coords.is_empty() || coord.is_nan() {
            return None;
        }
        let upper = self.coords.partition_point(|&c| c < coord);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.coords.len() {
            return Some(upper - 1);
        }
        let below = coord - self.coords[upper - 1];
        let above = self.coords[upper] - coord;
        Some(if above < below { upper } else { upper - 1 })
    }
}
