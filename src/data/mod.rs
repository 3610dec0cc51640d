//! Fixed-size containers for scattered sample points.
//!
//! Storage types ([`PointList`], [`ExtentList`]) hold one concern each. The
//! value containers own a [`PointList`] by value and the physical containers
//! own a value container plus an [`ExtentList`]; shared behaviour is exposed
//! through the capability traits [`ScatteredPoints`], [`ScatteredValues`],
//! [`FrameValues`] and [`ExtentSource`].
//!
//! Every getter returns an owned copy. Validation always happens before any
//! storage is touched, so a rejected call leaves the container unchanged. The
//! one deliberate exception is `set_errors`, which copies what fits and
//! reports through its return value whether the input matched exactly.

use std::ops::Range;

use thiserror::Error;

mod axis;
mod edges;
mod extent_list;
mod frame_array;
mod frame_axis;
mod physical_array;
mod physical_frame_array;
mod point_list;
mod value_array;
mod values;

pub use axis::{AxisInfo, AxisScale};
pub use extent_list::{Extent3, ExtentList, ExtentSource, Orientation};
pub use frame_array::{FrameValues, ScatteredValueArrayByFrame};
pub use frame_axis::FrameAxis;
pub use physical_array::PhysicalPointArray;
pub use physical_frame_array::PhysicalPointArrayByFrame;
pub use point_list::{PointList, ScatteredPoints};
pub use value_array::{ScatteredValueArray, ScatteredValues};
pub use values::ErrorMode;

/// Result type for container operations.
pub type DataResult<T> = Result<T, DataError>;

/// The two categories a rejected call falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or range lies outside the container.
    OutOfRange,
    /// Supplied data cannot be stored as given.
    InvalidArgument,
}

/// Describes why a container rejected a call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A point index is not in `[0, count)`.
    #[error("point index {index} out of range for {count} points")]
    PointIndex { index: usize, count: usize },
    /// A frame index is not in `[0, count)`.
    #[error("frame index {index} out of range for {count} frames")]
    FrameIndex { index: usize, count: usize },
    /// A point range is inverted or reaches past the end.
    #[error("range {start}..{end} out of bounds for {count} points")]
    Range {
        start: usize,
        end: usize,
        count: usize,
    },
    /// An input slice holds fewer entries than the call needs.
    #[error("{what} holds {got} entries, {needed} required")]
    TooShort {
        what: &'static str,
        needed: usize,
        got: usize,
    },
    /// An extent has a negative half-width.
    #[error("extent at index {index} has a negative half-width: {extent:?}")]
    NegativeExtent { index: usize, extent: Extent3 },
    /// Frame coordinates are not finite and strictly ascending.
    #[error("invalid frame axis: {0}")]
    FrameAxis(String),
}

impl DataError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PointIndex { .. } | Self::FrameIndex { .. } | Self::Range { .. } => {
                ErrorKind::OutOfRange
            }
            Self::TooShort { .. } | Self::NegativeExtent { .. } | Self::FrameAxis(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

pub(crate) fn check_index(index: usize, count: usize) -> DataResult<()> {
    if index < count {
        Ok(())
    } else {
        Err(DataError::PointIndex { index, count })
    }
}

pub(crate) fn check_frame(index: usize, count: usize) -> DataResult<()> {
    if index < count {
        Ok(())
    } else {
        Err(DataError::FrameIndex { index, count })
    }
}

pub(crate) fn check_range(range: &Range<usize>, count: usize) -> DataResult<()> {
    if range.start <= range.end && range.end <= count {
        Ok(())
    } else {
        Err(DataError::Range {
            start: range.start,
            end: range.end,
            count,
        })
    }
}

pub(crate) fn check_len(what: &'static str, got: usize, needed: usize) -> DataResult<()> {
    if got >= needed {
        Ok(())
    } else {
        Err(DataError::TooShort { what, needed, got })
    }
}

#[cfg(test)]
mod tests;
