use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{DataError, DataResult, check_index, check_len, check_range};
use crate::geom::{Bounds3, Vec3};

// ─────────────────────────────────────────────────────────────────────────────
// Extent3 / Orientation
// ─────────────────────────────────────────────────────────────────────────────

/// Half-widths of a rectangular volume centred on a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Extent3 {
    /// A degenerate extent without volume.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn is_non_negative(self) -> bool {
        !(self.x < 0.0 || self.y < 0.0 || self.z < 0.0)
    }

    /// Largest of the three half-widths.
    #[must_use]
    pub fn max_half_width(self) -> f64 {
        self.to_vec3().max_component()
    }
}

impl From<[f64; 3]> for Extent3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Local x/y axis directions of an extent. The local z axis is their cross
/// product and is never stored. Axes are kept exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
}

impl Orientation {
    /// Aligned with the global axes.
    pub const GLOBAL: Self = Self::new(Vec3::X, Vec3::Y);

    #[must_use]
    pub const fn new(x_axis: Vec3, y_axis: Vec3) -> Self {
        Self { x_axis, y_axis }
    }

    #[must_use]
    pub const fn z_axis(self) -> Vec3 {
        self.x_axis.cross(self.y_axis)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::GLOBAL
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExtentList
// ─────────────────────────────────────────────────────────────────────────────

/// Per-point oriented extents with a grow-only min/max aggregate.
///
/// [`ExtentList::set_extents`] folds each new extent into the aggregate.
/// Overwriting a large extent with a smaller one leaves the aggregate where
/// it was until [`ExtentList::recalc_max_min_extents`] rescans every entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentList {
    extents: Vec<Extent3>,
    orientations: Vec<Orientation>,
    bounds: Bounds3,
}

impl ExtentList {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            extents: vec![Extent3::ZERO; count],
            orientations: vec![Orientation::GLOBAL; count],
            bounds: Bounds3::NON_NEGATIVE,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn extent(&self, index: usize) -> DataResult<Extent3> {
        check_index(index, self.len())?;
        Ok(self.extents[index])
    }

    pub fn extents_in(&self, range: Range<usize>) -> DataResult<Vec<Extent3>> {
        check_range(&range, self.len())?;
        Ok(self.extents[range].to_vec())
    }

    #[must_use]
    pub fn extents(&self) -> Vec<Extent3> {
        self.extents.clone()
    }

    pub fn set_extents(&mut self, index: usize, extent: Extent3) -> DataResult<()> {
        check_index(index, self.len())?;
        if !extent.is_non_negative() {
            return Err(DataError::NegativeExtent { index, extent });
        }
        self.extents[index] = extent;
        self.bounds.include(extent.to_vec3());
        Ok(())
    }

    /// Set extents over `range`. The whole batch is validated first.
    pub fn set_extents_range(
        &mut self,
        range: Range<usize>,
        extents: &[Extent3],
    ) -> DataResult<()> {
        check_range(&range, self.len())?;
        check_len("extents", extents.len(), range.len())?;
        let batch = &extents[..range.len()];
        if let Some(pos) = batch.iter().position(|e| !e.is_non_negative()) {
            return Err(DataError::NegativeExtent {
                index: range.start + pos,
                extent: batch[pos],
            });
        }
        for extent in batch {
            self.bounds.include(extent.to_vec3());
        }
        self.extents[range].copy_from_slice(batch);
        Ok(())
    }

    pub fn orientation(&self, index: usize) -> DataResult<Orientation> {
        check_index(index, self.len())?;
        Ok(self.orientations[index])
    }

    pub fn orientations_in(&self, range: Range<usize>) -> DataResult<Vec<Orientation>> {
        check_range(&range, self.len())?;
        Ok(self.orientations[range].to_vec())
    }

    #[must_use]
    pub fn orientations(&self) -> Vec<Orientation> {
        self.orientations.clone()
    }

    pub fn set_orientation(&mut self, index: usize, x_axis: Vec3, y_axis: Vec3) -> DataResult<()> {
        check_index(index, self.len())?;
        self.orientations[index] = Orientation::new(x_axis, y_axis);
        Ok(())
    }

    pub fn set_orientations(
        &mut self,
        range: Range<usize>,
        orientations: &[Orientation],
    ) -> DataResult<()> {
        check_range(&range, self.len())?;
        check_len("orientations", orientations.len(), range.len())?;
        let n = range.len();
        self.orientations[range].copy_from_slice(&orientations[..n]);
        Ok(())
    }

    /// Component-wise minimum over every extent folded in so far
    /// (`+inf` before the first one).
    #[must_use]
    pub fn min_extents(&self) -> Vec3 {
        self.bounds.min
    }

    /// Component-wise maximum over every extent folded in so far
    /// (`0` before the first one).
    #[must_use]
    pub fn max_extents(&self) -> Vec3 {
        self.bounds.max
    }

    #[must_use]
    pub fn extent_bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Rebuild the aggregate from the stored extents.
    pub fn recalc_max_min_extents(&mut self) {
        self.bounds = fold_extents(&self.extents);
        log::debug!(
            "recalculated extent bounds over {} entries: min {:?}, max {:?}",
            self.extents.len(),
            self.bounds.min,
            self.bounds.max
        );
    }

    pub(crate) fn as_slice(&self) -> &[Extent3] {
        &self.extents
    }
}

#[cfg(feature = "parallel")]
fn fold_extents(extents: &[Extent3]) -> Bounds3 {
    extents
        .par_iter()
        .fold(
            || Bounds3::NON_NEGATIVE,
            |mut acc, e| {
                acc.include(e.to_vec3());
                acc
            },
        )
        .reduce(|| Bounds3::NON_NEGATIVE, Bounds3::union)
}

#[cfg(not(feature = "parallel"))]
fn fold_extents(extents: &[Extent3]) -> Bounds3 {
    extents.iter().fold(Bounds3::NON_NEGATIVE, |mut acc, e| {
        acc.include(e.to_vec3());
        acc
    })
}

/// Extent/orientation surface shared by containers that carry an
/// [`ExtentList`]. Reads are provided through [`ExtentSource::extent_list`].
pub trait ExtentSource {
    /// Borrow the underlying extent storage.
    fn extent_list(&self) -> &ExtentList;

    fn set_extents(&mut self, index: usize, extent: Extent3) -> DataResult<()>;

    fn set_extents_range(&mut self, range: Range<usize>, extents: &[Extent3]) -> DataResult<()>;

    fn set_orientation(&mut self, index: usize, x_axis: Vec3, y_axis: Vec3) -> DataResult<()>;

    fn set_orientations(
        &mut self,
        range: Range<usize>,
        orientations: &[Orientation],
    ) -> DataResult<()>;

    fn recalc_max_min_extents(&mut self);

    fn extent(&self, index: usize) -> DataResult<Extent3> {
        self.extent_list().extent(index)
    }

    fn extents_in(&self, range: Range<usize>) -> DataResult<Vec<Extent3>> {
        self.extent_list().extents_in(range)
    }

    fn extents(&self) -> Vec<Extent3> {
        self.extent_list().extents()
    }

    fn orientation(&self, index: usize) -> DataResult<Orientation> {
        self.extent_list().orientation(index)
    }

    fn orientations_in(&self, range: Range<usize>) -> DataResult<Vec<Orientation>> {
        self.extent_list().orientations_in(range)
    }

    fn orientations(&self) -> Vec<Orientation> {
        self.extent_list().orientations()
    }

    fn min_extents(&self) -> Vec3 {
        self.extent_list().min_extents()
    }

    fn max_extents(&self) -> Vec3 {
        self.extent_list().max_extents()
    }
}

impl ExtentSource for ExtentList {
    fn extent_list(&self) -> &ExtentList {
        self
    }

    fn set_extents(&mut self, index: usize, extent: Extent3) -> DataResult<()> {
        ExtentList::set_extents(self, index, extent)
    }

    fn set_extents_range(&mut self, range: Range<usize>, extents: &[Extent3]) -> DataResult<()> {
        ExtentList::set_extents_range(self, range, extents)
    }

    fn set_orientation(&mut self, index: usize, x_axis: Vec3, y_axis: Vec3) -> DataResult<()> {
        ExtentList::set_orientation(self, index, x_axis, y_axis)
    }

    fn set_orientations(
        &mut self,
        range: Range<usize>,
        orientations: &[Orientation],
    ) -> DataResult<()> {
        ExtentList::set_orientations(self, range, orientations)
    }

    fn recalc_max_min_extents(&mut self) {
        ExtentList::recalc_max_min_extents(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_degenerate_and_global() {
        let list = ExtentList::new(2);
        assert_eq!(list.extent(1), Ok(Extent3::ZERO));
        assert_eq!(list.orientation(0), Ok(Orientation::GLOBAL));
        assert_eq!(list.min_extents(), Vec3::splat(f64::INFINITY));
        assert_eq!(list.max_extents(), Vec3::ZERO);
        assert!(list.extent_bounds().is_empty());
    }

    #[test]
    fn orientation_z_axis_is_cross_product() {
        let o = Orientation::new(Vec3::Y, Vec3::Z);
        assert_eq!(o.z_axis(), Vec3::X);
        assert_eq!(Orientation::GLOBAL.z_axis(), Vec3::Z);
    }

    #[test]
    fn orientations_are_stored_verbatim() {
        let mut list = ExtentList::new(1);
        let x = Vec3::new(3.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 0.0, -2.0);
        list.set_orientation(0, x, y).expect("in range");
        let o = list.orientation(0).expect("in range");
        assert_eq!(o.x_axis, x);
        assert_eq!(o.y_axis, y);
        assert_eq!(list.max_extents(), Vec3::ZERO);
    }

    #[test]
    fn negative_extent_in_batch_rejects_whole_batch() {
        let mut list = ExtentList::new(3);
        let err = list
            .set_extents_range(
                0..3,
                &[
                    Extent3::new(1.0, 1.0, 1.0),
                    Extent3::new(2.0, 2.0, 2.0),
                    Extent3::new(0.0, -0.5, 0.0),
                ],
            )
            .unwrap_err();
        assert_eq!(
            err,
            DataError::NegativeExtent {
                index: 2,
                extent: Extent3::new(0.0, -0.5, 0.0)
            }
        );
        assert_eq!(list.extents(), vec![Extent3::ZERO; 3]);
        assert!(list.extent_bounds().is_empty());
    }

    #[test]
    fn recalc_on_empty_list_resets_to_sentinel() {
        let mut list = ExtentList::new(0);
        list.recalc_max_min_extents();
        assert!(list.extent_bounds().is_empty());
        assert_eq!(list.max_extents(), Vec3::ZERO);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_rescan_matches_sequential_fold() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(5);
        let extents: Vec<Extent3> = (0..4096)
            .map(|_| {
                Extent3::new(
                    rng.random_range(0.0..10.0),
                    rng.random_range(0.0..10.0),
                    rng.random_range(0.0..10.0),
                )
            })
            .collect();
        let sequential = extents.iter().fold(Bounds3::NON_NEGATIVE, |mut acc, e| {
            acc.include(e.to_vec3());
            acc
        });
        assert_eq!(fold_extents(&extents), sequential);
    }
}
