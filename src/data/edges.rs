//! Grow-only aggregate of the outer edges of point + extent volumes.
//!
//! A sample at `p` with half-widths `e` contributes the cube
//! `p ± max(e.x, e.y, e.z) / 2` on all three axes; orientation is ignored.
//! Samples whose position is still unset contribute nothing.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Extent3;
use crate::geom::{Bounds3, Point3, Vec3};

/// Edge span `(lo, hi)` of one sample, `None` for an unset position.
pub(crate) fn edge_span(point: Point3, extent: Extent3) -> Option<(Vec3, Vec3)> {
    if point.is_unset() {
        return None;
    }
    let offset = Vec3::splat(extent.max_half_width() * 0.5);
    let p = point.to_vec3();
    Some((p - offset, p + offset))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeBounds {
    bounds: Bounds3,
}

impl EdgeBounds {
    pub(crate) const fn new() -> Self {
        Self {
            bounds: Bounds3::UNBOUNDED,
        }
    }

    pub(crate) const fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    pub(crate) fn include(&mut self, point: Point3, extent: Extent3) {
        if let Some((lo, hi)) = edge_span(point, extent) {
            self.bounds.include_span(lo, hi);
        }
    }

    /// Fold paired slices of positions and extents.
    pub(crate) fn include_all(&mut self, points: &[Point3], extents: &[Extent3]) {
        for (&p, &e) in points.iter().zip(extents) {
            self.include(p, e);
        }
    }

    /// Reset and fold every sample again; the only way edges shrink.
    pub(crate) fn recalc(&mut self, points: &[Point3], extents: &[Extent3]) {
        self.bounds = fold_edges(points, extents);
        log::debug!(
            "recalculated edge bounds over {} samples: min {:?}, max {:?}",
            points.len(),
            self.bounds.min,
            self.bounds.max
        );
    }
}

fn fold_one(mut acc: Bounds3, (point, extent): (&Point3, &Extent3)) -> Bounds3 {
    if let Some((lo, hi)) = edge_span(*point, *extent) {
        acc.include_span(lo, hi);
    }
    acc
}

#[cfg(feature = "parallel")]
fn fold_edges(points: &[Point3], extents: &[Extent3]) -> Bounds3 {
    points
        .par_iter()
        .zip(extents.par_iter())
        .fold(|| Bounds3::UNBOUNDED, fold_one)
        .reduce(|| Bounds3::UNBOUNDED, Bounds3::union)
}

#[cfg(not(feature = "parallel"))]
fn fold_edges(points: &[Point3], extents: &[Extent3]) -> Bounds3 {
    points.iter().zip(extents).fold(Bounds3::UNBOUNDED, fold_one)
}
