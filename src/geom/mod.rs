//! Coordinate primitives shared by the data containers.

mod core;

pub use core::{Axis, Bounds3, Point3, Tolerance, Vec3};
