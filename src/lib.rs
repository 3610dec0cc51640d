#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Fixed-size containers for scattered 3-D sample points.
//!
//! Every container holds a fixed number of points, each with a scalar value
//! (optionally varying over an ordered frame axis), an error estimate and, for
//! the physical containers, an oriented rectangular extent. Aggregate geometry
//! (minimum/maximum extents and edges) is folded in incrementally on each
//! mutation so renderers can read it without rescanning.

pub mod data;
pub mod geom;

pub use data::{
    AxisInfo, AxisScale, DataError, DataResult, ErrorKind, ErrorMode, Extent3, ExtentList,
    ExtentSource, FrameAxis, FrameValues, Orientation, PhysicalPointArray,
    PhysicalPointArrayByFrame, PointList, ScatteredPoints, ScatteredValueArray,
    ScatteredValueArrayByFrame, ScatteredValues,
};
pub use geom::{Axis, Bounds3, Point3, Tolerance, Vec3};

use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

/// Starts the rayon worker pool used by the `parallel` recalculation scans.
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), wasm_bindgen::JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| {
            wasm_bindgen::JsError::new(&format!("could not start rayon thread pool: {err}"))
        })
}
