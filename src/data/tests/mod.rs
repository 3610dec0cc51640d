mod test_frame_array_basic;
mod test_physical_frame_array_basic;

/// Debug rendering of a container. Unset points and errors are NaN, so
/// "state unchanged" checks compare renderings instead of values.
fn snapshot<T: std::fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}
