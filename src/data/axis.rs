/// Whether an axis is displayed on a linear or logarithmic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

/// Display metadata for one coordinate axis.
///
/// Containers store these verbatim; no relation between `min`/`max` and the
/// stored points is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisInfo {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub units: String,
    pub scale: AxisScale,
}

impl AxisInfo {
    #[must_use]
    pub fn new(label: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            units: units.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn is_log(&self) -> bool {
        self.scale == AxisScale::Log
    }
}

impl Default for AxisInfo {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            label: String::new(),
            units: String::new(),
            scale: AxisScale::Linear,
        }
    }
}
