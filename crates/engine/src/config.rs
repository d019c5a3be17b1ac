//! Engine-wide layout settings.
//!
//! A [`LayoutConfig`] is owned by each [`crate::LayoutTree`]. It can be built in code, read
//! from JSON, or overridden from the environment.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use layout_values::defaults;
use serde::{Deserialize, Serialize};

/// Settings shared by every node of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Final geometry is snapped to multiples of `1 / point_scale_factor`. `0` disables snapping.
    pub point_scale_factor: f32,
    /// Upper bound on freeze passes when resolving flexible lengths on one line.
    pub flex_iteration_cap: usize,
    /// Styles created through [`crate::LayoutStyle::for_config`] use web defaults
    /// (`flex-direction: row`, `align-content: stretch`).
    pub use_web_defaults: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            point_scale_factor: defaults::POINT_SCALE_FACTOR,
            flex_iteration_cap: defaults::FLEX_ITERATION_CAP,
            use_web_defaults: false,
        }
    }
}

impl LayoutConfig {
    /// Negative or NaN factors are stored as `0` (snapping disabled).
    #[must_use]
    pub fn with_point_scale_factor(mut self, factor: f32) -> Self {
        self.point_scale_factor = if factor.is_nan() { 0.0 } else { factor.max(0.0) };
        self
    }

    /// A cap of `0` is raised to `1` so at least one distribution pass runs.
    #[must_use]
    pub fn with_flex_iteration_cap(mut self, cap: usize) -> Self {
        self.flex_iteration_cap = cap.max(1);
        self
    }

    #[must_use]
    pub const fn with_web_defaults(mut self, enabled: bool) -> Self {
        self.use_web_defaults = enabled;
        self
    }

    /// Parse a config from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error when `json` is not a valid config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(json).context("failed to parse layout config")?;
        Ok(parsed.normalized())
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Defaults overridden by environment variables.
    ///
    /// Reads:
    /// - `LAYOUT_POINT_SCALE_FACTOR`: snapping grid (default 64, `0` disables)
    /// - `LAYOUT_FLEX_ITERATION_CAP`: freeze pass cap (default 128)
    /// - `LAYOUT_WEB_DEFAULTS`: set to "1" for web style defaults
    pub fn from_env() -> Self {
        let base = Self::default();
        let point_scale_factor = env::var("LAYOUT_POINT_SCALE_FACTOR")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .unwrap_or(base.point_scale_factor);
        let flex_iteration_cap = env::var("LAYOUT_FLEX_ITERATION_CAP")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(base.flex_iteration_cap);
        let use_web_defaults = env::var("LAYOUT_WEB_DEFAULTS").is_ok_and(|val| val == "1");
        base.with_point_scale_factor(point_scale_factor)
            .with_flex_iteration_cap(flex_iteration_cap)
            .with_web_defaults(use_web_defaults)
    }

    fn normalized(self) -> Self {
        let Self {
            point_scale_factor,
            flex_iteration_cap,
            ..
        } = self;
        self.with_point_scale_factor(point_scale_factor)
            .with_flex_iteration_cap(flex_iteration_cap)
    }
}
