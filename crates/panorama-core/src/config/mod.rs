mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::geometry::{LayoutParams, Origin};
use crate::log::LogConfig;
use crate::modes::FrequencyOrder;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Panorama.
///
/// Loaded from `~/.config/panorama/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout preview parameters.
    pub layout: LayoutConfig,
    /// Mode list presentation.
    pub modes: ModeConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Layout normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per inch used to convert resolutions into physical size.
    /// Commonly 96 (Windows logical DPI) or 88.
    pub density: f64,
    /// Width of the preview area.
    pub box_width: f64,
    /// Height of the preview area.
    pub box_height: f64,
    /// Fraction of the preview width the monitors span (0.05–1.0).
    pub scale_fraction: f64,
    /// Top margin as a fraction of the preview height (0.0–0.5).
    pub vertical_margin_fraction: f64,
    /// Measure positions from the virtual-desktop origin or from the
    /// arrangement's own top-left corner.
    pub origin: Origin,
}

/// Mode list settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// "lexicographic" sorts refresh rates as text ("144" before "60"),
    /// "numeric" sorts them by value.
    pub frequency_order: FrequencyOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            density: 96.0,
            box_width: 400.0,
            box_height: 100.0,
            scale_fraction: 0.3,
            vertical_margin_fraction: 0.125,
            origin: Origin::Virtual,
        }
    }
}

impl LayoutConfig {
    /// Layout parameters for [`crate::geometry::normalize_layout`].
    pub fn params(&self) -> LayoutParams {
        LayoutParams {
            density: self.density,
            box_width: self.box_width,
            box_height: self.box_height,
            scale_fraction: self.scale_fraction,
            vertical_margin_fraction: self.vertical_margin_fraction,
            origin: self.origin,
        }
    }
}

impl Config {
    /// Clamps layout values to ranges that produce a drawable layout.
    ///
    /// Non-finite values are replaced with their defaults.
    pub fn validate(&mut self) {
        let defaults = LayoutConfig::default();
        let layout = &mut self.layout;
        layout.density = finite_or(layout.density, defaults.density).clamp(1.0, 1000.0);
        layout.box_width = finite_or(layout.box_width, defaults.box_width).max(1.0);
        layout.box_height = finite_or(layout.box_height, defaults.box_height).max(1.0);
        layout.scale_fraction =
            finite_or(layout.scale_fraction, defaults.scale_fraction).clamp(0.05, 1.0);
        layout.vertical_margin_fraction =
            finite_or(layout.vertical_margin_fraction, defaults.vertical_margin_fraction)
                .clamp(0.0, 0.5);
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests;
