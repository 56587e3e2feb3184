//! Converts virtual-desktop pixels into a bounded layout for drawing.
//!
//! Sizes and positions are divided by a density constant to get a rough
//! physical measure, normalized so the largest monitor dimension becomes
//! 1.0, then scaled uniformly to fit a bounding box. A single scale factor
//! (derived from the horizontal extent) keeps every monitor's aspect ratio
//! and relative position intact.

use serde::{Deserialize, Serialize};

use crate::display::DisplayMode;
use crate::error::{Error, Result};

/// Where normalized positions are measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// The virtual-desktop origin (the primary monitor's top-left corner).
    #[default]
    Virtual,
    /// The top-left corner of the arrangement's bounding box. Keeps monitors
    /// placed left of or above the primary inside the layout.
    BoundingBox,
}

/// One monitor's size and position in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorPlacement {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl MonitorPlacement {
    pub fn new(width: u32, height: u32, x: i32, y: i32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

impl From<&DisplayMode> for MonitorPlacement {
    fn from(mode: &DisplayMode) -> Self {
        Self::new(mode.width, mode.height, mode.position.x, mode.position.y)
    }
}

/// Parameters of the layout transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Pixels per inch used to turn pixels into a physical measure.
    pub density: f64,
    /// Bounding box width in layout units.
    pub box_width: f64,
    /// Bounding box height in layout units.
    pub box_height: f64,
    /// Fraction of the box width the arrangement spans (0.0–1.0].
    pub scale_fraction: f64,
    /// Top margin as a fraction of the box height.
    pub vertical_margin_fraction: f64,
    pub origin: Origin,
}

impl LayoutParams {
    pub fn new(density: f64, box_width: f64, box_height: f64, scale_fraction: f64) -> Self {
        Self {
            density,
            box_width,
            box_height,
            scale_fraction,
            vertical_margin_fraction: 0.125,
            origin: Origin::Virtual,
        }
    }
}

/// A monitor rectangle in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Result of [`normalize_layout`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// One rectangle per input monitor, same order.
    pub rects: Vec<LayoutRect>,
    /// Layout units per normalized unit.
    pub scale: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    /// Normalized right-most edge of the arrangement.
    pub extent_x: f64,
    /// Normalized bottom-most edge of the arrangement.
    pub extent_y: f64,
}

impl Layout {
    /// Height needed to show the arrangement with equal top and bottom
    /// margins.
    pub fn content_height(&self) -> f64 {
        self.margin_y * 2.0 + self.extent_y * self.scale
    }
}

/// Fits `monitors` into the bounding box described by `params`.
///
/// An empty input gives an empty layout. Fails when the density or a box
/// dimension is not finite and positive, when the scale fraction is outside
/// (0, 1], or when no monitor has a non-zero extent to scale by.
pub fn normalize_layout(monitors: &[MonitorPlacement], params: &LayoutParams) -> Result<Layout> {
    if monitors.is_empty() {
        return Ok(Layout::default());
    }
    check_params(params)?;

    let (min_x, min_y) = match params.origin {
        Origin::Virtual => (0, 0),
        Origin::BoundingBox => (
            monitors.iter().map(|m| m.x).min().unwrap_or(0),
            monitors.iter().map(|m| m.y).min().unwrap_or(0),
        ),
    };
    let (min_x, min_y) = (f64::from(min_x), f64::from(min_y));

    // Physical measure: pixels / density.
    let inches: Vec<[f64; 4]> = monitors
        .iter()
        .map(|m| {
            [
                f64::from(m.width) / params.density,
                f64::from(m.height) / params.density,
                (f64::from(m.x) - min_x) / params.density,
                (f64::from(m.y) - min_y) / params.density,
            ]
        })
        .collect();

    let largest = inches
        .iter()
        .flat_map(|&[w, h, _, _]| [w, h])
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return Err(Error::DegenerateLayout("all monitors have zero size".into()));
    }

    let normalized: Vec<[f64; 4]> = inches
        .iter()
        .map(|&dims| dims.map(|v| v / largest))
        .collect();

    let extent_x = normalized
        .iter()
        .map(|&[w, _, x, _]| w + x)
        .fold(0.0_f64, f64::max);
    let extent_y = normalized
        .iter()
        .map(|&[_, h, _, y]| h + y)
        .fold(0.0_f64, f64::max);
    if extent_x <= 0.0 {
        return Err(Error::DegenerateLayout(
            "arrangement has no horizontal extent".into(),
        ));
    }

    let scale = params.box_width * params.scale_fraction / extent_x;
    let margin_x = params.box_width * (1.0 - params.scale_fraction) / 2.0;
    let margin_y = params.box_height * params.vertical_margin_fraction;

    let rects = normalized
        .iter()
        .map(|&[w, h, x, y]| LayoutRect {
            x: margin_x + x * scale,
            y: margin_y + y * scale,
            width: w * scale,
            height: h * scale,
        })
        .collect();

    Ok(Layout {
        rects,
        scale,
        margin_x,
        margin_y,
        extent_x,
        extent_y,
    })
}

fn check_params(params: &LayoutParams) -> Result<()> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    let reject = |what: &str, value: f64| -> Result<()> {
        Err(Error::DegenerateLayout(format!(
            "{what} must be positive, got {value}"
        )))
    };
    if !positive(params.density) {
        return reject("density", params.density);
    }
    if !positive(params.box_width) {
        return reject("box width", params.box_width);
    }
    if !positive(params.box_height) {
        return reject("box height", params.box_height);
    }
    if !positive(params.scale_fraction) || params.scale_fraction > 1.0 {
        return Err(Error::DegenerateLayout(format!(
            "scale fraction must be in (0, 1], got {}",
            params.scale_fraction
        )));
    }
    Ok(())
}
