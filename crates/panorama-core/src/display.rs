//! Semantic view of the native display records.
//!
//! These types carry only the fields that mean something for a display
//! device. Legacy printer fields and reserved padding stay in
//! [`crate::native`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::native::{
    self, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISPLAY_DEVICE_PRIMARY_DEVICE, DevModeA, DisplayDeviceA, MONITORINFOF_PRIMARY,
    MonitorInfoExA, PointL,
};
use crate::rect::Rect;

/// `StateFlags` of a display device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateFlags(pub u32);

impl StateFlags {
    /// Whether the device is part of the active virtual desktop.
    pub fn is_attached(self) -> bool {
        self.0 & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0
    }

    pub fn is_primary(self) -> bool {
        self.0 & DISPLAY_DEVICE_PRIMARY_DEVICE != 0
    }
}

/// An adapter or monitor descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDevice {
    /// GDI device name, e.g. `\\.\DISPLAY1`. Identity of the device.
    pub name: String,
    /// Human-readable description, e.g. the adapter model.
    pub description: String,
    pub state: StateFlags,
    pub id: String,
    pub key: String,
}

impl From<&DisplayDeviceA> for DisplayDevice {
    fn from(raw: &DisplayDeviceA) -> Self {
        Self {
            name: native::decode_ansi(&raw.device_name),
            description: native::decode_ansi(&raw.device_string),
            state: StateFlags(raw.state_flags),
            id: native::decode_ansi(&raw.device_id),
            key: native::decode_ansi(&raw.device_key),
        }
    }
}

/// Display rotation, encoded 0..=3 by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// `DMDO_DEFAULT`.
    #[default]
    Landscape,
    /// `DMDO_90`.
    Portrait,
    /// `DMDO_180`.
    LandscapeFlipped,
    /// `DMDO_270`.
    PortraitFlipped,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Self::Landscape,
        Self::Portrait,
        Self::LandscapeFlipped,
        Self::PortraitFlipped,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Landscape),
            1 => Some(Self::Portrait),
            2 => Some(Self::LandscapeFlipped),
            3 => Some(Self::PortraitFlipped),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u32 {
        match self {
            Self::Landscape => 0,
            Self::Portrait => 1,
            Self::LandscapeFlipped => 2,
            Self::PortraitFlipped => 3,
        }
    }

    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> u32 {
        self.as_raw() * 90
    }

    /// Parses `landscape`, `portrait`, `landscape-flipped`,
    /// `portrait-flipped` or a degree value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" | "0" => Some(Self::Landscape),
            "portrait" | "90" => Some(Self::Portrait),
            "landscape-flipped" | "180" => Some(Self::LandscapeFlipped),
            "portrait-flipped" | "270" => Some(Self::PortraitFlipped),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::LandscapeFlipped => "landscape-flipped",
            Self::PortraitFlipped => "portrait-flipped",
        };
        f.write_str(name)
    }
}

/// A position in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// One display configuration: resolution, refresh rate, orientation and
/// desktop position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    /// `dmFields` bitmask of the fields the driver filled in.
    pub fields: u32,
    pub position: Point,
    pub orientation: Orientation,
    pub fixed_output: u32,
    pub bits_per_pixel: u32,
    pub width: u32,
    pub height: u32,
    pub display_flags: u32,
    /// Refresh rate in hertz.
    pub frequency: u32,
}

impl DisplayMode {
    /// Whether this mode has the given resolution.
    pub fn has_resolution(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Writes the semantic fields onto a native record, leaving legacy and
    /// reserved bytes untouched.
    pub fn write_to(&self, raw: &mut DevModeA) {
        raw.fields = self.fields;
        raw.placement.position = PointL {
            x: self.position.x,
            y: self.position.y,
        };
        raw.placement.orientation = self.orientation.as_raw();
        raw.placement.fixed_output = self.fixed_output;
        raw.bits_per_pel = self.bits_per_pixel;
        raw.pels_width = self.width;
        raw.pels_height = self.height;
        raw.display_flags = self.display_flags;
        raw.display_frequency = self.frequency;
    }
}

impl From<&DevModeA> for DisplayMode {
    fn from(raw: &DevModeA) -> Self {
        let placement = raw.placement;
        Self {
            fields: raw.fields,
            position: Point {
                x: placement.position.x,
                y: placement.position.y,
            },
            orientation: Orientation::from_raw(placement.orientation).unwrap_or_default(),
            fixed_output: placement.fixed_output,
            bits_per_pixel: raw.bits_per_pel,
            width: raw.pels_width,
            height: raw.pels_height,
            display_flags: raw.display_flags,
            frequency: raw.display_frequency,
        }
    }
}

/// A monitor handle's rectangles in the virtual desktop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorGeometry {
    /// Full monitor rectangle.
    pub monitor: Rect,
    /// Work area: the monitor rectangle minus taskbar and docked toolbars.
    pub work_area: Rect,
    pub flags: u32,
    /// GDI device name the handle belongs to, when the OS reported one.
    pub device: Option<String>,
}

impl MonitorGeometry {
    pub fn is_primary(&self) -> bool {
        self.flags & MONITORINFOF_PRIMARY != 0
    }
}

impl From<&MonitorInfoExA> for MonitorGeometry {
    fn from(raw: &MonitorInfoExA) -> Self {
        let device = native::decode_ansi(&raw.device);
        Self {
            monitor: raw.info.monitor.into(),
            work_area: raw.info.work.into(),
            flags: raw.info.flags,
            device: (!device.is_empty()).then_some(device),
        }
    }
}
