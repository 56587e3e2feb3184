//! Builds a [`TopologySnapshot`] from a [`DisplaySource`].

use serde::{Deserialize, Serialize};

use crate::display::{DisplayDevice, DisplayMode, MonitorGeometry};
use crate::enumerate;
use crate::error::{Error, Result};
use crate::geometry::MonitorPlacement;
use crate::source::DisplaySource;

/// One display attached to the desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// The top-level device (`\\.\DISPLAYn`).
    pub device: DisplayDevice,
    /// Monitors the OS reports behind this device.
    pub monitors: Vec<DisplayDevice>,
    /// Supported modes in OS order.
    pub modes: Vec<DisplayMode>,
    /// The mode in use when the snapshot was taken.
    pub current: DisplayMode,
    /// Rectangles of the monitor handle paired with this device.
    pub geometry: MonitorGeometry,
}

impl Display {
    /// Whether the current resolution and refresh rate appear among the
    /// supported modes. The OS normally guarantees this; a miss is only
    /// informational.
    pub fn current_is_listed(&self) -> bool {
        self.modes.iter().any(|m| {
            m.has_resolution(self.current.width, self.current.height)
                && m.frequency == self.current.frequency
        })
    }

    /// Friendly name of the first attached monitor, or the adapter
    /// description when none is reported.
    pub fn label(&self) -> &str {
        self.monitors
            .first()
            .map(|m| m.description.as_str())
            .unwrap_or(&self.device.description)
    }

    pub fn is_primary(&self) -> bool {
        self.device.state.is_primary() || self.geometry.is_primary()
    }
}

/// All displays attached to the desktop at one point in time.
///
/// Owned by the caller. Discovering again builds a new, independent
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    pub displays: Vec<Display>,
}

impl TopologySnapshot {
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Display> {
        self.displays.get(index).ok_or(Error::UnknownDisplay(index))
    }

    /// Current-mode placements, in display order, for layout normalization.
    pub fn placements(&self) -> Vec<MonitorPlacement> {
        self.displays
            .iter()
            .map(|d| MonitorPlacement::from(&d.current))
            .collect()
    }
}

/// How monitor handles were paired with device names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Correlation {
    /// Every handle reported its GDI device name.
    ByName,
    /// Handles and devices are assumed to come back in the same order.
    Positional,
}

/// Walks devices, modes and monitor handles into a snapshot.
///
/// Devices without the attached-to-desktop bit are left out entirely.
/// Any query failure aborts discovery; no partial snapshot is returned.
pub fn discover_topology(source: &impl DisplaySource) -> Result<TopologySnapshot> {
    let all = enumerate::devices(source)?;
    let total = all.len();
    let attached: Vec<DisplayDevice> = all.into_iter().filter(|d| d.state.is_attached()).collect();
    crate::log_debug!(
        "Enumerated {} display devices, {} attached",
        total,
        attached.len()
    );

    let geometries = enumerate::monitors(source)?;
    let geometries = correlate(&attached, geometries)?;

    let mut displays = Vec::with_capacity(attached.len());
    for (device, geometry) in attached.into_iter().zip(geometries) {
        let monitors = enumerate::attached_devices(source, &device.name)?;
        let modes = enumerate::supported_modes(source, &device.name)?;
        let current = enumerate::current_mode(source, &device.name)?;
        crate::log_debug!(
            "{}: {} modes, current {}x{} @ {} Hz",
            device.name,
            modes.len(),
            current.width,
            current.height,
            current.frequency
        );

        let display = Display {
            device,
            monitors,
            modes,
            current,
            geometry,
        };
        if !display.current_is_listed() {
            crate::log_warn!(
                "{}: current mode is not among its supported modes",
                display.device.name
            );
        }
        displays.push(display);
    }

    Ok(TopologySnapshot { displays })
}

/// Pairs each attached device with exactly one monitor geometry.
fn correlate(
    devices: &[DisplayDevice],
    mut geometries: Vec<MonitorGeometry>,
) -> Result<Vec<MonitorGeometry>> {
    let mismatch = |monitors: usize| Error::AlignmentMismatch {
        displays: devices.len(),
        monitors,
    };
    if geometries.len() != devices.len() {
        return Err(mismatch(geometries.len()));
    }

    let strategy = if geometries.iter().all(|g| g.device.is_some()) {
        Correlation::ByName
    } else {
        Correlation::Positional
    };
    crate::log_info!(
        "Pairing {} displays with monitor handles ({:?})",
        devices.len(),
        strategy
    );

    match strategy {
        Correlation::Positional => Ok(geometries),
        Correlation::ByName => {
            let total = geometries.len();
            let mut paired = Vec::with_capacity(total);
            for device in devices {
                let idx = geometries
                    .iter()
                    .position(|g| g.device.as_deref() == Some(device.name.as_str()))
                    .ok_or_else(|| mismatch(total))?;
                paired.push(geometries.swap_remove(idx));
            }
            Ok(paired)
        }
    }
}
