//! Win32 backend for panorama-core's `DisplaySource`.
//!
//! On other platforms the same names exist but every query fails with
//! `QueryError::Unsupported`, so callers compile unchanged.

/// Process DPI awareness.
#[cfg(windows)]
mod dpi;

/// `EnumDisplayDevicesA` and `EnumDisplaySettingsA`.
#[cfg(windows)]
mod device;

/// `EnumDisplayMonitors` and `GetMonitorInfoA`.
#[cfg(windows)]
mod monitor;

/// The `DisplaySource` implementation.
#[cfg(windows)]
mod source;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use dpi::enable_dpi_awareness;
#[cfg(windows)]
pub use source::Win32DisplaySource;

#[cfg(not(windows))]
pub use unsupported::{Win32DisplaySource, enable_dpi_awareness};
