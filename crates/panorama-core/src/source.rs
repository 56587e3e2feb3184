use crate::error::QueryResult;
use crate::native::{DevModeA, DisplayDeviceA, ENUM_CURRENT_SETTINGS, MonitorInfoExA};

/// Which mode `query_mode` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIndex {
    /// The n-th supported mode.
    Index(u32),
    /// The mode currently in use (`ENUM_CURRENT_SETTINGS`).
    Current,
}

impl ModeIndex {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Index(i) => i,
            Self::Current => ENUM_CURRENT_SETTINGS,
        }
    }
}

/// The native display subsystem, one query per call.
///
/// Each method fills `record` and returns `Ok(true)` when a record exists at
/// `index`, `Ok(false)` when enumeration is exhausted, and `Err` only for a
/// genuine failure. Callers always hand in a record whose size field has
/// been populated; an implementation that sees a wrong size must return
/// [`crate::QueryError::SizeMismatch`] instead of `Ok(false)`.
///
/// The Windows implementation lives in `panorama-windows`. Calls are
/// blocking and must not be issued concurrently.
pub trait DisplaySource {
    /// `EnumDisplayDevices`: top-level devices when `parent` is `None`,
    /// otherwise the monitors attached to `parent`.
    fn query_device(
        &self,
        parent: Option<&str>,
        index: u32,
        record: &mut DisplayDeviceA,
    ) -> QueryResult<bool>;

    /// `EnumDisplaySettings` for the named device.
    fn query_mode(&self, device: &str, index: ModeIndex, record: &mut DevModeA)
    -> QueryResult<bool>;

    /// The `index`-th monitor handle from `EnumDisplayMonitors`, described
    /// by `GetMonitorInfo`.
    fn query_monitor(&self, index: u32, record: &mut MonitorInfoExA) -> QueryResult<bool>;
}

impl<S: DisplaySource + ?Sized> DisplaySource for &S {
    fn query_device(
        &self,
        parent: Option<&str>,
        index: u32,
        record: &mut DisplayDeviceA,
    ) -> QueryResult<bool> {
        (**self).query_device(parent, index, record)
    }

    fn query_mode(
        &self,
        device: &str,
        index: ModeIndex,
        record: &mut DevModeA,
    ) -> QueryResult<bool> {
        (**self).query_mode(device, index, record)
    }

    fn query_monitor(&self, index: u32, record: &mut MonitorInfoExA) -> QueryResult<bool> {
        (**self).query_monitor(index, record)
    }
}
