use panorama_core::native::{DevModeA, DisplayDeviceA, MonitorInfoExA};
use panorama_core::{DisplaySource, ModeIndex, QueryError, QueryResult};

/// Stand-in for the Win32 source on platforms without `user32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32DisplaySource;

impl DisplaySource for Win32DisplaySource {
    fn query_device(
        &self,
        _parent: Option<&str>,
        _index: u32,
        _record: &mut DisplayDeviceA,
    ) -> QueryResult<bool> {
        Err(QueryError::Unsupported)
    }

    fn query_mode(
        &self,
        _device: &str,
        _index: ModeIndex,
        _record: &mut DevModeA,
    ) -> QueryResult<bool> {
        Err(QueryError::Unsupported)
    }

    fn query_monitor(&self, _index: u32, _record: &mut MonitorInfoExA) -> QueryResult<bool> {
        Err(QueryError::Unsupported)
    }
}

pub fn enable_dpi_awareness() {}
