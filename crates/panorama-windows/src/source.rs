use panorama_core::native::{DevModeA, DisplayDeviceA, MonitorInfoExA};
use panorama_core::{DisplaySource, ModeIndex, QueryResult};

use crate::{device, monitor};

/// The live Win32 display subsystem.
///
/// Queries are blocking and go straight to `user32`. Nothing is cached,
/// so every `discover_topology` call sees the current configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32DisplaySource;

impl DisplaySource for Win32DisplaySource {
    fn query_device(
        &self,
        parent: Option<&str>,
        index: u32,
        record: &mut DisplayDeviceA,
    ) -> QueryResult<bool> {
        device::query_device(parent, index, record)
    }

    fn query_mode(
        &self,
        device: &str,
        index: ModeIndex,
        record: &mut DevModeA,
    ) -> QueryResult<bool> {
        device::query_mode(device, index, record)
    }

    fn query_monitor(&self, index: u32, record: &mut MonitorInfoExA) -> QueryResult<bool> {
        monitor::query_monitor(index, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panorama_core::native::NativeRecord;
    use panorama_core::{QueryError, discover_topology};

    #[test]
    fn live_topology_has_a_primary_display() {
        let snapshot = discover_topology(&Win32DisplaySource).unwrap();

        if !snapshot.is_empty() {
            assert!(snapshot.displays.iter().any(|d| d.is_primary()));
        }
    }

    #[test]
    fn unprepared_record_is_rejected_before_the_call() {
        let mut record = DisplayDeviceA::default();

        let err = Win32DisplaySource
            .query_device(None, 0, &mut record)
            .unwrap_err();

        assert!(matches!(err, QueryError::SizeMismatch { found: 0, .. }));
    }

    #[test]
    fn name_with_interior_nul_is_invalid() {
        let mut record = DevModeA::prepared();

        let err = Win32DisplaySource
            .query_mode("bad\0name", ModeIndex::Current, &mut record)
            .unwrap_err();

        assert_eq!(err, QueryError::InvalidName("bad\0name".into()));
    }
}
