//! Index-until-failure enumeration over a [`DisplaySource`].
//!
//! Every enumeration queries index 0, 1, 2, ... and stops at the first
//! query that reports no record. The record written by that final query is
//! discarded. A failure at index 0 yields an empty list, not an error.

use crate::display::{DisplayDevice, DisplayMode, MonitorGeometry};
use crate::error::{QueryError, QueryResult};
use crate::native::{DevModeA, DisplayDeviceA, MonitorInfoExA, NativeRecord};
use crate::source::{DisplaySource, ModeIndex};

/// Runs `query` with increasing indices until it reports exhaustion.
///
/// Each attempt gets a freshly zeroed record whose size field has been
/// populated. Errors abort the walk and are returned as-is.
pub fn enumerate_indexed<R, F>(mut query: F) -> QueryResult<Vec<R>>
where
    R: NativeRecord,
    F: FnMut(u32, &mut R) -> QueryResult<bool>,
{
    let mut records = Vec::new();
    for index in 0.. {
        let mut record = R::prepared();
        if !query(index, &mut record)? {
            break;
        }
        records.push(record);
    }
    Ok(records)
}

/// Every top-level display device, attached or not.
pub fn devices(source: &impl DisplaySource) -> QueryResult<Vec<DisplayDevice>> {
    let raw: Vec<DisplayDeviceA> =
        enumerate_indexed(|index, record| source.query_device(None, index, record))?;
    Ok(raw.iter().map(DisplayDevice::from).collect())
}

/// Monitors attached to the device called `parent`.
pub fn attached_devices(
    source: &impl DisplaySource,
    parent: &str,
) -> QueryResult<Vec<DisplayDevice>> {
    let raw: Vec<DisplayDeviceA> =
        enumerate_indexed(|index, record| source.query_device(Some(parent), index, record))?;
    Ok(raw.iter().map(DisplayDevice::from).collect())
}

/// Every mode the named device supports, in the order the OS reports them.
pub fn supported_modes(source: &impl DisplaySource, device: &str) -> QueryResult<Vec<DisplayMode>> {
    let raw: Vec<DevModeA> = enumerate_indexed(|index, record| {
        source.query_mode(device, ModeIndex::Index(index), record)
    })?;
    Ok(raw.iter().map(DisplayMode::from).collect())
}

/// The mode the named device is using right now.
///
/// A single query, not a loop. No record is an error here.
pub fn current_mode(source: &impl DisplaySource, device: &str) -> QueryResult<DisplayMode> {
    let mut record = DevModeA::prepared();
    if source.query_mode(device, ModeIndex::Current, &mut record)? {
        Ok(DisplayMode::from(&record))
    } else {
        Err(QueryError::NoCurrentMode {
            device: device.to_string(),
        })
    }
}

/// Every monitor handle's rectangles, in handle-enumeration order.
pub fn monitors(source: &impl DisplaySource) -> QueryResult<Vec<MonitorGeometry>> {
    let raw: Vec<MonitorInfoExA> =
        enumerate_indexed(|index, record| source.query_monitor(index, record))?;
    Ok(raw.iter().map(MonitorGeometry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{ATTACHED, FakeSource};

    #[test]
    fn stops_at_first_failure_and_discards_it() {
        // Arrange
        let source = FakeSource::new()
            .mode("A", 1920, 1080, 60)
            .mode("A", 1920, 1080, 75)
            .mode("A", 1280, 720, 60);

        // Act
        let modes = supported_modes(&source, "A").unwrap();

        // Assert
        assert_eq!(modes.len(), 3);
        assert!(modes.iter().all(|m| m.width != 1));
        let queries = source.mode_queries.borrow();
        assert_eq!(queries.len(), 4);
        assert_eq!(queries[3], ("A".to_string(), ModeIndex::Index(3)));
    }

    #[test]
    fn n_successes_yield_exactly_n_records() {
        for n in 0..6u32 {
            let source = (0..n).fold(FakeSource::new(), |s, i| s.mode("A", 800 + i, 600, 60));

            let modes = supported_modes(&source, "A").unwrap();

            assert_eq!(modes.len(), n as usize);
        }
    }

    #[test]
    fn index_zero_failure_is_empty_not_error() {
        let source = FakeSource::new();

        assert!(devices(&source).unwrap().is_empty());
        assert!(attached_devices(&source, "nope").unwrap().is_empty());
        assert!(supported_modes(&source, "nope").unwrap().is_empty());
        assert!(monitors(&source).unwrap().is_empty());
    }

    #[test]
    fn garbage_from_failed_device_query_is_not_returned() {
        let source = FakeSource::new().device("A", ATTACHED);

        let found = devices(&source).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[test]
    fn genuine_failure_aborts_enumeration() {
        // Arrange
        let source = FakeSource::new()
            .mode("A", 1920, 1080, 60)
            .mode("A", 1920, 1080, 75)
            .failing_mode_at(1);

        // Act
        let err = supported_modes(&source, "A").unwrap_err();

        // Assert
        assert!(matches!(err, QueryError::Os { .. }));
    }

    #[test]
    fn every_attempt_gets_a_sized_record() {
        let mut seen = Vec::new();

        let records: Vec<DevModeA> = enumerate_indexed(|index, record: &mut DevModeA| {
            seen.push(record.size);
            Ok(index < 2)
        })
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(seen, vec![156, 156, 156]);
    }

    #[test]
    fn unsized_record_is_a_query_failure() {
        let source = FakeSource::new().mode("A", 1920, 1080, 60);
        let mut record = DevModeA::default();

        let err = source
            .query_mode("A", ModeIndex::Index(0), &mut record)
            .unwrap_err();

        assert!(matches!(err, QueryError::SizeMismatch { .. }));
    }

    #[test]
    fn current_mode_is_a_single_query() {
        // Arrange
        let source = FakeSource::new().current("A", (2560, 1440, 144), (0, 0));

        // Act
        let mode = current_mode(&source, "A").unwrap();

        // Assert
        assert_eq!((mode.width, mode.height, mode.frequency), (2560, 1440, 144));
        assert_eq!(
            *source.mode_queries.borrow(),
            vec![("A".to_string(), ModeIndex::Current)]
        );
    }

    #[test]
    fn missing_current_mode_is_an_error() {
        let source = FakeSource::new();

        let err = current_mode(&source, "A").unwrap_err();

        assert_eq!(
            err,
            QueryError::NoCurrentMode {
                device: "A".into()
            }
        );
    }

    #[test]
    fn children_are_enumerated_per_parent() {
        let source = FakeSource::new()
            .child("A", "A\\Monitor0", "Generic PnP Monitor")
            .child("B", "B\\Monitor0", "Other");

        let found = attached_devices(&source, "A").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Generic PnP Monitor");
    }
}
