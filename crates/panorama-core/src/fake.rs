//! Scripted [`DisplaySource`] for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{QueryError, QueryResult};
use crate::native::{
    DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISPLAY_DEVICE_PRIMARY_DEVICE, DevModeA, DisplayDeviceA,
    MONITORINFOF_PRIMARY, MonitorInfoExA, NativeRecord, NativeRect, PointL, encode_ansi,
};
use crate::source::{DisplaySource, ModeIndex};

pub(crate) const ATTACHED: u32 = DISPLAY_DEVICE_ATTACHED_TO_DESKTOP;
pub(crate) const PRIMARY: u32 = DISPLAY_DEVICE_PRIMARY_DEVICE;

#[derive(Default)]
pub(crate) struct FakeSource {
    devices: Vec<DisplayDeviceA>,
    children: HashMap<String, Vec<DisplayDeviceA>>,
    modes: HashMap<String, Vec<DevModeA>>,
    current: HashMap<String, DevModeA>,
    monitors: Vec<MonitorInfoExA>,
    failing_mode_index: Option<u32>,
    /// Every `(device, index)` passed to `query_mode`, in call order.
    pub mode_queries: RefCell<Vec<(String, ModeIndex)>>,
}

pub(crate) fn device(name: &str, description: &str, flags: u32) -> DisplayDeviceA {
    let mut raw = DisplayDeviceA::prepared();
    encode_ansi(&mut raw.device_name, name);
    encode_ansi(&mut raw.device_string, description);
    raw.state_flags = flags;
    raw
}

pub(crate) fn mode(width: u32, height: u32, frequency: u32) -> DevModeA {
    let mut raw = DevModeA::prepared();
    raw.bits_per_pel = 32;
    raw.pels_width = width;
    raw.pels_height = height;
    raw.display_frequency = frequency;
    raw
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level device.
    pub fn device(mut self, name: &str, flags: u32) -> Self {
        self.devices.push(device(name, "Fake Adapter", flags));
        self
    }

    /// Adds a monitor attached to `parent`.
    pub fn child(mut self, parent: &str, name: &str, description: &str) -> Self {
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(device(name, description, ATTACHED));
        self
    }

    /// Adds a supported mode to `name`.
    pub fn mode(mut self, name: &str, width: u32, height: u32, frequency: u32) -> Self {
        self.modes
            .entry(name.to_string())
            .or_default()
            .push(mode(width, height, frequency));
        self
    }

    /// Sets the current mode of `name`.
    pub fn current(
        mut self,
        name: &str,
        (width, height, frequency): (u32, u32, u32),
        (x, y): (i32, i32),
    ) -> Self {
        let mut raw = mode(width, height, frequency);
        raw.placement.position = PointL { x, y };
        self.current.insert(name.to_string(), raw);
        self
    }

    /// Adds a monitor handle covering the given rectangle.
    pub fn monitor(mut self, rect: (i32, i32, i32, i32), primary: bool, name: Option<&str>) -> Self {
        let mut raw = MonitorInfoExA::prepared();
        let (left, top, right, bottom) = rect;
        raw.info.monitor = NativeRect {
            left,
            top,
            right,
            bottom,
        };
        raw.info.work = NativeRect {
            bottom: bottom - 40,
            ..raw.info.monitor
        };
        if primary {
            raw.info.flags = MONITORINFOF_PRIMARY;
        }
        if let Some(name) = name {
            encode_ansi(&mut raw.device, name);
        }
        self.monitors.push(raw);
        self
    }

    /// Makes the supported-mode query at `index` fail with an OS error.
    pub fn failing_mode_at(mut self, index: u32) -> Self {
        self.failing_mode_index = Some(index);
        self
    }
}

fn fetch<R: NativeRecord + Copy>(list: Option<&Vec<R>>, index: u32, record: &mut R) -> bool {
    match list.and_then(|l| l.get(index as usize)) {
        Some(found) => {
            *record = *found;
            true
        }
        None => false,
    }
}

impl DisplaySource for FakeSource {
    fn query_device(
        &self,
        parent: Option<&str>,
        index: u32,
        record: &mut DisplayDeviceA,
    ) -> QueryResult<bool> {
        record.check_size()?;
        let list = match parent {
            None => Some(&self.devices),
            Some(p) => self.children.get(p),
        };
        if fetch(list, index, record) {
            return Ok(true);
        }
        // A failed call may still have written into the record.
        *record = device("GARBAGE", "GARBAGE", ATTACHED);
        Ok(false)
    }

    fn query_mode(
        &self,
        device: &str,
        index: ModeIndex,
        record: &mut DevModeA,
    ) -> QueryResult<bool> {
        self.mode_queries
            .borrow_mut()
            .push((device.to_string(), index));
        record.check_size()?;
        match index {
            ModeIndex::Current => match self.current.get(device) {
                Some(found) => {
                    *record = *found;
                    Ok(true)
                }
                None => Ok(false),
            },
            ModeIndex::Index(i) => {
                if self.failing_mode_index == Some(i) {
                    return Err(QueryError::Os {
                        call: "EnumDisplaySettingsA",
                        message: "device removed".into(),
                    });
                }
                if fetch(self.modes.get(device), i, record) {
                    return Ok(true);
                }
                *record = mode(1, 1, 1);
                Ok(false)
            }
        }
    }

    fn query_monitor(&self, index: u32, record: &mut MonitorInfoExA) -> QueryResult<bool> {
        record.check_size()?;
        Ok(fetch(Some(&self.monitors), index, record))
    }
}
