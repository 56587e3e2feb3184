use panorama_core::native::{MonitorInfoExA, NativeRecord};
use panorama_core::{QueryError, QueryResult};

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoA, HDC, HMONITOR, MONITORINFO,
};
use windows::core::BOOL;

/// Describes the `index`-th handle reported by `EnumDisplayMonitors`.
///
/// Handles are re-enumerated on every call so the source keeps no state
/// between queries.
pub fn query_monitor(index: u32, record: &mut MonitorInfoExA) -> QueryResult<bool> {
    record.check_size()?;
    let handles = monitor_handles()?;
    let Some(&handle) = handles.get(index as usize) else {
        return Ok(false);
    };

    // SAFETY: MonitorInfoExA starts with a MONITORINFO and cbSize is 72, so
    // GetMonitorInfoA writes the extended form including szDevice.
    let ok = unsafe {
        GetMonitorInfoA(
            handle,
            (record as *mut MonitorInfoExA).cast::<MONITORINFO>(),
        )
    };
    if !ok.as_bool() {
        return Err(os_error("GetMonitorInfoA"));
    }
    Ok(true)
}

fn monitor_handles() -> QueryResult<Vec<HMONITOR>> {
    let mut handles: Vec<HMONITOR> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously, so the Vec behind the
    // LPARAM outlives every callback invocation.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(&mut handles as *mut _ as isize),
        )
    };
    if !ok.as_bool() {
        return Err(os_error("EnumDisplayMonitors"));
    }
    Ok(handles)
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec<HMONITOR> passed by monitor_handles().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    BOOL(1)
}

fn os_error(call: &'static str) -> QueryError {
    QueryError::Os {
        call,
        message: windows::core::Error::from_win32().message(),
    }
}
