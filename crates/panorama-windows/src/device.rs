use std::ffi::CString;

use panorama_core::native::{DevModeA, DisplayDeviceA, NativeRecord};
use panorama_core::{ModeIndex, QueryError, QueryResult};

use windows::Win32::Graphics::Gdi::{
    DEVMODEA, DISPLAY_DEVICEA, ENUM_DISPLAY_SETTINGS_MODE, EnumDisplayDevicesA,
    EnumDisplaySettingsA,
};
use windows::core::PCSTR;

/// Calls `EnumDisplayDevicesA` for `index` under `parent`.
///
/// The API reports exhaustion and failure the same way, so a `FALSE`
/// return is always treated as the end of the list.
pub fn query_device(
    parent: Option<&str>,
    index: u32,
    record: &mut DisplayDeviceA,
) -> QueryResult<bool> {
    record.check_size()?;
    let parent = parent.map(device_name).transpose()?;
    let parent_ptr = parent
        .as_ref()
        .map_or(PCSTR::null(), |name| PCSTR(name.as_ptr().cast()));

    // SAFETY: DisplayDeviceA is #[repr(C)] with the exact DISPLAY_DEVICEA
    // layout and its cb field is set. parent_ptr is null or points into a
    // CString that outlives the call.
    let found = unsafe {
        EnumDisplayDevicesA(
            parent_ptr,
            index,
            (record as *mut DisplayDeviceA).cast::<DISPLAY_DEVICEA>(),
            0,
        )
    };
    Ok(found.as_bool())
}

/// Calls `EnumDisplaySettingsA` for `device`.
pub fn query_mode(device: &str, index: ModeIndex, record: &mut DevModeA) -> QueryResult<bool> {
    record.check_size()?;
    let name = device_name(device)?;

    // SAFETY: DevModeA is #[repr(C)] with the exact display-variant DEVMODEA
    // layout and dmSize set. name outlives the call.
    let found = unsafe {
        EnumDisplaySettingsA(
            PCSTR(name.as_ptr().cast()),
            ENUM_DISPLAY_SETTINGS_MODE(index.as_raw()),
            (record as *mut DevModeA).cast::<DEVMODEA>(),
        )
    };
    Ok(found.as_bool())
}

fn device_name(name: &str) -> QueryResult<CString> {
    CString::new(name).map_err(|_| QueryError::InvalidName(name.to_string()))
}
