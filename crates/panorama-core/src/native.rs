//! Byte-exact mirrors of the ANSI display structures used by `user32.dll`.
//!
//! These types are handed to the OS by pointer, so field order, widths and
//! total size must match the Win32 ABI exactly. Sizes are checked at compile
//! time below. No logic lives here beyond size-field bookkeeping and
//! NUL-terminated buffer decoding.

use crate::error::QueryError;

/// Length of `DeviceName` / `dmDeviceName` buffers (`CCHDEVICENAME`).
pub const CCHDEVICENAME: usize = 32;
/// Length of `dmFormName` (`CCHFORMNAME`).
pub const CCHFORMNAME: usize = 32;

/// `StateFlags` bit: the device is part of the desktop.
pub const DISPLAY_DEVICE_ATTACHED_TO_DESKTOP: u32 = 0x0000_0001;
/// `StateFlags` bit: the device is the primary desktop device.
pub const DISPLAY_DEVICE_PRIMARY_DEVICE: u32 = 0x0000_0004;

/// `dwFlags` bit of `MONITORINFO`: the primary monitor.
pub const MONITORINFOF_PRIMARY: u32 = 0x0000_0001;

/// Mode index requesting the mode currently in use.
pub const ENUM_CURRENT_SETTINGS: u32 = 0xFFFF_FFFF;

/// `dmFields` bits marking which display settings a `DEVMODEA` carries.
pub const DM_DISPLAYORIENTATION: u32 = 0x0000_0080;
pub const DM_PELSWIDTH: u32 = 0x0008_0000;
pub const DM_PELSHEIGHT: u32 = 0x0010_0000;
pub const DM_DISPLAYFREQUENCY: u32 = 0x0040_0000;

/// A native record whose first call contract is a self-reported size field.
///
/// Every enumeration query must call [`NativeRecord::prepare`] on the
/// destination before handing it to the OS. Sources use
/// [`NativeRecord::check_size`] to tell a bad size field apart from a
/// normal end of enumeration.
pub trait NativeRecord: Default {
    /// Win32 type name, used in error messages.
    const NAME: &'static str;
    /// Exact byte size the OS expects in the size field.
    const SIZE: usize;

    /// Value currently stored in the size field.
    fn size_field(&self) -> usize;

    /// Writes [`Self::SIZE`] into the size field.
    fn prepare(&mut self);

    /// Returns a fresh zeroed record with its size field populated.
    fn prepared() -> Self {
        let mut record = Self::default();
        record.prepare();
        record
    }

    /// Fails with [`QueryError::SizeMismatch`] unless the size field is exact.
    fn check_size(&self) -> Result<(), QueryError> {
        let found = self.size_field();
        if found == Self::SIZE {
            Ok(())
        } else {
            Err(QueryError::SizeMismatch {
                record: Self::NAME,
                expected: Self::SIZE,
                found,
            })
        }
    }
}

/// `DISPLAY_DEVICEA`: one adapter or monitor returned by `EnumDisplayDevicesA`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDeviceA {
    /// `cb`, must equal 424 before the call.
    pub cb: u32,
    pub device_name: [u8; CCHDEVICENAME],
    pub device_string: [u8; 128],
    pub state_flags: u32,
    pub device_id: [u8; 128],
    pub device_key: [u8; 128],
}

impl Default for DisplayDeviceA {
    fn default() -> Self {
        Self {
            cb: 0,
            device_name: [0; CCHDEVICENAME],
            device_string: [0; 128],
            state_flags: 0,
            device_id: [0; 128],
            device_key: [0; 128],
        }
    }
}

impl NativeRecord for DisplayDeviceA {
    const NAME: &'static str = "DISPLAY_DEVICEA";
    const SIZE: usize = size_of::<Self>();

    fn size_field(&self) -> usize {
        self.cb as usize
    }

    fn prepare(&mut self) {
        self.cb = Self::SIZE as u32;
    }
}

/// `POINTL`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointL {
    pub x: i32,
    pub y: i32,
}

/// Display arm of the first `DEVMODEA` union (`DUMMYSTRUCTNAME2`).
///
/// The printer arm (`dmOrientation` .. `dmPrintQuality`) occupies the same
/// 16 bytes and is never read for display devices, so it is not modeled.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPlacement {
    pub position: PointL,
    pub orientation: u32,
    pub fixed_output: u32,
}

/// `DEVMODEA`: one display configuration.
///
/// Offsets (bytes): name 0, spec/driver version 32/34, `dmSize` 36,
/// `dmDriverExtra` 38, `dmFields` 40, placement union 44, legacy printer
/// shorts 60..70, `dmFormName` 70, `dmLogPixels` 102, bits per pel 104,
/// width 108, height 112, flags/N-up union 116, frequency 120, then ICM,
/// media, dither, reserved and panning fields 124..156.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevModeA {
    pub device_name: [u8; CCHDEVICENAME],
    pub spec_version: u16,
    pub driver_version: u16,
    /// `dmSize`, must equal 156 before the call.
    pub size: u16,
    pub driver_extra: u16,
    pub fields: u32,
    pub placement: DisplayPlacement,
    pub color: i16,
    pub duplex: i16,
    pub y_resolution: i16,
    pub tt_option: i16,
    pub collate: i16,
    pub form_name: [u8; CCHFORMNAME],
    pub log_pixels: u16,
    pub bits_per_pel: u32,
    pub pels_width: u32,
    pub pels_height: u32,
    /// `dmDisplayFlags` or `dmNup` depending on context.
    pub display_flags: u32,
    pub display_frequency: u32,
    pub icm_method: u32,
    pub icm_intent: u32,
    pub media_type: u32,
    pub dither_type: u32,
    pub reserved1: u32,
    pub reserved2: u32,
    pub panning_width: u32,
    pub panning_height: u32,
}

impl DevModeA {
    /// Whether every byte of the record is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl NativeRecord for DevModeA {
    const NAME: &'static str = "DEVMODEA";
    const SIZE: usize = size_of::<Self>();

    fn size_field(&self) -> usize {
        self.size as usize
    }

    fn prepare(&mut self) {
        self.size = Self::SIZE as u16;
    }
}

/// `RECT`, edges in virtual-desktop pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// `MONITORINFO`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorInfo {
    /// `cbSize`: 40 for a plain `MONITORINFO`, 72 for the extended form.
    pub cb_size: u32,
    pub monitor: NativeRect,
    pub work: NativeRect,
    pub flags: u32,
}

/// `MONITORINFOEXA`: `MONITORINFO` followed by the GDI device name.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorInfoExA {
    pub info: MonitorInfo,
    pub device: [u8; CCHDEVICENAME],
}

impl NativeRecord for MonitorInfoExA {
    const NAME: &'static str = "MONITORINFOEXA";
    const SIZE: usize = size_of::<Self>();

    fn size_field(&self) -> usize {
        self.info.cb_size as usize
    }

    fn prepare(&mut self) {
        self.info.cb_size = Self::SIZE as u32;
    }
}

const _: () = assert!(size_of::<DisplayDeviceA>() == 424);
const _: () = assert!(size_of::<DisplayPlacement>() == 16);
const _: () = assert!(size_of::<DevModeA>() == 156);
const _: () = assert!(size_of::<MonitorInfo>() == 40);
const _: () = assert!(size_of::<MonitorInfoExA>() == 72);

/// Decodes a NUL-terminated ANSI buffer.
///
/// Bytes after the first NUL are ignored. Non-UTF-8 bytes are replaced.
pub fn decode_ansi(buf: &[u8]) -> String {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

/// Copies `src` into a fixed buffer, truncating so a trailing NUL always fits.
pub fn encode_ansi(dst: &mut [u8], src: &str) {
    dst.fill(0);
    let len = src.len().min(dst.len().saturating_sub(1));
    dst[..len].copy_from_slice(&src.as_bytes()[..len]);
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn devmode_offsets_match_win32() {
        assert_eq!(offset_of!(DevModeA, size), 36);
        assert_eq!(offset_of!(DevModeA, fields), 40);
        assert_eq!(offset_of!(DevModeA, placement), 44);
        assert_eq!(offset_of!(DevModeA, form_name), 70);
        assert_eq!(offset_of!(DevModeA, log_pixels), 102);
        assert_eq!(offset_of!(DevModeA, bits_per_pel), 104);
        assert_eq!(offset_of!(DevModeA, pels_width), 108);
        assert_eq!(offset_of!(DevModeA, display_frequency), 120);
        assert_eq!(offset_of!(DevModeA, panning_height), 152);
    }

    #[test]
    fn display_device_offsets_match_win32() {
        assert_eq!(offset_of!(DisplayDeviceA, device_string), 36);
        assert_eq!(offset_of!(DisplayDeviceA, state_flags), 164);
        assert_eq!(offset_of!(DisplayDeviceA, device_key), 296);
    }

    #[test]
    fn prepared_records_carry_exact_size() {
        // Arrange / Act
        let device = DisplayDeviceA::prepared();
        let mode = DevModeA::prepared();
        let monitor = MonitorInfoExA::prepared();

        // Assert
        assert_eq!(device.cb, 424);
        assert_eq!(mode.size, 156);
        assert_eq!(monitor.info.cb_size, 72);
        assert!(device.check_size().is_ok());
        assert!(mode.check_size().is_ok());
        assert!(monitor.check_size().is_ok());
    }

    #[test]
    fn pointer_sized_size_field_is_rejected() {
        // Arrange
        let mut mode = DevModeA::default();
        mode.size = size_of::<*const DevModeA>() as u16;

        // Act
        let err = mode.check_size().unwrap_err();

        // Assert
        assert!(matches!(
            err,
            QueryError::SizeMismatch {
                record: "DEVMODEA",
                expected: 156,
                ..
            }
        ));
    }

    #[test]
    fn empty_devmode_is_all_zero() {
        let mut mode = DevModeA::default();
        assert!(mode.is_empty());

        mode.display_frequency = 60;
        assert!(!mode.is_empty());
    }

    #[test]
    fn decode_stops_at_first_nul() {
        let mut buf = [0u8; CCHDEVICENAME];
        buf[..12].copy_from_slice(b"\\\\.\\DISPLAY1");
        buf[13] = b'x';

        assert_eq!(decode_ansi(&buf), r"\\.\DISPLAY1");
    }

    #[test]
    fn encode_truncates_and_keeps_terminator() {
        let mut buf = [0xFFu8; 4];
        encode_ansi(&mut buf, "ABCDEF");

        assert_eq!(&buf, b"ABC\0");
        assert_eq!(decode_ansi(&buf), "ABC");
    }
}
