use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares the process per-monitor DPI aware (V2).
///
/// Without it `DEVMODEA` and `MONITORINFO` report coordinates scaled by the
/// primary monitor's DPI, and monitor rectangles stop lining up with the
/// mode positions on mixed-DPI setups.
///
/// Call once at startup, before the first query.
pub fn enable_dpi_awareness() {
    // SAFETY: no preconditions. Fails harmlessly if a manifest already set
    // the awareness, which we ignore.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
