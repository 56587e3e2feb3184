pub mod edit;
pub mod init;
pub mod layout;
pub mod list;
pub mod modes;

use std::fmt;

use panorama_core::{TopologySnapshot, discover_topology};
use panorama_windows::Win32DisplaySource;

/// Discovers the live topology, exiting on failure.
fn discover() -> TopologySnapshot {
    discover_topology(&Win32DisplaySource).unwrap_or_else(|e| fail(e))
}

/// Reports `error` and exits with status 1.
fn fail(error: impl fmt::Display) -> ! {
    panorama_core::log_error!("{error}");
    eprintln!("Error: {error}");
    std::process::exit(1);
}
