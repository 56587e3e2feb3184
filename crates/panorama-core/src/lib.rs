pub mod config;
pub mod display;
pub mod edit;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod log;
pub mod modes;
pub mod native;
pub mod rect;
pub mod source;
pub mod topology;

#[cfg(test)]
mod fake;

pub use display::{DisplayDevice, DisplayMode, MonitorGeometry, Orientation, StateFlags};
pub use edit::ModeEditor;
pub use error::{Error, QueryError, QueryResult, Result};
pub use geometry::{Layout, LayoutParams, LayoutRect, MonitorPlacement, Origin, normalize_layout};
pub use modes::{
    FrequencyOrder, distinct_frequencies, distinct_resolutions, frequencies_for_resolution,
};
pub use rect::Rect;
pub use source::{DisplaySource, ModeIndex};
pub use topology::{Display, TopologySnapshot, discover_topology};
