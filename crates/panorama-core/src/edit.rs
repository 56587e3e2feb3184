//! Pending, not yet applied, mode edits per display.

use crate::display::{DisplayMode, Orientation};
use crate::error::{Error, Result};
use crate::modes;
use crate::native::{DM_DISPLAYFREQUENCY, DM_DISPLAYORIENTATION, DM_PELSHEIGHT, DM_PELSWIDTH};
use crate::topology::TopologySnapshot;

/// Tracks edits to each display's mode without touching the snapshot.
///
/// A display starts with no pending mode. The first edit copies its
/// current mode and then changes the requested field, so untouched fields
/// keep their live values. Every edit also sets the matching `dmFields`
/// bit so the pending mode says which settings it carries.
#[derive(Debug, Clone)]
pub struct ModeEditor {
    active: Vec<DisplayMode>,
    supported: Vec<Vec<DisplayMode>>,
    pending: Vec<Option<DisplayMode>>,
}

impl ModeEditor {
    pub fn new(snapshot: &TopologySnapshot) -> Self {
        Self {
            active: snapshot.displays.iter().map(|d| d.current).collect(),
            supported: snapshot.displays.iter().map(|d| d.modes.clone()).collect(),
            pending: vec![None; snapshot.len()],
        }
    }

    /// The live mode of display `index`.
    pub fn active(&self, index: usize) -> Result<&DisplayMode> {
        self.active.get(index).ok_or(Error::UnknownDisplay(index))
    }

    /// The edited mode of display `index`, if any edit was made.
    pub fn pending(&self, index: usize) -> Result<Option<&DisplayMode>> {
        self.check(index)?;
        Ok(self.pending[index].as_ref())
    }

    /// The pending mode if edited, otherwise the live one.
    pub fn effective(&self, index: usize) -> Result<&DisplayMode> {
        self.check(index)?;
        Ok(self.pending[index].as_ref().unwrap_or(&self.active[index]))
    }

    /// Sets the resolution from a `"WxH"` string.
    pub fn set_resolution(&mut self, index: usize, resolution: &str) -> Result<&DisplayMode> {
        let (width, height) = modes::parse_resolution(resolution)?;
        let mode = self.seed(index)?;
        mode.width = width;
        mode.height = height;
        mode.fields |= DM_PELSWIDTH | DM_PELSHEIGHT;
        Ok(mode)
    }

    /// Sets the refresh rate from a `"60"` or `"60 Hz"` string.
    pub fn set_frequency(&mut self, index: usize, frequency: &str) -> Result<&DisplayMode> {
        let frequency = modes::parse_frequency(frequency)?;
        let mode = self.seed(index)?;
        mode.frequency = frequency;
        mode.fields |= DM_DISPLAYFREQUENCY;
        Ok(mode)
    }

    pub fn set_orientation(
        &mut self,
        index: usize,
        orientation: Orientation,
    ) -> Result<&DisplayMode> {
        let mode = self.seed(index)?;
        mode.orientation = orientation;
        mode.fields |= DM_DISPLAYORIENTATION;
        Ok(mode)
    }

    /// Refresh rates supported at the effective resolution of `index`.
    pub fn frequency_options(&self, index: usize) -> Result<Vec<String>> {
        let mode = self.effective(index)?;
        Ok(modes::frequencies_for_resolution(
            &self.supported[index],
            mode.width,
            mode.height,
        ))
    }

    /// Drops the pending mode of `index`.
    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.pending[index] = None;
        Ok(())
    }

    /// Displays whose pending settings differ from the live ones. The
    /// `dmFields` mask is not a setting and is ignored.
    pub fn changes(&self) -> impl Iterator<Item = (usize, &DisplayMode)> + '_ {
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|mode| (i, mode)))
            .filter(|(i, mode)| {
                let active = self.active[*i];
                DisplayMode {
                    fields: active.fields,
                    ..**mode
                } != active
            })
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.active.len() {
            Ok(())
        } else {
            Err(Error::UnknownDisplay(index))
        }
    }

    fn seed(&mut self, index: usize) -> Result<&mut DisplayMode> {
        self.check(index)?;
        let active = self.active[index];
        Ok(self.pending[index].get_or_insert(active))
    }
}
