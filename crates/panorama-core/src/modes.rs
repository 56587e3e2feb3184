//! Resolution and refresh-rate options derived from a mode list.
//!
//! The OS reports modes grouped by resolution, so duplicates are collapsed
//! only when adjacent. A resolution that reappears later in the list is
//! kept.

use serde::{Deserialize, Serialize};

use crate::display::DisplayMode;
use crate::error::{Error, Result};

/// How [`distinct_frequencies`] orders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyOrder {
    /// Sort the decimal strings, so `"144"` comes before `"60"`.
    #[default]
    Lexicographic,
    /// Sort by value.
    Numeric,
}

/// Formats a resolution as `"{width}x{height}"`.
pub fn format_resolution(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}

/// One string per resolution, first-occurrence order, adjacent
/// duplicates collapsed.
pub fn distinct_resolutions(modes: &[DisplayMode]) -> Vec<String> {
    let mut out: Vec<String> = modes
        .iter()
        .map(|m| format_resolution(m.width, m.height))
        .collect();
    out.dedup();
    out
}

/// Every refresh rate as a string, sorted, then adjacent duplicates
/// collapsed.
pub fn distinct_frequencies(modes: &[DisplayMode], order: FrequencyOrder) -> Vec<String> {
    let mut out: Vec<String> = match order {
        FrequencyOrder::Lexicographic => {
            let mut rates: Vec<String> = modes.iter().map(|m| m.frequency.to_string()).collect();
            rates.sort();
            rates
        }
        FrequencyOrder::Numeric => {
            let mut rates: Vec<u32> = modes.iter().map(|m| m.frequency).collect();
            rates.sort_unstable();
            rates.iter().map(u32::to_string).collect()
        }
    };
    out.dedup();
    out
}

/// Refresh rates offered at exactly `width` x `height`, in mode order,
/// adjacent duplicates collapsed.
pub fn frequencies_for_resolution(modes: &[DisplayMode], width: u32, height: u32) -> Vec<String> {
    let mut out: Vec<String> = modes
        .iter()
        .filter(|m| m.has_resolution(width, height))
        .map(|m| m.frequency.to_string())
        .collect();
    out.dedup();
    out
}

/// Parses `"1920x1080"`. Spaces around the `x` are accepted.
pub fn parse_resolution(s: &str) -> Result<(u32, u32)> {
    let malformed = || Error::MalformedModeString(s.to_string());
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(malformed)?;
    let width = w.trim().parse().map_err(|_| malformed())?;
    let height = h.trim().parse().map_err(|_| malformed())?;
    Ok((width, height))
}

/// Parses `"60"`. A trailing `Hz` unit is accepted.
pub fn parse_frequency(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_suffix("Hz")
        .or_else(|| trimmed.strip_suffix("hz"))
        .unwrap_or(trimmed);
    digits
        .trim()
        .parse()
        .map_err(|_| Error::MalformedModeString(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(width: u32, height: u32, frequency: u32) -> DisplayMode {
        DisplayMode {
            width,
            height,
            frequency,
            ..Default::default()
        }
    }

    #[test]
    fn resolutions_collapse_only_adjacent_duplicates() {
        // Arrange
        let modes = [
            m(1920, 1080, 60),
            m(1920, 1080, 60),
            m(1280, 720, 60),
            m(1920, 1080, 60),
        ];

        // Act
        let result = distinct_resolutions(&modes);

        // Assert
        assert_eq!(result, vec!["1920x1080", "1280x720", "1920x1080"]);
    }

    #[test]
    fn frequencies_sort_as_strings_by_default() {
        // Arrange
        let modes = [m(1, 1, 60), m(1, 1, 144), m(1, 1, 60), m(1, 1, 75)];

        // Act
        let result = distinct_frequencies(&modes, FrequencyOrder::Lexicographic);

        // Assert: "144" < "60" as strings.
        assert_eq!(result, vec!["144", "60", "75"]);
    }

    #[test]
    fn frequencies_sort_by_value_when_numeric() {
        let modes = [m(1, 1, 60), m(1, 1, 144), m(1, 1, 60), m(1, 1, 75)];

        let result = distinct_frequencies(&modes, FrequencyOrder::Numeric);

        assert_eq!(result, vec!["60", "75", "144"]);
    }

    #[test]
    fn frequencies_for_resolution_filters_exact_matches() {
        // Arrange
        let modes = [m(1920, 1080, 60), m(1920, 1080, 75), m(1280, 720, 60)];

        // Act
        let result = frequencies_for_resolution(&modes, 1920, 1080);

        // Assert
        assert_eq!(result, vec!["60", "75"]);
    }

    #[test]
    fn frequencies_for_resolution_keeps_mode_order() {
        let modes = [
            m(1920, 1080, 75),
            m(1920, 1080, 75),
            m(1920, 1080, 60),
            m(1920, 1080, 75),
        ];

        let result = frequencies_for_resolution(&modes, 1920, 1080);

        assert_eq!(result, vec!["75", "60", "75"]);
    }

    #[test]
    fn empty_modes_give_empty_options() {
        assert!(distinct_resolutions(&[]).is_empty());
        assert!(distinct_frequencies(&[], FrequencyOrder::default()).is_empty());
        assert!(frequencies_for_resolution(&[], 1920, 1080).is_empty());
    }

    #[test]
    fn parses_resolution_strings() {
        assert_eq!(parse_resolution("1920x1080").unwrap(), (1920, 1080));
        assert_eq!(parse_resolution("1280 x 720").unwrap(), (1280, 720));
        assert!(matches!(
            parse_resolution("1920*1080"),
            Err(Error::MalformedModeString(_))
        ));
        assert!(parse_resolution("x1080").is_err());
        assert!(parse_resolution("-5x10").is_err());
    }

    #[test]
    fn parses_frequency_strings() {
        assert_eq!(parse_frequency("60").unwrap(), 60);
        assert_eq!(parse_frequency("144 Hz").unwrap(), 144);
        assert_eq!(
            parse_frequency("fast"),
            Err(Error::MalformedModeString("fast".into()))
        );
    }
}
