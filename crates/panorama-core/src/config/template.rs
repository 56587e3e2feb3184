/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `panorama init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Panorama configuration
# Location: ~/.config/panorama/config.toml

[layout]
# Pixels per inch used to turn monitor resolutions into physical size.
# 96 is the Windows logical DPI; some setups look better with 88.
density = 96.0
# Size of the layout preview.
box_width = 400.0
box_height = 100.0
# Fraction of the preview width the monitors span (0.05 to 1.0).
scale_fraction = 0.3
# Top margin as a fraction of the preview height (0.0 to 0.5).
vertical_margin_fraction = 0.125
# "virtual": positions relative to the primary monitor's top-left corner.
# "bounding-box": positions relative to the arrangement's top-left corner,
# which keeps monitors left of or above the primary inside the preview.
origin = "virtual"

[modes]
# How refresh rates are ordered in mode lists.
# "lexicographic" sorts them as text (144 before 60), "numeric" by value.
frequency_order = "lexicographic"

[logging]
# Enable file logging to ~/.config/panorama/logs/panorama.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
