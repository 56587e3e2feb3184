use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/panorama/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("panorama"))
}

/// Returns the config file path: `~/.config/panorama/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NOT_FOUND.to_string()
        } else {
            format!("{}: {e}", path.display())
        }
    })?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parses config text and clamps the result.
pub(super) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// A missing file silently returns defaults; other errors are logged.
pub fn load() -> Config {
    load_or_default(try_load, Config::default)
}

const NOT_FOUND: &str = "config file not found";

/// Loads a config value from disk, falling back to defaults.
fn load_or_default<T>(try_load: impl FnOnce() -> Result<T, String>, default: impl Fn() -> T) -> T {
    match try_load() {
        Ok(val) => val,
        Err(e) if e == NOT_FOUND => default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            crate::log_warn!("{e}");
            default()
        }
    }
}
