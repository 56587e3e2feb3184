use panorama_core::config;

/// Creates `~/.config/panorama/config.toml` with every option commented.
///
/// An existing file is left untouched.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        super::fail("could not determine home directory");
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        super::fail(format!("could not create {}: {e}", dir.display()));
    }

    let path = dir.join("config.toml");
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(&path, config::template::generate_config()) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => super::fail(format!("could not write {}: {e}", path.display())),
    }
}
