// Colorbrowser platform abstraction
// Resolves the per-OS configuration directory used for the optional
// settings file.
//
// - Linux:   `$XDG_CONFIG_HOME/colorbrowser` or `~/.config/colorbrowser`
// - macOS:   `~/Library/Application Support/Colorbrowser`
// - Windows: `%APPDATA%/Colorbrowser`

use std::env;
use std::path::PathBuf;

/// Returns the platform-specific configuration directory.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("colorbrowser")
        } else {
            home_dir().join(".config").join("colorbrowser")
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("Colorbrowser")
    }
    #[cfg(target_os = "windows")]
    {
        match env::var("APPDATA") {
            Ok(appdata) => PathBuf::from(appdata).join("Colorbrowser"),
            Err(_) => home_dir().join("Colorbrowser"),
        }
    }
}

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}
