//! XDG Base Directory paths for cih.
//!
//! The CLI reads its user configuration from XDG paths on every platform,
//! the same way tools like gh and kubectl do.

use std::path::PathBuf;

/// Name of the directory cih owns under the XDG base directories.
pub const APP_DIR: &str = "cih";

/// Name of the configuration file inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

/// Get the cih config directory.
///
/// Returns `$XDG_CONFIG_HOME/cih` if set, otherwise `~/.config/cih`.
///
/// # Examples
///
/// ```
/// use cih_paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("cih"));
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Get the user config file path (`config_dir()/config.toml`).
pub fn user_config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
