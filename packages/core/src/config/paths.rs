//! Config file location

use directories::BaseDirs;
use std::path::PathBuf;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "gcpilot";

/// Config file name
pub const CONFIG_FILE: &str = "config.jsonc";

/// Directory holding gcpilot's config file
///
/// `~/.config/gcpilot` on Linux, the Application Support folder on macOS
/// and `%APPDATA%` on Windows. `None` when no home directory is known.
pub fn get_config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_DIR))
}

/// Full path of the config file
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}
