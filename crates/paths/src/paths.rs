//! Centralized path management for paneterm.
//!
//! Directories are lazily resolved and cached. Call `set_config_dir` before
//! first access to override (tests, `--config-dir`).

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "PANETERM_CONFIG_DIR";

const APP_DIR: &str = "paneterm";

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// ~/.config/paneterm (or platform equivalent), unless overridden.
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        resolve_config_dir(
            std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from),
            dirs::config_dir(),
        )
    })
}

fn resolve_config_dir(env_override: Option<PathBuf>, platform: Option<PathBuf>) -> PathBuf {
    match env_override {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => platform.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR),
    }
}

/// Override config dir (must be called before first access).
/// Returns false if the directory was already resolved.
pub fn set_config_dir(path: PathBuf) -> bool {
    CONFIG_DIR.set(path).is_ok()
}

/// Config file path: config_dir()/config.toml
pub fn config_file() -> PathBuf {
    config_file_in(config_dir())
}

pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}
