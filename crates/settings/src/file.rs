//! TOML config file support.
//!
//! Config location: `~/.config/paneterm/config.toml`

use crate::constants::{layout, settings};
use pane_layout::{LayoutOptions, ShellKind, SplitBehavior};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Custom keybinding: maps a key chord to an action name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct KeybindingEntry {
    /// Key chord (e.g., "cmd-shift-t", "ctrl-alt-right")
    pub keys: String,
    /// Action name (e.g., "split-vertical", "close-pane")
    pub action: String,
}

/// User-facing config parsed from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Smallest share (percent) a resize may leave a pane with.
    pub min_pane_size: f32,
    /// Whether a same-direction split joins the parent or nests.
    pub split_behavior: SplitBehavior,
    /// Prefix for generated tab names.
    pub tab_name_prefix: String,
    /// Shell kind passed to the transport for new tabs.
    pub default_shell: String,
    /// Custom keybindings (override defaults).
    pub keybindings: Vec<KeybindingEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_pane_size: layout::DEFAULT_MIN_PANE_SIZE,
            split_behavior: SplitBehavior::default(),
            tab_name_prefix: layout::DEFAULT_TAB_PREFIX.to_string(),
            default_shell: layout::DEFAULT_SHELL.to_string(),
            keybindings: Vec::new(),
        }
    }
}

impl Config {
    /// Layout tunables, with out-of-range values brought back into range.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            min_size: clamp_min_pane_size(self.min_pane_size),
            split_behavior: self.split_behavior,
            tab_name_prefix: sanitize_string(
                "tab-name-prefix",
                &self.tab_name_prefix,
                layout::DEFAULT_TAB_PREFIX,
            ),
            default_shell: ShellKind::new(sanitize_string(
                "default-shell",
                &self.default_shell,
                layout::DEFAULT_SHELL,
            )),
        }
    }
}

fn clamp_min_pane_size(value: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!(
            "min-pane-size {} is not a number, using {}",
            value,
            layout::DEFAULT_MIN_PANE_SIZE
        );
        return layout::DEFAULT_MIN_PANE_SIZE;
    }
    let clamped = value.clamp(layout::MIN_PANE_SIZE_FLOOR, layout::MAX_PANE_SIZE_FLOOR);
    if clamped != value {
        tracing::warn!(
            "min-pane-size {} out of range [{}, {}], using {}",
            value,
            layout::MIN_PANE_SIZE_FLOOR,
            layout::MAX_PANE_SIZE_FLOOR,
            clamped
        );
    }
    clamped
}

fn sanitize_string(key: &str, value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    if trimmed.len() > settings::MAX_STRING_LENGTH {
        tracing::warn!(
            "{} longer than {} bytes, using {:?}",
            key,
            settings::MAX_STRING_LENGTH,
            fallback
        );
        return fallback.to_string();
    }
    trimmed.to_string()
}

/// Default config file content with comments (generated on first launch).
const DEFAULT_CONFIG: &str = r#"# paneterm configuration

# Smallest share (percent of the parent split) a resize may leave a pane with.
# Accepted range: 1 to 25.
min-pane-size = 5.0

# Splitting a pane the same way as its parent:
#   "merge" - the new pane joins the parent split, all panes share equally
#   "nest"  - the pane and the new pane get their own split inside the parent
split-behavior = "merge"

# New tabs are named "<prefix> <n>"
tab-name-prefix = "Terminal"

# Shell kind handed to the terminal backend for new tabs
default-shell = "default"

# Custom keybindings (override defaults)
# [[keybindings]]
# keys = "ctrl-shift-d"
# action = "split-vertical"
#
# [[keybindings]]
# keys = "ctrl-alt-w"
# action = "close-pane"
"#;

/// Return the config file path.
pub fn config_path() -> PathBuf {
    paneterm_paths::config_file()
}

/// Ensure the config file exists, creating a default if missing.
/// Returns the path to the config file.
pub fn ensure_config_file() -> Option<PathBuf> {
    ensure_config_file_at(&config_path())
}

/// [`ensure_config_file`] for an explicit path.
pub fn ensure_config_file_at(path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        let parent = path.parent()?;
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create config directory {:?}: {}", parent, e);
            return None;
        }
        if let Err(e) = std::fs::write(path, DEFAULT_CONFIG) {
            tracing::warn!("Failed to write default config {:?}: {}", path, e);
            return None;
        }
        tracing::info!("Created default config at {:?}", path);
    }
    Some(path.to_path_buf())
}

/// Load and parse the config file. Returns default on any error.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > settings::MAX_FILE_SIZE => {
            tracing::warn!(
                "Config file too large ({} bytes), using defaults",
                meta.len()
            );
            return Config::default();
        }
        _ => {}
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config: {}", e);
            }
            return Config::default();
        }
    };

    match toml::from_str(&content) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to parse config.toml: {}", e);
            Config::default()
        }
    }
}
