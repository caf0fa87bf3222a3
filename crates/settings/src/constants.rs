//! Centralized configuration constants for paneterm.
//!
//! Organized by component.

/// Pane layout limits.
pub mod layout {
    /// Default resize floor, percent of the parent split.
    pub const DEFAULT_MIN_PANE_SIZE: f32 = pane_layout::DEFAULT_MIN_SIZE;
    /// Lowest accepted `min-pane-size`.
    pub const MIN_PANE_SIZE_FLOOR: f32 = 1.0;
    /// Highest accepted `min-pane-size`. Four panes at the floor must still
    /// fit in one split.
    pub const MAX_PANE_SIZE_FLOOR: f32 = 25.0;
    /// Default tab label prefix ("Terminal 1").
    pub const DEFAULT_TAB_PREFIX: &str = pane_layout::DEFAULT_TAB_PREFIX;
    /// Shell handed to the transport when the config names none.
    pub const DEFAULT_SHELL: &str = "default";
}

/// Headless driver rendering.
pub mod driver {
    /// Virtual screen the driver projects panes onto, in cells.
    pub const SCREEN_COLUMNS: f32 = 120.0;
    pub const SCREEN_ROWS: f32 = 40.0;
    /// Divider thickness in cells.
    pub const DIVIDER_THICKNESS: f32 = 1.0;
}

/// Settings file validation limits.
pub mod settings {
    /// Maximum settings file size in bytes (64 KB).
    /// Settings files should be tiny; anything larger is suspicious.
    pub const MAX_FILE_SIZE: u64 = 64 * 1024;

    /// Maximum length for string fields (tab prefix, shell).
    pub const MAX_STRING_LENGTH: usize = 256;
}

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn default_min_size_is_within_accepted_range() {
        assert!(layout::DEFAULT_MIN_PANE_SIZE >= layout::MIN_PANE_SIZE_FLOOR);
        assert!(layout::DEFAULT_MIN_PANE_SIZE <= layout::MAX_PANE_SIZE_FLOOR);
    }

    #[test]
    fn max_floor_leaves_room_for_four_panes() {
        assert!(
            layout::MAX_PANE_SIZE_FLOOR * 4.0 <= pane_layout::FULL_EXTENT,
            "MAX_PANE_SIZE_FLOOR ({}) too large",
            layout::MAX_PANE_SIZE_FLOOR
        );
    }

    #[test]
    fn max_string_length_allows_shell_paths() {
        let long_shell = "/nix/store/8ajn6hq0w6xk1rs0lfcv1mwclgvhqzd8-bash-interactive-5.2p26/bin/bash";
        assert!(settings::MAX_STRING_LENGTH >= long_shell.len());
    }
}
