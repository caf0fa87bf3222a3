//! Tunables for layout mutations.

use crate::tree::{Pane, ShellKind, Tab};
use serde::{Deserialize, Serialize};

/// Sizes are percentages of the parent's extent; siblings sum to this.
pub const FULL_EXTENT: f32 = 100.0;

/// Tolerance for the sum-to-100 check.
pub const SIZE_EPSILON: f32 = 0.01;

/// Default floor a resize may not push a child below.
pub const DEFAULT_MIN_SIZE: f32 = 5.0;

/// Default label prefix for generated tab names ("Terminal 1", ...).
pub const DEFAULT_TAB_PREFIX: &str = "Terminal";

/// What a split does when the target's parent already splits the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitBehavior {
    /// Insert the new pane as a sibling; no same-direction nesting.
    #[default]
    Merge,
    /// Always wrap the target in a new two-child split.
    Nest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Minimum share (percent) a resize leaves on either side.
    pub min_size: f32,
    pub split_behavior: SplitBehavior,
    pub tab_name_prefix: String,
    pub default_shell: ShellKind,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            split_behavior: SplitBehavior::default(),
            tab_name_prefix: DEFAULT_TAB_PREFIX.to_string(),
            default_shell: ShellKind::default(),
        }
    }
}

impl LayoutOptions {
    /// Default name for the tab numbered `ordinal` (1-based).
    pub fn tab_name(&self, ordinal: usize) -> String {
        format!("{} {}", self.tab_name_prefix, ordinal)
    }

    /// Build the default tab numbered `ordinal` (1-based).
    pub fn new_tab(&self, ordinal: usize) -> Tab {
        Tab::new(self.tab_name(ordinal), self.default_shell.clone())
    }

    pub fn new_pane(&self) -> Pane {
        Pane::new(self)
    }

    pub fn merges_splits(&self) -> bool {
        self.split_behavior == SplitBehavior::Merge
    }
}
