//! Shared action definitions for paneterm.
//!
//! Every user command is one variant of [`Action`]. Keymaps, the command
//! palette and the config file all refer to actions by their kebab-case
//! name, so the names are part of the config format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A discrete user command, applied to the focused pane of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    // Split management
    /// Vertical divider: the new pane opens to the right.
    SplitVertical,
    /// Horizontal divider: the new pane opens below.
    SplitHorizontal,
    ClosePane,

    // Focus navigation
    FocusNextPane,
    FocusPrevPane,

    // Tab management
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl Action {
    pub const ALL: [Action; 9] = [
        Action::SplitVertical,
        Action::SplitHorizontal,
        Action::ClosePane,
        Action::FocusNextPane,
        Action::FocusPrevPane,
        Action::NewTab,
        Action::CloseTab,
        Action::NextTab,
        Action::PrevTab,
    ];

    /// Stable name used in config files and the driver.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SplitVertical => "split-vertical",
            Action::SplitHorizontal => "split-horizontal",
            Action::ClosePane => "close-pane",
            Action::FocusNextPane => "focus-next-pane",
            Action::FocusPrevPane => "focus-prev-pane",
            Action::NewTab => "new-tab",
            Action::CloseTab => "close-tab",
            Action::NextTab => "next-tab",
            Action::PrevTab => "prev-tab",
        }
    }

    /// Human label for menus and the command palette.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SplitVertical => "Split Vertical",
            Action::SplitHorizontal => "Split Horizontal",
            Action::ClosePane => "Close Pane",
            Action::FocusNextPane => "Focus Next Pane",
            Action::FocusPrevPane => "Focus Previous Pane",
            Action::NewTab => "New Tab",
            Action::CloseTab => "Close Tab",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
        }
    }

    /// Built-in key chords, primary first.
    pub fn default_keys(&self) -> &'static [&'static str] {
        match self {
            Action::SplitVertical => &["cmd-d"],
            Action::SplitHorizontal => &["cmd-shift-d"],
            Action::ClosePane => &["cmd-shift-w"],
            Action::FocusNextPane => &["cmd-alt-right"],
            Action::FocusPrevPane => &["cmd-alt-left"],
            // Linux/Windows alternatives for terminal-style shortcuts
            Action::NewTab => &["cmd-t", "ctrl-shift-t"],
            Action::CloseTab => &["cmd-w", "ctrl-w"],
            Action::NextTab => &["cmd-shift-]", "ctrl-tab"],
            Action::PrevTab => &["cmd-shift-[", "ctrl-shift-tab"],
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == name.trim())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Action::from_name(name).ok_or_else(|| UnknownAction(name.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
