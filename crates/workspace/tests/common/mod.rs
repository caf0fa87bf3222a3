//! Shared test utilities for integration tests.
//!
//! A transport that records every notification, a config sandbox, and a
//! few assertion helpers.

// Not every test binary uses every helper
#![allow(dead_code)]

use pane_layout::{SessionId, ShellKind, Tab, TabId};
use paneterm_workspace::{Keymap, TerminalTransport, Workspace};
use settings::Config;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub use tempfile::{tempdir, TempDir};

// ============================================================================
// Recording Transport
// ============================================================================

/// One notification received by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Opened {
        session: SessionId,
        tab: TabId,
        shell: ShellKind,
    },
    Closed {
        session: SessionId,
        tab: TabId,
    },
}

impl Event {
    pub fn tab(&self) -> TabId {
        match self {
            Event::Opened { tab, .. } | Event::Closed { tab, .. } => *tab,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Event::Opened { .. })
    }
}

/// Transport that appends every notification to a shared log.
///
/// Clone it before boxing it into a workspace to keep a handle on the log.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Return and forget everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn opened(&self) -> Vec<TabId> {
        self.events().iter().filter(|e| e.is_open()).map(Event::tab).collect()
    }

    pub fn closed(&self) -> Vec<TabId> {
        self.events().iter().filter(|e| !e.is_open()).map(Event::tab).collect()
    }
}

impl TerminalTransport for RecordingTransport {
    fn open_tab(&mut self, session: SessionId, tab: &Tab) {
        self.events.borrow_mut().push(Event::Opened {
            session,
            tab: tab.id,
            shell: tab.shell.clone(),
        });
    }

    fn close_tab(&mut self, session: SessionId, tab: TabId) {
        self.events.borrow_mut().push(Event::Closed { session, tab });
    }
}

/// A workspace with default options and keys, plus the log its transport
/// writes to.
pub fn recorded_workspace() -> (Workspace, RecordingTransport) {
    recorded_workspace_with(&Config::default())
}

pub fn recorded_workspace_with(config: &Config) -> (Workspace, RecordingTransport) {
    let transport = RecordingTransport::new();
    let workspace = Workspace::from_config(config, Box::new(transport.clone()));
    (workspace, transport)
}

pub fn default_workspace() -> Workspace {
    Workspace::new(
        Config::default().layout_options(),
        Keymap::defaults(),
        Box::new(paneterm_workspace::NullTransport),
    )
}

// ============================================================================
// Test Environment Setup
// ============================================================================

/// Isolated config directory, removed when dropped.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub config_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().join("paneterm");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        let config_path = config_dir.join("config.toml");

        Self {
            temp_dir,
            config_dir,
            config_path,
        }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    pub fn load_config(&self) -> Config {
        settings::load_config_from(&self.config_path)
    }

    /// Path for a layout snapshot inside the sandbox.
    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(format!("{name}.json"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a string contains a substring (with better error message).
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        if !$haystack.contains($needle) {
            panic!(
                "assertion failed: `haystack.contains(needle)`\n  haystack: {}\n  needle: {:?}",
                $haystack, $needle
            );
        }
    };
}

/// Assert that two percentages agree within the layout tolerance.
#[macro_export]
macro_rules! assert_share {
    ($value:expr, $expected:expr) => {
        let (value, expected): (f32, f32) = ($value, $expected);
        if (value - expected).abs() > pane_layout::SIZE_EPSILON {
            panic!("share {} is not {}", value, expected);
        }
    };
}
