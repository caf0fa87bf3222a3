//! The seam to whatever carries terminal bytes for each tab.

use pane_layout::{SessionId, Tab, TabId};

/// Receives tab lifecycle notifications after every committed layout change.
///
/// Closed tabs are reported before opened ones. The layout never reads or
/// writes terminal content; it only hands over the tab id and shell kind.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalTransport {
    fn open_tab(&mut self, session: SessionId, tab: &Tab);
    fn close_tab(&mut self, session: SessionId, tab: TabId);
}

/// Transport that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl TerminalTransport for NullTransport {
    fn open_tab(&mut self, _session: SessionId, _tab: &Tab) {}

    fn close_tab(&mut self, _session: SessionId, _tab: TabId) {}
}
