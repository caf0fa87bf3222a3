use pane_layout::{LayoutError, SessionId, TabId};
use thiserror::Error;

pub type Result<T, E = WorkspaceError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// A restored snapshot reuses a tab id that a live session owns; the
    /// transport could not tell the two connections apart.
    #[error("tab {0} already belongs to an open session")]
    TabInUse(TabId),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl WorkspaceError {
    /// Stale pane, tab or node references.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkspaceError::Layout(err) if err.is_not_found())
    }
}
