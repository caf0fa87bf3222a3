use crate::ids::{NodeId, PaneId, TabId};
use thiserror::Error;

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("pane {0} not found in layout")]
    PaneNotFound(PaneId),

    #[error("tab {tab} not found in pane {pane}")]
    TabNotFound { pane: PaneId, tab: TabId },

    #[error("{0} not found in layout")]
    NodeNotFound(NodeId),

    /// A mutation produced a tree that breaks a structural rule. Always a bug.
    #[error("layout invariant violated: {0}")]
    InvariantViolation(String),
}

impl LayoutError {
    /// Stale-reference errors, as opposed to broken invariants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LayoutError::PaneNotFound(_)
                | LayoutError::TabNotFound { .. }
                | LayoutError::NodeNotFound(_)
        )
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        LayoutError::InvariantViolation(reason.into())
    }
}
