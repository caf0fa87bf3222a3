//! Pane layout engine.
//!
//! A session's terminal area is a tree of splits whose leaves are panes, each
//! pane holding one or more tabs. Every mutation here is a pure function from
//! one tree (or [`LayoutState`]) to the next; callers swap the result in.
//!
//! After every mutation:
//! - each split has at least two children and their sizes sum to 100,
//! - each pane has at least one tab and a valid active tab,
//! - the tree has at least one pane.

mod close;
mod error;
mod focus;
mod geometry;
mod ids;
mod options;
mod outline;
mod resize;
mod simplify;
mod split;
mod state;
mod tabs;
mod tree;
mod validate;

#[cfg(test)]
mod invariant_tests;

pub use close::{close_pane, PaneClosed};
pub use error::{LayoutError, Result};
pub use focus::{focus_next, focus_prev};
pub use geometry::{dividers, pane_at, pane_rects, Divider, Rect};
pub use ids::{NodeId, PaneId, SessionId, SplitId, TabId};
pub use options::{
    LayoutOptions, SplitBehavior, DEFAULT_MIN_SIZE, DEFAULT_TAB_PREFIX, FULL_EXTENT, SIZE_EPSILON,
};
pub use resize::resize_siblings;
pub use simplify::simplify;
pub use split::split_pane;
pub use state::LayoutState;
pub use tabs::{add_tab, close_tab, move_tab, next_tab, prev_tab, set_active_tab, TabClosed};
pub use tree::{Direction, LayoutNode, LayoutTree, Pane, ShellKind, Split, SplitChild, Tab};
pub use validate::validate;

/// Reached only if a split lost all its children, which simplification
/// never leaves behind.
#[cold]
pub(crate) fn debug_empty_split(split: SplitId) -> PaneId {
    util::debug_panic!("split {} has no children", split);
    PaneId::new()
}
