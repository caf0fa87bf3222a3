//! A session's layout: the tree plus which pane has focus.
//!
//! Every method takes `&self` and returns the next state, so a caller can
//! keep the old value until the new one is known to be good.

use crate::close::close_pane;
use crate::error::{LayoutError, Result};
use crate::focus;
use crate::ids::{NodeId, PaneId, TabId};
use crate::options::LayoutOptions;
use crate::resize::resize_siblings;
use crate::split::split_pane;
use crate::tabs;
use crate::tree::{Direction, LayoutTree, Pane, Tab};
use crate::validate::validate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub tree: LayoutTree,
    pub active_pane: PaneId,
}

impl LayoutState {
    /// A single default pane, focused.
    pub fn new(options: &LayoutOptions) -> Self {
        let tree = LayoutTree::new(options);
        let active_pane = tree.first_pane_id();
        Self { tree, active_pane }
    }

    /// Adopt a tree and focus from outside, e.g. a stored snapshot.
    pub fn from_parts(tree: LayoutTree, active_pane: PaneId) -> Result<Self> {
        let state = Self { tree, active_pane };
        state.validate()?;
        Ok(state)
    }

    /// Structural checks plus "focus points at a pane in the tree".
    pub fn validate(&self) -> Result<()> {
        validate(&self.tree)?;
        if self.tree.find_pane(self.active_pane).is_none() {
            return Err(LayoutError::invariant(format!(
                "active pane {} is not in the tree",
                self.active_pane
            )));
        }
        Ok(())
    }

    pub fn active(&self) -> Option<&Pane> {
        self.tree.find_pane(self.active_pane)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active().and_then(Pane::active)
    }

    fn with_tree(&self, tree: LayoutTree) -> Self {
        Self {
            tree,
            active_pane: self.active_pane,
        }
    }

    /// Split `pane`; the new pane takes focus.
    pub fn split(&self, pane: PaneId, direction: Direction, options: &LayoutOptions) -> Result<(Self, PaneId)> {
        let (tree, new_pane) = split_pane(&self.tree, pane, direction, options)?;
        Ok((
            Self {
                tree,
                active_pane: new_pane,
            },
            new_pane,
        ))
    }

    /// Close `pane`. Focus moves to its successor if it had focus, or if the
    /// layout was reset.
    pub fn close(&self, pane: PaneId, options: &LayoutOptions) -> Result<(Self, Pane)> {
        let closed = close_pane(&self.tree, pane, options)?;
        let active_pane = if closed.reset || self.active_pane == pane {
            closed.successor
        } else {
            self.active_pane
        };
        Ok((
            Self {
                tree: closed.tree,
                active_pane,
            },
            closed.removed,
        ))
    }

    pub fn resize(&self, node: NodeId, delta: f32, options: &LayoutOptions) -> Result<(Self, f32)> {
        let (tree, applied) = resize_siblings(&self.tree, node, delta, options.min_size)?;
        Ok((self.with_tree(tree), applied))
    }

    pub fn focus_next(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            active_pane: focus::focus_next(&self.tree, self.active_pane),
        }
    }

    pub fn focus_prev(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            active_pane: focus::focus_prev(&self.tree, self.active_pane),
        }
    }

    /// Focus a pane explicitly (click-to-focus).
    pub fn focus(&self, pane: PaneId) -> Result<Self> {
        if self.tree.find_pane(pane).is_none() {
            return Err(LayoutError::PaneNotFound(pane));
        }
        Ok(Self {
            tree: self.tree.clone(),
            active_pane: pane,
        })
    }

    pub fn add_tab(&self, pane: PaneId, options: &LayoutOptions) -> Result<(Self, TabId)> {
        let (tree, tab) = tabs::add_tab(&self.tree, pane, options)?;
        Ok((self.with_tree(tree), tab))
    }

    /// Close a tab. When that empties its pane, the pane closes and focus
    /// follows the same rule as [`LayoutState::close`].
    pub fn close_tab(&self, pane: PaneId, tab: TabId, options: &LayoutOptions) -> Result<(Self, Tab)> {
        let closed = tabs::close_tab(&self.tree, pane, tab, options)?;
        let active_pane = match closed.successor {
            Some(successor) if self.active_pane == pane => successor,
            _ if closed.tree.find_pane(self.active_pane).is_none() => closed.tree.first_pane_id(),
            _ => self.active_pane,
        };
        Ok((
            Self {
                tree: closed.tree,
                active_pane,
            },
            closed.removed,
        ))
    }

    pub fn set_active_tab(&self, pane: PaneId, tab: TabId) -> Result<Self> {
        tabs::set_active_tab(&self.tree, pane, tab).map(|tree| self.with_tree(tree))
    }

    pub fn move_tab(&self, pane: PaneId, tab: TabId, index: usize) -> Result<Self> {
        tabs::move_tab(&self.tree, pane, tab, index).map(|tree| self.with_tree(tree))
    }

    pub fn next_tab(&self, pane: PaneId) -> Result<Self> {
        tabs::next_tab(&self.tree, pane).map(|tree| self.with_tree(tree))
    }

    pub fn prev_tab(&self, pane: PaneId) -> Result<Self> {
        tabs::prev_tab(&self.tree, pane).map(|tree| self.with_tree(tree))
    }
}
