//! Tab lifecycle within a pane.

use crate::close::close_pane;
use crate::error::{LayoutError, Result};
use crate::ids::{PaneId, TabId};
use crate::options::LayoutOptions;
use crate::tree::{LayoutTree, Pane, Tab};

impl Pane {
    /// Append a default tab and activate it. The tab takes the lowest
    /// number no other tab in the pane is named with.
    pub fn add_tab(&mut self, options: &LayoutOptions) -> TabId {
        let last = self.tabs.len() + 1;
        let ordinal = (1..=last)
            .find(|n| {
                let name = options.tab_name(*n);
                !self.tabs.iter().any(|tab| tab.name == name)
            })
            .unwrap_or(last);
        let tab = options.new_tab(ordinal);
        let id = tab.id;
        self.tabs.push(tab);
        self.active_tab = Some(id);
        id
    }

    /// Remove a tab. If it was active, the tab now at its index becomes
    /// active, or the new last tab. The pane may be left empty; the caller
    /// closes it.
    pub fn close_tab(&mut self, id: TabId) -> Result<Tab> {
        let index = self.tab_index(id).ok_or(LayoutError::TabNotFound {
            pane: self.id,
            tab: id,
        })?;
        let removed = self.tabs.remove(index);
        if self.active_tab == Some(id) {
            self.active_tab = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(|tab| tab.id);
        }
        Ok(removed)
    }

    pub fn set_active_tab(&mut self, id: TabId) -> Result<()> {
        if self.tab(id).is_none() {
            return Err(LayoutError::TabNotFound {
                pane: self.id,
                tab: id,
            });
        }
        self.active_tab = Some(id);
        Ok(())
    }

    /// Move a tab to `index`, clamped to the end. The active tab is kept.
    pub fn move_tab(&mut self, id: TabId, index: usize) -> Result<()> {
        let from = self.tab_index(id).ok_or(LayoutError::TabNotFound {
            pane: self.id,
            tab: id,
        })?;
        let tab = self.tabs.remove(from);
        let to = index.min(self.tabs.len());
        self.tabs.insert(to, tab);
        Ok(())
    }

    /// Activate the next tab, wrapping.
    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    /// Activate the previous tab, wrapping.
    pub fn prev_tab(&mut self) {
        self.cycle_tab(self.tabs.len().saturating_sub(1));
    }

    fn cycle_tab(&mut self, offset: usize) {
        if self.tabs.is_empty() {
            return;
        }
        let current = self
            .active_tab
            .and_then(|id| self.tab_index(id))
            .unwrap_or(0);
        let next = (current + offset) % self.tabs.len();
        self.active_tab = Some(self.tabs[next].id);
    }
}

/// Outcome of [`close_tab`].
#[derive(Clone, Debug, PartialEq)]
pub struct TabClosed {
    pub tree: LayoutTree,
    pub removed: Tab,
    /// Set when the tab was the pane's last and the pane was closed too:
    /// the pane that took its place.
    pub successor: Option<PaneId>,
}

/// Apply `edit` to a copy of the tree's pane `id`.
fn edit_pane<T>(
    tree: &LayoutTree,
    id: PaneId,
    edit: impl FnOnce(&mut Pane) -> Result<T>,
) -> Result<(LayoutTree, T)> {
    let mut root = tree.root.clone();
    let pane = root.find_pane_mut(id).ok_or(LayoutError::PaneNotFound(id))?;
    let out = edit(pane)?;
    Ok((LayoutTree::from_root(root), out))
}

pub fn add_tab(tree: &LayoutTree, pane: PaneId, options: &LayoutOptions) -> Result<(LayoutTree, TabId)> {
    let (tree, tab) = edit_pane(tree, pane, |pane| Ok(pane.add_tab(options)))?;
    tracing::debug!("Added tab {} to pane {}", tab.short(), pane.short());
    Ok((tree, tab))
}

/// Close a tab; a pane left without tabs is closed as well.
pub fn close_tab(
    tree: &LayoutTree,
    pane: PaneId,
    tab: TabId,
    options: &LayoutOptions,
) -> Result<TabClosed> {
    let (tree, removed) = edit_pane(tree, pane, |pane| pane.close_tab(tab))?;
    let emptied = tree.find_pane(pane).is_some_and(|pane| pane.tabs.is_empty());
    tracing::debug!("Closed tab {} in pane {}", tab.short(), pane.short());
    if !emptied {
        return Ok(TabClosed {
            tree,
            removed,
            successor: None,
        });
    }

    let closed = close_pane(&tree, pane, options)?;
    Ok(TabClosed {
        tree: closed.tree,
        removed,
        successor: Some(closed.successor),
    })
}

pub fn set_active_tab(tree: &LayoutTree, pane: PaneId, tab: TabId) -> Result<LayoutTree> {
    edit_pane(tree, pane, |pane| pane.set_active_tab(tab)).map(|(tree, ())| tree)
}

pub fn move_tab(tree: &LayoutTree, pane: PaneId, tab: TabId, index: usize) -> Result<LayoutTree> {
    edit_pane(tree, pane, |pane| pane.move_tab(tab, index)).map(|(tree, ())| tree)
}

pub fn next_tab(tree: &LayoutTree, pane: PaneId) -> Result<LayoutTree> {
    edit_pane(tree, pane, |pane| {
        pane.next_tab();
        Ok(())
    })
    .map(|(tree, ())| tree)
}

pub fn prev_tab(tree: &LayoutTree, pane: PaneId) -> Result<LayoutTree> {
    edit_pane(tree, pane, |pane| {
        pane.prev_tab();
        Ok(())
    })
    .map(|(tree, ())| tree)
}
