//! The per-session layout arena.
//!
//! Each session owns one [`LayoutState`]. Mutations compute the next state
//! from the current one, validate it, swap it in, then tell the transport
//! which tabs appeared and disappeared.

use crate::error::{Result, WorkspaceError};
use crate::keymap::Keymap;
use crate::transport::TerminalTransport;
use collections::{FxHashSet, IndexMap};
use pane_layout::{
    Direction, LayoutOptions, LayoutState, LayoutTree, NodeId, Pane, PaneId, SessionId, Tab, TabId,
};
use settings::Config;

pub struct Workspace {
    sessions: IndexMap<SessionId, LayoutState>,
    options: LayoutOptions,
    keymap: Keymap,
    transport: Box<dyn TerminalTransport>,
}

impl Workspace {
    pub fn new(options: LayoutOptions, keymap: Keymap, transport: Box<dyn TerminalTransport>) -> Self {
        Self {
            sessions: collections::index_map(),
            options,
            keymap,
            transport,
        }
    }

    /// Layout options and keybindings taken from the user's config.
    pub fn from_config(config: &Config, transport: Box<dyn TerminalTransport>) -> Self {
        Self::new(
            config.layout_options(),
            Keymap::with_overrides(&config.keybindings),
            transport,
        )
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    /// Start a session with a single default pane.
    pub fn open_session(&mut self) -> SessionId {
        let id = SessionId::new();
        let state = LayoutState::new(&self.options);
        for tab in state.tree.tabs() {
            self.transport.open_tab(id, tab);
        }
        self.sessions.insert(id, state);
        tracing::info!("Opened session {}", id.short());
        id
    }

    /// Drop a session, closing all of its tabs.
    pub fn end_session(&mut self, id: SessionId) -> Result<()> {
        let state = self
            .sessions
            .shift_remove(&id)
            .ok_or(WorkspaceError::SessionNotFound(id))?;
        for tab in state.tree.tabs() {
            self.transport.close_tab(id, tab.id);
        }
        tracing::info!("Ended session {}", id.short());
        Ok(())
    }

    /// Adopt a snapshot from an external store as a new session.
    pub fn restore_session(&mut self, snapshot: LayoutState) -> Result<SessionId> {
        let state = LayoutState::from_parts(snapshot.tree, snapshot.active_pane)?;
        let live: FxHashSet<TabId> = self
            .sessions
            .values()
            .flat_map(|session| session.tree.tabs().map(|tab| tab.id))
            .collect();
        if let Some(tab) = state.tree.tabs().find(|tab| live.contains(&tab.id)) {
            return Err(WorkspaceError::TabInUse(tab.id));
        }

        let id = SessionId::new();
        for tab in state.tree.tabs() {
            self.transport.open_tab(id, tab);
        }
        tracing::info!(
            "Restored session {} with {} panes",
            id.short(),
            state.tree.pane_count()
        );
        self.sessions.insert(id, state);
        Ok(id)
    }

    /// Open sessions, oldest first.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self, id: SessionId) -> Result<&LayoutState> {
        self.sessions
            .get(&id)
            .ok_or(WorkspaceError::SessionNotFound(id))
    }

    pub fn tree(&self, id: SessionId) -> Result<&LayoutTree> {
        self.state(id).map(|state| &state.tree)
    }

    pub fn active_pane(&self, id: SessionId) -> Result<PaneId> {
        self.state(id).map(|state| state.active_pane)
    }

    pub fn active_tab(&self, id: SessionId) -> Result<Option<&Tab>> {
        self.state(id).map(LayoutState::active_tab)
    }

    /// Owned copy of the session's layout, for an external store.
    pub fn snapshot(&self, id: SessionId) -> Result<LayoutState> {
        self.state(id).cloned()
    }

    // ------------------------------------------------------------------
    // Pane operations
    // ------------------------------------------------------------------

    /// Split a pane; the new pane takes focus.
    pub fn split_pane(&mut self, id: SessionId, pane: PaneId, direction: Direction) -> Result<PaneId> {
        self.apply(id, |state, options| state.split(pane, direction, options))
    }

    /// Close a pane; its tabs are closed with it.
    pub fn close_pane(&mut self, id: SessionId, pane: PaneId) -> Result<Pane> {
        self.apply(id, |state, options| state.close(pane, options))
    }

    /// Resize a node against its sibling. Returns the delta applied; a stale
    /// node applies nothing.
    pub fn resize_siblings(&mut self, id: SessionId, node: NodeId, delta: f32) -> Result<f32> {
        let result = self.apply(id, |state, options| state.resize(node, delta, options));
        recover_not_found(result, 0.0, "resize")
    }

    pub fn focus_next(&mut self, id: SessionId) -> Result<PaneId> {
        self.apply(id, |state, _| {
            let next = state.focus_next();
            let pane = next.active_pane;
            Ok((next, pane))
        })
    }

    pub fn focus_prev(&mut self, id: SessionId) -> Result<PaneId> {
        self.apply(id, |state, _| {
            let prev = state.focus_prev();
            let pane = prev.active_pane;
            Ok((prev, pane))
        })
    }

    /// Focus a specific pane (click-to-focus). A stale pane leaves focus
    /// where it was.
    pub fn focus_pane(&mut self, id: SessionId, pane: PaneId) -> Result<()> {
        let result = self.apply(id, |state, _| state.focus(pane).map(|next| (next, ())));
        recover_not_found(result, (), "focus")
    }

    // ------------------------------------------------------------------
    // Tab operations
    // ------------------------------------------------------------------

    /// Append a default tab to `pane` and activate it. Returns `None` when
    /// the pane is gone.
    pub fn add_tab(&mut self, id: SessionId, pane: PaneId) -> Result<Option<TabId>> {
        let result = self.apply(id, |state, options| {
            state
                .add_tab(pane, options)
                .map(|(next, tab)| (next, Some(tab)))
        });
        recover_not_found(result, None, "add tab")
    }

    /// Close a tab; closing a pane's last tab closes the pane. A stale tab
    /// or pane is ignored.
    pub fn close_tab(&mut self, id: SessionId, pane: PaneId, tab: TabId) -> Result<()> {
        let result = self.apply(id, |state, options| {
            state.close_tab(pane, tab, options).map(|(next, _)| (next, ()))
        });
        recover_not_found(result, (), "close tab")
    }

    pub fn set_active_tab(&mut self, id: SessionId, pane: PaneId, tab: TabId) -> Result<()> {
        let result =
            self.apply(id, |state, _| state.set_active_tab(pane, tab).map(|next| (next, ())));
        recover_not_found(result, (), "set active tab")
    }

    pub fn move_tab(&mut self, id: SessionId, pane: PaneId, tab: TabId, index: usize) -> Result<()> {
        let result = self.apply(id, |state, _| {
            state.move_tab(pane, tab, index).map(|next| (next, ()))
        });
        recover_not_found(result, (), "move tab")
    }

    pub fn next_tab(&mut self, id: SessionId, pane: PaneId) -> Result<()> {
        let result = self.apply(id, |state, _| state.next_tab(pane).map(|next| (next, ())));
        recover_not_found(result, (), "next tab")
    }

    pub fn prev_tab(&mut self, id: SessionId, pane: PaneId) -> Result<()> {
        let result = self.apply(id, |state, _| state.prev_tab(pane).map(|next| (next, ())));
        recover_not_found(result, (), "previous tab")
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    fn apply<T>(
        &mut self,
        id: SessionId,
        op: impl FnOnce(&LayoutState, &LayoutOptions) -> pane_layout::Result<(LayoutState, T)>,
    ) -> Result<T> {
        let current = self.state(id)?;
        let (next, out) = op(current, &self.options)?;
        self.commit(id, next)?;
        Ok(out)
    }

    /// Swap in a new state after checking it, then notify the transport.
    /// An invalid state is a bug; the session keeps its previous layout.
    fn commit(&mut self, id: SessionId, next: LayoutState) -> Result<()> {
        if let Err(err) = next.validate() {
            util::debug_panic!("Rejected layout for session {}: {}", id.short(), err);
            return Err(err.into());
        }
        let slot = self
            .sessions
            .get_mut(&id)
            .ok_or(WorkspaceError::SessionNotFound(id))?;
        let previous = std::mem::replace(slot, next);
        notify_tab_changes(self.transport.as_mut(), id, &previous.tree, &slot.tree);
        Ok(())
    }
}

/// Closed tabs in their old order, then opened tabs in their new order.
fn notify_tab_changes(
    transport: &mut dyn TerminalTransport,
    session: SessionId,
    before: &LayoutTree,
    after: &LayoutTree,
) {
    let old: FxHashSet<TabId> = before.tabs().map(|tab| tab.id).collect();
    let new: FxHashSet<TabId> = after.tabs().map(|tab| tab.id).collect();

    for tab in before.tabs().filter(|tab| !new.contains(&tab.id)) {
        tracing::debug!("Closing tab {} in session {}", tab.id.short(), session.short());
        transport.close_tab(session, tab.id);
    }
    for tab in after.tabs().filter(|tab| !old.contains(&tab.id)) {
        tracing::debug!("Opening tab {} in session {}", tab.id.short(), session.short());
        transport.open_tab(session, tab);
    }
}

/// Turn a stale-reference error into `fallback`, leaving other errors.
fn recover_not_found<T>(result: Result<T>, fallback: T, what: &str) -> Result<T> {
    match result {
        Err(err) if err.is_not_found() => {
            tracing::debug!("Ignoring {} with stale reference: {}", what, err);
            Ok(fallback)
        }
        other => other,
    }
}
