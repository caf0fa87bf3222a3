//! Action → operation table, applied to a session's focused pane.

use crate::error::Result;
use crate::sessions::Workspace;
use actions::Action;
use pane_layout::{Direction, SessionId};

impl Workspace {
    /// Run `action` against the active pane (and its active tab).
    pub fn dispatch(&mut self, id: SessionId, action: Action) -> Result<()> {
        let pane = self.active_pane(id)?;
        tracing::debug!("Dispatching {} on pane {}", action, pane.short());

        match action {
            Action::SplitVertical => {
                self.split_pane(id, pane, Direction::Row)?;
            }
            Action::SplitHorizontal => {
                self.split_pane(id, pane, Direction::Column)?;
            }
            Action::ClosePane => {
                self.close_pane(id, pane)?;
            }
            Action::FocusNextPane => {
                self.focus_next(id)?;
            }
            Action::FocusPrevPane => {
                self.focus_prev(id)?;
            }
            Action::NewTab => {
                self.add_tab(id, pane)?;
            }
            Action::CloseTab => {
                let Some(tab) = self.active_tab(id)?.map(|tab| tab.id) else {
                    return Ok(());
                };
                self.close_tab(id, pane, tab)?;
            }
            Action::NextTab => self.next_tab(id, pane)?,
            Action::PrevTab => self.prev_tab(id, pane)?,
        }
        Ok(())
    }

    /// Look `chord` up in the keymap and dispatch what it is bound to.
    /// Returns the action that ran, or `None` for an unbound chord.
    pub fn handle_key(&mut self, id: SessionId, chord: &str) -> Result<Option<Action>> {
        let Some(action) = self.keymap().action_for(chord) else {
            tracing::debug!("No binding for {:?}", chord);
            return Ok(None);
        };
        self.dispatch(id, action)?;
        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use crate::keymap::Keymap;
    use crate::sessions::Workspace;
    use crate::transport::NullTransport;
    use crate::WorkspaceError;
    use actions::Action;
    use pane_layout::{Direction, LayoutOptions, SessionId, SplitBehavior};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn workspace() -> (Workspace, SessionId) {
        let mut ws = Workspace::new(
            LayoutOptions::default(),
            Keymap::defaults(),
            Box::new(NullTransport),
        );
        let id = ws.open_session();
        (ws, id)
    }

    #[test_case(Action::SplitVertical, Direction::Row ; "vertical divider splits into a row")]
    #[test_case(Action::SplitHorizontal, Direction::Column ; "horizontal divider splits into a column")]
    fn split_actions_pick_direction(action: Action, direction: Direction) {
        let (mut ws, id) = workspace();
        let first = ws.active_pane(id).unwrap();

        ws.dispatch(id, action).unwrap();

        let tree = ws.tree(id).unwrap();
        assert_eq!(tree.root.as_split().unwrap().direction, direction);
        assert_eq!(tree.pane_ids()[0], first);
        assert_eq!(ws.active_pane(id).unwrap(), tree.pane_ids()[1]);
    }

    #[test]
    fn close_pane_closes_focused_pane() {
        let (mut ws, id) = workspace();
        let first = ws.active_pane(id).unwrap();
        ws.dispatch(id, Action::SplitVertical).unwrap();

        ws.dispatch(id, Action::ClosePane).unwrap();

        assert!(ws.tree(id).unwrap().root.is_pane(first));
        assert_eq!(ws.active_pane(id).unwrap(), first);
    }

    #[test]
    fn focus_actions_cycle_panes() {
        let (mut ws, id) = workspace();
        let first = ws.active_pane(id).unwrap();
        ws.dispatch(id, Action::SplitVertical).unwrap();
        let second = ws.active_pane(id).unwrap();

        ws.dispatch(id, Action::FocusNextPane).unwrap();
        assert_eq!(ws.active_pane(id).unwrap(), first);

        ws.dispatch(id, Action::FocusPrevPane).unwrap();
        assert_eq!(ws.active_pane(id).unwrap(), second);
    }

    #[test]
    fn tab_actions_edit_focused_pane() {
        let (mut ws, id) = workspace();
        let first = ws.active_tab(id).unwrap().unwrap().id;

        ws.dispatch(id, Action::NewTab).unwrap();
        let second = ws.active_tab(id).unwrap().unwrap().id;
        assert_ne!(first, second);

        ws.dispatch(id, Action::NextTab).unwrap();
        assert_eq!(ws.active_tab(id).unwrap().unwrap().id, first);

        ws.dispatch(id, Action::PrevTab).unwrap();
        assert_eq!(ws.active_tab(id).unwrap().unwrap().id, second);

        ws.dispatch(id, Action::CloseTab).unwrap();
        assert_eq!(ws.active_tab(id).unwrap().unwrap().id, first);
    }

    #[test]
    fn closing_last_tab_closes_pane() {
        let (mut ws, id) = workspace();
        let first = ws.active_pane(id).unwrap();
        ws.dispatch(id, Action::SplitHorizontal).unwrap();

        ws.dispatch(id, Action::CloseTab).unwrap();

        assert_eq!(ws.tree(id).unwrap().pane_ids(), vec![first]);
    }

    #[test]
    fn merge_keeps_repeated_splits_flat() {
        let (mut ws, id) = workspace();
        for _ in 0..3 {
            ws.dispatch(id, Action::SplitVertical).unwrap();
        }
        let root = ws.tree(id).unwrap().root.as_split().unwrap();
        assert_eq!(root.children.len(), 4);
    }

    #[test]
    fn nest_builds_pairs() {
        let mut ws = Workspace::new(
            LayoutOptions {
                split_behavior: SplitBehavior::Nest,
                ..LayoutOptions::default()
            },
            Keymap::defaults(),
            Box::new(NullTransport),
        );
        let id = ws.open_session();
        ws.dispatch(id, Action::SplitVertical).unwrap();
        ws.dispatch(id, Action::SplitVertical).unwrap();

        let root = ws.tree(id).unwrap().root.as_split().unwrap();
        assert_eq!(root.children.len(), 2);
        assert!(root.children[1].node.as_split().is_some());
    }

    #[test]
    fn handle_key_runs_bound_action() {
        let (mut ws, id) = workspace();

        assert_eq!(ws.handle_key(id, "Cmd+D").unwrap(), Some(Action::SplitVertical));
        assert_eq!(ws.tree(id).unwrap().pane_count(), 2);
    }

    #[test]
    fn handle_key_ignores_unbound_chord() {
        let (mut ws, id) = workspace();
        let before = ws.snapshot(id).unwrap();

        assert_eq!(ws.handle_key(id, "cmd-k").unwrap(), None);
        assert_eq!(ws.snapshot(id).unwrap(), before);
    }

    #[test]
    fn dispatch_on_unknown_session_fails() {
        let (mut ws, _) = workspace();
        let stale = SessionId::new();
        assert_eq!(
            ws.dispatch(stale, Action::NewTab),
            Err(WorkspaceError::SessionNotFound(stale))
        );
    }
}
