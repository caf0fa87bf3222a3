//! Focus navigation in traversal order.

use crate::ids::PaneId;
use crate::tree::LayoutTree;

/// The pane after `current` in traversal order, wrapping to the first.
/// A `current` that is no longer in the tree yields the first pane.
pub fn focus_next(tree: &LayoutTree, current: PaneId) -> PaneId {
    step(tree, current, 1)
}

/// The pane before `current` in traversal order, wrapping to the last.
/// A `current` that is no longer in the tree yields the first pane.
pub fn focus_prev(tree: &LayoutTree, current: PaneId) -> PaneId {
    let count = tree.pane_count().max(1);
    step(tree, current, count - 1)
}

fn step(tree: &LayoutTree, current: PaneId, offset: usize) -> PaneId {
    let ids = tree.pane_ids();
    match ids.iter().position(|id| *id == current) {
        Some(index) => ids[(index + offset) % ids.len()],
        None => {
            tracing::debug!("Focus source {} is stale, using first pane", current.short());
            tree.first_pane_id()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;
    use crate::split::split_pane;
    use crate::tree::Direction;
    use pretty_assertions::assert_eq;

    /// Row { p0, Column { p1, p2 } }
    fn sample() -> (LayoutTree, [PaneId; 3]) {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p1, Direction::Column, &options).unwrap();
        (tree, [p0, p1, p2])
    }

    #[test]
    fn next_walks_traversal_order_and_wraps() {
        let (tree, [p0, p1, p2]) = sample();
        assert_eq!(focus_next(&tree, p0), p1);
        assert_eq!(focus_next(&tree, p1), p2);
        assert_eq!(focus_next(&tree, p2), p0);
    }

    #[test]
    fn prev_walks_backwards_and_wraps() {
        let (tree, [p0, p1, p2]) = sample();
        assert_eq!(focus_prev(&tree, p0), p2);
        assert_eq!(focus_prev(&tree, p2), p1);
        assert_eq!(focus_prev(&tree, p1), p0);
    }

    #[test]
    fn single_pane_focuses_itself() {
        let tree = LayoutTree::new(&LayoutOptions::default());
        let only = tree.first_pane_id();
        assert_eq!(focus_next(&tree, only), only);
        assert_eq!(focus_prev(&tree, only), only);
    }

    #[test]
    fn stale_current_falls_back_to_first_pane() {
        let (tree, [p0, _, _]) = sample();
        assert_eq!(focus_next(&tree, PaneId::new()), p0);
        assert_eq!(focus_prev(&tree, PaneId::new()), p0);
    }

    #[test]
    fn prev_undoes_next() {
        let (tree, panes) = sample();
        for pane in panes {
            assert_eq!(focus_prev(&tree, focus_next(&tree, pane)), pane);
        }
    }
}
