//! Closing a pane and collapsing what it leaves behind.

use crate::error::{LayoutError, Result};
use crate::ids::PaneId;
use crate::options::LayoutOptions;
use crate::simplify::{normalize_sizes, simplify};
use crate::tree::{LayoutTree, Pane};

/// Outcome of [`close_pane`].
#[derive(Clone, Debug, PartialEq)]
pub struct PaneClosed {
    pub tree: LayoutTree,
    /// The pane that was removed, with its tabs.
    pub removed: Pane,
    /// The pane that took the removed pane's place; focus goes here if the
    /// removed pane had it.
    pub successor: PaneId,
    /// The last pane was closed and the tree was reset to a default pane.
    pub reset: bool,
}

/// Remove a pane from the tree.
///
/// Remaining siblings are rescaled to fill the space, single-child splits
/// collapse into their child, and closing the last pane resets the layout to
/// a single default pane.
pub fn close_pane(tree: &LayoutTree, target: PaneId, options: &LayoutOptions) -> Result<PaneClosed> {
    let removed = tree
        .find_pane(target)
        .cloned()
        .ok_or(LayoutError::PaneNotFound(target))?;

    if tree.root.is_pane(target) {
        tracing::debug!("Closed last pane {}, resetting layout", target.short());
        return Ok(reset(options, removed));
    }

    let mut root = tree.root.clone();
    let successor = {
        let (parent, index) = root.parent_of_mut(target.into()).ok_or_else(|| {
            LayoutError::invariant(format!("pane {} has no parent split", target))
        })?;
        parent.children.remove(index);
        normalize_sizes(&mut parent.children);

        // The sibling now at `index` took the pane's place; when the pane was
        // last, the one before it did.
        match parent.children.get(index) {
            Some(next) => next.node.first_pane_id(),
            None => match parent.children.last() {
                Some(previous) => previous.node.last_pane_id(),
                None => {
                    return Err(LayoutError::invariant(format!(
                        "split {} was left empty",
                        parent.id
                    )))
                }
            },
        }
    };

    let Some(root) = simplify(root, options.merges_splits()) else {
        return Ok(reset(options, removed));
    };

    tracing::debug!(
        "Closed pane {}, successor {}",
        target.short(),
        successor.short()
    );
    Ok(PaneClosed {
        tree: LayoutTree::from_root(root),
        removed,
        successor,
        reset: false,
    })
}

fn reset(options: &LayoutOptions, removed: Pane) -> PaneClosed {
    let tree = LayoutTree::new(options);
    let successor = tree.first_pane_id();
    PaneClosed {
        tree,
        removed,
        successor,
        reset: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SplitBehavior;
    use crate::split::split_pane;
    use crate::tree::{Direction, LayoutNode};
    use crate::validate::validate;
    use pretty_assertions::assert_eq;

    fn sizes_close(actual: &[f32], expected: &[f32]) -> bool {
        actual.len() == expected.len()
            && actual.iter().zip(expected).all(|(a, e)| (a - e).abs() < 0.01)
    }

    #[test]
    fn closing_one_of_two_collapses_to_root_pane() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();

        let closed = close_pane(&tree, p1, &options).unwrap();

        assert!(closed.tree.root.is_pane(p0));
        assert_eq!(closed.successor, p0);
        assert_eq!(closed.removed.id, p1);
        assert!(!closed.reset);
    }

    #[test]
    fn siblings_are_rescaled_after_removal() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p1, Direction::Row, &options).unwrap();

        let closed = close_pane(&tree, p0, &options).unwrap();

        let split = closed.tree.root.as_split().unwrap();
        assert!(sizes_close(&split.sizes(), &[50.0, 50.0]));
        assert_eq!(closed.tree.pane_ids(), vec![p1, p2]);
        validate(&closed.tree).unwrap();
    }

    #[test]
    fn successor_is_next_sibling_or_previous_when_last() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p1, Direction::Row, &options).unwrap();

        assert_eq!(close_pane(&tree, p1, &options).unwrap().successor, p2);
        assert_eq!(close_pane(&tree, p2, &options).unwrap().successor, p1);
        assert_eq!(close_pane(&tree, p0, &options).unwrap().successor, p1);
    }

    #[test]
    fn successor_descends_into_nested_sibling() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, _) = split_pane(&tree, p1, Direction::Column, &options).unwrap();

        // Row { p0, Column { p1, p2 } }: the column takes p0's slot.
        let closed = close_pane(&tree, p0, &options).unwrap();
        assert_eq!(closed.successor, p1);
    }

    #[test]
    fn successor_is_last_pane_of_previous_sibling() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p0, Direction::Column, &options).unwrap();

        // Row { Column { p0, p2 }, p1 }
        assert_eq!(tree.pane_ids(), vec![p0, p2, p1]);
        let closed = close_pane(&tree, p1, &options).unwrap();

        assert_eq!(closed.successor, p2);
        assert_eq!(closed.tree.root.as_split().unwrap().direction, Direction::Column);
    }

    #[test]
    fn collapsed_split_keeps_its_size_in_grandparent() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (mut tree, p2) = split_pane(&tree, p1, Direction::Column, &options).unwrap();
        if let LayoutNode::Split(root) = &mut tree.root {
            root.children[0].size = 70.0;
            root.children[1].size = 30.0;
        }

        let closed = close_pane(&tree, p2, &options).unwrap();

        let root = closed.tree.root.as_split().unwrap();
        assert_eq!(closed.tree.pane_ids(), vec![p0, p1]);
        assert!(sizes_close(&root.sizes(), &[70.0, 30.0]));
    }

    #[test]
    fn collapse_flattens_same_direction_under_merge() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        // Row { p0, Column { p1, Row { p2, p3 } } }
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p1, Direction::Column, &options).unwrap();
        let (tree, p3) = split_pane(&tree, p2, Direction::Row, &options).unwrap();

        let closed = close_pane(&tree, p1, &options).unwrap();

        let root = closed.tree.root.as_split().unwrap();
        assert_eq!(root.direction, Direction::Row);
        assert_eq!(root.children.len(), 3);
        assert!(sizes_close(&root.sizes(), &[50.0, 25.0, 25.0]));
        assert_eq!(closed.tree.pane_ids(), vec![p0, p2, p3]);
        validate(&closed.tree).unwrap();
    }

    #[test]
    fn collapse_keeps_nesting_under_nest_behavior() {
        let options = LayoutOptions {
            split_behavior: SplitBehavior::Nest,
            ..LayoutOptions::default()
        };
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();
        let (tree, p1) = split_pane(&tree, p0, Direction::Row, &options).unwrap();
        let (tree, p2) = split_pane(&tree, p1, Direction::Column, &options).unwrap();
        let (tree, _) = split_pane(&tree, p2, Direction::Row, &options).unwrap();

        let closed = close_pane(&tree, p1, &options).unwrap();

        let root = closed.tree.root.as_split().unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[1].node.as_split().unwrap().direction, Direction::Row);
    }

    #[test]
    fn closing_last_pane_resets_layout() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let p0 = tree.first_pane_id();

        let closed = close_pane(&tree, p0, &options).unwrap();

        assert!(closed.reset);
        assert_eq!(closed.tree.pane_count(), 1);
        assert_ne!(closed.successor, p0);
        assert_eq!(closed.tree.first_pane_id(), closed.successor);
        assert_eq!(closed.tree.panes()[0].tabs.len(), 1);
    }

    #[test]
    fn unknown_pane_is_not_found() {
        let options = LayoutOptions::default();
        let tree = LayoutTree::new(&options);
        let stale = PaneId::new();
        assert_eq!(
            close_pane(&tree, stale, &options).unwrap_err(),
            LayoutError::PaneNotFound(stale)
        );
    }
}
