//! Splitting a pane in two.

use crate::error::{LayoutError, Result};
use crate::ids::PaneId;
use crate::options::{LayoutOptions, FULL_EXTENT};
use crate::simplify::normalize_sizes;
use crate::tree::{Direction, LayoutNode, LayoutTree, Pane, Split, SplitChild};

/// Split a pane, placing a fresh pane (one default tab) after it.
///
/// The target is wrapped in a new `direction` split sized 50/50, unless its
/// parent already splits along `direction` and options ask for merging; then
/// the new pane joins the parent right after the target and every sibling
/// gives up an equal proportion of its share.
///
/// Returns the new tree and the id of the new pane.
pub fn split_pane(
    tree: &LayoutTree,
    target: PaneId,
    direction: Direction,
    options: &LayoutOptions,
) -> Result<(LayoutTree, PaneId)> {
    if tree.find_pane(target).is_none() {
        return Err(LayoutError::PaneNotFound(target));
    }

    let fresh = options.new_pane();
    let new_id = fresh.id;
    let mut slot = Some(fresh);
    let root = split_node(
        tree.root.clone(),
        target,
        direction,
        &mut slot,
        options.merges_splits(),
    );

    if slot.is_some() {
        return Err(LayoutError::invariant(format!(
            "pane {} vanished while splitting",
            target
        )));
    }

    tracing::debug!(
        "Split pane {} ({}) -> new pane {}",
        target.short(),
        direction.label(),
        new_id.short()
    );
    Ok((LayoutTree::from_root(root), new_id))
}

/// Rebuild `node` with the split applied. `fresh` is taken exactly once.
fn split_node(
    node: LayoutNode,
    target: PaneId,
    direction: Direction,
    fresh: &mut Option<Pane>,
    merge: bool,
) -> LayoutNode {
    match node {
        LayoutNode::Pane(pane) if pane.id == target => match fresh.take() {
            Some(new_pane) => LayoutNode::Split(Split::halves(
                direction,
                LayoutNode::Pane(pane),
                LayoutNode::Pane(new_pane),
            )),
            None => LayoutNode::Pane(pane),
        },
        LayoutNode::Pane(pane) => LayoutNode::Pane(pane),
        LayoutNode::Split(mut split) => {
            if merge && split.direction == direction {
                if let Some(index) = split
                    .children
                    .iter()
                    .position(|child| child.node.is_pane(target))
                {
                    if let Some(new_pane) = fresh.take() {
                        insert_sibling(&mut split, index + 1, LayoutNode::Pane(new_pane));
                    }
                    return LayoutNode::Split(split);
                }
            }

            split.children = split
                .children
                .into_iter()
                .map(|child| SplitChild {
                    size: child.size,
                    node: split_node(child.node, target, direction, fresh, merge),
                })
                .collect();
            LayoutNode::Split(split)
        }
    }
}

/// Insert `node` at `index`, scaling the n existing shares by n/(n+1) and
/// giving the newcomer 100/(n+1).
fn insert_sibling(split: &mut Split, index: usize, node: LayoutNode) {
    let existing = split.children.len() as f32;
    let scale = existing / (existing + 1.0);
    for child in &mut split.children {
        child.size *= scale;
    }
    let index = index.min(split.children.len());
    split
        .children
        .insert(index, SplitChild::new(FULL_EXTENT / (existing + 1.0), node));
    normalize_sizes(&mut split.children);
}
