//! Resizing adjacent siblings within a split.

use crate::error::{LayoutError, Result};
use crate::ids::NodeId;
use crate::tree::LayoutTree;

/// Grow `node` by `delta` percent of its parent's extent, shrinking its
/// partner sibling by the same amount.
///
/// The partner is the next sibling, or the previous one when `node` is the
/// last child. Neither child is pushed below `min_size`, and a child already
/// below it cannot shrink further; the delta is reduced to fit, so the pair's
/// combined share never changes. Other siblings are untouched.
///
/// Returns the new tree and the delta actually applied. Resizing the root is
/// a no-op.
pub fn resize_siblings(
    tree: &LayoutTree,
    node: NodeId,
    delta: f32,
    min_size: f32,
) -> Result<(LayoutTree, f32)> {
    if !tree.contains(node) {
        return Err(LayoutError::NodeNotFound(node));
    }
    if tree.root.id() == node || delta == 0.0 || !delta.is_finite() {
        return Ok((tree.clone(), 0.0));
    }

    let mut root = tree.root.clone();
    let (split, index) = root
        .parent_of_mut(node)
        .ok_or_else(|| LayoutError::invariant(format!("{} has no parent split", node)))?;

    let partner = if index + 1 < split.children.len() {
        index + 1
    } else if index > 0 {
        index - 1
    } else {
        return Err(LayoutError::invariant(format!(
            "split {} has a single child",
            split.id
        )));
    };

    let size = split.children[index].size;
    let partner_size = split.children[partner].size;
    let (grown, shrunk) = clamp_pair(size, partner_size, delta, min_size);
    split.children[index].size = grown;
    split.children[partner].size = shrunk;
    let applied = grown - size;

    if applied != delta {
        tracing::trace!("Resize of {} clamped from {} to {}", node, delta, applied);
    }
    Ok((LayoutTree::from_root(root), applied))
}

/// Move `delta` from `partner` to `size`, honouring the floor on both sides.
/// Returns the new `(size, partner)` pair; their sum equals the old sum.
fn clamp_pair(size: f32, partner: f32, delta: f32, min_size: f32) -> (f32, f32) {
    let total = size + partner;
    let floor = min_size.min(size);
    let partner_floor = min_size.min(partner);
    let upper = total - partner_floor;
    if upper < floor {
        return (size, partner);
    }
    let grown = (size + delta).clamp(floor, upper);
    (grown, total - grown)
}
