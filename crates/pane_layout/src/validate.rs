//! Structural checks every layout must pass after a mutation.

use crate::error::{LayoutError, Result};
use crate::options::{FULL_EXTENT, SIZE_EPSILON};
use crate::tree::{LayoutNode, LayoutTree, Pane, Split};
use collections::FxHashSet;
use uuid::Uuid;

/// Check the structural rules of a layout tree.
///
/// Splits have at least two children whose finite, positive sizes sum to
/// 100; panes hold at least one tab with an active tab that exists; no id
/// appears twice.
pub fn validate(tree: &LayoutTree) -> Result<()> {
    let mut seen = FxHashSet::default();
    validate_node(&tree.root, &mut seen)
}

fn validate_node(node: &LayoutNode, seen: &mut FxHashSet<Uuid>) -> Result<()> {
    match node {
        LayoutNode::Pane(pane) => validate_pane(pane, seen),
        LayoutNode::Split(split) => {
            validate_split(split, seen)?;
            split
                .children
                .iter()
                .try_for_each(|child| validate_node(&child.node, seen))
        }
    }
}

fn validate_pane(pane: &Pane, seen: &mut FxHashSet<Uuid>) -> Result<()> {
    if !seen.insert(pane.id.as_uuid()) {
        return Err(LayoutError::invariant(format!("duplicate pane id {}", pane.id)));
    }
    if pane.tabs.is_empty() {
        return Err(LayoutError::invariant(format!("pane {} has no tabs", pane.id)));
    }
    match pane.active_tab {
        Some(active) if pane.tab(active).is_some() => {}
        Some(active) => {
            return Err(LayoutError::invariant(format!(
                "pane {} has active tab {} it does not hold",
                pane.id, active
            )))
        }
        None => {
            return Err(LayoutError::invariant(format!(
                "pane {} has tabs but no active tab",
                pane.id
            )))
        }
    }
    for tab in &pane.tabs {
        if !seen.insert(tab.id.as_uuid()) {
            return Err(LayoutError::invariant(format!("duplicate tab id {}", tab.id)));
        }
    }
    Ok(())
}

fn validate_split(split: &Split, seen: &mut FxHashSet<Uuid>) -> Result<()> {
    if !seen.insert(split.id.as_uuid()) {
        return Err(LayoutError::invariant(format!("duplicate split id {}", split.id)));
    }
    if split.children.len() < 2 {
        return Err(LayoutError::invariant(format!(
            "split {} has {} children",
            split.id,
            split.children.len()
        )));
    }
    if let Some(bad) = split
        .children
        .iter()
        .find(|child| !child.size.is_finite() || child.size <= 0.0)
    {
        return Err(LayoutError::invariant(format!(
            "split {} has child size {}",
            split.id, bad.size
        )));
    }
    let total = util::precise_sum(split.children.iter().map(|child| child.size));
    if !util::approx_eq(total, FULL_EXTENT, SIZE_EPSILON) {
        return Err(LayoutError::invariant(format!(
            "split {} sizes sum to {}",
            split.id, total
        )));
    }
    Ok(())
}
