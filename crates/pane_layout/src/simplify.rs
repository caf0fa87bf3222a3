//! Tree simplification: collapsing degenerate splits.

use crate::options::FULL_EXTENT;
use crate::tree::{LayoutNode, SplitChild};

/// Rescale sibling shares so they sum to [`FULL_EXTENT`], keeping their
/// proportions. Non-positive totals fall back to equal shares.
pub(crate) fn normalize_sizes(children: &mut [SplitChild]) {
    if children.is_empty() {
        return;
    }
    let total = util::precise_sum(children.iter().map(|child| child.size));
    if !total.is_finite() || total <= 0.0 {
        let even = FULL_EXTENT / children.len() as f32;
        for child in children.iter_mut() {
            child.size = even;
        }
        return;
    }
    let scale = FULL_EXTENT / total;
    for child in children.iter_mut() {
        child.size *= scale;
    }
}

/// Simplify a subtree bottom-up.
///
/// - A split with one child is replaced by that child; the child takes over
///   the split's slot (and therefore its size) in the grandparent.
/// - A split with no children disappears (`None`).
/// - With `flatten`, a child split running the same direction as its parent
///   is spliced into the parent, its children's shares scaled by the child's
///   share of the parent.
pub fn simplify(node: LayoutNode, flatten: bool) -> Option<LayoutNode> {
    let mut split = match node {
        LayoutNode::Split(split) => split,
        pane => return Some(pane),
    };

    let direction = split.direction;
    let mut children = Vec::with_capacity(split.children.len());
    for child in std::mem::take(&mut split.children) {
        let size = child.size;
        match simplify(child.node, flatten) {
            Some(LayoutNode::Split(inner)) if flatten && inner.direction == direction => {
                tracing::trace!("Flattening split {} into {}", inner.id.short(), split.id.short());
                children.extend(inner.children.into_iter().map(|grandchild| {
                    SplitChild::new(size * grandchild.size / FULL_EXTENT, grandchild.node)
                }));
            }
            Some(node) => children.push(SplitChild::new(size, node)),
            None => {}
        }
    }

    match children.len() {
        0 => None,
        1 => {
            tracing::trace!("Collapsing single-child split {}", split.id.short());
            children.pop().map(|only| only.node)
        }
        _ => {
            normalize_sizes(&mut children);
            split.children = children;
            Some(LayoutNode::Split(split))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PaneId;
    use crate::options::LayoutOptions;
    use crate::tree::{Direction, Pane, Split};
    use pretty_assertions::assert_eq;

    fn leaf() -> (LayoutNode, PaneId) {
        let pane = Pane::new(&LayoutOptions::default());
        let id = pane.id;
        (LayoutNode::Pane(pane), id)
    }

    #[test]
    fn normalize_restores_proportions() {
        let (a, _) = leaf();
        let (b, _) = leaf();
        let mut children = vec![SplitChild::new(30.0, a), SplitChild::new(10.0, b)];
        normalize_sizes(&mut children);
        assert!((children[0].size - 75.0).abs() < 1e-4);
        assert!((children[1].size - 25.0).abs() < 1e-4);
    }

    #[test]
    fn normalize_with_zero_total_splits_evenly() {
        let (a, _) = leaf();
        let (b, _) = leaf();
        let mut children = vec![SplitChild::new(0.0, a), SplitChild::new(0.0, b)];
        normalize_sizes(&mut children);
        assert_eq!(children[0].size, 50.0);
        assert_eq!(children[1].size, 50.0);
    }

    #[test]
    fn single_child_split_is_replaced_by_child() {
        let (a, a_id) = leaf();
        let split = LayoutNode::Split(Split::new(Direction::Row, vec![SplitChild::new(100.0, a)]));

        let simplified = simplify(split, true).unwrap();

        assert!(simplified.is_pane(a_id));
    }

    #[test]
    fn collapsed_child_inherits_slot_size() {
        let (a, _) = leaf();
        let (b, b_id) = leaf();
        let lonely = LayoutNode::Split(Split::new(Direction::Column, vec![SplitChild::new(100.0, b)]));
        let root = LayoutNode::Split(Split::new(
            Direction::Row,
            vec![SplitChild::new(70.0, a), SplitChild::new(30.0, lonely)],
        ));

        let simplified = simplify(root, true).unwrap();

        let split = simplified.as_split().unwrap();
        assert!(split.children[1].node.is_pane(b_id));
        assert_eq!(split.sizes(), vec![70.0, 30.0]);
    }

    #[test]
    fn same_direction_child_is_flattened() {
        let (a, a_id) = leaf();
        let (b, b_id) = leaf();
        let (c, c_id) = leaf();
        let inner = LayoutNode::Split(Split::new(
            Direction::Row,
            vec![SplitChild::new(50.0, b), SplitChild::new(50.0, c)],
        ));
        let root = LayoutNode::Split(Split::new(
            Direction::Row,
            vec![SplitChild::new(50.0, a), SplitChild::new(50.0, inner)],
        ));

        let simplified = simplify(root.clone(), true).unwrap();
        let split = simplified.as_split().unwrap();
        assert_eq!(simplified.pane_ids(), vec![a_id, b_id, c_id]);
        assert_eq!(split.sizes(), vec![50.0, 25.0, 25.0]);

        let kept = simplify(root, false).unwrap();
        assert_eq!(kept.as_split().unwrap().children.len(), 2);
    }

    #[test]
    fn empty_split_disappears() {
        let (a, a_id) = leaf();
        let empty = LayoutNode::Split(Split::new(Direction::Column, Vec::new()));
        let root = LayoutNode::Split(Split::new(
            Direction::Row,
            vec![SplitChild::new(60.0, a), SplitChild::new(40.0, empty)],
        ));

        let simplified = simplify(root, true).unwrap();

        assert!(simplified.is_pane(a_id));
        assert!(simplify(LayoutNode::Split(Split::new(Direction::Row, Vec::new())), true).is_none());
    }
}
