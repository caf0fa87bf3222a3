//! Projecting a layout onto a rectangle, for renderers and pointer input.

use crate::ids::{NodeId, PaneId};
use crate::options::FULL_EXTENT;
use crate::tree::{Direction, LayoutNode, LayoutTree, Split};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in renderer units (pixels, cells, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    fn extent(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Row => self.width,
            Direction::Column => self.height,
        }
    }

    /// Offset of this rect's leading edge within `container` along `direction`.
    fn extent_start(&self, direction: Direction, container: Rect) -> f32 {
        match direction {
            Direction::Row => self.x - container.x,
            Direction::Column => self.y - container.y,
        }
    }

    /// The slice of `self` starting `offset` along `direction`, `length` long.
    fn slice(&self, direction: Direction, offset: f32, length: f32) -> Rect {
        match direction {
            Direction::Row => Rect::new(self.x + offset, self.y, length, self.height),
            Direction::Column => Rect::new(self.x, self.y + offset, self.width, length),
        }
    }
}

/// The boundary between two adjacent children of a split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Divider {
    /// The child before the boundary; dragging resizes this node.
    pub node: NodeId,
    pub direction: Direction,
    pub rect: Rect,
    /// Length of the parent split along its axis.
    pub extent: f32,
}

impl Divider {
    /// Convert a pointer movement along the split axis into a share delta.
    pub fn delta_percent(&self, pixels: f32) -> f32 {
        if self.extent <= 0.0 {
            return 0.0;
        }
        pixels / self.extent * FULL_EXTENT
    }

    pub fn contains(&self, x: f32, y: f32, padding: f32) -> bool {
        Rect::new(
            self.rect.x - padding,
            self.rect.y - padding,
            self.rect.width + padding * 2.0,
            self.rect.height + padding * 2.0,
        )
        .contains(x, y)
    }
}

/// Rectangles of every pane, in traversal order.
pub fn pane_rects(tree: &LayoutTree, bounds: Rect) -> Vec<(PaneId, Rect)> {
    let mut rects = Vec::new();
    collect_rects(&tree.root, bounds, &mut rects);
    rects
}

fn collect_rects(node: &LayoutNode, bounds: Rect, out: &mut Vec<(PaneId, Rect)>) {
    match node {
        LayoutNode::Pane(pane) => out.push((pane.id, bounds)),
        LayoutNode::Split(split) => {
            for (child, rect) in split.children.iter().zip(child_rects(split, bounds)) {
                collect_rects(&child.node, rect, out);
            }
        }
    }
}

/// Split `bounds` among the children by share. The last child absorbs the
/// rounding remainder so the slices tile the parent exactly.
fn child_rects(split: &Split, bounds: Rect) -> Vec<Rect> {
    let extent = bounds.extent(split.direction);
    let mut offset = 0.0;
    let last = split.children.len().saturating_sub(1);
    split
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let length = if index == last {
                extent - offset
            } else {
                extent * child.size / FULL_EXTENT
            };
            let rect = bounds.slice(split.direction, offset, length);
            offset += length;
            rect
        })
        .collect()
}

/// Dividers between adjacent children of every split, outermost first.
/// Each is `thickness` wide, centred on the boundary.
pub fn dividers(tree: &LayoutTree, bounds: Rect, thickness: f32) -> Vec<Divider> {
    let mut out = Vec::new();
    collect_dividers(&tree.root, bounds, thickness, &mut out);
    out
}

fn collect_dividers(node: &LayoutNode, bounds: Rect, thickness: f32, out: &mut Vec<Divider>) {
    let LayoutNode::Split(split) = node else {
        return;
    };
    let extent = bounds.extent(split.direction);
    let rects = child_rects(split, bounds);
    for (index, pair) in rects.windows(2).enumerate() {
        let boundary = pair[1].extent_start(split.direction, bounds);
        out.push(Divider {
            node: split.children[index].node.id(),
            direction: split.direction,
            rect: bounds.slice(split.direction, boundary - thickness / 2.0, thickness),
            extent,
        });
    }
    for (child, rect) in split.children.iter().zip(rects) {
        collect_dividers(&child.node, rect, thickness, out);
    }
}

/// The pane under a point, if any.
pub fn pane_at(tree: &LayoutTree, bounds: Rect, x: f32, y: f32) -> Option<PaneId> {
    pane_rects(tree, bounds)
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(id, _)| id)
}
