//! Layout tree data model.
//!
//! The tree is an N-ary tree where leaves are panes (each holding tabs) and
//! internal nodes are splits along one axis. Every split child carries its
//! share of the parent's extent as a percentage.
//!
//! # Structure
//!
//! ```text
//! Split (Row)
//! ├── 50% Pane 1 [Terminal 1*, Terminal 2]
//! └── 50% Split (Column)
//!     ├── 30% Pane 2 [Terminal 1*]
//!     └── 70% Pane 3 [Terminal 1*]
//! ```

use crate::ids::{NodeId, PaneId, SplitId, TabId};
use crate::options::{LayoutOptions, FULL_EXTENT};
use serde::{Deserialize, Serialize};

/// Axis a split divides its area along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Children side by side, left to right; sizes are width shares.
    Row,
    /// Children stacked, top to bottom; sizes are height shares.
    Column,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

/// Which shell or command a tab runs. Opaque to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShellKind(String);

impl ShellKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ShellKind {
    fn default() -> Self {
        Self::new("default")
    }
}

/// One shell session's identity within a pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    pub shell: ShellKind,
}

impl Tab {
    pub fn new(name: impl Into<String>, shell: ShellKind) -> Self {
        Self {
            id: TabId::new(),
            name: name.into(),
            shell,
        }
    }
}

/// A leaf of the layout: an ordered set of tabs, one of them active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub id: PaneId,
    pub tabs: Vec<Tab>,
    /// Set whenever `tabs` is non-empty.
    pub active_tab: Option<TabId>,
}

impl Pane {
    /// Create a pane holding a single default tab.
    pub fn new(options: &LayoutOptions) -> Self {
        let tab = options.new_tab(1);
        Self {
            id: PaneId::new(),
            active_tab: Some(tab.id),
            tabs: vec![tab],
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn tab_index(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active_tab.and_then(|id| self.tab(id))
    }
}

/// A child slot of a split: the node plus its share of the split's extent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitChild {
    /// Percentage of the parent's extent along the split axis.
    pub size: f32,
    pub node: LayoutNode,
}

impl SplitChild {
    pub fn new(size: f32, node: LayoutNode) -> Self {
        Self { size, node }
    }
}

/// An internal node dividing its area among two or more children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: SplitId,
    pub direction: Direction,
    pub children: Vec<SplitChild>,
}

impl Split {
    pub fn new(direction: Direction, children: Vec<SplitChild>) -> Self {
        Self {
            id: SplitId::new(),
            direction,
            children,
        }
    }

    /// Split two nodes evenly.
    pub fn halves(direction: Direction, first: LayoutNode, second: LayoutNode) -> Self {
        let half = FULL_EXTENT / 2.0;
        Self::new(
            direction,
            vec![SplitChild::new(half, first), SplitChild::new(half, second)],
        )
    }

    pub fn sizes(&self) -> Vec<f32> {
        self.children.iter().map(|child| child.size).collect()
    }
}

/// A layout node - either a pane (leaf) or a split (two or more children).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutNode {
    Pane(Pane),
    Split(Split),
}

impl LayoutNode {
    pub fn id(&self) -> NodeId {
        match self {
            LayoutNode::Pane(pane) => NodeId::Pane(pane.id),
            LayoutNode::Split(split) => NodeId::Split(split.id),
        }
    }

    pub fn is_pane(&self, id: PaneId) -> bool {
        matches!(self, LayoutNode::Pane(pane) if pane.id == id)
    }

    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            LayoutNode::Pane(pane) => Some(pane),
            LayoutNode::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split> {
        match self {
            LayoutNode::Pane(_) => None,
            LayoutNode::Split(split) => Some(split),
        }
    }

    /// Find a pane by ID (recursive).
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            LayoutNode::Pane(pane) => (pane.id == id).then_some(pane),
            LayoutNode::Split(split) => split
                .children
                .iter()
                .find_map(|child| child.node.find_pane(id)),
        }
    }

    /// Find a mutable pane by ID (recursive).
    pub fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            LayoutNode::Pane(pane) => (pane.id == id).then_some(pane),
            LayoutNode::Split(split) => split
                .children
                .iter_mut()
                .find_map(|child| child.node.find_pane_mut(id)),
        }
    }

    /// Find the split that directly contains `target`, with the child index.
    pub fn parent_of(&self, target: NodeId) -> Option<(&Split, usize)> {
        let LayoutNode::Split(split) = self else {
            return None;
        };
        if let Some(index) = split
            .children
            .iter()
            .position(|child| child.node.id() == target)
        {
            return Some((split, index));
        }
        split
            .children
            .iter()
            .find_map(|child| child.node.parent_of(target))
    }

    /// Mutable variant of [`LayoutNode::parent_of`].
    pub fn parent_of_mut(&mut self, target: NodeId) -> Option<(&mut Split, usize)> {
        let LayoutNode::Split(split) = self else {
            return None;
        };
        if let Some(index) = split
            .children
            .iter()
            .position(|child| child.node.id() == target)
        {
            return Some((split, index));
        }
        split
            .children
            .iter_mut()
            .find_map(|child| child.node.parent_of_mut(target))
    }

    pub fn contains(&self, target: NodeId) -> bool {
        if self.id() == target {
            return true;
        }
        match self {
            LayoutNode::Pane(_) => false,
            LayoutNode::Split(split) => split
                .children
                .iter()
                .any(|child| child.node.contains(target)),
        }
    }

    /// Panes in traversal order: depth-first, children in order.
    pub fn panes(&self) -> Vec<&Pane> {
        let mut panes = Vec::new();
        self.collect_panes(&mut panes);
        panes
    }

    fn collect_panes<'a>(&'a self, out: &mut Vec<&'a Pane>) {
        match self {
            LayoutNode::Pane(pane) => out.push(pane),
            LayoutNode::Split(split) => {
                for child in &split.children {
                    child.node.collect_panes(out);
                }
            }
        }
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.panes().into_iter().map(|pane| pane.id).collect()
    }

    pub fn pane_count(&self) -> usize {
        match self {
            LayoutNode::Pane(_) => 1,
            LayoutNode::Split(split) => split
                .children
                .iter()
                .map(|child| child.node.pane_count())
                .sum(),
        }
    }

    /// First pane in traversal order (leftmost/topmost).
    pub fn first_pane_id(&self) -> PaneId {
        match self {
            LayoutNode::Pane(pane) => pane.id,
            LayoutNode::Split(split) => match split.children.first() {
                Some(child) => child.node.first_pane_id(),
                None => crate::debug_empty_split(split.id),
            },
        }
    }

    /// Last pane in traversal order (rightmost/bottommost).
    pub fn last_pane_id(&self) -> PaneId {
        match self {
            LayoutNode::Pane(pane) => pane.id,
            LayoutNode::Split(split) => match split.children.last() {
                Some(child) => child.node.last_pane_id(),
                None => crate::debug_empty_split(split.id),
            },
        }
    }

    /// Every node id in the subtree, pre-order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = vec![self.id()];
        if let LayoutNode::Split(split) = self {
            for child in &split.children {
                ids.extend(child.node.node_ids());
            }
        }
        ids
    }

    /// Every split in the subtree, pre-order.
    pub fn splits(&self) -> Vec<&Split> {
        match self {
            LayoutNode::Pane(_) => Vec::new(),
            LayoutNode::Split(split) => {
                let mut splits = vec![split];
                for child in &split.children {
                    splits.extend(child.node.splits());
                }
                splits
            }
        }
    }
}

/// The full layout of one session's terminal area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutTree {
    pub root: LayoutNode,
}

impl LayoutTree {
    /// A tree with a single default pane holding one default tab.
    pub fn new(options: &LayoutOptions) -> Self {
        Self {
            root: LayoutNode::Pane(Pane::new(options)),
        }
    }

    pub fn from_root(root: LayoutNode) -> Self {
        Self { root }
    }

    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        self.root.find_pane(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.root.contains(id)
    }

    pub fn panes(&self) -> Vec<&Pane> {
        self.root.panes()
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.root.pane_ids()
    }

    pub fn pane_count(&self) -> usize {
        self.root.pane_count()
    }

    pub fn first_pane_id(&self) -> PaneId {
        self.root.first_pane_id()
    }

    /// All tabs in traversal order of their panes.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.root.panes().into_iter().flat_map(|pane| pane.tabs.iter())
    }

    /// Find the pane that owns a tab.
    pub fn pane_of_tab(&self, tab: TabId) -> Option<&Pane> {
        self.root
            .panes()
            .into_iter()
            .find(|pane| pane.tab(tab).is_some())
    }
}
