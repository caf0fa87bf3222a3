//! Text outline of a layout, for logs and the headless driver.

use crate::tree::{LayoutNode, LayoutTree, Pane};
use std::fmt;

impl fmt::Display for LayoutTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.root, "", None)
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    node: &LayoutNode,
    indent: &str,
    size: Option<f32>,
) -> fmt::Result {
    if let Some(size) = size {
        write!(f, "{:.0}% ", size)?;
    }
    match node {
        LayoutNode::Pane(pane) => writeln!(f, "{}", PaneLabel(pane)),
        LayoutNode::Split(split) => {
            writeln!(f, "split {} ({})", split.id.short(), split.direction.label())?;
            let last = split.children.len().saturating_sub(1);
            for (index, child) in split.children.iter().enumerate() {
                let (branch, continuation) = if index == last {
                    ("└── ", "    ")
                } else {
                    ("├── ", "│   ")
                };
                write!(f, "{indent}{branch}")?;
                write_node(f, &child.node, &format!("{indent}{continuation}"), Some(child.size))?;
            }
            Ok(())
        }
    }
}

struct PaneLabel<'a>(&'a Pane);

impl fmt::Display for PaneLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pane = self.0;
        write!(f, "pane {} [", pane.id.short())?;
        for (index, tab) in pane.tabs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tab.name)?;
            if pane.active_tab == Some(tab.id) {
                write!(f, "*")?;
            }
        }
        write!(f, "]")
    }
}
