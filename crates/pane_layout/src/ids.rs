//! Opaque identifiers for layout nodes, tabs and sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! layout_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID (restoring from a snapshot).
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// First eight hex digits, enough to tell nodes apart in logs.
            pub fn short(&self) -> String {
                let mut text = self.0.simple().to_string();
                text.truncate(8);
                text
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

layout_id!(
    /// Identifies a pane (leaf) for its whole lifetime.
    PaneId
);
layout_id!(
    /// Identifies a tab; the terminal transport correlates connections by it.
    TabId
);
layout_id!(
    /// Identifies a split (internal node).
    SplitId
);
layout_id!(
    /// Identifies one session's terminal area.
    SessionId
);

/// Any node of the layout tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NodeId {
    Pane(PaneId),
    Split(SplitId),
}

impl From<PaneId> for NodeId {
    fn from(id: PaneId) -> Self {
        NodeId::Pane(id)
    }
}

impl From<SplitId> for NodeId {
    fn from(id: SplitId) -> Self {
        NodeId::Split(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Pane(id) => write!(f, "pane {}", id),
            NodeId::Split(id) => write!(f, "split {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(PaneId::new(), PaneId::new());
        assert_ne!(TabId::new(), TabId::new());
    }

    #[test]
    fn short_form_is_eight_hex_digits() {
        let id = SplitId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.as_uuid().simple().to_string().starts_with(&short));
    }

    #[test]
    fn ids_serialize_as_plain_uuid_strings() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&PaneId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn node_id_display_names_the_kind() {
        let pane = PaneId::new();
        assert_eq!(NodeId::from(pane).to_string(), format!("pane {}", pane));
    }
}
