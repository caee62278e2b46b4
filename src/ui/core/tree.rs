use super::geom::{Pos, Rect};
use super::id::Id;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u16);

impl Sense {
    pub const NONE: Self = Self(0);
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);
    /// Participates in sequential (Tab) focus navigation.
    pub const FOCUS: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sense {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// What a node represents. These are the styling/testing hooks of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Unknown,
    PageBody,
    Trigger,
    ModalOverlay,
    ModalPanel,
    ModalHeading,
    ModalBody,
    ModalLink,
    ModalClose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub z: u32,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Link,
    Dialog,
    Heading,
    Text,
}

/// Accessibility metadata exposed by a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Semantics {
    pub role: Role,
    pub label: Option<String>,
    /// The node blocks interaction with everything beneath it while present.
    pub modal: bool,
    pub labelled_by: Option<Id>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            modal: false,
            labelled_by: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn labelled_by(mut self, id: Id) -> Self {
        self.labelled_by = Some(id);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
    semantics: Vec<(Id, Semantics)>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.semantics.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    pub fn push(&mut self, mut node: Node) {
        // Default z-order: insertion order within the same layer.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    pub fn set_semantics(&mut self, id: Id, semantics: Semantics) {
        match self.semantics.iter_mut().find(|(sid, _)| *sid == id) {
            Some((_, slot)) => *slot = semantics,
            None => self.semantics.push((id, semantics)),
        }
    }

    pub fn semantics(&self, id: Id) -> Option<&Semantics> {
        self.semantics
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        // Highest layer wins; within a layer, higher z wins.
        self.nodes
            .iter()
            .filter(|n| n.contains(p))
            .max_by(|a, b| (a.layer, a.z).cmp(&(b.layer, b.z)))
    }

    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.sense.contains(required) && n.contains(p))
            .max_by(|a, b| (a.layer, a.z).cmp(&(b.layer, b.z)))
    }

    /// Focusable nodes in tab order (tree order).
    pub fn focus_order(&self) -> Vec<Id> {
        self.nodes
            .iter()
            .filter(|n| n.sense.contains(Sense::FOCUS))
            .map(|n| n.id)
            .collect()
    }

    /// Focusable nodes of `layer` that lie inside `container`, in tab order.
    pub fn focusable_within(&self, layer: u8, container: Rect) -> Vec<Id> {
        self.nodes
            .iter()
            .filter(|n| {
                n.layer == layer
                    && n.sense.contains(Sense::FOCUS)
                    && !n.rect.is_empty()
                    && container.encloses(n.rect)
            })
            .map(|n| n.id)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
