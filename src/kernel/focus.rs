//! Focusable element set captured from the dialog panel when it opens.

use crate::ui::core::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Forward,
    Backward,
}

/// Ordered focusable ids inside the dialog panel, in tab order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusableElementSet {
    ids: Vec<Id>,
}

impl FocusableElementSet {
    pub fn new(ids: Vec<Id>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first(&self) -> Option<Id> {
        self.ids.first().copied()
    }

    pub fn last(&self) -> Option<Id> {
        self.ids.last().copied()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn position(&self, id: Id) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Returns where focus must go instead of the default tab step, or `None`
    /// when the default step already stays inside the set.
    ///
    /// Moving forward from the last element wraps to the first, backward from the
    /// first wraps to the last. Focus outside the set is pulled back in at the
    /// edge matching the direction. An empty set never redirects.
    pub fn trap(&self, current: Option<Id>, direction: FocusDirection) -> Option<Id> {
        let (first, last) = (self.first()?, self.last()?);
        let inside = current.filter(|id| self.contains(*id));

        match (direction, inside) {
            (FocusDirection::Forward, None) => Some(first),
            (FocusDirection::Backward, None) => Some(last),
            (FocusDirection::Forward, Some(id)) if id == last => Some(first),
            (FocusDirection::Backward, Some(id)) if id == first => Some(last),
            _ => None,
        }
    }

    /// Neighbor of `current` inside the set, wrapping at both ends.
    pub fn step(&self, current: Option<Id>, direction: FocusDirection) -> Option<Id> {
        if let Some(target) = self.trap(current, direction) {
            return Some(target);
        }
        let idx = self.position(current?)?;
        let next = match direction {
            FocusDirection::Forward => idx + 1,
            FocusDirection::Backward => idx.checked_sub(1)?,
        };
        self.ids.get(next).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/focus.rs"]
mod tests;
