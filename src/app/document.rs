//! Page-level shared resources: focus owner, key listeners, scroll lock.
//!
//! `Document` is a cheap clonable handle; every clone sees the same state.

use crate::ui::core::id::Id;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyListenerKind {
    /// Dismisses the dialog on Escape.
    Escape,
    /// Keeps Tab/BackTab inside the dialog.
    FocusTrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyListener {
    pub id: ListenerId,
    pub kind: KeyListenerKind,
}

#[derive(Debug, Default)]
struct DocumentInner {
    focused: Option<Id>,
    listeners: Vec<KeyListener>,
    next_listener: u64,
    scroll_locked: bool,
    scroll_offset: u16,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self, id: Id) {
        self.inner.borrow_mut().focused = Some(id);
    }

    pub fn blur(&self) {
        self.inner.borrow_mut().focused = None;
    }

    pub fn focused(&self) -> Option<Id> {
        self.inner.borrow().focused
    }

    pub fn add_key_listener(&self, kind: KeyListenerKind) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);
        inner.next_listener = inner.next_listener.wrapping_add(1);
        inner.listeners.push(KeyListener { id, kind });
        id
    }

    /// Returns `false` if no listener with `id` was registered.
    pub fn remove_key_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|l| l.id != id);
        inner.listeners.len() != before
    }

    /// Listeners in registration order.
    pub fn key_listeners(&self) -> Vec<KeyListener> {
        self.inner.borrow().listeners.clone()
    }

    pub fn key_listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn has_key_listener(&self, kind: KeyListenerKind) -> bool {
        self.inner.borrow().listeners.iter().any(|l| l.kind == kind)
    }

    /// Returns `false` if scroll was already locked.
    pub fn lock_scroll(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        !std::mem::replace(&mut inner.scroll_locked, true)
    }

    pub fn unlock_scroll(&self) {
        self.inner.borrow_mut().scroll_locked = false;
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.borrow().scroll_locked
    }

    /// Moves the page by `delta` rows within `0..=max`. Rejected while locked.
    pub fn scroll_by(&self, delta: i32, max: u16) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.scroll_locked {
            return false;
        }
        let next = (i32::from(inner.scroll_offset) + delta).clamp(0, i32::from(max)) as u16;
        let changed = next != inner.scroll_offset;
        inner.scroll_offset = next;
        changed
    }

    pub fn scroll_offset(&self) -> u16 {
        self.inner.borrow().scroll_offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/document.rs"]
mod tests;
