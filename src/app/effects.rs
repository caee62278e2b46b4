//! Resources held by the page while the dialog is open.

use super::document::{Document, KeyListenerKind, ListenerId};

/// Escape and focus-trap listeners plus the scroll lock, taken together on
/// open and given back together on release or drop.
#[derive(Debug)]
pub struct ModalResources {
    document: Document,
    listeners: Vec<ListenerId>,
    scroll_locked: bool,
    released: bool,
}

impl ModalResources {
    pub fn acquire(document: &Document) -> Self {
        let listeners = vec![
            document.add_key_listener(KeyListenerKind::Escape),
            document.add_key_listener(KeyListenerKind::FocusTrap),
        ];
        let scroll_locked = document.lock_scroll();
        tracing::debug!(
            listeners = listeners.len(),
            scroll_locked,
            "modal resources acquired"
        );

        Self {
            document: document.clone(),
            listeners,
            scroll_locked,
            released: false,
        }
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        for id in self.listeners.drain(..) {
            self.document.remove_key_listener(id);
        }
        if self.scroll_locked {
            self.document.unlock_scroll();
        }
        tracing::debug!("modal resources released");
    }
}

impl Drop for ModalResources {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/effects.rs"]
mod tests;
