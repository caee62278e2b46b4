use super::{Action, AppState, CloseReason, Effect};
use crate::ui::core::id::Id;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.modal.is_open
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenModal { opener } => self.open_modal(opener),
            Action::CloseModal { reason } => self.close_modal(reason),
        }
    }

    fn open_modal(&mut self, opener: Option<Id>) -> DispatchResult {
        let modal = &mut self.state.modal;
        if modal.is_open {
            return DispatchResult::unchanged();
        }

        modal.is_open = true;
        modal.opener = opener;
        tracing::debug!(opener = ?opener, "modal open");

        DispatchResult {
            effects: vec![Effect::AcquireModalResources],
            state_changed: true,
        }
    }

    fn close_modal(&mut self, reason: CloseReason) -> DispatchResult {
        let modal = &mut self.state.modal;
        if !modal.is_open {
            return DispatchResult::unchanged();
        }

        modal.is_open = false;
        modal.last_close = Some(reason);
        tracing::debug!(reason = reason.as_str(), "modal close");

        let mut effects = vec![Effect::ReleaseModalResources];
        if let Some(opener) = modal.opener.take() {
            effects.push(Effect::RestoreFocus(opener));
        }

        DispatchResult {
            effects,
            state_changed: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
