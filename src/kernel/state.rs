use super::action::CloseReason;
use crate::ui::core::id::Id;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub opener: Option<Id>,
    pub last_close: Option<CloseReason>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub modal: ModalState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
