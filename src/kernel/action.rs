use crate::ui::core::id::Id;

/// Why an open modal was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::CloseButton => "close_button",
            CloseReason::Backdrop => "backdrop",
            CloseReason::Escape => "escape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `opener` receives focus back once the modal closes.
    OpenModal { opener: Option<Id> },
    CloseModal { reason: CloseReason },
}
