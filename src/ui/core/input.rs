use super::geom::Pos;
use super::id::Id;
use crate::core::event::MouseButton;

/// High-level pointer events synthesized by [`super::runtime::UiRuntime`] from raw mouse input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
        pos: Pos,
    },
    /// Press and release landed on the same click-sensing node.
    Click {
        id: Id,
        button: MouseButton,
        pos: Pos,
    },
    /// Press and release landed on different nodes (or none); nothing is activated.
    ClickCancelled {
        pressed: Option<Id>,
        released: Option<Id>,
        pos: Pos,
    },
}
