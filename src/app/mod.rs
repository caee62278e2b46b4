//! Application layer: the host page, its document resources and theme.

pub mod document;
pub mod effects;
pub mod page;
pub mod theme;

pub use document::{Document, KeyListener, KeyListenerKind, ListenerId};
pub use effects::ModalResources;
pub use page::{ModalPage, PageIds};
pub use theme::UiTheme;
