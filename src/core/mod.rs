//! Core framework types shared by the kernel, the UI layer and the terminal frontend:
//! - Event: crate-owned input events (independent of crossterm)
//! - View: renderable/interactive view trait
//! - text_window: width-aware text helpers

pub mod event;
pub mod text_window;
pub mod view;

pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
pub use view::{EventResult, View};
