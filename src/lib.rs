//! zmodal - modal dialog for the terminal.
//!
//! Modules:
//! - core: input events, the `View` trait, text helpers
//! - kernel: modal state/action/effect store, focus set, settings services
//! - ui: backend-independent scene (geometry, painter, hit-test tree, widgets)
//! - app: the host page with its trigger and dialog
//! - tui: crossterm/ratatui frontend

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
