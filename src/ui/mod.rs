//! UI layer (thin wrapper over `ratatui`).
//!
//! All `ratatui` types stay behind a backend adapter; the rest of the crate works
//! with the headless scene model (paint commands + hit-test tree) in `core`.

pub mod backend;
pub mod core;
pub mod widgets;
