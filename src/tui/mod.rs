//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `ui::core` so the modal page can be driven headless.

pub mod crossterm;
pub mod terminal_guard;
