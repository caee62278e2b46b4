//! View trait: every renderable, interactive surface implements it.

use super::event::InputEvent;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, backend: &mut dyn Backend, area: Rect);

    fn cursor_position(&self) -> Option<Pos> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/view.rs"]
mod tests;
