use super::geom::Pos;
use super::id::Id;
use super::input::UiEvent;
use super::tree::{Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Debug, Clone)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            needs_redraw: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    click: Option<Id>,
}

/// Pointer state machine: hover tracking and press/release click synthesis.
///
/// A click is only reported when press and release resolve to the same topmost
/// click-sensing node, so a press inside a panel that is released over the
/// backdrop activates neither.
#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    last_pos: Option<Pos>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    /// Drop press/hover state, e.g. after the scene changed underneath the pointer.
    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
        self.hovered = None;
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::empty();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);
        self.last_pos = Some(pos);

        let next_hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                let click = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                self.pressed = Some(PressedState { button, click });
            }
            MouseEventKind::Up(button) => {
                let Some(pressed) = self.pressed.take() else {
                    return out;
                };
                if pressed.button != button {
                    return out;
                }

                let released = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                match (pressed.click, released) {
                    (Some(id), Some(rid)) if id == rid => {
                        out.events.push(UiEvent::Click { id, button, pos });
                        out.needs_redraw = true;
                    }
                    (None, None) => {}
                    (pressed, released) => {
                        out.events.push(UiEvent::ClickCancelled {
                            pressed,
                            released,
                            pos,
                        });
                    }
                }
            }
            MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
