use super::{ModalPage, WHEEL_STEP};
use crate::core::event::{InputEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::core::view::EventResult;
use crate::ui::core::input::UiEvent;

pub(super) fn handle_mouse(
    page: &mut ModalPage,
    event: &InputEvent,
    mouse_event: &MouseEvent,
) -> EventResult {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => return wheel(page, -WHEEL_STEP),
        MouseEventKind::ScrollDown => return wheel(page, WHEEL_STEP),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            return EventResult::Ignored;
        }
        _ => {}
    }

    let out = page.runtime.on_input(event, &page.tree);
    let mut changed = out.needs_redraw;
    for ui_event in out.events {
        match ui_event {
            UiEvent::HoverChanged { .. } => changed = true,
            UiEvent::Click {
                id,
                button: MouseButton::Left,
                ..
            } => changed |= page.activate(id),
            UiEvent::Click { .. } => {}
            UiEvent::ClickCancelled {
                pressed, released, ..
            } => {
                tracing::trace!(?pressed, ?released, "click cancelled");
            }
        }
    }

    if changed {
        page.rebuild();
        EventResult::Consumed
    } else if page.is_open() {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn wheel(page: &mut ModalPage, delta: i32) -> EventResult {
    // The lock rejects the request; the wheel still belongs to the dialog.
    if page.scroll_page(delta) || page.is_open() {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/mouse.rs"]
mod tests;
