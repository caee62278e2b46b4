use super::ModalPage;
use crate::app::document::KeyListenerKind;
use crate::core::event::{InputEvent, Key, KeyCode, KeyEventKind};
use crate::core::view::EventResult;
use crate::kernel::{CloseReason, FocusDirection};
use crate::ui::core::geom::Rect;

pub(super) fn handle_input(page: &mut ModalPage, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return EventResult::Ignored;
            }
            handle_key(page, Key::from(*key_event))
        }
        InputEvent::Mouse(mouse_event) => super::mouse::handle_mouse(page, event, mouse_event),
        InputEvent::Resize(w, h) => {
            page.resize(Rect::new(0, 0, *w, *h));
            EventResult::Consumed
        }
        InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => {
            EventResult::Ignored
        }
    }
}

fn handle_key(page: &mut ModalPage, key: Key) -> EventResult {
    if key == Key::ctrl(KeyCode::Char('c')) {
        return EventResult::Quit;
    }

    if page.is_open() {
        if let Some(result) = dispatch_to_listeners(page, key) {
            return result;
        }
    }

    let result = match key.code {
        KeyCode::Tab if key.modifiers.is_empty() => {
            page.move_focus(FocusDirection::Forward);
            EventResult::Consumed
        }
        KeyCode::BackTab => {
            page.move_focus(FocusDirection::Backward);
            EventResult::Consumed
        }
        KeyCode::Enter | KeyCode::Char(' ') if key.modifiers.is_empty() => {
            let activated = match page.focused() {
                Some(id) => page.activate(id),
                None => false,
            };
            if activated {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        KeyCode::Char('q') if key.modifiers.is_empty() && !page.is_open() => EventResult::Quit,
        KeyCode::Up => scroll(page, -1),
        KeyCode::Down => scroll(page, 1),
        KeyCode::PageUp => {
            let step = page_step(page);
            scroll(page, -step)
        }
        KeyCode::PageDown => {
            let step = page_step(page);
            scroll(page, step)
        }
        _ => EventResult::Ignored,
    };

    // Keys never reach the page behind an open dialog.
    if page.is_open() && result.is_ignored() {
        return EventResult::Consumed;
    }
    result
}

/// Runs the document key listeners in registration order; the first one that
/// handles the key stops propagation.
fn dispatch_to_listeners(page: &mut ModalPage, key: Key) -> Option<EventResult> {
    for listener in page.document.key_listeners() {
        match (listener.kind, key.code) {
            (KeyListenerKind::Escape, KeyCode::Esc) => {
                page.close(CloseReason::Escape);
                return Some(EventResult::Consumed);
            }
            (KeyListenerKind::FocusTrap, KeyCode::Tab | KeyCode::BackTab) => {
                let direction = if key.code == KeyCode::BackTab {
                    FocusDirection::Backward
                } else {
                    FocusDirection::Forward
                };
                if let Some(target) = page.focusables.trap(page.focused(), direction) {
                    page.document.focus(target);
                    page.rebuild();
                    return Some(EventResult::Consumed);
                }
            }
            _ => {}
        }
    }
    None
}

fn page_step(page: &ModalPage) -> i32 {
    i32::from(page.body_rows.saturating_sub(1).max(1))
}

fn scroll(page: &mut ModalPage, delta: i32) -> EventResult {
    if page.scroll_page(delta) {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/input.rs"]
mod tests;
