use super::*;
use crate::core::event::KeyModifiers;
use crate::kernel::services::ports::Settings;
use crate::kernel::CloseReason;
use crate::ui::core::geom::Pos;

fn page() -> ModalPage {
    ModalPage::new(Settings::default())
}

fn mouse(page: &mut ModalPage, kind: MouseEventKind, pos: Pos) -> EventResult {
    let me = MouseEvent {
        kind,
        column: pos.x,
        row: pos.y,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse(page, &InputEvent::Mouse(me), &me)
}

fn click(page: &mut ModalPage, pos: Pos) -> EventResult {
    mouse(page, MouseEventKind::Down(MouseButton::Left), pos);
    mouse(page, MouseEventKind::Up(MouseButton::Left), pos)
}

fn center_of(page: &ModalPage, id: crate::ui::core::id::Id) -> Pos {
    let rect = page.tree().node(id).unwrap().rect;
    Pos::new(rect.x + rect.w / 2, rect.y + rect.h / 2)
}

#[test]
fn clicking_trigger_opens() {
    let mut page = page();
    let at = center_of(&page, page.ids().trigger);

    assert_eq!(click(&mut page, at), EventResult::Consumed);
    assert!(page.is_open());
    assert_eq!(page.store().state().modal.opener, Some(page.ids().trigger));
}

#[test]
fn clicking_backdrop_closes() {
    let mut page = page();
    page.open_from_trigger();

    click(&mut page, Pos::new(1, 1));
    assert!(!page.is_open());
    assert_eq!(
        page.store().state().modal.last_close,
        Some(CloseReason::Backdrop)
    );
    assert_eq!(page.focused(), Some(page.ids().trigger));
}

#[test]
fn clicking_inside_panel_keeps_dialog_open() {
    let mut page = page();
    page.open_from_trigger();

    for id in [
        page.ids().dialog.panel,
        page.ids().dialog.heading,
        page.ids().dialog.body,
    ] {
        let at = center_of(&page, id);
        click(&mut page, at);
        assert!(page.is_open());
    }
}

#[test]
fn clicking_close_button_closes() {
    let mut page = page();
    page.open_from_trigger();
    let at = center_of(&page, page.ids().dialog.close);

    click(&mut page, at);
    assert!(!page.is_open());
    assert_eq!(
        page.store().state().modal.last_close,
        Some(CloseReason::CloseButton)
    );
}

#[test]
fn clicking_link_focuses_it_and_keeps_dialog_open() {
    let mut page = page();
    page.open_from_trigger();
    page.document().focus(page.ids().dialog.close);
    let at = center_of(&page, page.ids().dialog.link);

    click(&mut page, at);
    assert!(page.is_open());
    assert_eq!(page.focused(), Some(page.ids().dialog.link));
    assert!(page.status().is_some());
}

#[test]
fn press_in_panel_released_on_backdrop_does_not_close() {
    let mut page = page();
    page.open_from_trigger();
    let inside = center_of(&page, page.ids().dialog.body);

    mouse(&mut page, MouseEventKind::Down(MouseButton::Left), inside);
    mouse(&mut page, MouseEventKind::Up(MouseButton::Left), Pos::new(1, 1));
    assert!(page.is_open());
}

#[test]
fn right_click_on_backdrop_is_not_a_dismissal() {
    let mut page = page();
    page.open_from_trigger();

    mouse(&mut page, MouseEventKind::Down(MouseButton::Right), Pos::new(1, 1));
    mouse(&mut page, MouseEventKind::Up(MouseButton::Right), Pos::new(1, 1));
    assert!(page.is_open());
}

#[test]
fn wheel_scrolls_page_only_while_closed() {
    let mut page = page();
    mouse(&mut page, MouseEventKind::ScrollDown, Pos::new(5, 10));
    assert_eq!(page.document().scroll_offset(), WHEEL_STEP as u16);

    page.open_from_trigger();
    assert_eq!(
        mouse(&mut page, MouseEventKind::ScrollDown, Pos::new(5, 10)),
        EventResult::Consumed
    );
    assert_eq!(page.document().scroll_offset(), WHEEL_STEP as u16);
}

#[test]
fn hovering_a_control_tracks_it() {
    let mut page = page();
    page.open_from_trigger();
    let at = center_of(&page, page.ids().dialog.close);

    mouse(&mut page, MouseEventKind::Moved, at);
    assert_eq!(page.runtime.hovered(), Some(page.ids().dialog.close));
}
