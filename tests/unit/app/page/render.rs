use super::*;
use crate::kernel::services::ports::Settings;
use crate::ui::backend::test::TestBackend;

fn page() -> ModalPage {
    ModalPage::new(Settings::default())
}

fn draw(page: &mut ModalPage, w: u16, h: u16) -> TestBackend {
    let mut backend = TestBackend::new(w, h);
    let area = backend.area();
    render(page, &mut backend, area);
    backend
}

#[test]
fn closed_page_shows_trigger_and_content() {
    let mut page = page();
    let backend = draw(&mut page, 80, 24);
    let text = backend.buffer().text();

    assert!(text.contains("[ Open Modal ]"));
    assert!(text.contains("Page content line 1"));
    assert!(!text.contains("Modal Heading"));
}

#[test]
fn open_page_draws_dialog_over_content() {
    let mut page = page();
    page.open_from_trigger();
    let backend = draw(&mut page, 80, 24);
    let text = backend.buffer().text();

    assert!(text.contains("Modal Heading"));
    assert!(text.contains("Learn more"));
    assert!(text.contains("[ Close ]"));
    assert!(text.contains("╭"));

    let panel = page.tree().node(page.ids().dialog.panel).unwrap().rect;
    assert_eq!(
        backend.buffer().cell(panel.x, panel.y).unwrap().symbol,
        "╭"
    );
}

#[test]
fn backdrop_dims_page_behind_dialog() {
    let mut page = page();
    page.open_from_trigger();
    let backend = draw(&mut page, 80, 24);

    let corner = backend.buffer().cell(0, 0).unwrap();
    assert!(corner.style.mods.contains(Mod::DIM));
}

#[test]
fn scrolled_page_starts_at_offset() {
    let mut page = page();
    page.scroll_page(5);
    let backend = draw(&mut page, 80, 24);

    assert!(backend
        .buffer()
        .row_text(4)
        .starts_with("  Page content line 6 "));
}

#[test]
fn render_adopts_backend_area() {
    let mut page = page();
    draw(&mut page, 100, 30);
    assert_eq!(page.area(), Rect::new(0, 0, 100, 30));
    assert_eq!(page.body_rows, 30 - 5);
}

#[test]
fn status_line_shows_hint_for_state() {
    let mut page = page();
    let text = draw(&mut page, 80, 24).buffer().row_text(23);
    assert!(text.starts_with("Tab focus"));

    page.open_from_trigger();
    let text = draw(&mut page, 80, 24).buffer().row_text(23);
    assert!(text.starts_with("Esc close"));
}
