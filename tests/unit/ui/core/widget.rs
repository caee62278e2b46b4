use super::*;
use crate::ui::core::geom::Rect;

#[test]
fn take_top_and_bottom_consume_the_rect() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 20, 10), &mut painter, &mut tree);

    assert_eq!(ui.take_top(2), Rect::new(0, 0, 20, 2));
    assert_eq!(ui.take_bottom(1), Rect::new(0, 9, 20, 1));
    assert_eq!(ui.rect, Rect::new(0, 2, 20, 7));

    ui.inset(Insets::xy(1, 0));
    assert_eq!(ui.rect, Rect::new(1, 2, 18, 7));
}

#[test]
fn with_rect_does_not_change_parent_rect() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 20, 10), &mut painter, &mut tree);

    let inner = ui.with_rect(Rect::new(2, 2, 4, 4), |child| child.take_top(1));
    assert_eq!(inner, Rect::new(2, 2, 4, 1));
    assert_eq!(ui.rect, Rect::new(0, 0, 20, 10));
}
