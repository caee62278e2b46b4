use super::*;
use crate::ui::core::painter::{PaintCmd, Painter};
use crate::ui::core::style::Color;
use crate::ui::core::tree::UiTree;

fn dialog(width: u16, height: u16) -> Dialog<'static> {
    Dialog {
        ids: DialogIds::new(IdPath::root("test").push_str("dialog")),
        layer: 1,
        width,
        height,
        heading: "Modal Heading",
        body: "This is a sample paragraph inside the modal.",
        link_label: "Learn more",
        close_label: "Close",
        focused: None,
        hovered: None,
        styles: DialogStyles {
            focused: Style::default().bg(Color::Indexed(6)),
            ..DialogStyles::default()
        },
    }
}

fn build(d: &mut Dialog<'_>, screen: Rect) -> (Painter, UiTree) {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(screen, &mut painter, &mut tree);
    d.ui(&mut ui);
    (painter, tree)
}

#[test]
fn panel_is_centered_and_stacked_above_overlay() {
    let screen = Rect::new(0, 0, 80, 24);
    let mut d = dialog(50, 11);
    let (_, tree) = build(&mut d, screen);

    let overlay = tree.node(d.ids.overlay).unwrap();
    let panel = tree.node(d.ids.panel).unwrap();
    assert_eq!(overlay.rect, screen);
    assert_eq!(panel.rect, Rect::new(15, 6, 50, 11));
    assert!(panel.z > overlay.z);

    let inside = tree
        .hit_test_with_sense(Pos::new(20, 8), Sense::CLICK)
        .unwrap();
    assert_eq!(inside.id, d.ids.panel);

    let outside = tree
        .hit_test_with_sense(Pos::new(1, 1), Sense::CLICK)
        .unwrap();
    assert_eq!(outside.id, d.ids.overlay);
}

#[test]
fn overlay_is_a_modal_dialog_labelled_by_heading() {
    let mut d = dialog(50, 11);
    let (_, tree) = build(&mut d, Rect::new(0, 0, 80, 24));

    let semantics = tree.semantics(d.ids.overlay).unwrap();
    assert_eq!(semantics.role, Role::Dialog);
    assert!(semantics.modal);
    assert_eq!(semantics.labelled_by, Some(d.ids.heading));
    assert_eq!(
        tree.semantics(d.ids.heading).unwrap().label.as_deref(),
        Some("Modal Heading")
    );
}

#[test]
fn focusable_controls_are_link_then_close() {
    let mut d = dialog(50, 11);
    let (_, tree) = build(&mut d, Rect::new(0, 0, 80, 24));

    let panel = tree.node(d.ids.panel).unwrap().rect;
    assert_eq!(tree.focusable_within(1, panel), vec![d.ids.link, d.ids.close]);
    assert_eq!(tree.node(d.ids.link).unwrap().kind, NodeKind::ModalLink);
    assert_eq!(tree.node(d.ids.close).unwrap().kind, NodeKind::ModalClose);
}

#[test]
fn close_button_sits_at_panel_bottom_right() {
    let mut d = dialog(50, 11);
    let (_, tree) = build(&mut d, Rect::new(0, 0, 80, 24));

    let panel = tree.node(d.ids.panel).unwrap().rect;
    let close = tree.node(d.ids.close).unwrap().rect;
    assert_eq!(close.right(), panel.right() - 2);
    assert_eq!(close.y, panel.bottom() - 2);
}

#[test]
fn link_keeps_a_gap_before_close_button_in_narrow_panel() {
    let mut d = dialog(24, 11);
    let (_, tree) = build(&mut d, Rect::new(0, 0, 80, 24));

    let panel = tree.node(d.ids.panel).unwrap().rect;
    let link = tree.node(d.ids.link).unwrap().rect;
    let close = tree.node(d.ids.close).unwrap().rect;
    assert_eq!(link.x, panel.x + 2);
    assert_eq!(link.w, 10);
    assert!(link.right() < close.x);
}

#[test]
fn focused_control_is_highlighted() {
    let mut d = dialog(50, 11);
    d.focused = Some(d.ids.close);
    let (painter, _) = build(&mut d, Rect::new(0, 0, 80, 24));

    assert!(painter.cmds().iter().any(|c| matches!(
        c,
        PaintCmd::Text { text, style, .. }
            if text == "[ Close ]" && style.bg == Some(Color::Indexed(6))
    )));
}

#[test]
fn body_text_is_wrapped_inside_panel() {
    let mut d = dialog(24, 11);
    let (painter, tree) = build(&mut d, Rect::new(0, 0, 80, 24));

    let body = tree.node(d.ids.body).unwrap().rect;
    let body_rows = painter
        .cmds()
        .iter()
        .filter(|c| matches!(c, PaintCmd::Text { clip: Some(clip), .. } if *clip == body))
        .count();
    assert!(body_rows > 1);
}

#[test]
fn tiny_screen_keeps_click_targets_but_no_controls() {
    let mut d = dialog(50, 11);
    let (_, tree) = build(&mut d, Rect::new(0, 0, 10, 4));

    assert!(tree.node(d.ids.overlay).is_some());
    assert!(tree.node(d.ids.panel).is_some());
    assert!(tree.focus_order().is_empty());
}
