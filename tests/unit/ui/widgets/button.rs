use super::*;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::{PaintCmd, Painter};
use crate::ui::core::style::Color;
use crate::ui::core::tree::UiTree;

fn button(role: Role, focused: bool) -> Button<'static> {
    Button {
        id: Id::raw(9),
        kind: NodeKind::Trigger,
        role,
        layer: 0,
        label: "Open Modal",
        focused,
        hovered: false,
        styles: ButtonStyles {
            base: Style::default(),
            hovered: Style::default().bg(Color::Indexed(8)),
            focused: Style::default().bg(Color::Indexed(6)),
        },
    }
}

#[test]
fn button_registers_focusable_click_node() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(2, 1, 40, 3), &mut painter, &mut tree);

    let mut b = button(Role::Button, false);
    b.ui(&mut ui);

    let node = tree.node(Id::raw(9)).unwrap();
    assert_eq!(node.rect, Rect::new(2, 1, "[ Open Modal ]".len() as u16, 1));
    assert!(node.sense.contains(Sense::CLICK | Sense::FOCUS | Sense::HOVER));
    assert_eq!(node.kind, NodeKind::Trigger);

    let semantics = tree.semantics(Id::raw(9)).unwrap();
    assert_eq!(semantics.role, Role::Button);
    assert_eq!(semantics.label.as_deref(), Some("Open Modal"));
}

#[test]
fn focused_button_uses_focus_style() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 40, 1), &mut painter, &mut tree);

    button(Role::Button, true).ui(&mut ui);

    assert!(painter.cmds().iter().any(|c| matches!(
        c,
        PaintCmd::Text { style, .. } if style.bg == Some(Color::Indexed(6))
    )));
}

#[test]
fn link_renders_underlined_label_without_brackets() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 40, 1), &mut painter, &mut tree);

    let mut link = button(Role::Link, false);
    assert_eq!(link.text(), "Open Modal");
    link.ui(&mut ui);

    assert!(painter.cmds().iter().any(|c| matches!(
        c,
        PaintCmd::Text { text, style, .. }
            if text == "Open Modal" && style.mods.contains(Mod::UNDERLINE)
    )));
}

#[test]
fn button_is_skipped_in_empty_rect() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 0, 0), &mut painter, &mut tree);

    button(Role::Button, false).ui(&mut ui);
    assert!(tree.nodes().is_empty());
    assert!(painter.cmds().is_empty());
}
