use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.style_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.hline(Pos::new(0, 0), 3, '─', Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Rounded);
    assert_eq!(p.cmds().len(), 5);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn border_glyphs_differ_by_kind() {
    assert_eq!(BorderKind::Plain.glyphs().0, '┌');
    assert_eq!(BorderKind::Rounded.glyphs().0, '╭');
    assert_eq!(BorderKind::Rounded.glyphs().4, '─');
}
