//! Rendering backends.
//!
//! Backends only need to expose a cell grid; [`paint`] turns the painter's command
//! list into cell writes, so the terminal and headless backends render identically.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

/// Minimal mutable cell grid a backend renders into.
pub trait CellGrid {
    fn area(&self) -> Rect;

    /// Replace symbol and style of the cell at `pos`. Out-of-area writes are ignored.
    fn put(&mut self, pos: Pos, symbol: &str, style: Style);

    /// Replace only the style of the cell at `pos`.
    fn restyle(&mut self, pos: Pos, style: Style);
}

pub fn paint(grid: &mut impl CellGrid, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill_rect(grid, *rect, *style),
            PaintCmd::StyleRect { rect, style } => style_rect(grid, *rect, *style),
            PaintCmd::HLine {
                pos,
                len,
                ch,
                style,
            } => draw_hline(grid, *pos, *len, *ch, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(grid, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => draw_border(grid, *rect, *style, *kind),
        }
    }
}

fn fill_rect(grid: &mut impl CellGrid, rect: Rect, style: Style) {
    let clip = rect.intersect(grid.area());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            grid.put(Pos::new(x, y), " ", style);
        }
    }
}

fn style_rect(grid: &mut impl CellGrid, rect: Rect, style: Style) {
    let clip = rect.intersect(grid.area());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            grid.restyle(Pos::new(x, y), style);
        }
    }
}

fn draw_hline(grid: &mut impl CellGrid, pos: Pos, len: u16, ch: char, style: Style) {
    let clip = Rect::new(pos.x, pos.y, len, 1).intersect(grid.area());
    let mut buf = [0u8; 4];
    let symbol = ch.encode_utf8(&mut buf);
    for x in clip.x..clip.right() {
        grid.put(Pos::new(x, clip.y), symbol, style);
    }
}

fn draw_text(grid: &mut impl CellGrid, pos: Pos, text: &str, style: Style, clip: Option<Rect>) {
    let clip = clip.unwrap_or_else(|| grid.area()).intersect(grid.area());
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let y = pos.y;
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        grid.put(Pos::new(x, y), g, style);
        // Wide glyphs occupy the following cells.
        for dx in 1..w {
            grid.put(Pos::new(x.saturating_add(dx), y), " ", style);
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(grid: &mut impl CellGrid, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(grid.area());
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right().saturating_sub(1);
    let bottom = rect.bottom().saturating_sub(1);
    let (tl, tr, bl, br, h, v) = kind.glyphs();
    let mut buf = [0u8; 4];

    grid.put(Pos::new(rect.x, rect.y), tl.encode_utf8(&mut buf), style);
    grid.put(Pos::new(right, rect.y), tr.encode_utf8(&mut buf), style);
    grid.put(Pos::new(rect.x, bottom), bl.encode_utf8(&mut buf), style);
    grid.put(Pos::new(right, bottom), br.encode_utf8(&mut buf), style);

    for x in rect.x.saturating_add(1)..right {
        grid.put(Pos::new(x, rect.y), h.encode_utf8(&mut buf), style);
        grid.put(Pos::new(x, bottom), h.encode_utf8(&mut buf), style);
    }
    for y in rect.y.saturating_add(1)..bottom {
        grid.put(Pos::new(rect.x, y), v.encode_utf8(&mut buf), style);
        grid.put(Pos::new(right, y), v.encode_utf8(&mut buf), style);
    }
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
