use crate::ui::backend::{paint, Backend, CellGrid};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self {
            frame,
            cursor: None,
        }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        if let Some(pos) = self.cursor {
            // Without this call ratatui hides the cursor for the frame.
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

/// Opaque terminal wrapper so the rest of the crate does not reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        paint(&mut BufferGrid { buf }, self.cmds);
    }
}

struct BufferGrid<'a> {
    buf: &'a mut Buffer,
}

impl CellGrid for BufferGrid<'_> {
    fn area(&self) -> Rect {
        self.buf.area.into()
    }

    fn put(&mut self, pos: Pos, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((pos.x, pos.y)) {
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }

    fn restyle(&mut self, pos: Pos, style: Style) {
        if let Some(cell) = self.buf.cell_mut((pos.x, pos.y)) {
            cell.set_style(to_ratatui_style(style));
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

// Shared painting logic is covered by the headless backend tests in `tests/unit/ui/backend/test.rs`.
