//! Colors of the page and the dialog, resolved from settings and terminal capabilities.

use crate::kernel::services::ports::ThemeSettings;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::widgets::{ButtonStyles, DialogStyles};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub page_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    /// `Reset` leaves the page colors in place and only dims them.
    pub backdrop_bg: Color,
    pub panel_bg: Color,
    pub panel_fg: Color,
    pub panel_border: Color,
    pub heading_fg: Color,
    pub link_fg: Color,
    pub focus_bg: Color,
    pub focus_fg: Color,
    pub hover_bg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("ZMODAL_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    color_support_from_env(&colorterm, &term)
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

fn color_support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if direct(colorterm) || direct(term) {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            page_fg: Color::Reset,
            header_fg: Color::Indexed(6), // Cyan
            muted_fg: Color::Indexed(8),  // DarkGray
            backdrop_bg: Color::Reset,
            panel_bg: Color::Reset,
            panel_fg: Color::Indexed(15),     // White
            panel_border: Color::Indexed(6),  // Cyan
            heading_fg: Color::Indexed(6),    // Cyan
            link_fg: Color::Indexed(12),      // LightBlue
            focus_bg: Color::Indexed(6),      // Cyan
            focus_fg: Color::Indexed(0),      // Black
            hover_bg: Color::Indexed(8),      // DarkGray
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for slot in [
            &mut self.page_fg,
            &mut self.header_fg,
            &mut self.muted_fg,
            &mut self.backdrop_bg,
            &mut self.panel_bg,
            &mut self.panel_fg,
            &mut self.panel_border,
            &mut self.heading_fg,
            &mut self.link_fg,
            &mut self.focus_bg,
            &mut self.focus_fg,
            &mut self.hover_bg,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }

    /// Unknown color names are ignored and keep the current value.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        apply_color(&mut self.backdrop_bg, &settings.backdrop_bg);
        apply_color(&mut self.panel_bg, &settings.panel_bg);
        apply_color(&mut self.panel_fg, &settings.panel_fg);
        apply_color(&mut self.panel_border, &settings.panel_border);
        apply_color(&mut self.heading_fg, &settings.heading_fg);
        apply_color(&mut self.link_fg, &settings.link_fg);
        apply_color(&mut self.focus_bg, &settings.focus_bg);
        apply_color(&mut self.focus_fg, &settings.focus_fg);
        apply_color(&mut self.hover_bg, &settings.hover_bg);
        apply_color(&mut self.muted_fg, &settings.muted_fg);
    }

    pub fn focused_style(&self) -> Style {
        Style::default()
            .fg(self.focus_fg)
            .bg(self.focus_bg)
            .add_mod(Mod::BOLD)
    }

    pub fn hovered_style(&self) -> Style {
        Style::default().bg(self.hover_bg)
    }

    pub fn trigger_styles(&self) -> ButtonStyles {
        ButtonStyles {
            base: Style::default().fg(self.header_fg),
            hovered: self.hovered_style(),
            focused: self.focused_style(),
        }
    }

    pub fn dialog_styles(&self) -> DialogStyles {
        let mut backdrop = Style::default().add_mod(Mod::DIM);
        if self.backdrop_bg != Color::Reset {
            backdrop = backdrop.bg(self.backdrop_bg);
        }
        let panel = Style::default().fg(self.panel_fg).bg(self.panel_bg);

        DialogStyles {
            backdrop,
            panel,
            border: panel.fg(self.panel_border),
            heading: panel.fg(self.heading_fg),
            body: panel,
            link: panel.fg(self.link_fg),
            button: panel,
            hovered: self.hovered_style(),
            focused: self.focused_style(),
        }
    }
}

fn apply_color(slot: &mut Color, value: &Option<String>) {
    if let Some(c) = value.as_deref().and_then(parse_color) {
        *slot = c;
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index((0u16..=255).map(|i| ansi256_index_to_rgb(i as u8)), (r, g, b))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index(ANSI16_RGB.iter().copied(), (r, g, b))
}

fn nearest_index(palette: impl Iterator<Item = (u8, u8, u8)>, target: (u8, u8, u8)) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;
    for (index, candidate) in palette.enumerate() {
        let distance = color_distance_sq(target, candidate);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }
    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
