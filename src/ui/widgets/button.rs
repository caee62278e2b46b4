use crate::core::text_window;
use crate::ui::core::geom::Pos;
use crate::ui::core::id::Id;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{Node, NodeKind, Role, Semantics, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonStyles {
    pub base: Style,
    pub hovered: Style,
    pub focused: Style,
}

/// Single-row activatable control: a bracketed button, or an underlined link.
///
/// Occupies the first row of `ui.rect`, as wide as its label (clamped to the rect).
pub struct Button<'a> {
    pub id: Id,
    pub kind: NodeKind,
    pub role: Role,
    pub layer: u8,
    pub label: &'a str,
    pub focused: bool,
    pub hovered: bool,
    pub styles: ButtonStyles,
}

impl Button<'_> {
    pub fn text(&self) -> String {
        match self.role {
            Role::Link => self.label.to_string(),
            _ => format!("[ {} ]", self.label),
        }
    }

    pub fn width(&self) -> u16 {
        self.text().width().min(u16::MAX as usize) as u16
    }
}

impl Widget for Button<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect.row_prefix(self.width());
        if rect.is_empty() {
            return;
        }

        ui.tree.push(Node {
            id: self.id,
            rect,
            layer: self.layer,
            z: 0,
            sense: Sense::HOVER | Sense::CLICK | Sense::FOCUS,
            kind: self.kind,
        });
        ui.tree
            .set_semantics(self.id, Semantics::new(self.role).label(self.label));

        let mut style = self.styles.base;
        if self.role == Role::Link {
            style = style.add_mod(Mod::UNDERLINE);
        }
        if self.hovered {
            style = style.patch(self.styles.hovered);
        }
        if self.focused {
            style = style.patch(self.styles.focused);
        }

        let mut text = self.text();
        let end = text_window::truncate_to_width(&text, rect.w as usize);
        text.truncate(end);
        ui.painter
            .text_clipped(Pos::new(rect.x, rect.y), text, style, rect);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
