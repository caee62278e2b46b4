//! Modal dialog: a full-screen backdrop with a centered panel on top.
//!
//! The backdrop and the panel are both click targets. The panel sits above the
//! backdrop, so a pointer press inside the panel never resolves to the backdrop.

use super::button::{Button, ButtonStyles};
use crate::core::text_window;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{Node, NodeKind, Role, Semantics, Sense};
use crate::ui::core::widget::{Ui, Widget};

pub const MIN_PANEL_W: u16 = 12;
pub const MIN_PANEL_H: u16 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogIds {
    pub overlay: Id,
    pub panel: Id,
    pub heading: Id,
    pub body: Id,
    pub link: Id,
    pub close: Id,
}

impl DialogIds {
    pub fn new(base: IdPath) -> Self {
        Self {
            overlay: base.child("overlay"),
            panel: base.child("panel"),
            heading: base.child("heading"),
            body: base.child("body"),
            link: base.child("link"),
            close: base.child("close"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DialogStyles {
    /// Patched over whatever is already painted behind the dialog.
    pub backdrop: Style,
    pub panel: Style,
    pub border: Style,
    pub heading: Style,
    pub body: Style,
    pub link: Style,
    pub button: Style,
    pub hovered: Style,
    pub focused: Style,
}

pub struct Dialog<'a> {
    pub ids: DialogIds,
    pub layer: u8,
    pub width: u16,
    pub height: u16,
    pub heading: &'a str,
    pub body: &'a str,
    pub link_label: &'a str,
    pub close_label: &'a str,
    pub focused: Option<Id>,
    pub hovered: Option<Id>,
    pub styles: DialogStyles,
}

impl Dialog<'_> {
    pub fn panel_rect(&self, screen: Rect) -> Rect {
        screen.centered(self.width, self.height)
    }

    fn control_styles(&self, base: Style) -> ButtonStyles {
        ButtonStyles {
            base,
            hovered: self.styles.hovered,
            focused: self.styles.focused,
        }
    }
}

impl Widget for Dialog<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let screen = ui.rect;
        if screen.is_empty() {
            return;
        }

        ui.painter.style_rect(screen, self.styles.backdrop);
        ui.tree.push(Node {
            id: self.ids.overlay,
            rect: screen,
            layer: self.layer,
            z: 0,
            sense: Sense::CLICK,
            kind: NodeKind::ModalOverlay,
        });
        ui.tree.set_semantics(
            self.ids.overlay,
            Semantics::new(Role::Dialog)
                .modal(true)
                .labelled_by(self.ids.heading),
        );

        let panel = self.panel_rect(screen);
        ui.painter.fill_rect(panel, self.styles.panel);
        ui.painter
            .border(panel, self.styles.border, BorderKind::Rounded);
        ui.tree.push(Node {
            id: self.ids.panel,
            rect: panel,
            layer: self.layer,
            z: 0,
            sense: Sense::CLICK,
            kind: NodeKind::ModalPanel,
        });

        // Too small to lay out content; the panel stays as a bare click target.
        if panel.w < MIN_PANEL_W || panel.h < MIN_PANEL_H {
            return;
        }

        let inner = panel.inset(Insets::xy(2, 1));
        ui.with_rect(inner, |ui| {
            let heading = ui.take_top(1);
            ui.painter.text_clipped(
                Pos::new(heading.x, heading.y),
                self.heading,
                self.styles.heading.add_mod(Mod::BOLD),
                heading,
            );
            ui.tree.push(Node {
                id: self.ids.heading,
                rect: heading,
                layer: self.layer,
                z: 0,
                sense: Sense::NONE,
                kind: NodeKind::ModalHeading,
            });
            ui.tree.set_semantics(
                self.ids.heading,
                Semantics::new(Role::Heading).label(self.heading),
            );

            let footer = ui.take_bottom(1);
            ui.take_top(1);
            let body = ui.rect;
            paint_body(ui, body, self.body, self.styles.body);
            ui.tree.push(Node {
                id: self.ids.body,
                rect: body,
                layer: self.layer,
                z: 0,
                sense: Sense::NONE,
                kind: NodeKind::ModalBody,
            });
            ui.tree
                .set_semantics(self.ids.body, Semantics::new(Role::Text).label(self.body));

            let mut link = Button {
                id: self.ids.link,
                kind: NodeKind::ModalLink,
                role: Role::Link,
                layer: self.layer,
                label: self.link_label,
                focused: self.focused == Some(self.ids.link),
                hovered: self.hovered == Some(self.ids.link),
                styles: self.control_styles(self.styles.link),
            };
            let mut close = Button {
                id: self.ids.close,
                kind: NodeKind::ModalClose,
                role: Role::Button,
                layer: self.layer,
                label: self.close_label,
                focused: self.focused == Some(self.ids.close),
                hovered: self.hovered == Some(self.ids.close),
                styles: self.control_styles(self.styles.button),
            };

            let close_w = close.width().min(footer.w);
            let link_rect = Rect::new(
                footer.x,
                footer.y,
                footer.w.saturating_sub(close_w.saturating_add(1)),
                footer.h,
            );
            let close_rect = Rect::new(
                footer.right().saturating_sub(close_w),
                footer.y,
                close_w,
                footer.h,
            );

            ui.with_rect(link_rect, |ui| link.ui(ui));
            ui.with_rect(close_rect, |ui| close.ui(ui));
        });
    }
}

fn paint_body(ui: &mut Ui, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    for (row, line) in text_window::wrap(text, area.w as usize)
        .into_iter()
        .take(area.h as usize)
        .enumerate()
    {
        ui.painter.text_clipped(
            Pos::new(area.x, area.y.saturating_add(row as u16)),
            line,
            style,
            area,
        );
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/dialog.rs"]
mod tests;
