use super::{ModalPage, DIALOG_LAYER, PAGE_LAYER};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::layout::Insets;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{Node, NodeKind, Role, Sense};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::{Button, Dialog};

const TITLE: &str = "zmodal";
const HINT_CLOSED: &str = "Tab focus · Enter/Space activate · q quit";
const HINT_OPEN: &str = "Esc close · Tab cycle · Ctrl+C quit";

pub(super) fn render(page: &mut ModalPage, backend: &mut dyn Backend, area: Rect) {
    page.resize(area);
    backend.draw(area, page.painter.cmds());
    backend.set_cursor(None);
}

/// Rebuilds paint commands and hit-test tree from the current state.
pub(super) fn build_scene(page: &mut ModalPage) {
    page.painter.clear();
    page.tree.clear();

    let area = page.last_area;
    let theme = page.theme.clone();
    let focused = page.document.focused();
    let hovered = page.runtime.hovered();
    let is_open = page.is_open();

    let mut ui = Ui::new(area, &mut page.painter, &mut page.tree);

    let header = ui.take_top(1);
    ui.painter.text_clipped(
        Pos::new(header.x, header.y),
        TITLE,
        Style::default().fg(theme.header_fg).add_mod(Mod::BOLD),
        header,
    );

    let status = ui.take_bottom(1);
    let status_text = match (&page.status, is_open) {
        (Some(text), _) => text.as_str(),
        (None, true) => HINT_OPEN,
        (None, false) => HINT_CLOSED,
    };
    ui.painter.text_clipped(
        Pos::new(status.x, status.y),
        status_text,
        Style::default().fg(theme.muted_fg),
        status,
    );

    ui.inset(Insets {
        left: 2,
        right: 2,
        top: 1,
        bottom: 0,
    });
    let trigger_row = ui.take_top(1);
    let mut trigger = Button {
        id: page.ids.trigger,
        kind: NodeKind::Trigger,
        role: Role::Button,
        layer: PAGE_LAYER,
        label: &page.settings.trigger_label,
        focused: focused == Some(page.ids.trigger),
        hovered: hovered == Some(page.ids.trigger),
        styles: theme.trigger_styles(),
    };
    ui.with_rect(trigger_row, |ui| trigger.ui(ui));

    ui.take_top(1);
    let body = ui.rect;
    page.body_rows = body.h;
    ui.tree.push(Node {
        id: page.ids.body,
        rect: body,
        layer: PAGE_LAYER,
        z: 0,
        sense: Sense::NONE,
        kind: NodeKind::PageBody,
    });
    let offset = page.document.scroll_offset() as usize;
    let page_style = Style::default().fg(theme.page_fg);
    for (row, line) in page
        .filler
        .iter()
        .skip(offset)
        .take(body.h as usize)
        .enumerate()
    {
        ui.painter.text_clipped(
            Pos::new(body.x, body.y.saturating_add(row as u16)),
            line.as_str(),
            page_style,
            body,
        );
    }

    if !is_open {
        return;
    }

    let mut dialog = Dialog {
        ids: page.ids.dialog,
        layer: DIALOG_LAYER,
        width: page.settings.width,
        height: page.settings.height,
        heading: &page.settings.heading,
        body: &page.settings.body,
        link_label: &page.settings.link_label,
        close_label: &page.settings.close_label,
        focused,
        hovered,
        styles: theme.dialog_styles(),
    };
    ui.with_rect(area, |ui| dialog.ui(ui));
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/render.rs"]
mod tests;
