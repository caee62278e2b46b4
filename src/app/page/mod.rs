//! Host page with a trigger button and the modal dialog it opens.

use super::document::Document;
use super::effects::ModalResources;
use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::ports::{ModalSettings, Settings};
use crate::kernel::{
    Action as KernelAction, AppState, CloseReason, Effect, FocusDirection, FocusableElementSet,
    Store,
};
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::tree::UiTree;
use crate::ui::widgets::DialogIds;

mod input;
mod mouse;
mod render;

pub const PAGE_LAYER: u8 = 0;
pub const DIALOG_LAYER: u8 = 1;

const DEFAULT_AREA: Rect = Rect::new(0, 0, 80, 24);
const FILLER_LINES: usize = 80;
const WHEEL_STEP: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIds {
    pub trigger: Id,
    pub body: Id,
    pub dialog: DialogIds,
}

impl PageIds {
    fn new() -> Self {
        let root = IdPath::root("zmodal");
        Self {
            trigger: root.child("trigger"),
            body: root.child("body"),
            dialog: DialogIds::new(root.push_str("dialog")),
        }
    }
}

pub struct ModalPage {
    store: Store,
    document: Document,
    resources: Option<ModalResources>,
    focusables: FocusableElementSet,
    runtime: UiRuntime,
    tree: UiTree,
    painter: Painter,
    settings: ModalSettings,
    theme: UiTheme,
    ids: PageIds,
    last_area: Rect,
    body_rows: u16,
    filler: Vec<String>,
    status: Option<String>,
}

impl ModalPage {
    pub fn new(settings: Settings) -> Self {
        let theme = UiTheme::from_settings(&settings.theme);
        Self::with_theme(settings.modal, theme)
    }

    pub fn with_theme(settings: ModalSettings, theme: UiTheme) -> Self {
        let filler = (1..=FILLER_LINES)
            .map(|n| format!("Page content line {n}"))
            .collect();

        let mut page = Self {
            store: Store::new(AppState::new()),
            document: Document::new(),
            resources: None,
            focusables: FocusableElementSet::default(),
            runtime: UiRuntime::new(),
            tree: UiTree::new(),
            painter: Painter::new(),
            settings,
            theme,
            ids: PageIds::new(),
            last_area: DEFAULT_AREA,
            body_rows: 0,
            filler,
            status: None,
        };
        page.rebuild();
        page
    }

    pub fn is_open(&self) -> bool {
        self.store.is_modal_open()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn ids(&self) -> &PageIds {
        &self.ids
    }

    pub fn settings(&self) -> &ModalSettings {
        &self.settings
    }

    pub fn focused(&self) -> Option<Id> {
        self.document.focused()
    }

    /// Focusable controls of the open dialog, collected on open and on resize.
    pub fn focusables(&self) -> &FocusableElementSet {
        &self.focusables
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn area(&self) -> Rect {
        self.last_area
    }

    pub fn resize(&mut self, area: Rect) {
        if self.last_area == area {
            return;
        }
        self.last_area = area;
        self.runtime.reset_pointer_state();
        self.rebuild();

        if self.is_open() {
            self.collect_focusables();
            let inside = self
                .document
                .focused()
                .is_some_and(|id| self.focusables.contains(id));
            if !inside {
                if let Some(first) = self.focusables.first() {
                    self.document.focus(first);
                    self.rebuild();
                }
            }
        }
    }

    /// Opens the dialog; `opener` gets focus back once it closes.
    pub fn open(&mut self, opener: Option<Id>) -> bool {
        self.dispatch_kernel(KernelAction::OpenModal { opener })
    }

    pub fn open_from_trigger(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        let trigger = self.ids.trigger;
        self.document.focus(trigger);
        self.open(Some(trigger))
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.dispatch_kernel(KernelAction::CloseModal { reason })
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        if result.state_changed {
            self.rebuild();
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AcquireModalResources => {
                if let Some(mut stale) = self.resources.take() {
                    stale.release();
                }
                self.resources = Some(ModalResources::acquire(&self.document));
                self.runtime.reset_pointer_state();

                // The dialog must exist in the scene before its controls can be collected.
                self.rebuild();
                self.collect_focusables();

                if let Some(first) = self.focusables.first() {
                    self.document.focus(first);
                }
            }
            Effect::ReleaseModalResources => {
                if let Some(mut resources) = self.resources.take() {
                    resources.release();
                }
                self.focusables = FocusableElementSet::default();
                self.runtime.reset_pointer_state();
            }
            Effect::RestoreFocus(id) => self.document.focus(id),
        }
    }

    fn collect_focusables(&mut self) {
        let panel = self
            .tree
            .node(self.ids.dialog.panel)
            .map(|n| n.rect)
            .unwrap_or_default();
        self.focusables =
            FocusableElementSet::new(self.tree.focusable_within(DIALOG_LAYER, panel));
        tracing::debug!(count = self.focusables.len(), "dialog focusables");
    }

    /// Default sequential navigation, wrapping at both ends. While the dialog is
    /// open only its own controls take part.
    fn move_focus(&mut self, direction: FocusDirection) -> bool {
        let order = if self.is_open() {
            self.focusables.clone()
        } else {
            FocusableElementSet::new(self.tree.focus_order())
        };
        let Some(next) = order.step(self.document.focused(), direction) else {
            return false;
        };
        if self.document.focused() == Some(next) {
            return false;
        }
        self.document.focus(next);
        self.rebuild();
        true
    }

    fn activate(&mut self, id: Id) -> bool {
        let ids = self.ids;
        if id == ids.trigger {
            self.open_from_trigger()
        } else if id == ids.dialog.link {
            self.document.focus(id);
            self.activate_link();
            true
        } else if id == ids.dialog.close {
            self.close(CloseReason::CloseButton)
        } else if id == ids.dialog.overlay {
            self.close(CloseReason::Backdrop)
        } else {
            false
        }
    }

    fn activate_link(&mut self) {
        let target = self.settings.link_target.clone();
        tracing::info!(target = %target, "link activated");
        self.status = Some(format!("Link: {target}"));
        self.rebuild();
    }

    fn scroll_page(&mut self, delta: i32) -> bool {
        let max = self.filler.len().saturating_sub(self.body_rows as usize);
        let max = max.min(u16::MAX as usize) as u16;
        let changed = self.document.scroll_by(delta, max);
        if changed {
            self.rebuild();
        }
        changed
    }

    fn rebuild(&mut self) {
        render::build_scene(self);
    }

    /// Releases anything the open dialog still holds. Runs on drop as well.
    pub fn teardown(&mut self) {
        if let Some(mut resources) = self.resources.take() {
            resources.release();
            tracing::debug!("page teardown released modal resources");
        }
    }
}

impl Drop for ModalPage {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl View for ModalPage {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        render::render(self, backend, area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/mod.rs"]
mod tests;
