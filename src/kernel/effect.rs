use crate::ui::core::id::Id;

/// Side effects requested by the store; the view executes them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Register the Escape and focus-trap key listeners, lock page scroll and
    /// move focus into the dialog.
    AcquireModalResources,
    /// Drop every listener and the scroll lock taken by `AcquireModalResources`.
    ReleaseModalResources,
    RestoreFocus(Id),
}
