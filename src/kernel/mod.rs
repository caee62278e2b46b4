//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod focus;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, CloseReason};
pub use effect::Effect;
pub use focus::{FocusDirection, FocusableElementSet};
pub use state::{AppState, ModalState};
pub use store::{DispatchResult, Store};
