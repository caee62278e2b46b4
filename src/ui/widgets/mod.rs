pub mod button;
pub mod dialog;

pub use button::{Button, ButtonStyles};
pub use dialog::{Dialog, DialogIds, DialogStyles};
