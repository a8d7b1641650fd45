//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_button, render_toggle_button, BUTTON_HEIGHT};
pub use dialog::render_success_dialog;
pub use toast::render_toasts;
