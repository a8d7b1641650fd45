//! Dialog components for TUI

mod base;
mod success_dialog;

pub use base::wrap_text;
pub use success_dialog::render_success_dialog;
