//! Application state module

mod app_state;
mod forms;
mod loading;
mod role;
mod toast;

pub use app_state::*;
pub use forms::*;
pub use role::*;
pub use toast::*;
