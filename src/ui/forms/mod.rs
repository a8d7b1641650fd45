//! Form rendering module
//!
//! - `field_renderer`: single input with its validation message
//! - `register_form`: the registration form

mod field_renderer;
mod register_form;

pub use register_form::draw_register;
