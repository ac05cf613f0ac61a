//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod blockquote;
pub mod burger;
pub mod button;
pub mod checkbox;
pub mod chip;
pub mod close_button;
pub mod file_input;
pub mod native_select;
pub mod number_formatter;
pub mod number_input;
pub mod password_input;
pub mod pin_input;
pub mod progress;
pub mod radio;
pub mod rating;
pub mod switch;
pub mod text_input;
pub mod textarea;
