//! Helper Utilities
//!
//! Keyboard actions and file system paths used by the gallery.

mod action;
mod fs;

pub use action::*;
pub use fs::*;
