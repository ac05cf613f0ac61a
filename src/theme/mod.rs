//! Theme - Style Lookup Tables
//!
//! Closed option enums (size, radius, palette) and the concrete values they
//! map to.

pub mod colors;
pub mod scale;

pub use colors::{LoomColors, Palette};
pub use scale::{Radius, Size};
