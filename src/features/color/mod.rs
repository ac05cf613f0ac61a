//! Color Feature - Color Picker

pub mod page;
