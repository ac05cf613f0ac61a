//! Features - Gallery Sections
//!
//! Each feature is one gallery page showing a group of components.

pub mod buttons;
pub mod color;
pub mod data;
pub mod demo;
pub mod feedback;
pub mod inputs;
pub mod layout;
pub mod navigation;
pub mod overlays;
pub mod selection;
