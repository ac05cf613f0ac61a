//! Buttons Feature - Buttons, Chips and Switches

pub mod page;
