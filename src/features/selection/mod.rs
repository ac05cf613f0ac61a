//! Selection Feature - Select, Checkboxes, Radios and Rating

pub mod page;
