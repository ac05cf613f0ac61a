//! Inputs Feature - Text, Password, Number, Pin and File Inputs

pub mod page;
