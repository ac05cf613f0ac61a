//! Data Feature - Table, Number Formatter, Timeline and Blockquote

pub mod page;
