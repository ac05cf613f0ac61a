//! Domain - Pure Component State
//!
//! These types don't depend on GPUI; components own one and render from it.

pub mod color;
pub mod copy;
pub mod disclosure;
pub mod file;
pub mod grid;
pub mod number;
pub mod page_range;
pub mod pager;
pub mod pin;
pub mod rating;
pub mod tooltip;

pub use page_range::{page_range, PageRangeItem, PageRangeRequest};
pub use pager::Pager;
