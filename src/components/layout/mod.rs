//! Layout Components
//!
//! Window shell, header and sidebar, plus the arrangement helpers: group,
//! container, flex, grids, fieldset and scroll area.

pub mod container;
pub mod fieldset;
pub mod flex;
pub mod grid;
pub mod group;
pub mod header;
pub mod scroll_area;
pub mod shell;
pub mod sidebar;
pub mod simple_grid;
