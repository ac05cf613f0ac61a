//! Composite Components
//!
//! Components built from primitives: navigation, overlays, feedback, data
//! display and pickers.

pub mod accordion;
pub mod breadcrumbs;
pub mod collapse;
pub mod color_picker;
pub mod copy_button;
pub mod hover_card;
pub mod modal;
pub mod nav_link;
pub mod notification;
pub mod pagination;
pub mod stepper;
pub mod table;
pub mod tabs;
pub mod timeline;
pub mod tooltip;
