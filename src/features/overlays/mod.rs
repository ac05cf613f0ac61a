//! Overlays Feature - Modal, Drawer, Dialog, Tooltip and Hover Card

pub mod page;
