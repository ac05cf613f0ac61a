//! Loom UI
//!
//! Presentational GPUI components with typed configuration, plus the
//! gallery application that shows every component.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod settings;
pub mod theme;
