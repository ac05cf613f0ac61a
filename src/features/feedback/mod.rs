//! Feedback Feature - Progress, Notifications and Small Buttons

pub mod page;
