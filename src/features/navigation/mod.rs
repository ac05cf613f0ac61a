//! Navigation Feature - Pagination, Tabs, Stepper, Accordion and Links

pub mod page;
