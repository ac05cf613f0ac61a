//! Layout Feature - Grids, Flex, Fieldset and Scroll Area

pub mod page;
