//! Navigation - Gallery Sections
//!
//! The gallery shows one section of components at a time.

use serde::{Deserialize, Serialize};

/// Component group shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Section {
    /// Buttons, chips and toggles
    #[default]
    Buttons,
    /// Text, password, number and pin inputs
    Inputs,
    /// Select, checkbox and rating
    Selection,
    /// Progress and copy button
    Feedback,
    /// Pagination, tabs, stepper and accordion
    Navigation,
    /// Modal, dialog, drawer, tooltip and hover card
    Overlays,
    /// Grids, flex, fieldset and scroll area
    Layout,
    /// Table, number formatter, timeline and blockquote
    Data,
    /// Color picker
    Color,
}

impl Section {
    const ALL: [Section; 9] = [
        Section::Buttons,
        Section::Inputs,
        Section::Selection,
        Section::Feedback,
        Section::Navigation,
        Section::Overlays,
        Section::Layout,
        Section::Data,
        Section::Color,
    ];

    /// Get the translation key for the section title
    pub fn title_key(&self) -> &'static str {
        match self {
            Section::Buttons => "section-buttons",
            Section::Inputs => "section-inputs",
            Section::Selection => "section-selection",
            Section::Feedback => "section-feedback",
            Section::Navigation => "section-navigation",
            Section::Overlays => "section-overlays",
            Section::Layout => "section-layout",
            Section::Data => "section-data",
            Section::Color => "section-color",
        }
    }

    /// Get all sections in sidebar order
    pub fn all() -> &'static [Section] {
        &Self::ALL
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    /// Following section, wrapping to the first
    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding section, wrapping to the last
    pub fn previous(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Currently shown section
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationState {
    pub active: Section,
}

impl NavigationState {
    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_wrap_around() {
        assert_eq!(Section::Buttons.next(), Section::Inputs);
        assert_eq!(Section::Color.next(), Section::Buttons);
        assert_eq!(Section::Buttons.previous(), Section::Color);
        assert_eq!(Section::Inputs.previous(), Section::Buttons);
        assert_eq!(Section::Overlays.next(), Section::Layout);
        assert_eq!(Section::Color.previous(), Section::Data);
    }

    #[test]
    fn every_section_has_a_title() {
        for section in Section::all() {
            assert!(crate::i18n::t(crate::i18n::Locale::EnUS, section.title_key()) != section.title_key());
        }
    }
}
