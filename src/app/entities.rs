//! AppEntities - Global Entity Handles
//!
//! Gallery-wide state split by update frequency: settings change rarely,
//! navigation on every section switch.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::NavigationState;
use crate::settings::GallerySettings;

#[derive(Clone)]
pub struct AppEntities {
    /// Persisted gallery settings (locale, defaults)
    pub settings: Entity<GallerySettings>,
    /// Active section
    pub navigation: Entity<NavigationState>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(settings: GallerySettings, cx: &mut App) -> Self {
        Self {
            settings: cx.new(|_| settings),
            navigation: cx.new(|_| NavigationState::default()),
        }
    }
}
