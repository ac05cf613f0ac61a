//! Workspace - Main Shell with Layout
//!
//! Holds the header, sidebar and the active section page. Pages are created
//! on first visit and kept afterwards so their component state survives
//! section switches.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, ParentElement, Render, Styled, Window,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::features::buttons::page::ButtonsPage;
use crate::features::color::page::ColorPage;
use crate::features::data::page::DataPage;
use crate::features::feedback::page::FeedbackPage;
use crate::features::inputs::page::InputsPage;
use crate::features::layout::page::LayoutPage;
use crate::features::navigation::page::NavigationPage;
use crate::features::overlays::page::OverlaysPage;
use crate::features::selection::page::SelectionPage;
use crate::helpers::GalleryAction;

pub struct Workspace {
    entities: AppEntities,
    focus_handle: FocusHandle,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    buttons_page: Option<Entity<ButtonsPage>>,
    inputs_page: Option<Entity<InputsPage>>,
    selection_page: Option<Entity<SelectionPage>>,
    feedback_page: Option<Entity<FeedbackPage>>,
    navigation_page: Option<Entity<NavigationPage>>,
    overlays_page: Option<Entity<OverlaysPage>>,
    layout_page: Option<Entity<LayoutPage>>,
    data_page: Option<Entity<DataPage>>,
    color_page: Option<Entity<ColorPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            entities,
            focus_handle,
            header,
            sidebar,
            buttons_page: None,
            inputs_page: None,
            selection_page: None,
            feedback_page: None,
            navigation_page: None,
            overlays_page: None,
            layout_page: None,
            data_page: None,
            color_page: None,
        }
    }

    /// Get or create the page view for `section`
    fn page(&mut self, section: Section, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        match section {
            Section::Buttons => self
                .buttons_page
                .get_or_insert_with(|| cx.new(|cx| ButtonsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Inputs => self
                .inputs_page
                .get_or_insert_with(|| cx.new(|cx| InputsPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            Section::Selection => self
                .selection_page
                .get_or_insert_with(|| cx.new(|cx| SelectionPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Feedback => self
                .feedback_page
                .get_or_insert_with(|| cx.new(|cx| FeedbackPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Navigation => self
                .navigation_page
                .get_or_insert_with(|| cx.new(|cx| NavigationPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Overlays => self
                .overlays_page
                .get_or_insert_with(|| cx.new(|cx| OverlaysPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Layout => self
                .layout_page
                .get_or_insert_with(|| cx.new(|cx| LayoutPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            Section::Data => self
                .data_page
                .get_or_insert_with(|| cx.new(|cx| DataPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Section::Color => self
                .color_page
                .get_or_insert_with(|| cx.new(|cx| ColorPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }

    fn handle_action(&mut self, action: &GalleryAction, window: &mut Window, cx: &mut Context<Self>) {
        debug!(?action, "Gallery action");
        match action {
            GalleryAction::NextSection | GalleryAction::PreviousSection => {
                let forward = *action == GalleryAction::NextSection;
                self.entities.navigation.update(cx, |navigation, cx| {
                    let section = if forward {
                        navigation.active.next()
                    } else {
                        navigation.active.previous()
                    };
                    navigation.set_active(section);
                    cx.notify();
                });
            }
            GalleryAction::ToggleLocale => {
                self.entities.settings.update(cx, |settings, cx| {
                    settings.set_locale(settings.locale().toggled());
                    cx.notify();
                });
            }
            GalleryAction::Dismiss => {
                let dismissed = self
                    .overlays_page
                    .as_ref()
                    .is_some_and(|page| page.update(cx, |page, cx| page.dismiss(cx)));
                if !dismissed {
                    window.focus(&self.focus_handle);
                }
            }
        }
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.entities.navigation.read(cx).active;
        let content = self.page(active, window, cx);

        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_action))
            .child(
                Shell::new()
                    .header(self.header.clone())
                    .sidebar(self.sidebar.clone())
                    .content(content),
            )
    }
}
