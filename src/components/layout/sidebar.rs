//! Sidebar Component
//!
//! Section links of the gallery.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::helpers::{humanize_keystroke, SHORTCUT_HINTS};
use crate::i18n::{t, Locale};
use crate::theme::colors::LoomColors;
use crate::theme::Palette;

pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, section: Section, locale: Locale, active: Section) -> impl IntoElement {
        let is_active = section == active;
        let navigation = self.entities.navigation.clone();
        let accent = Palette::Blue;

        div()
            .id(SharedString::from(format!("nav-{section:?}")))
            .w_full()
            .px_4()
            .py_2()
            .border_l_2()
            .text_size(px(14.0))
            .map(|el| {
                if is_active {
                    el.bg(accent.light())
                        .border_color(accent.filled())
                        .text_color(accent.filled())
                } else {
                    el.border_color(LoomColors::transparent())
                        .text_color(LoomColors::text_secondary())
                }
            })
            .cursor_pointer()
            .hover(|s| s.bg(LoomColors::hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                navigation.update(cx, |navigation, cx| {
                    navigation.set_active(section);
                    cx.notify();
                });
            })
            .child(t(locale, section.title_key()))
    }

    fn render_shortcuts(&self, locale: Locale) -> impl IntoElement {
        div()
            .mt_auto()
            .p_4()
            .flex()
            .flex_col()
            .gap_1()
            .text_size(px(11.0))
            .text_color(LoomColors::text_muted())
            .children(SHORTCUT_HINTS.iter().map(|(keystroke, key)| {
                div()
                    .flex()
                    .justify_between()
                    .child(t(locale, key))
                    .child(SharedString::from(humanize_keystroke(keystroke)))
            }))
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.navigation.read(cx).active;

        div()
            .w(px(180.0))
            .h_full()
            .flex()
            .flex_col()
            .pt_4()
            .bg(LoomColors::surface())
            .border_r_1()
            .border_color(LoomColors::border())
            .children(
                Section::all()
                    .iter()
                    .map(|section| self.render_nav_item(*section, locale, active)),
            )
            .child(self.render_shortcuts(locale))
    }
}
