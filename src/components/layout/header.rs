//! Header Component
//!
//! Gallery title, default size switcher and language switcher.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};
use tracing::info;

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::LoomColors;
use crate::theme::Size;

pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_size_option(&self, size: Size, active: Size) -> impl IntoElement {
        let settings = self.entities.settings.clone();
        let is_active = size == active;

        div()
            .id(("size-option", size as usize))
            .px_2()
            .py_1()
            .rounded_sm()
            .text_size(px(12.0))
            .text_color(if is_active {
                LoomColors::text_light()
            } else {
                LoomColors::text_secondary()
            })
            .when(is_active, |el| el.bg(LoomColors::border_focus()))
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                settings.update(cx, |settings, cx| {
                    settings.set_size(size);
                    cx.notify();
                });
            })
            .child(size.label())
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let locale = settings.locale();
        let size = settings.size();
        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .bg(LoomColors::surface())
            .border_b_1()
            .border_color(LoomColors::border())
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(t(locale, "gallery-title")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .gap_1()
                            .children(Size::ALL.iter().map(|option| self.render_size_option(*option, size))),
                    )
                    .child(
                        div()
                            .id("lang-switcher")
                            .flex()
                            .gap_1()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_size(px(13.0))
                            .text_color(LoomColors::text_secondary())
                            .cursor_pointer()
                            .hover(|s| s.bg(LoomColors::hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.settings.update(cx, |settings, cx| {
                                    let locale = settings.locale().toggled();
                                    info!(?locale, "Switching language");
                                    settings.set_locale(locale);
                                    cx.notify();
                                });
                            })
                            .child(t(locale, "gallery-language"))
                            .child(locale.display_name()),
                    ),
            )
    }
}
