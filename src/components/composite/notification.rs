//! Notification Component
//!
//! Inline alert card with a title, a message and a close button. Showing
//! and hiding is up to the caller.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ElementId, FontWeight, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, Styled, Window,
};

use crate::components::primitives::close_button::CloseButton;
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    /// Surface card with a palette accent bar
    #[default]
    Filled,
    Outline,
    Light,
}

/// (background, border, accent) of a notification
pub(crate) fn notification_colors(variant: NotificationVariant, color: Palette) -> (Rgba, Rgba, Rgba) {
    match variant {
        NotificationVariant::Filled => (LoomColors::surface(), LoomColors::border(), color.filled()),
        NotificationVariant::Outline => (LoomColors::surface(), color.filled(), color.filled()),
        NotificationVariant::Light => (color.light(), color.light(), color.filled()),
    }
}

#[derive(IntoElement)]
pub struct Notification {
    id: ElementId,
    title: Option<SharedString>,
    message: Option<AnyElement>,
    icon: Option<AnyElement>,
    variant: NotificationVariant,
    color: Palette,
    radius: Radius,
    loading: bool,
    with_close_button: bool,
    on_close: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Notification {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            message: None,
            icon: None,
            variant: NotificationVariant::Filled,
            color: Palette::Blue,
            radius: Radius::Md,
            loading: false,
            with_close_button: true,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl IntoElement) -> Self {
        self.message = Some(message.into_any_element());
        self
    }

    /// Drawn in a palette circle instead of the accent bar
    pub fn icon(mut self, icon: impl IntoElement) -> Self {
        self.icon = Some(icon.into_any_element());
        self
    }

    pub fn variant(mut self, variant: NotificationVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Replace the accent with a loader
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_close_button(mut self, with_close_button: bool) -> Self {
        self.with_close_button = with_close_button;
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Notification {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, border, accent) = notification_colors(self.variant, self.color);
        let color = self.color;

        let marker = if self.loading {
            div()
                .flex_none()
                .text_color(accent)
                .text_size(Size::Lg.font_size())
                .child("◌")
        } else if let Some(icon) = self.icon {
            div()
                .flex_none()
                .size(px(28.0))
                .rounded_full()
                .bg(color.filled())
                .text_color(color.on_filled())
                .flex()
                .items_center()
                .justify_center()
                .child(icon)
        } else {
            div().flex_none().w(px(4.0)).h(px(36.0)).rounded_full().bg(accent)
        };

        let close = self
            .on_close
            .filter(|_| self.with_close_button)
            .map(|handler| {
                CloseButton::new("notification-close")
                    .size(Size::Sm)
                    .on_click(move |_event, window, cx| handler(window, cx))
            });

        div()
            .id(self.id)
            .flex()
            .items_start()
            .gap_3()
            .px_4()
            .py_3()
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(self.radius.pixels())
            .shadow_sm()
            .child(marker)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .when_some(self.title, |el, title| {
                        el.child(
                            div()
                                .text_size(Size::Sm.font_size())
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(LoomColors::text_primary())
                                .child(title),
                        )
                    })
                    .when_some(self.message, |el, message| {
                        el.child(
                            div()
                                .text_size(Size::Sm.font_size())
                                .text_color(LoomColors::text_secondary())
                                .child(message),
                        )
                    }),
            )
            .children(close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_always_uses_palette() {
        for variant in [NotificationVariant::Filled, NotificationVariant::Outline, NotificationVariant::Light] {
            let (_, _, accent) = notification_colors(variant, Palette::Green);
            assert_eq!(accent, Palette::Green.filled());
        }
    }

    #[test]
    fn outline_borders_with_palette() {
        let (bg, border, _) = notification_colors(NotificationVariant::Outline, Palette::Red);
        assert_eq!(bg, LoomColors::surface());
        assert_eq!(border, Palette::Red.filled());
    }
}
