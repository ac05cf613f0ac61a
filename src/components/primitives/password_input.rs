//! PasswordInput Component
//!
//! A [`TextInput`] drawn masked, with a show/hide toggle beside it.

use gpui::{
    div, prelude::*, App, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::text_input::TextInput;
use crate::i18n::{t, Locale};
use crate::theme::colors::LoomColors;

type VisibilityHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

pub struct PasswordInput {
    id: ElementId,
    input: Entity<TextInput>,
    visible: bool,
    locale: Locale,
    on_visibility_change: Option<VisibilityHandler>,
}

impl PasswordInput {
    /// Create a hidden password input
    pub fn new(id: impl Into<ElementId>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let id: ElementId = id.into();
        let input_id = SharedString::from(format!("{id}-field"));
        let input = cx.new(|cx| {
            let mut input = TextInput::new(input_id, window, cx);
            input.set_masked(true);
            input
        });
        cx.observe(&input, |_this, _input, cx| cx.notify()).detach();

        Self {
            id,
            input,
            visible: false,
            locale: Locale::default(),
            on_visibility_change: None,
        }
    }

    /// Inner text input, for label, placeholder and change handler setup
    pub fn input(&self) -> &Entity<TextInput> {
        &self.input
    }

    /// Get the value
    pub fn value<'a>(&self, cx: &'a App) -> &'a str {
        self.input.read(cx).value()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Show or hide the value
    pub fn set_visible(&mut self, visible: bool, cx: &mut Context<Self>) {
        self.visible = visible;
        self.input.update(cx, |input, cx| {
            input.set_masked(!visible);
            cx.notify();
        });
    }

    pub fn on_visibility_change(&mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) {
        self.on_visibility_change = Some(Box::new(handler));
    }

    fn toggle(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let visible = !self.visible;
        self.set_visible(visible, cx);
        if let Some(handler) = &self.on_visibility_change {
            handler(visible, window, cx);
        }
        cx.notify();
    }
}

impl Focusable for PasswordInput {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.input.read(cx).focus_handle(cx)
    }
}

impl Render for PasswordInput {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toggle_label = if self.visible {
            t(self.locale, "password-hide")
        } else {
            t(self.locale, "password-show")
        };

        div()
            .flex()
            .items_end()
            .gap_2()
            .child(div().flex_1().child(self.input.clone()))
            .child(
                div()
                    .id(self.id.clone())
                    .px_2()
                    .py_2()
                    .rounded_md()
                    .text_sm()
                    .text_color(LoomColors::text_secondary())
                    .cursor_pointer()
                    .hover(|s| s.bg(LoomColors::hover()))
                    .on_click(cx.listener(Self::toggle))
                    .child(toggle_label),
            )
    }
}
