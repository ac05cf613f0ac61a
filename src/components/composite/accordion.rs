//! Accordion Component
//!
//! Stack of collapsible panels. Which panels are open is owned by the
//! caller as a [`Disclosure`] and toggled from `on_toggle`.

use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyElement, App, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::disclosure::Disclosure;
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

/// One panel of an accordion
pub struct AccordionItem {
    label: SharedString,
    content: AnyElement,
}

impl AccordionItem {
    pub fn new(label: impl Into<SharedString>, content: impl IntoElement) -> Self {
        Self {
            label: label.into(),
            content: content.into_any_element(),
        }
    }
}

#[derive(IntoElement)]
pub struct Accordion {
    id: ElementId,
    items: Vec<AccordionItem>,
    state: Disclosure,
    size: Size,
    radius: Radius,
    on_toggle: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Accordion {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            state: Disclosure::default(),
            size: Size::Sm,
            radius: Radius::Sm,
            on_toggle: None,
        }
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    /// Opened panels
    pub fn state(mut self, state: Disclosure) -> Self {
        self.state = state;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Called with the index of a clicked panel header
    pub fn on_toggle(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Accordion {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (padding_x, padding_y) = self.size.padding();
        let count = self.items.len();

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .border_1()
            .border_color(LoomColors::border())
            .rounded(self.radius.pixels())
            .overflow_hidden()
            .children(self.items.into_iter().enumerate().map(|(index, item)| {
                let open = self.state.is_open(index);
                let on_toggle = self.on_toggle.clone();

                div()
                    .flex()
                    .flex_col()
                    .when(index + 1 < count, |el| el.border_b_1().border_color(LoomColors::border()))
                    .child(
                        div()
                            .id(("accordion-control", index))
                            .flex()
                            .items_center()
                            .justify_between()
                            .px(padding_x)
                            .py(padding_y)
                            .bg(LoomColors::surface())
                            .text_size(self.size.font_size())
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(LoomColors::text_primary())
                            .cursor_pointer()
                            .hover(|s| s.bg(LoomColors::hover()))
                            .when_some(on_toggle, |el, handler| {
                                el.on_click(move |_event, window, cx| handler(index, window, cx))
                            })
                            .child(item.label)
                            .child(
                                div()
                                    .text_color(LoomColors::text_muted())
                                    .child(if open { "▾" } else { "▸" }),
                            ),
                    )
                    .when(open, |el| {
                        el.child(
                            div()
                                .px(padding_x)
                                .py(padding_y)
                                .text_size(self.size.font_size())
                                .text_color(LoomColors::text_secondary())
                                .child(item.content),
                        )
                    })
            }))
    }
}
