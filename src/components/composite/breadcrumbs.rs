//! Breadcrumbs Component
//!
//! Row of links separated by a glyph. The last crumb is the current
//! location and is never clickable.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

#[derive(IntoElement)]
pub struct Breadcrumbs {
    id: ElementId,
    items: Vec<SharedString>,
    separator: SharedString,
    separator_margin: Size,
    color: Palette,
    size: Size,
    on_click: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Breadcrumbs {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            separator: "/".into(),
            separator_margin: Size::Xs,
            color: Palette::Blue,
            size: Size::Sm,
            on_click: None,
        }
    }

    pub fn item(mut self, label: impl Into<SharedString>) -> Self {
        self.items.push(label.into());
        self
    }

    pub fn separator(mut self, separator: impl Into<SharedString>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Space on each side of the separator
    pub fn separator_margin(mut self, margin: Size) -> Self {
        self.separator_margin = margin;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Called with the index of a clicked crumb
    pub fn on_click(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Breadcrumbs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let last = self.items.len().saturating_sub(1);
        let margin = self.separator_margin.gap() / 2.0;
        let (color, separator, on_click) = (self.color, self.separator, self.on_click);

        div()
            .id(self.id)
            .flex()
            .flex_wrap()
            .items_center()
            .text_size(self.size.font_size())
            .children(self.items.into_iter().enumerate().map(move |(index, label)| {
                let current = index == last;
                let handler = on_click.clone().filter(|_| !current);

                div()
                    .flex()
                    .items_center()
                    .child(
                        div()
                            .id(("breadcrumb", index))
                            .text_color(if current { LoomColors::text_primary() } else { color.filled() })
                            .when_some(handler, |el, handler| {
                                el.cursor_pointer()
                                    .hover(|s| s.text_color(color.hover()))
                                    .on_click(move |_event, window, cx| handler(index, window, cx))
                            })
                            .child(label),
                    )
                    .when(!current, |el| {
                        el.child(
                            div()
                                .mx(margin)
                                .text_color(LoomColors::text_muted())
                                .child(separator.clone()),
                        )
                    })
            }))
    }
}
