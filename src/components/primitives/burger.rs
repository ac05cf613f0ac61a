//! Burger Component
//!
//! Three bar menu toggle that turns into a cross while opened.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// Width of the bars
fn bar_width(size: Size) -> Pixels {
    size.control() * 0.6
}

#[derive(IntoElement)]
pub struct Burger {
    id: ElementId,
    opened: bool,
    size: Size,
    color: Option<Palette>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Burger {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            opened: false,
            size: Size::Md,
            color: None,
            on_click: None,
        }
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Bar color; primary text color when unset
    pub fn color(mut self, color: Palette) -> Self {
        self.color = Some(color);
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Burger {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = self.color.map_or_else(LoomColors::text_primary, |c| c.filled());
        let width = bar_width(self.size);
        let bar = move || div().w(width).h(px(2.0)).rounded_full().bg(color);

        div()
            .id(self.id)
            .flex_none()
            .size(self.size.control())
            .flex()
            .items_center()
            .justify_center()
            .rounded_sm()
            .cursor_pointer()
            .hover(|s| s.bg(LoomColors::hover()))
            .map(|el| {
                if self.opened {
                    // Bars collapse into a cross glyph of the same color
                    el.child(
                        div()
                            .text_color(color)
                            .text_size(self.size.font_size() * 1.5)
                            .child("✕"),
                    )
                } else {
                    el.child(div().flex().flex_col().gap(width / 5.0).child(bar()).child(bar()).child(bar()))
                }
            })
            .when_some(self.on_click, |el, handler| el.on_click(handler))
    }
}
