//! Collapse Component
//!
//! Shows its content only while opened, with an optional toggle control
//! above it. The opened flag is owned by the caller.

use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::theme::{Palette, Size};

#[derive(IntoElement)]
pub struct Collapse {
    id: ElementId,
    opened: bool,
    toggle_labels: Option<(SharedString, SharedString)>,
    size: Size,
    color: Palette,
    children: Vec<AnyElement>,
    on_toggle: Option<Rc<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Collapse {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            opened: false,
            toggle_labels: None,
            size: Size::Sm,
            color: Palette::Blue,
            children: Vec::new(),
            on_toggle: None,
        }
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    /// Draw a toggle button labelled `open` while closed and `close` while opened
    pub fn toggle_labels(mut self, open: impl Into<SharedString>, close: impl Into<SharedString>) -> Self {
        self.toggle_labels = Some((open.into(), close.into()));
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Called with the requested opened state
    pub fn on_toggle(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Collapse {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let opened = self.opened;
        let toggle = self.toggle_labels.map(|(open, close)| {
            let handler = self.on_toggle.clone();
            Button::light(self.id.clone(), if opened { close } else { open })
                .size(self.size)
                .color(self.color)
                .when_some(handler, |button, handler| {
                    button.on_click(move |_event, window, cx| handler(!opened, window, cx))
                })
        });

        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(toggle)
            .when(opened, |el| el.child(div().flex().flex_col().gap_2().children(self.children)))
    }
}
