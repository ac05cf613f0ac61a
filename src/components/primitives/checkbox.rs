//! Checkbox Component

use gpui::{
    div, prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    indeterminate: bool,
    label: Option<SharedString>,
    size: Size,
    color: Palette,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            indeterminate: false,
            label: None,
            size: Size::Sm,
            color: Palette::Blue,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Draw a dash instead of a check mark; clicking reports `true`
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the size
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the palette color
    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let filled = self.checked || self.indeterminate;
        let next = self.indeterminate || !self.checked;
        let on_change = self.on_change;

        let (checkbox_bg, border_color) = if filled {
            (self.color.filled(), self.color.filled())
        } else {
            (LoomColors::surface(), LoomColors::input_border())
        };

        let mark = if self.indeterminate {
            "−"
        } else if self.checked {
            "✓"
        } else {
            ""
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(self.size.indicator())
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(checkbox_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(self.color.on_filled())
                    .text_size(Size::Xs.font_size())
                    .child(mark),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_size(self.size.font_size())
                        .text_color(LoomColors::text_primary())
                        .child(label),
                )
            });

        if !self.disabled {
            checkbox = checkbox.cursor_pointer();
            if let Some(handler) = on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(next, window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5);
        }

        checkbox
    }
}
