//! Radio Component
//!
//! A single radio button and a group that keeps one value selected. The
//! selected value is owned by the caller.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::text_input::field_frame;
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// Side of the dot the label is drawn on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPosition {
    Left,
    #[default]
    Right,
}

/// Direction radios of a group are stacked in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(IntoElement)]
pub struct Radio {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    invalid: bool,
    label_position: LabelPosition,
    size: Size,
    color: Palette,
    disabled: bool,
    on_change: Option<Rc<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Radio {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            description: None,
            error: None,
            invalid: false,
            label_position: LabelPosition::Right,
            size: Size::Sm,
            color: Palette::Blue,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Error text under the label; also tints the dot border
    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Tint the dot border without an error message
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
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

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with `true` when an unchecked radio is clicked
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

fn dot_border(checked: bool, invalid: bool, color: Palette) -> Rgba {
    if invalid {
        LoomColors::error()
    } else if checked {
        color.filled()
    } else {
        LoomColors::input_border()
    }
}

impl RenderOnce for Radio {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let side = self.size.indicator();
        let border_color = dot_border(self.checked, self.invalid || self.error.is_some(), self.color);

        let dot = div()
            .flex_none()
            .size(side)
            .rounded_full()
            .border_1()
            .border_color(border_color)
            .bg(if self.checked { self.color.filled() } else { LoomColors::surface() })
            .flex()
            .items_center()
            .justify_center()
            .when(self.checked, |el| {
                el.child(div().size(side / 2.5).rounded_full().bg(self.color.on_filled()))
            });

        let text = div()
            .flex()
            .flex_col()
            .gap(px(2.0))
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_size(self.size.font_size())
                        .text_color(LoomColors::text_primary())
                        .child(label),
                )
            })
            .when_some(self.description, |el, description| {
                el.child(
                    div()
                        .text_size(Size::Xs.font_size())
                        .text_color(LoomColors::text_secondary())
                        .child(description),
                )
            })
            .when_some(self.error, |el, error| {
                el.child(
                    div()
                        .text_size(Size::Xs.font_size())
                        .text_color(LoomColors::error())
                        .child(error),
                )
            });

        let checked = self.checked;
        div()
            .id(self.id)
            .flex()
            .items_start()
            .gap_2()
            .map(|el| match self.label_position {
                LabelPosition::Right => el.child(dot).child(text),
                LabelPosition::Left => el.child(text).child(dot),
            })
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| el.cursor_pointer())
            .when_some(self.on_change.filter(|_| !self.disabled && !checked), |el, handler| {
                el.on_click(move |_event, window, cx| handler(true, window, cx))
            })
    }
}

/// One choice of a [`RadioGroup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(IntoElement)]
pub struct RadioGroup {
    id: ElementId,
    options: Vec<RadioOption>,
    value: Option<SharedString>,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    required: bool,
    orientation: Orientation,
    spacing: Size,
    size: Size,
    color: Palette,
    on_change: Option<Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl RadioGroup {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            value: None,
            label: None,
            description: None,
            error: None,
            required: false,
            orientation: Orientation::Vertical,
            spacing: Size::Sm,
            size: Size::Sm,
            color: Palette::Blue,
            on_change: None,
        }
    }

    pub fn option(mut self, option: RadioOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = RadioOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Selected value; `None` leaves every radio unchecked
    pub fn value(mut self, value: Option<SharedString>) -> Self {
        self.value = value;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Gap between radios
    pub fn spacing(mut self, spacing: Size) -> Self {
        self.spacing = spacing;
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

    /// Called with the newly selected value
    pub fn on_change(mut self, handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.value;
        let (size, color, invalid) = (self.size, self.color, self.error.is_some());
        let on_change = self.on_change;

        let radios = div()
            .id(self.id)
            .flex()
            .gap(self.spacing.gap())
            .map(|el| match self.orientation {
                Orientation::Horizontal => el.flex_row().flex_wrap(),
                Orientation::Vertical => el.flex_col(),
            })
            .children(self.options.into_iter().enumerate().map(|(index, option)| {
                let checked = selected.as_ref() == Some(&option.value);
                let handler = on_change.clone();
                let value = option.value;
                Radio::new(("radio-option", index))
                    .label(option.label)
                    .checked(checked)
                    .size(size)
                    .color(color)
                    .disabled(option.disabled)
                    .invalid(invalid)
                    .when_some(handler, |radio, handler| {
                        radio.on_change(move |_, window, cx| handler(&value, window, cx))
                    })
            }));

        field_frame(self.label, self.required, self.description, self.error, self.size, radios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_tint_wins_over_checked() {
        assert_eq!(dot_border(true, true, Palette::Green), LoomColors::error());
        assert_eq!(dot_border(true, false, Palette::Green), Palette::Green.filled());
        assert_eq!(dot_border(false, false, Palette::Green), LoomColors::input_border());
    }
}
