//! NumberInput Component
//!
//! Numeric field with step controls. While focused the raw text is edited;
//! on blur it is parsed, clamped and reformatted.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window,
};
use tracing::debug;

use crate::components::primitives::text_input::{classify_key, field_frame, InputVariant, KeyEdit};
use crate::domain::number::{NumberBounds, NumberFormat};
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

type ChangeHandler = Box<dyn Fn(Option<f64>, &mut Window, &mut App) + 'static>;

/// Whether `c` may be typed into a number field
fn accepts_char(c: char, format: &NumberFormat) -> bool {
    c.is_ascii_digit() || c == '-' || c == format.decimal_separator
}

pub struct NumberInput {
    id: ElementId,
    value: Option<f64>,
    text: String,
    format: NumberFormat,
    bounds: NumberBounds,
    label: Option<SharedString>,
    placeholder: SharedString,
    variant: InputVariant,
    size: Size,
    radius: Radius,
    hide_controls: bool,
    disabled: bool,
    focus_handle: FocusHandle,
    on_change: Option<ChangeHandler>,
    _subscriptions: Vec<Subscription>,
}

impl NumberInput {
    pub fn new(id: impl Into<ElementId>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![cx.on_blur(&focus_handle, window, |this, window, cx| {
            this.commit(window, cx);
        })];

        Self {
            id: id.into(),
            value: None,
            text: String::new(),
            format: NumberFormat::default(),
            bounds: NumberBounds::default(),
            label: None,
            placeholder: SharedString::default(),
            variant: InputVariant::Default,
            size: Size::Sm,
            radius: Radius::Sm,
            hide_controls: false,
            disabled: false,
            focus_handle,
            on_change: None,
            _subscriptions: subscriptions,
        }
    }

    /// Get the value
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Set the value (clamped) and reformat the text
    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value.map(|v| self.bounds.clamp(v));
        self.text = self.value.map(|v| self.format.format(v)).unwrap_or_default();
    }

    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
        self.set_value(self.value);
    }

    pub fn set_bounds(&mut self, bounds: NumberBounds) {
        self.bounds = bounds;
        self.set_value(self.value);
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_variant(&mut self, variant: InputVariant) {
        self.variant = variant;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.radius = radius;
    }

    /// Hide the increment/decrement controls
    pub fn set_hide_controls(&mut self, hide: bool) {
        self.hide_controls = hide;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn on_change(&mut self, handler: impl Fn(Option<f64>, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn update_value(&mut self, value: Option<f64>, window: &mut Window, cx: &mut Context<Self>) {
        let previous = self.value;
        self.set_value(value);
        if self.value != previous {
            debug!(value = ?self.value, "Number input changed");
            if let Some(handler) = &self.on_change {
                handler(self.value, window, cx);
            }
        }
        cx.notify();
    }

    /// Parse, clamp and reformat the typed text
    fn commit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let parsed = self.format.parse(&self.text);
        self.update_value(parsed, window, cx);
    }

    fn step_up(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let base = self.format.parse(&self.text).or(self.value);
        if self.disabled || !self.bounds.can_increment(base) {
            return;
        }
        self.update_value(Some(self.bounds.increment(base)), window, cx);
    }

    fn step_down(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let base = self.format.parse(&self.text).or(self.value);
        if self.disabled || !self.bounds.can_decrement(base) {
            return;
        }
        self.update_value(Some(self.bounds.decrement(base)), window, cx);
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "up" => {
                let base = self.format.parse(&self.text).or(self.value);
                self.update_value(Some(self.bounds.increment(base)), window, cx);
                return;
            }
            "down" => {
                let base = self.format.parse(&self.text).or(self.value);
                self.update_value(Some(self.bounds.decrement(base)), window, cx);
                return;
            }
            "enter" => {
                self.commit(window, cx);
                return;
            }
            _ => {}
        }

        match classify_key(
            &keystroke.key,
            keystroke.key_char.as_deref(),
            keystroke.modifiers.secondary(),
        ) {
            KeyEdit::Insert(text) => {
                let format = &self.format;
                self.text.extend(text.chars().filter(|c| accepts_char(*c, format)));
            }
            KeyEdit::Backspace => {
                self.text.pop();
            }
            KeyEdit::Paste => {
                if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
                    let format = &self.format;
                    self.text.extend(text.chars().filter(|c| accepts_char(*c, format)));
                }
            }
            KeyEdit::Ignore => return,
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn render_control(
        &self,
        id: &'static str,
        glyph: &'static str,
        enabled: bool,
        handler: fn(&mut Self, &ClickEvent, &mut Window, &mut Context<Self>),
        cx: &Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .w(px(20.0))
            .flex()
            .justify_center()
            .text_size(px(8.0))
            .text_color(if enabled {
                LoomColors::text_secondary()
            } else {
                LoomColors::text_muted()
            })
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(LoomColors::hover()))
                    .on_click(cx.listener(handler))
            })
            .child(glyph)
    }
}

impl Focusable for NumberInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NumberInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let (bg, border_color) = self.variant.colors(is_focused, false);
        let (padding_x, padding_y) = self.size.padding();
        let current = self.format.parse(&self.text).or(self.value);
        let enabled = !self.disabled;

        let display = if self.text.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.text.clone())
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .pl(padding_x)
            .py(padding_y)
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .text_color(if self.text.is_empty() {
                LoomColors::text_muted()
            } else {
                LoomColors::text_primary()
            })
            .min_w(px(160.0))
            .when(!enabled, |el| el.opacity(0.5))
            .when(enabled, |el| {
                el.on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _event: &MouseDownEvent, window, _cx| {
                        window.focus(&this.focus_handle);
                    }),
                )
                .on_key_down(cx.listener(Self::handle_key_down))
            })
            .child(div().flex_1().child(display))
            .when(!self.hide_controls, |el| {
                el.child(
                    div()
                        .flex()
                        .flex_col()
                        .border_l_1()
                        .border_color(LoomColors::border())
                        .child(self.render_control(
                            "number-increment",
                            "▲",
                            enabled && self.bounds.can_increment(current),
                            Self::step_up,
                            cx,
                        ))
                        .child(self.render_control(
                            "number-decrement",
                            "▼",
                            enabled && self.bounds.can_decrement(current),
                            Self::step_down,
                            cx,
                        )),
                )
            });

        field_frame(self.label.clone(), false, None, None, self.size, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_characters() {
        let format = NumberFormat::default().separators(Some('.'), ',');
        assert!(accepts_char('7', &format));
        assert!(accepts_char('-', &format));
        assert!(accepts_char(',', &format));
        assert!(!accepts_char('.', &format));
        assert!(!accepts_char('x', &format));
    }
}
