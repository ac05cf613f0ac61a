//! Textarea Component
//!
//! Multi line text field. Shares key handling and the label frame with
//! [`TextInput`](super::text_input::TextInput); enter inserts a line break.
//! With autosize on, the field grows with its content between `min_rows`
//! and `max_rows`.

use gpui::{
    div, prelude::*, px, AnyElement, App, Context, ElementId, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Pixels, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::components::primitives::text_input::{classify_key, field_frame, InputVariant, KeyEdit};
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

/// Rows shown without autosize, and the autosize floor
const DEFAULT_MIN_ROWS: usize = 2;

/// Rows the field is tall enough for.
///
/// Fixed fields always show `min_rows`. Autosized fields follow the line
/// count, clamped to `min_rows..=max_rows` when a maximum is set.
pub(crate) fn visible_rows(lines: usize, autosize: bool, min_rows: usize, max_rows: Option<usize>) -> usize {
    let min_rows = min_rows.max(1);
    if !autosize {
        return min_rows;
    }
    let rows = lines.max(min_rows);
    match max_rows {
        Some(max_rows) => rows.min(max_rows.max(min_rows)),
        None => rows,
    }
}

type ChangeHandler = Box<dyn Fn(&str, &mut Window, &mut Context<Textarea>) + 'static>;

pub struct Textarea {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    variant: InputVariant,
    size: Size,
    radius: Radius,
    required: bool,
    disabled: bool,
    autosize: bool,
    min_rows: usize,
    max_rows: Option<usize>,
    right_section: Option<Box<dyn Fn() -> AnyElement + 'static>>,
    focus_handle: FocusHandle,
    on_change: Option<ChangeHandler>,
}

impl Textarea {
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            label: None,
            description: None,
            error: None,
            variant: InputVariant::Default,
            size: Size::Sm,
            radius: Radius::Sm,
            required: false,
            disabled: false,
            autosize: false,
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: None,
            right_section: None,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_description(&mut self, description: impl Into<SharedString>) {
        self.description = Some(description.into());
    }

    pub fn set_error(&mut self, error: Option<SharedString>) {
        self.error = error;
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

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Grow with the content between `min_rows` and `max_rows`
    pub fn set_autosize(&mut self, autosize: bool, min_rows: usize, max_rows: Option<usize>) {
        self.autosize = autosize;
        self.min_rows = min_rows;
        self.max_rows = max_rows;
    }

    /// Element drawn at the right edge of the field
    pub fn set_right_section(&mut self, section: impl Fn() -> AnyElement + 'static) {
        self.right_section = Some(Box::new(section));
    }

    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn rows(&self) -> usize {
        visible_rows(self.value.split('\n').count(), self.autosize, self.min_rows, self.max_rows)
    }

    fn line_height(&self) -> Pixels {
        self.size.font_size() * 1.5
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        let secondary = keystroke.modifiers.secondary();
        if keystroke.key == "enter" && !secondary {
            self.value.push('\n');
        } else {
            match classify_key(&keystroke.key, keystroke.key_char.as_deref(), secondary) {
                KeyEdit::Insert(text) => self.value.push_str(text),
                KeyEdit::Backspace => {
                    if self.value.pop().is_none() {
                        return;
                    }
                }
                KeyEdit::Paste => {
                    let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) else {
                        return;
                    };
                    self.value
                        .extend(text.chars().filter(|c| *c == '\n' || !c.is_control()));
                }
                KeyEdit::Ignore => return,
            }
        }
        cx.stop_propagation();
        if let Some(handler) = self.on_change.take() {
            handler(&self.value, window, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }
}

impl Focusable for Textarea {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Textarea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let (bg, border_color) = self.variant.colors(is_focused, self.error.is_some());
        let (padding_x, padding_y) = self.size.padding();
        let line_height = self.line_height();
        let rows = self.rows();
        let empty = self.value.is_empty();

        let lines: Vec<SharedString> = if empty {
            vec![self.placeholder.clone()]
        } else {
            self.value.split('\n').map(|line| SharedString::from(line.to_string())).collect()
        };
        let last = lines.len().saturating_sub(1);

        let text = div()
            .flex_1()
            .flex()
            .flex_col()
            .text_color(if empty { LoomColors::text_muted() } else { LoomColors::text_primary() })
            .children(lines.into_iter().enumerate().map(move |(index, line)| {
                div()
                    .flex()
                    .h(line_height)
                    .child(line)
                    .when(is_focused && index == last, |el| {
                        el.child(div().text_color(LoomColors::border_focus()).child("|"))
                    })
            }));

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .when(self.variant != InputVariant::Unstyled, |el| el.px(padding_x).py(padding_y))
            .flex()
            .items_start()
            .gap_2()
            .h(line_height * rows as f32 + padding_y * 2.0)
            .overflow_y_scroll()
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .line_height(line_height)
            .min_w(px(240.0))
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| {
                el.cursor_text()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _event: &MouseDownEvent, window, _cx| {
                            debug!("Textarea focused");
                            window.focus(&this.focus_handle);
                        }),
                    )
                    .on_key_down(cx.listener(Self::handle_key_down))
            })
            .child(text)
            .when_some(self.right_section.as_ref(), |el, section| el.child(section()));

        field_frame(
            self.label.clone(),
            self.required,
            self.description.clone(),
            self.error.clone(),
            self.size,
            field,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_height_ignores_content() {
        assert_eq!(visible_rows(10, false, 2, Some(4)), 2);
        assert_eq!(visible_rows(1, false, 0, None), 1);
    }

    #[test]
    fn autosize_follows_lines_within_bounds() {
        assert_eq!(visible_rows(1, true, 2, Some(4)), 2);
        assert_eq!(visible_rows(3, true, 2, Some(4)), 3);
        assert_eq!(visible_rows(9, true, 2, Some(4)), 4);
        assert_eq!(visible_rows(9, true, 2, None), 9);
    }

    #[test]
    fn max_below_min_keeps_min() {
        assert_eq!(visible_rows(9, true, 3, Some(1)), 3);
    }
}
