//! TextInput Component
//!
//! Single line text field with label, description and error slots. Key
//! handling is deliberately small: typed characters append, backspace
//! removes the last character and the secondary-v shortcut pastes.

use gpui::{
    div, prelude::*, px, App, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement, Render, Rgba,
    SharedString, Styled, Subscription, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

/// Input variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Surface with a border
    #[default]
    Default,
    /// Muted fill without a border
    Filled,
    /// No chrome at all
    Unstyled,
}

impl InputVariant {
    /// (background, border) of the field
    pub(crate) fn colors(&self, focused: bool, invalid: bool) -> (Rgba, Rgba) {
        let border = if invalid {
            LoomColors::error()
        } else if focused {
            LoomColors::border_focus()
        } else {
            LoomColors::input_border()
        };
        match self {
            InputVariant::Default => (LoomColors::surface(), border),
            InputVariant::Filled => (
                LoomColors::surface_muted(),
                if focused || invalid { border } else { LoomColors::transparent() },
            ),
            InputVariant::Unstyled => (LoomColors::transparent(), LoomColors::transparent()),
        }
    }
}

/// What a key press does to a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyEdit<'a> {
    Insert(&'a str),
    Backspace,
    Paste,
    Ignore,
}

/// Classify a key press from its key name, produced text and modifier state
pub(crate) fn classify_key<'a>(key: &str, key_char: Option<&'a str>, secondary: bool) -> KeyEdit<'a> {
    match key {
        "backspace" => KeyEdit::Backspace,
        "v" if secondary => KeyEdit::Paste,
        "enter" | "escape" | "tab" => KeyEdit::Ignore,
        _ if secondary => KeyEdit::Ignore,
        _ => match key_char {
            Some(text) if !text.chars().any(char::is_control) => KeyEdit::Insert(text),
            _ => KeyEdit::Ignore,
        },
    }
}

/// Shared label / description / error column around an input field
pub(crate) fn field_frame(
    label: Option<SharedString>,
    required: bool,
    description: Option<SharedString>,
    error: Option<SharedString>,
    size: Size,
    field: impl IntoElement,
) -> gpui::Div {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .when_some(label, |el, label| {
            el.child(
                div()
                    .flex()
                    .gap_1()
                    .text_size(size.font_size())
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(LoomColors::text_primary())
                    .child(label)
                    .when(required, |el| el.child(div().text_color(LoomColors::error()).child("*"))),
            )
        })
        .when_some(description, |el, description| {
            el.child(
                div()
                    .text_size(Size::Xs.font_size())
                    .text_color(LoomColors::text_secondary())
                    .child(description),
            )
        })
        .child(field)
        .when_some(error, |el, error| {
            el.child(
                div()
                    .text_size(Size::Xs.font_size())
                    .text_color(LoomColors::error())
                    .child(error),
            )
        })
}

type ChangeHandler = Box<dyn Fn(&str, &mut Window, &mut Context<TextInput>) + 'static>;
type FocusChangeHandler = Box<dyn Fn(&mut Window, &mut Context<TextInput>) + 'static>;

/// A text input component
pub struct TextInput {
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
    masked: bool,
    focus_handle: FocusHandle,
    on_change: Option<ChangeHandler>,
    on_focus: Option<FocusChangeHandler>,
    on_blur: Option<FocusChangeHandler>,
    _subscriptions: Vec<Subscription>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, window, cx| {
                if let Some(handler) = this.on_focus.take() {
                    handler(window, cx);
                    this.on_focus = Some(handler);
                }
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, window, cx| {
                if let Some(handler) = this.on_blur.take() {
                    handler(window, cx);
                    this.on_blur = Some(handler);
                }
                cx.notify();
            }),
        ];

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
            masked: false,
            focus_handle,
            on_change: None,
            on_focus: None,
            on_blur: None,
            _subscriptions: subscriptions,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_description(&mut self, description: impl Into<SharedString>) {
        self.description = Some(description.into());
    }

    /// Set or clear the error message; an error also tints the border
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

    /// Show the required asterisk after the label
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Draw bullets instead of the value
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    pub fn on_focus(&mut self, handler: impl Fn(&mut Window, &mut Context<Self>) + 'static) {
        self.on_focus = Some(Box::new(handler));
    }

    pub fn on_blur(&mut self, handler: impl Fn(&mut Window, &mut Context<Self>) + 'static) {
        self.on_blur = Some(Box::new(handler));
    }

    fn emit_change(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.take() {
            handler(&self.value, window, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        match classify_key(
            &keystroke.key,
            keystroke.key_char.as_deref(),
            keystroke.modifiers.secondary(),
        ) {
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
                self.value.extend(text.chars().filter(|c| !c.is_control()));
            }
            KeyEdit::Ignore => return,
        }
        cx.stop_propagation();
        self.emit_change(window, cx);
    }

    fn display_text(&self) -> SharedString {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            SharedString::from("•".repeat(self.value.chars().count()))
        } else {
            SharedString::from(self.value.clone())
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let (bg, border_color) = self.variant.colors(is_focused, self.error.is_some());
        let (padding_x, padding_y) = self.size.padding();

        let text_color = if self.value.is_empty() {
            LoomColors::text_muted()
        } else {
            LoomColors::text_primary()
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .when(self.variant != InputVariant::Unstyled, |el| el.px(padding_x).py(padding_y))
            .flex()
            .items_center()
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded(self.radius.pixels())
            .text_color(text_color)
            .text_size(self.size.font_size())
            .min_w(px(200.0))
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| {
                el.cursor_text()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _event: &MouseDownEvent, window, _cx| {
                            window.focus(&this.focus_handle);
                        }),
                    )
                    .on_key_down(cx.listener(Self::handle_key_down))
            })
            .child(self.display_text())
            .when(is_focused, |el| {
                el.child(div().text_color(LoomColors::border_focus()).child("|"))
            });

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

/// Create a simple text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, window, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_insert_their_text() {
        assert_eq!(classify_key("a", Some("a"), false), KeyEdit::Insert("a"));
        assert_eq!(classify_key("space", Some(" "), false), KeyEdit::Insert(" "));
        assert_eq!(classify_key("ä", Some("ä"), false), KeyEdit::Insert("ä"));
    }

    #[test]
    fn editing_keys() {
        assert_eq!(classify_key("backspace", None, false), KeyEdit::Backspace);
        assert_eq!(classify_key("v", Some("v"), true), KeyEdit::Paste);
        assert_eq!(classify_key("c", Some("c"), true), KeyEdit::Ignore);
        assert_eq!(classify_key("enter", Some("\n"), false), KeyEdit::Ignore);
        assert_eq!(classify_key("left", None, false), KeyEdit::Ignore);
    }

    #[test]
    fn error_wins_over_focus() {
        let (_, border) = InputVariant::Default.colors(true, true);
        assert_eq!(border, LoomColors::error());
        let (_, border) = InputVariant::Filled.colors(false, false);
        assert_eq!(border, LoomColors::transparent());
    }
}
