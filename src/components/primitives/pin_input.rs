//! PinInput Component
//!
//! A row of single character cells; each cell has its own focus handle so
//! typing moves focus along the row.

use gpui::{
    div, prelude::*, px, App, Context, ElementId, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement, Render, SharedString,
    Styled, Window,
};
use tracing::debug;

use crate::components::primitives::text_input::{classify_key, KeyEdit};
use crate::constants::DEFAULT_PIN_PLACEHOLDER;
use crate::domain::pin::{PinKind, PinState, PinUpdate};
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

type ValueHandler = Box<dyn Fn(&str, &mut Window, &mut App) + 'static>;

pub struct PinInput {
    id: ElementId,
    state: PinState,
    cells: Vec<FocusHandle>,
    mask: bool,
    placeholder: SharedString,
    error: bool,
    size: Size,
    radius: Radius,
    disabled: bool,
    on_change: Option<ValueHandler>,
    on_complete: Option<ValueHandler>,
}

impl PinInput {
    /// Create a pin input with `length` cells
    pub fn new(id: impl Into<ElementId>, length: usize, cx: &mut Context<Self>) -> Self {
        let state = PinState::new(length);
        let cells = (0..state.len()).map(|_| cx.focus_handle()).collect();
        Self {
            id: id.into(),
            state,
            cells,
            mask: false,
            placeholder: DEFAULT_PIN_PLACEHOLDER.into(),
            error: false,
            size: Size::Sm,
            radius: Radius::Sm,
            disabled: false,
            on_change: None,
            on_complete: None,
        }
    }

    /// Joined value
    pub fn value(&self) -> String {
        self.state.value()
    }

    /// Restrict cells to digits or allow any character
    pub fn set_kind(&mut self, kind: PinKind) {
        self.state = std::mem::take(&mut self.state).kind(kind);
    }

    /// Move focus automatically after each edit (default on)
    pub fn set_manage_focus(&mut self, manage_focus: bool) {
        self.state = std::mem::take(&mut self.state).manage_focus(manage_focus);
    }

    /// Draw filled cells as bullets
    pub fn set_mask(&mut self, mask: bool) {
        self.mask = mask;
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Tint the cell borders with the error color
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.radius = radius;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    pub fn on_complete(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_complete = Some(Box::new(handler));
    }

    fn apply(&mut self, update: PinUpdate, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handle) = update.focus.and_then(|index| self.cells.get(index)) {
            window.focus(handle);
        }
        if let Some(handler) = &self.on_change {
            handler(&update.value, window, cx);
        }
        if let Some(value) = &update.complete {
            debug!(length = value.chars().count(), "Pin input complete");
            if let Some(handler) = &self.on_complete {
                handler(value, window, cx);
            }
        }
        cx.notify();
    }

    fn handle_key_down(
        &mut self,
        index: usize,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        let update = match classify_key(
            &keystroke.key,
            keystroke.key_char.as_deref(),
            keystroke.modifiers.secondary(),
        ) {
            KeyEdit::Insert(text) => self.state.input(index, text),
            KeyEdit::Backspace => self.state.backspace(index),
            KeyEdit::Paste => cx
                .read_from_clipboard()
                .and_then(|item| item.text())
                .and_then(|text| self.state.paste(&text)),
            KeyEdit::Ignore => None,
        };
        if let Some(update) = update {
            cx.stop_propagation();
            self.apply(update, window, cx);
        }
    }

    fn render_cell(&self, index: usize, window: &Window, cx: &Context<Self>) -> impl IntoElement {
        let handle = &self.cells[index];
        let focused = handle.is_focused(window);
        let side = self.size.pin_cell();

        let (text, color) = match self.state.cell(index) {
            Some(_) if self.mask => (SharedString::from("•"), LoomColors::text_primary()),
            Some(c) => (SharedString::from(c.to_string()), LoomColors::text_primary()),
            None if focused => (SharedString::default(), LoomColors::text_muted()),
            None => (self.placeholder.clone(), LoomColors::text_muted()),
        };

        let border = if self.error {
            LoomColors::error()
        } else if focused {
            LoomColors::border_focus()
        } else {
            LoomColors::input_border()
        };

        div()
            .id(("pin-cell", index))
            .track_focus(handle)
            .size(side)
            .flex()
            .items_center()
            .justify_center()
            .bg(LoomColors::surface())
            .border_1()
            .border_color(border)
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .text_color(color)
            .when(!self.disabled, |el| {
                el.cursor_text()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _event: &MouseDownEvent, window, cx| {
                            this.state.focus(index);
                            window.focus(&this.cells[index]);
                            cx.notify();
                        }),
                    )
                    .on_key_down(cx.listener(move |this, event: &KeyDownEvent, window, cx| {
                        this.handle_key_down(index, event, window, cx);
                    }))
            })
            .child(text)
    }
}

impl Focusable for PinInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.cells[0].clone()
    }
}

impl Render for PinInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id(self.id.clone())
            .flex()
            .gap(px(8.0))
            .when(self.disabled, |el| el.opacity(0.5))
            .children((0..self.cells.len()).map(|index| self.render_cell(index, window, cx)))
    }
}
