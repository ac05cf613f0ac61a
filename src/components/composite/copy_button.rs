//! CopyButton Component
//!
//! Writes a value to the clipboard and shows a copied label until the
//! timeout elapses.

use std::time::Duration;

use gpui::{
    prelude::*, App, ClickEvent, ClipboardItem, Context, ElementId, IntoElement, Render,
    SharedString, Task, Window,
};
use tracing::debug;

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::domain::copy::CopyState;
use crate::i18n::{t, Locale};
use crate::theme::{Palette, Size};

type CopiedHandler = Box<dyn Fn(&str, &mut Window, &mut App) + 'static>;

pub struct CopyButton {
    id: ElementId,
    value: SharedString,
    state: CopyState,
    locale: Locale,
    label: Option<SharedString>,
    copied_label: Option<SharedString>,
    size: Size,
    color: Palette,
    copied_color: Palette,
    on_copied: Option<CopiedHandler>,
    _reset: Option<Task<()>>,
}

impl CopyButton {
    pub fn new(id: impl Into<ElementId>, value: impl Into<SharedString>, timeout: Duration) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            state: CopyState::new(timeout),
            locale: Locale::default(),
            label: None,
            copied_label: None,
            size: Size::Sm,
            color: Palette::Blue,
            copied_color: Palette::Teal,
            on_copied: None,
            _reset: None,
        }
    }

    pub fn copied(&self) -> bool {
        self.state.copied()
    }

    pub fn set_value(&mut self, value: impl Into<SharedString>) {
        self.value = value.into();
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Override the idle and copied labels
    pub fn set_labels(&mut self, label: impl Into<SharedString>, copied_label: impl Into<SharedString>) {
        self.label = Some(label.into());
        self.copied_label = Some(copied_label.into());
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_color(&mut self, color: Palette) {
        self.color = color;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.set_disabled(disabled);
    }

    pub fn on_copied(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_copied = Some(Box::new(handler));
    }

    fn copy(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(generation) = self.state.begin() else {
            return;
        };
        cx.write_to_clipboard(ClipboardItem::new_string(self.value.to_string()));
        debug!(length = self.value.len(), "Copied to clipboard");
        if let Some(handler) = &self.on_copied {
            handler(&self.value, window, cx);
        }

        let timeout = self.state.timeout();
        self._reset = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(timeout).await;
            let _ = this.update(cx, |this, cx| {
                if this.state.reset(generation) {
                    cx.notify();
                }
            });
        }));
        cx.notify();
    }
}

impl Render for CopyButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let copied = self.state.copied();
        let label = if copied {
            self.copied_label.clone().unwrap_or_else(|| t(self.locale, "copied"))
        } else {
            self.label.clone().unwrap_or_else(|| t(self.locale, "copy"))
        };

        Button::new(self.id.clone(), label)
            .variant(ButtonVariant::Light)
            .size(self.size)
            .color(if copied { self.copied_color } else { self.color })
            .on_click(cx.listener(Self::copy))
    }
}
