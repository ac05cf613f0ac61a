//! Switch Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// An on/off toggle
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    on_label: Option<SharedString>,
    off_label: Option<SharedString>,
    size: Size,
    color: Palette,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            on_label: None,
            off_label: None,
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

    /// Text inside the track while on
    pub fn on_label(mut self, label: impl Into<SharedString>) -> Self {
        self.on_label = Some(label.into());
        self
    }

    /// Text inside the track while off
    pub fn off_label(mut self, label: impl Into<SharedString>) -> Self {
        self.off_label = Some(label.into());
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

    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let (track_w, track_h) = self.size.track();
        let thumb = track_h - px(4.0);
        let track_label = if checked { self.on_label } else { self.off_label };

        let track_bg = if checked {
            self.color.filled()
        } else {
            LoomColors::track()
        };
        let label_color = if checked {
            self.color.on_filled()
        } else {
            LoomColors::text_secondary()
        };

        let mut switch = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .relative()
                    .min_w(track_w)
                    .h(track_h)
                    .px(px(2.0))
                    .rounded_full()
                    .bg(track_bg)
                    .flex()
                    .items_center()
                    .gap_1()
                    .when(checked, |el| el.flex_row_reverse())
                    .child(div().size(thumb).rounded_full().bg(LoomColors::surface()))
                    .when_some(track_label, |el, label| {
                        el.child(
                            div()
                                .px_1()
                                .text_size(Size::Xs.font_size())
                                .text_color(label_color)
                                .child(label),
                        )
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_size(self.size.font_size())
                        .text_color(LoomColors::text_primary())
                        .child(label),
                )
            });

        if self.disabled {
            switch = switch.opacity(0.5);
        } else {
            switch = switch.cursor_pointer();
            if let Some(handler) = self.on_change {
                switch = switch.on_click(move |_event, window, cx| handler(!checked, window, cx));
            }
        }

        switch
    }
}
