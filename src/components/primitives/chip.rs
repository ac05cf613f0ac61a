//! Chip Component
//!
//! A pill shaped toggle, used for filter sets.

use gpui::{
    div, prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

/// Chip variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outline,
    Light,
}

#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    checked: bool,
    variant: ChipVariant,
    color: Palette,
    size: Size,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            variant: ChipVariant::Filled,
            color: Palette::Blue,
            size: Size::Sm,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn variant(mut self, variant: ChipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
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

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let (padding_x, _) = self.size.padding();

        let (bg, text, border) = match (self.variant, checked) {
            (ChipVariant::Filled, true) => (self.color.filled(), self.color.on_filled(), self.color.filled()),
            (ChipVariant::Outline, true) => (LoomColors::surface(), self.color.filled(), self.color.filled()),
            (ChipVariant::Light, true) => (self.color.light(), self.color.hover(), self.color.light()),
            (_, false) => (LoomColors::surface(), LoomColors::text_primary(), LoomColors::input_border()),
        };

        let mut chip = div()
            .id(self.id)
            .h(self.size.control() - gpui::px(4.0))
            .px(padding_x)
            .flex()
            .items_center()
            .gap_1()
            .rounded(Radius::Full.pixels())
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_color(text)
            .text_size(self.size.font_size())
            .when(checked, |el| el.child("✓"))
            .child(self.label);

        if self.disabled {
            chip = chip.opacity(0.5);
        } else {
            chip = chip.cursor_pointer().hover(|s| s.border_color(self.color.filled()));
            if let Some(handler) = self.on_change {
                chip = chip.on_click(move |_event, window, cx| handler(!checked, window, cx));
            }
        }

        chip
    }
}
