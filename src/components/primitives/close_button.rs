//! CloseButton Component
//!
//! Square button showing a cross, used by notifications and dialogs.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, Rgba, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloseButtonVariant {
    /// Transparent until hovered
    #[default]
    Hover,
    Filled,
    Light,
    Outline,
    /// Never gets a background
    Transparent,
    /// White fill for dark surfaces
    White,
    /// Neutral surface with a border
    Default,
}

/// (background, glyph, border, hover background) of a close button
pub(crate) fn close_colors(variant: CloseButtonVariant, color: Palette) -> (Rgba, Rgba, Rgba, Rgba) {
    let clear = LoomColors::transparent();
    match variant {
        CloseButtonVariant::Hover => (clear, LoomColors::text_secondary(), clear, LoomColors::hover()),
        CloseButtonVariant::Filled => (color.filled(), color.on_filled(), color.filled(), color.hover()),
        CloseButtonVariant::Light => (color.light(), color.hover(), color.light(), color.light()),
        CloseButtonVariant::Outline => (clear, color.filled(), color.filled(), color.light()),
        CloseButtonVariant::Transparent => (clear, LoomColors::text_secondary(), clear, clear),
        CloseButtonVariant::White => (
            LoomColors::surface(),
            LoomColors::text_primary(),
            LoomColors::surface(),
            LoomColors::surface(),
        ),
        CloseButtonVariant::Default => (
            LoomColors::surface(),
            LoomColors::text_primary(),
            LoomColors::input_border(),
            LoomColors::hover(),
        ),
    }
}

/// Size of the cross glyph
fn icon_size(size: Size) -> Pixels {
    px(match size {
        Size::Xs => 10.0,
        Size::Sm => 12.0,
        Size::Md => 16.0,
        Size::Lg => 20.0,
        Size::Xl => 24.0,
    })
}

#[derive(IntoElement)]
pub struct CloseButton {
    id: ElementId,
    variant: CloseButtonVariant,
    size: Size,
    radius: Radius,
    color: Palette,
    icon_size: Option<Pixels>,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl CloseButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: CloseButtonVariant::Hover,
            size: Size::Md,
            radius: Radius::Full,
            color: Palette::Gray,
            icon_size: None,
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: CloseButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Button side; the glyph scales with it unless `icon_size` is set
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn icon_size(mut self, size: Pixels) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CloseButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, glyph, border, hover_bg) = close_colors(self.variant, self.color);
        let side = self.size.control() * 0.75;

        div()
            .id(self.id)
            .flex_none()
            .size(side)
            .flex()
            .items_center()
            .justify_center()
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(self.radius.pixels())
            .text_color(glyph)
            .text_size(self.icon_size.unwrap_or_else(|| icon_size(self.size)))
            .child("×")
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(hover_bg))
                    .when_some(self.on_click, |el, handler| el.on_click(handler))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_variant_is_clear_until_hovered() {
        let (bg, _, border, hover) = close_colors(CloseButtonVariant::Hover, Palette::Blue);
        assert_eq!(bg, LoomColors::transparent());
        assert_eq!(border, LoomColors::transparent());
        assert_eq!(hover, LoomColors::hover());
    }

    #[test]
    fn filled_variant_uses_palette() {
        let (bg, glyph, _, _) = close_colors(CloseButtonVariant::Filled, Palette::Red);
        assert_eq!(bg, Palette::Red.filled());
        assert_eq!(glyph, Palette::Red.on_filled());
    }

    #[test]
    fn glyph_grows_with_size() {
        for pair in Size::ALL.windows(2) {
            assert!(icon_size(pair[0]) < icon_size(pair[1]));
        }
    }
}
