//! Button Component

use gpui::{
    div, prelude::*, AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid palette fill
    #[default]
    Filled,
    /// Light palette tint
    Light,
    /// Palette border, transparent fill
    Outline,
    /// Transparent until hovered
    Subtle,
    /// Neutral surface with a border
    Default,
}

/// Where the loader sits relative to the label while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderPosition {
    Left,
    Right,
    /// Replaces the label
    #[default]
    Center,
}

/// Colors of a button: (background, text, border, hover background)
pub(crate) fn variant_colors(variant: ButtonVariant, color: Palette) -> (Rgba, Rgba, Rgba, Rgba) {
    match variant {
        ButtonVariant::Filled => (color.filled(), color.on_filled(), color.filled(), color.hover()),
        ButtonVariant::Light => (color.light(), color.hover(), color.light(), color.light()),
        ButtonVariant::Outline => (
            LoomColors::transparent(),
            color.filled(),
            color.filled(),
            color.light(),
        ),
        ButtonVariant::Subtle => (
            LoomColors::transparent(),
            color.filled(),
            LoomColors::transparent(),
            color.light(),
        ),
        ButtonVariant::Default => (
            LoomColors::surface(),
            LoomColors::text_primary(),
            LoomColors::input_border(),
            LoomColors::hover(),
        ),
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: Size,
    color: Palette,
    radius: Radius,
    disabled: bool,
    loading: bool,
    loader_position: LoaderPosition,
    full_width: bool,
    uppercase: bool,
    left_section: Option<AnyElement>,
    right_section: Option<AnyElement>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Filled,
            size: Size::Md,
            color: Palette::Blue,
            radius: Radius::Sm,
            disabled: false,
            loading: false,
            loader_position: LoaderPosition::Center,
            full_width: false,
            uppercase: false,
            left_section: None,
            right_section: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the palette color
    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    /// Set the corner radius
    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set where the loader is drawn
    pub fn loader_position(mut self, position: LoaderPosition) -> Self {
        self.loader_position = position;
        self
    }

    /// Stretch to the parent width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Render the label in upper case
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Element drawn before the label
    pub fn left_section(mut self, section: impl IntoElement) -> Self {
        self.left_section = Some(section.into_any_element());
        self
    }

    /// Element drawn after the label
    pub fn right_section(mut self, section: impl IntoElement) -> Self {
        self.right_section = Some(section.into_any_element());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a light button
    pub fn light(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Light)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a subtle button
    pub fn subtle(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Subtle)
    }
}

/// Spinning-style loader glyph
fn loader(size: Size) -> impl IntoElement {
    div().text_size(size.font_size()).child("◌")
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, border_color, hover_bg) = variant_colors(self.variant, self.color);
        let (padding_x, _) = self.size.padding();
        let interactive = !self.disabled && !self.loading;

        let label = if self.uppercase {
            SharedString::from(self.label.to_uppercase())
        } else {
            self.label
        };
        let show_label = !(self.loading && self.loader_position == LoaderPosition::Center);

        let mut element = div()
            .id(self.id)
            .h(self.size.control())
            .px(padding_x)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(self.size.font_size())
            .font_weight(FontWeight::MEDIUM)
            .rounded(self.radius.pixels())
            .when(self.full_width, |el| el.w_full())
            .when(self.loading && self.loader_position == LoaderPosition::Left, |el| {
                el.child(loader(self.size))
            })
            .when_some(self.left_section, |el, section| el.child(section))
            .when(show_label, |el| el.child(label))
            .when(self.loading && self.loader_position == LoaderPosition::Center, |el| {
                el.child(loader(self.size))
            })
            .when_some(self.right_section, |el, section| el.child(section))
            .when(self.loading && self.loader_position == LoaderPosition::Right, |el| {
                el.child(loader(self.size))
            });

        if interactive {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        } else {
            element = element.opacity(0.5);
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_uses_palette_fill() {
        let (bg, text, _, hover) = variant_colors(ButtonVariant::Filled, Palette::Red);
        assert_eq!(bg, Palette::Red.filled());
        assert_eq!(text, Palette::Red.on_filled());
        assert_eq!(hover, Palette::Red.hover());
    }

    #[test]
    fn transparent_variants_keep_palette_text() {
        for variant in [ButtonVariant::Outline, ButtonVariant::Subtle] {
            let (bg, text, _, _) = variant_colors(variant, Palette::Teal);
            assert_eq!(bg, LoomColors::transparent());
            assert_eq!(text, Palette::Teal.filled());
        }
    }
}
