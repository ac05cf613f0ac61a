//! Blockquote Component

use gpui::{
    div, prelude::*, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

/// Quoted text with a colored left rule and an optional author line
#[derive(IntoElement)]
pub struct Blockquote {
    cite: Option<SharedString>,
    icon: Option<AnyElement>,
    color: Palette,
    radius: Radius,
    size: Size,
    children: Vec<AnyElement>,
}

impl Blockquote {
    pub fn new() -> Self {
        Self {
            cite: None,
            icon: None,
            color: Palette::Blue,
            radius: Radius::Sm,
            size: Size::Md,
            children: Vec::new(),
        }
    }

    /// Author shown under the quote
    pub fn cite(mut self, cite: impl Into<SharedString>) -> Self {
        self.cite = Some(cite.into());
        self
    }

    pub fn icon(mut self, icon: impl IntoElement) -> Self {
        self.icon = Some(icon.into_any_element());
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Blockquote {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Blockquote {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (padding_x, padding_y) = self.size.padding();

        div()
            .flex()
            .gap_3()
            .px(padding_x)
            .py(padding_y)
            .border_l_4()
            .border_color(self.color.filled())
            .bg(self.color.light())
            .rounded_r(self.radius.pixels())
            .when_some(self.icon, |el, icon| {
                el.child(div().text_color(self.color.filled()).child(icon))
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(self.size.font_size())
                            .text_color(LoomColors::text_primary())
                            .children(self.children),
                    )
                    .when_some(self.cite, |el, cite| {
                        el.child(
                            div()
                                .text_size(Size::Xs.font_size())
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(LoomColors::text_secondary())
                                .child(SharedString::from(format!("— {cite}"))),
                        )
                    }),
            )
    }
}
