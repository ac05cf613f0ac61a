//! Fieldset Component
//!
//! Groups related controls under a legend.

use gpui::{
    div, prelude::*, px, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::components::primitives::text_input::InputVariant;
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

#[derive(IntoElement)]
pub struct Fieldset {
    legend: Option<SharedString>,
    variant: InputVariant,
    radius: Radius,
    required: bool,
    disabled: bool,
    children: Vec<AnyElement>,
}

impl Fieldset {
    pub fn new() -> Self {
        Self {
            legend: None,
            variant: InputVariant::Default,
            radius: Radius::Sm,
            required: false,
            disabled: false,
            children: Vec::new(),
        }
    }

    pub fn legend(mut self, legend: impl Into<SharedString>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Default draws a border, filled a muted background, unstyled neither
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Asterisk after the legend
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Dim the whole group. Children still need their own disabled flag to
    /// stop reacting.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Fieldset {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Fieldset {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, border) = self.variant.colors(false, false);
        let border = if self.variant == InputVariant::Default {
            LoomColors::border()
        } else {
            border
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .when(self.variant != InputVariant::Unstyled, |el| el.p_4())
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(self.radius.pixels())
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.legend, |el, legend| {
                el.child(
                    div()
                        .flex()
                        .gap_1()
                        .text_size(Size::Sm.font_size())
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(LoomColors::text_primary())
                        .mb(px(2.0))
                        .child(legend)
                        .when(self.required, |el| el.child(div().text_color(LoomColors::error()).child("*"))),
                )
            })
            .children(self.children)
    }
}
