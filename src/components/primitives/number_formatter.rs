//! NumberFormatter Component
//!
//! Read-only text rendering of a number through a [`NumberFormat`].

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::domain::number::NumberFormat;
use crate::theme::colors::LoomColors;
use crate::theme::Size;

#[derive(IntoElement)]
pub struct NumberFormatter {
    value: f64,
    format: NumberFormat,
    size: Size,
}

impl NumberFormatter {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            format: NumberFormat::default(),
            size: Size::Sm,
        }
    }

    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// The rendered text; empty for NaN and infinities
    pub fn text(&self) -> SharedString {
        if self.value.is_finite() {
            SharedString::from(self.format.format(self.value))
        } else {
            SharedString::default()
        }
    }
}

impl RenderOnce for NumberFormatter {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .text_size(self.size.font_size())
            .text_color(LoomColors::text_primary())
            .child(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_through_the_number_format() {
        let formatter = NumberFormatter::new(1234.5).format(NumberFormat::currency("$"));
        assert_eq!(formatter.text().as_ref(), "$1,234.50");
    }

    #[test]
    fn non_finite_values_render_empty() {
        assert_eq!(NumberFormatter::new(f64::NAN).text().as_ref(), "");
        assert_eq!(NumberFormatter::new(f64::INFINITY).text().as_ref(), "");
    }
}
