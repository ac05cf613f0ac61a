//! Progress Component

use gpui::{
    div, prelude::*, px, relative, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

const STRIPE_WIDTH: f32 = 10.0;
const STRIPE_COUNT: usize = 200;

/// A horizontal progress bar
#[derive(IntoElement)]
pub struct Progress {
    value: f32,
    color: Palette,
    size: Size,
    radius: Radius,
    striped: bool,
}

/// Clamp a percentage into `0..=100`; NaN counts as empty
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl Progress {
    /// Create a bar filled to `value` percent
    pub fn new(value: f32) -> Self {
        Self {
            value: clamp_percent(value),
            color: Palette::Blue,
            size: Size::Md,
            radius: Radius::Sm,
            striped: false,
        }
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Draw diagonal-looking stripes over the filled part
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }
}

impl RenderOnce for Progress {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let radius = self.radius.pixels();
        let stripe = self.color.hover();

        div()
            .w_full()
            .h(self.size.bar())
            .rounded(radius)
            .overflow_hidden()
            .bg(LoomColors::track())
            .child(
                div()
                    .h_full()
                    .w(relative(self.value / 100.0))
                    .rounded(radius)
                    .overflow_hidden()
                    .bg(self.color.filled())
                    .when(self.striped, |el| {
                        el.flex().children((0..STRIPE_COUNT).map(|i| {
                            div()
                                .flex_none()
                                .h_full()
                                .w(px(STRIPE_WIDTH))
                                .when(i % 2 == 0, |s| s.bg(stripe))
                        }))
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(250.0), 100.0);
        assert_eq!(clamp_percent(f32::NAN), 0.0);
    }
}
