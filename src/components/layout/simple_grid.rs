//! SimpleGrid Component
//!
//! Equal width columns. The column count can drop on narrow windows through
//! breakpoints matched against the viewport width.

use gpui::{div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::domain::grid::{columns_for_width, rows, Breakpoint};
use crate::theme::Size;

#[derive(IntoElement)]
pub struct SimpleGrid {
    cols: usize,
    spacing: Size,
    vertical_spacing: Option<Size>,
    breakpoints: Vec<Breakpoint>,
    children: Vec<AnyElement>,
}

impl SimpleGrid {
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            spacing: Size::Md,
            vertical_spacing: None,
            breakpoints: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Horizontal gap, and vertical gap unless `vertical_spacing` is set
    pub fn spacing(mut self, spacing: Size) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn vertical_spacing(mut self, spacing: Size) -> Self {
        self.vertical_spacing = Some(spacing);
        self
    }

    /// Use `cols` columns while the viewport is at most `max_width` wide
    pub fn breakpoint(mut self, max_width: f32, cols: usize) -> Self {
        self.breakpoints.push(Breakpoint::new(max_width, cols));
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }
}

impl RenderOnce for SimpleGrid {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let width = f32::from(window.viewport_size().width);
        let cols = columns_for_width(width, self.cols, &self.breakpoints);
        let ranges: Vec<_> = rows(self.children.len(), cols).collect();
        let spacing = self.spacing.gap();

        let mut children = self.children.into_iter();
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(self.vertical_spacing.map_or(spacing, |s| s.gap()))
            .children(ranges.into_iter().map(|range| {
                let filled = range.len();
                div()
                    .w_full()
                    .flex()
                    .gap(spacing)
                    .children(children.by_ref().take(filled).map(|child| div().flex_1().min_w(px(0.0)).child(child)))
                    // Pad short rows so their cells keep the column width
                    .children((filled..cols).map(|_| div().flex_1()))
            }))
    }
}
