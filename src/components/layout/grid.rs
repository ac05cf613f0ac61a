//! Grid Component
//!
//! Twelve column rows. Each [`Col`] spans a share of the row and can be
//! shifted right by an offset; columns wrap once a row is full.

use gpui::{
    div, prelude::*, relative, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled,
    Window,
};

use crate::domain::grid::{offset_fraction, span_fraction, GRID_COLUMNS};
use crate::theme::Size;

pub struct Col {
    span: Option<u16>,
    offset: u16,
    child: AnyElement,
}

impl Col {
    pub fn new(child: impl IntoElement) -> Self {
        Self {
            span: None,
            offset: 0,
            child: child.into_any_element(),
        }
    }

    /// Columns covered; the full row when unset
    pub fn span(mut self, span: u16) -> Self {
        self.span = Some(span);
        self
    }

    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }
}

#[derive(IntoElement)]
pub struct Grid {
    columns: u16,
    gutter: Size,
    cols: Vec<Col>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            columns: GRID_COLUMNS,
            gutter: Size::Md,
            cols: Vec::new(),
        }
    }

    /// Columns in a row
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    pub fn gutter(mut self, gutter: Size) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn col(mut self, col: Col) -> Self {
        self.cols.push(col);
        self
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Grid {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let columns = self.columns;
        let half_gutter = self.gutter.gap() / 2.0;

        // Cells carry half the gutter on each side
        div()
            .w_full()
            .flex()
            .flex_wrap()
            .children(self.cols.into_iter().map(move |col| {
                div()
                    .flex_none()
                    .w(relative(span_fraction(col.span, columns)))
                    .ml(relative(offset_fraction(col.offset, columns)))
                    .p(half_gutter)
                    .child(col.child)
            }))
    }
}
