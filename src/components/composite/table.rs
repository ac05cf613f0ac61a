//! Table Component
//!
//! Column definitions map a title to a row key; rows are key/value maps.
//! Missing cells render empty.

use std::collections::BTreeMap;

use gpui::{
    div, prelude::*, App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub title: SharedString,
    /// Row key the column reads
    pub key: SharedString,
}

impl TableColumn {
    pub fn new(title: impl Into<SharedString>, key: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
        }
    }
}

pub type TableRow = BTreeMap<SharedString, SharedString>;

/// Build a row from `(key, value)` pairs
pub fn table_row<K, V>(cells: impl IntoIterator<Item = (K, V)>) -> TableRow
where
    K: Into<SharedString>,
    V: Into<SharedString>,
{
    cells.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Cell of `row` under `column`, empty when the row lacks the key
pub fn cell(row: &TableRow, column: &TableColumn) -> SharedString {
    row.get(&column.key).cloned().unwrap_or_default()
}

#[derive(IntoElement)]
pub struct Table {
    id: ElementId,
    columns: Vec<TableColumn>,
    rows: Vec<TableRow>,
    striped: bool,
    highlight_on_hover: bool,
    with_border: bool,
    size: Size,
    radius: Radius,
}

impl Table {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            striped: false,
            highlight_on_hover: false,
            with_border: true,
            size: Size::Sm,
            radius: Radius::Sm,
        }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Shade every other row
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn highlight_on_hover(mut self, highlight: bool) -> Self {
        self.highlight_on_hover = highlight;
        self
    }

    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
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
}

impl RenderOnce for Table {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (padding_x, padding_y) = self.size.padding();
        let font_size = self.size.font_size();
        let (striped, highlight) = (self.striped, self.highlight_on_hover);

        let header = div()
            .flex()
            .bg(LoomColors::surface_muted())
            .border_b_1()
            .border_color(LoomColors::border())
            .children(self.columns.iter().map(|column| {
                div()
                    .flex_1()
                    .px(padding_x)
                    .py(padding_y)
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(column.title.clone())
            }));

        let columns = self.columns;
        let count = self.rows.len();
        let body = self.rows.into_iter().enumerate().map(move |(index, row)| {
            div()
                .id(("table-row", index))
                .flex()
                .when(index + 1 < count, |el| el.border_b_1().border_color(LoomColors::border()))
                .when(striped && index % 2 == 1, |el| el.bg(LoomColors::surface_muted()))
                .when(highlight, |el| el.hover(|s| s.bg(LoomColors::hover())))
                .children(columns.iter().map(|column| {
                    div()
                        .flex_1()
                        .px(padding_x)
                        .py(padding_y)
                        .text_color(LoomColors::text_secondary())
                        .child(cell(&row, column))
                }))
        });

        div()
            .id(self.id)
            .w_full()
            .flex()
            .flex_col()
            .overflow_hidden()
            .text_size(font_size)
            .text_color(LoomColors::text_primary())
            .bg(LoomColors::surface())
            .when(self.with_border, |el| {
                el.border_1().border_color(LoomColors::border()).rounded(self.radius.pixels())
            })
            .child(header)
            .children(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_the_column_key() {
        let row = table_row([("name", "Carbon"), ("symbol", "C")]);
        assert_eq!(cell(&row, &TableColumn::new("Element", "name")).as_ref(), "Carbon");
        assert_eq!(cell(&row, &TableColumn::new("Symbol", "symbol")).as_ref(), "C");
    }

    #[test]
    fn missing_cells_are_empty() {
        let row = table_row([("name", "Carbon")]);
        assert_eq!(cell(&row, &TableColumn::new("Mass", "mass")).as_ref(), "");
    }
}
