//! Data Page

use gpui::{div, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::composite::table::{table_row, Table, TableColumn, TableRow};
use crate::components::composite::timeline::{Timeline, TimelineItem};
use crate::components::layout::group::Group;
use crate::components::primitives::blockquote::Blockquote;
use crate::components::primitives::button::Button;
use crate::components::primitives::number_formatter::NumberFormatter;
use crate::domain::number::NumberFormat;
use crate::features::demo::{caption, demo_card, page_column};
use crate::theme::{Palette, Size};

const ELEMENTS: [(&str, &str, &str, &str); 5] = [
    ("6", "Carbon", "C", "12.011"),
    ("7", "Nitrogen", "N", "14.007"),
    ("39", "Yttrium", "Y", "88.906"),
    ("56", "Barium", "Ba", "137.33"),
    ("58", "Cerium", "Ce", "140.12"),
];

const RELEASE_STEPS: [(&str, &str, &str); 4] = [
    ("New branch", "You created a feature branch", "2 hours ago"),
    ("Commits", "12 commits pushed", "52 minutes ago"),
    ("Pull request", "Review requested", "34 minutes ago"),
    ("Merged", "Branch merged into main", "12 minutes ago"),
];

fn element_rows() -> Vec<TableRow> {
    ELEMENTS
        .iter()
        .map(|(position, name, symbol, mass)| {
            table_row([("position", *position), ("name", *name), ("symbol", *symbol), ("mass", *mass)])
        })
        .collect()
}

pub struct DataPage {
    entities: AppEntities,
    striped: bool,
    reached: usize,
}

impl DataPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            striped: true,
            reached: 1,
        }
    }

    fn toggle_striped(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.striped = !self.striped;
        cx.notify();
    }

    fn advance(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.reached = (self.reached + 1) % RELEASE_STEPS.len();
        cx.notify();
    }
}

impl Render for DataPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (size, color) = (settings.size(), settings.color());

        let table = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                Table::new("elements-table")
                    .size(size)
                    .striped(self.striped)
                    .highlight_on_hover(true)
                    .columns([
                        TableColumn::new("Position", "position"),
                        TableColumn::new("Name", "name"),
                        TableColumn::new("Symbol", "symbol"),
                        TableColumn::new("Atomic mass", "mass"),
                        TableColumn::new("Group", "group"),
                    ])
                    .rows(element_rows()),
            )
            .child(
                Button::subtle("table-striped", "Toggle stripes")
                    .size(Size::Sm)
                    .on_click(cx.listener(Self::toggle_striped)),
            );

        let numbers = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(Group::new().child(caption("currency", "")).child(
                NumberFormatter::new(1_234_567.891).format(NumberFormat::currency("$")).size(size),
            ))
            .child(Group::new().child(caption("grouped", "")).child(NumberFormatter::new(1_000_000.0).size(size)))
            .child(Group::new().child(caption("european", "")).child(
                NumberFormatter::new(-98_765.4321)
                    .format(NumberFormat::default().separators(Some('.'), ',').precision(2).suffix(" €"))
                    .size(size),
            ));

        let timeline = RELEASE_STEPS
            .iter()
            .fold(
                Timeline::new().active(Some(self.reached)).color(color).bullet_size(size),
                |timeline, (title, content, timestamp)| {
                    timeline.item(
                        TimelineItem::new(*title)
                            .content(div().child(*content))
                            .timestamp(*timestamp),
                    )
                },
            );

        page_column("data-page")
            .child(demo_card("Table", table))
            .child(demo_card("NumberFormatter", numbers))
            .child(demo_card(
                "Timeline",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(timeline)
                    .child(
                        Button::outline("timeline-advance", "Advance")
                            .size(Size::Sm)
                            .color(color)
                            .on_click(cx.listener(Self::advance)),
                    ),
            ))
            .child(demo_card(
                "Blockquote",
                Blockquote::new()
                    .color(Palette::Teal)
                    .cite("Alan Kay")
                    .icon("❝")
                    .child("Simple things should be simple, complex things should be possible."),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::table::cell;

    #[test]
    fn element_rows_fill_every_column_but_group() {
        let rows = element_rows();
        assert_eq!(rows.len(), ELEMENTS.len());
        assert_eq!(cell(&rows[2], &TableColumn::new("Name", "name")).as_ref(), "Yttrium");
        assert_eq!(cell(&rows[2], &TableColumn::new("Group", "group")).as_ref(), "");
    }
}
