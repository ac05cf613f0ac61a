//! Layout Page

use gpui::{
    div, prelude::*, px, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::fieldset::Fieldset;
use crate::components::layout::flex::{Flex, FlexAlign, FlexDirection};
use crate::components::layout::grid::{Col, Grid};
use crate::components::layout::group::GroupJustify;
use crate::components::layout::scroll_area::ScrollArea;
use crate::components::layout::simple_grid::SimpleGrid;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::text_input::{text_input, InputVariant, TextInput};
use crate::features::demo::{caption, demo_card, page_column};
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// Colored placeholder block standing in for real content
fn tile(label: impl Into<SharedString>, color: Palette) -> Div {
    div()
        .h(px(40.0))
        .px_3()
        .flex()
        .items_center()
        .justify_center()
        .rounded_sm()
        .bg(color.light())
        .text_color(color.hover())
        .text_sm()
        .child(label.into())
}

pub struct LayoutPage {
    entities: AppEntities,
    first_name: Entity<TextInput>,
    last_name: Entity<TextInput>,
    newsletter: bool,
}

impl LayoutPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let first_name = text_input("fieldset-first-name", "", "First name", window, cx);
        let last_name = text_input("fieldset-last-name", "", "Last name", window, cx);
        last_name.update(cx, |input, _| input.set_variant(InputVariant::Filled));

        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            first_name,
            last_name,
            newsletter: false,
        }
    }
}

impl Render for LayoutPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let color = self.entities.settings.read(cx).color();
        let page = cx.entity();
        let viewport = f32::from(window.viewport_size().width);

        let grid = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Grid::new()
                    .col(Col::new(tile("span 4", color)).span(4))
                    .col(Col::new(tile("span 4", color)).span(4))
                    .col(Col::new(tile("span 4", color)).span(4)),
            )
            .child(
                Grid::new()
                    .gutter(Size::Xs)
                    .col(Col::new(tile("span 3, offset 3", Palette::Teal)).span(3).offset(3))
                    .col(Col::new(tile("span 6", Palette::Teal)).span(6))
                    .col(Col::new(tile("full row", Palette::Teal))),
            );

        let simple_grid = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                SimpleGrid::new(4)
                    .spacing(Size::Sm)
                    .vertical_spacing(Size::Xs)
                    .breakpoint(1100.0, 3)
                    .breakpoint(800.0, 2)
                    .children((1..=7).map(|n| tile(format!("item {n}"), Palette::Violet))),
            )
            .child(caption("viewport", format!("{viewport:.0}px")));

        let flex = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Flex::new()
                    .gap(Size::Sm)
                    .justify(GroupJustify::SpaceBetween)
                    .align(FlexAlign::Center)
                    .child(tile("start", color))
                    .child(div().h(px(64.0)).child(tile("tall", color)))
                    .child(tile("end", color)),
            )
            .child(
                Flex::new()
                    .direction(FlexDirection::RowReverse)
                    .gap(Size::Xs)
                    .wrap(true)
                    .children(["1", "2", "3"].map(|n| tile(n, Palette::Orange))),
            )
            .child(
                Flex::new()
                    .direction(FlexDirection::Column)
                    .align(FlexAlign::End)
                    .gap(Size::Xs)
                    .children(["top", "bottom"].map(|n| tile(n, Palette::Pink))),
            );

        let fieldset = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Fieldset::new()
                    .legend("Personal information")
                    .required(true)
                    .child(self.first_name.clone())
                    .child(self.last_name.clone())
                    .child(
                        Checkbox::new("fieldset-newsletter")
                            .label("Subscribe to the newsletter")
                            .color(color)
                            .checked(self.newsletter)
                            .on_change(move |checked, _window, cx| {
                                page.update(cx, |this, cx| {
                                    this.newsletter = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Fieldset::new()
                    .legend("Filled and disabled")
                    .variant(InputVariant::Filled)
                    .disabled(true)
                    .child(div().text_sm().child("Everything in here is dimmed.")),
            );

        let scroll_area = Flex::new()
            .gap(Size::Md)
            .wrap(true)
            .child(
                ScrollArea::new("scroll-vertical")
                    .height(px(120.0))
                    .width(px(240.0))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .text_sm()
                            .children((1..=20).map(|n| SharedString::from(format!("Line {n}")))),
                    ),
            )
            .child(
                ScrollArea::new("scroll-horizontal")
                    .horizontal(true)
                    .vertical(false)
                    .width(px(240.0))
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .children((1..=12).map(|n| tile(format!("#{n}"), Palette::Gray).w(px(64.0)))),
                    ),
            );

        page_column("layout-page")
            .child(demo_card("Grid", grid))
            .child(demo_card("SimpleGrid", simple_grid))
            .child(demo_card("Flex", flex))
            .child(demo_card("Fieldset", fieldset))
            .child(demo_card(
                "ScrollArea",
                div()
                    .border_1()
                    .border_color(LoomColors::border())
                    .rounded_sm()
                    .p_2()
                    .child(scroll_area),
            ))
    }
}
