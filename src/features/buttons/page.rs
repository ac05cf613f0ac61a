//! Buttons Page
//!
//! Button variants, sizes and loading states, plus chips and a switch.

use gpui::{div, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::layout::container::Container;
use crate::components::layout::group::{Group, GroupJustify};
use crate::components::primitives::button::{Button, ButtonVariant, LoaderPosition};
use crate::components::primitives::chip::{Chip, ChipVariant};
use crate::components::primitives::switch::Switch;
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::t;
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

const VARIANTS: [(ButtonVariant, &str); 5] = [
    (ButtonVariant::Filled, "Filled"),
    (ButtonVariant::Light, "Light"),
    (ButtonVariant::Outline, "Outline"),
    (ButtonVariant::Subtle, "Subtle"),
    (ButtonVariant::Default, "Default"),
];

const CHIPS: [(ChipVariant, &str); 3] = [
    (ChipVariant::Filled, "Filled chip"),
    (ChipVariant::Outline, "Outline chip"),
    (ChipVariant::Light, "Light chip"),
];

pub struct ButtonsPage {
    entities: AppEntities,
    clicks: usize,
    loading: bool,
    chips: [bool; 3],
    notifications: bool,
}

impl ButtonsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            clicks: 0,
            loading: false,
            chips: [true, false, false],
            notifications: true,
        }
    }

    fn count_click(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.clicks += 1;
        debug!(clicks = self.clicks, "Button clicked");
        cx.notify();
    }

    fn toggle_loading(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.loading = !self.loading;
        cx.notify();
    }
}

impl Render for ButtonsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let locale = settings.locale();
        let size = settings.size();
        let color = settings.color();
        let page = cx.entity();

        let variants = Group::new().children(VARIANTS.iter().map(|(variant, label)| {
            Button::new(SharedString::from(format!("variant-{label}")), *label)
                .variant(*variant)
                .size(size)
                .color(color)
                .on_click(cx.listener(Self::count_click))
        }));

        let sizes = Group::new().children(Size::ALL.iter().map(|option| {
            Button::new(("size-button", *option as usize), option.label())
                .size(*option)
                .color(color)
                .radius(Radius::Md)
        }));

        let loading = Group::new()
            .child(
                Button::new("loading-left", t(locale, "loading"))
                    .size(size)
                    .loading(self.loading)
                    .loader_position(LoaderPosition::Left),
            )
            .child(
                Button::new("loading-center", "Save")
                    .size(size)
                    .loading(self.loading),
            )
            .child(
                Button::outline("loading-toggle", if self.loading { "Stop" } else { "Start loading" })
                    .size(size)
                    .color(Palette::Gray)
                    .on_click(cx.listener(Self::toggle_loading)),
            )
            .child(
                Button::new("disabled-button", "Disabled")
                    .size(size)
                    .disabled(true),
            );

        let layout = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                Button::light("full-width", "Full width")
                    .size(size)
                    .color(Palette::Violet)
                    .full_width(true)
                    .uppercase(true),
            )
            .child(
                Group::new()
                    .child(
                        Button::new("with-sections", "Download")
                            .size(size)
                            .color(Palette::Teal)
                            .left_section("⇩")
                            .right_section("▾"),
                    )
                    .child(Button::subtle("subtle-only", "Subtle").size(size).color(Palette::Red)),
            );

        let arrangement = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Group::new()
                    .justify(GroupJustify::SpaceBetween)
                    .child(Button::outline("group-left", "Left").size(size))
                    .child(Button::outline("group-right", "Right").size(size)),
            )
            .child(
                Group::new()
                    .grow(true)
                    .wrap(false)
                    .gap(Size::Xs)
                    .child(Button::light("group-grow-1", "Grow").size(size).full_width(true))
                    .child(Button::light("group-grow-2", "Grow").size(size).full_width(true)),
            )
            .children([Size::Xs, Size::Md].into_iter().map(|container_size| {
                Container::new().size(container_size).child(
                    div()
                        .p_2()
                        .rounded_sm()
                        .bg(LoomColors::surface_muted())
                        .text_sm()
                        .child(SharedString::from(format!("Container {}", container_size.label()))),
                )
            }))
            .child(
                Container::new().fluid(true).child(
                    div()
                        .p_2()
                        .rounded_sm()
                        .bg(LoomColors::surface_muted())
                        .text_sm()
                        .child("Fluid container"),
                ),
            );

        let chips = Group::new().children(CHIPS.iter().enumerate().map(|(index, (variant, label))| {
            let page = page.clone();
            Chip::new(("chip", index), *label)
                .variant(*variant)
                .size(size)
                .color(color)
                .checked(self.chips[index])
                .on_change(move |checked, _window, cx| {
                    page.update(cx, |this, cx| {
                        this.chips[index] = checked;
                        cx.notify();
                    });
                })
        }));

        let switch = Switch::new("notifications-switch")
            .label("Notifications")
            .on_label("ON")
            .off_label("OFF")
            .size(size)
            .color(color)
            .checked(self.notifications)
            .on_change(move |checked, _window, cx| {
                page.update(cx, |this, cx| {
                    this.notifications = checked;
                    cx.notify();
                });
            });

        page_column("buttons-page")
            .child(demo_card(
                "Variants",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(variants)
                    .child(caption("clicks", self.clicks.to_string())),
            ))
            .child(demo_card("Sizes", sizes))
            .child(demo_card("Loading", loading))
            .child(demo_card("Layout", layout))
            .child(demo_card("Group / Container", arrangement))
            .child(demo_card("Chips", chips))
            .child(demo_card("Switch", switch))
    }
}
