//! Overlays Page
//!
//! Modal, drawer and dialog are drawn over the whole content area, so the
//! page root is a positioned container holding the scrolling column and the
//! overlays.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::hover_card::HoverCard;
use crate::components::composite::modal::{Dialog, Drawer, DrawerPosition, Modal};
use crate::components::composite::tooltip::{Tooltip, TooltipState};
use crate::components::layout::group::Group;
use crate::components::primitives::button::Button;
use crate::domain::tooltip::TooltipPosition;
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::t;
use crate::theme::{Palette, Size};

const POSITIONS: [(TooltipPosition, &str); 4] = [
    (TooltipPosition::Top, "Top"),
    (TooltipPosition::Bottom, "Bottom"),
    (TooltipPosition::Left, "Left"),
    (TooltipPosition::Right, "Right"),
];

/// Keeps the card open while the pointer crosses the gap from the trigger
const HOVER_CARD_CLOSE_DELAY_MS: u64 = 150;

const DRAWER_POSITIONS: [(DrawerPosition, &str); 4] = [
    (DrawerPosition::Left, "Left"),
    (DrawerPosition::Right, "Right"),
    (DrawerPosition::Top, "Top"),
    (DrawerPosition::Bottom, "Bottom"),
];

pub struct OverlaysPage {
    entities: AppEntities,
    modal_opened: bool,
    drawer: Option<DrawerPosition>,
    dialog_opened: bool,
    tooltips: Vec<Entity<TooltipState>>,
    delayed: Entity<TooltipState>,
    multiline: Entity<TooltipState>,
    hover_card: Entity<TooltipState>,
}

impl OverlaysPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let tooltips = POSITIONS
            .iter()
            .map(|_| cx.new(|_| TooltipState::default()))
            .collect();
        let delayed = cx.new(|_| TooltipState::new(Duration::from_millis(500), Duration::from_millis(300)));
        let multiline = cx.new(|_| TooltipState::default());
        let hover_card = cx.new(|_| TooltipState::new(Duration::ZERO, Duration::from_millis(HOVER_CARD_CLOSE_DELAY_MS)));

        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            modal_opened: false,
            drawer: None,
            dialog_opened: false,
            tooltips,
            delayed,
            multiline,
            hover_card,
        }
    }

    /// Close whatever overlay is open; returns whether one was
    pub fn dismiss(&mut self, cx: &mut Context<Self>) -> bool {
        let was_open = self.modal_opened || self.drawer.is_some() || self.dialog_opened;
        if was_open {
            debug!("Overlay dismissed");
            self.modal_opened = false;
            self.drawer = None;
            self.dialog_opened = false;
            cx.notify();
        }
        was_open
    }

    fn open_modal(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.modal_opened = true;
        cx.notify();
    }

    fn open_dialog(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.dialog_opened = true;
        cx.notify();
    }

    fn open_drawer(&mut self, position: DrawerPosition, cx: &mut Context<Self>) {
        self.drawer = Some(position);
        cx.notify();
    }
}

impl Render for OverlaysPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (locale, size, color) = (settings.locale(), settings.size(), settings.color());
        let close_label = t(locale, "modal-close");
        let page = cx.entity();

        let drawers = Group::new().children(DRAWER_POSITIONS.iter().enumerate().map(|(index, (position, label))| {
            let position = *position;
            Button::light(("open-drawer", index), SharedString::from(format!("Drawer {label}")))
                .size(size)
                .color(color)
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.open_drawer(position, cx);
                }))
        }));

        let tooltips = Group::new()
            .gap(Size::Xl)
            .children(POSITIONS.iter().zip(&self.tooltips).enumerate().map(
                |(index, ((position, label), state))| {
                    Tooltip::new(("tooltip", index), state, SharedString::from(format!("Tooltip on the {label}")))
                        .position(*position)
                        .with_arrow(true)
                        .child(Button::outline(("tooltip-trigger", index), *label).size(size))
                },
            ))
            .child(
                Tooltip::new("tooltip-delayed", &self.delayed, "Opens after 500 ms")
                    .color(Palette::Gray)
                    .child(Button::subtle("tooltip-delayed-trigger", "Delayed").size(size)),
            )
            .child(
                Tooltip::new(
                    "tooltip-multiline",
                    &self.multiline,
                    "Long tooltip labels wrap onto several lines when multiline is set",
                )
                .position(TooltipPosition::Bottom)
                .multiline(px(200.0))
                .child(Button::subtle("tooltip-multiline-trigger", "Multiline").size(size)),
            );

        let close_modal = page.clone();
        let modal = Modal::new("Introduce yourself")
            .opened(self.modal_opened)
            .size(size)
            .close_label(close_label.clone())
            .on_close(move |_window, cx| {
                close_modal.update(cx, |this, cx| {
                    this.dismiss(cx);
                });
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .text_sm()
                    .child("Modals keep focus on a single task. Press Escape or click outside to close.")
                    .child(
                        Button::new("modal-confirm", "Got it")
                            .color(color)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.dismiss(cx);
                            })),
                    ),
            );

        let hover_card = HoverCard::new("hover-card", &self.hover_card)
            .position(TooltipPosition::Bottom)
            .with_arrow(true)
            .trigger(Button::outline("hover-card-trigger", "Hover to reveal").size(size).color(color))
            .content(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child("Hover cards hold rich content and stay open while hovered.")
                    .child(Button::light("hover-card-action", "Action").size(Size::Xs).color(color)),
            );

        let close_dialog = page.clone();
        let dialog = Dialog::new()
            .title("Subscribe to the newsletter")
            .opened(self.dialog_opened)
            .size(size)
            .overlay_opacity(0.3)
            .on_close(move |_window, cx| {
                close_dialog.update(cx, |this, cx| {
                    this.dismiss(cx);
                });
            })
            .child(div().text_sm().child("Dialogs ignore clicks on the backdrop; use the close button or Escape."));

        let drawer = Drawer::new("Navigation drawer")
            .opened(self.drawer.is_some())
            .position(self.drawer.unwrap_or_default())
            .size(size)
            .close_label(close_label)
            .on_close(move |_window, cx| {
                page.update(cx, |this, cx| {
                    this.dismiss(cx);
                });
            })
            .child(div().text_sm().child("Drawer content"));

        div()
            .relative()
            .size_full()
            .child(
                page_column("overlays-page")
                    .child(demo_card(
                        "Modal",
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(
                                Button::new("open-modal", "Open modal")
                                    .size(size)
                                    .color(color)
                                    .on_click(cx.listener(Self::open_modal)),
                            )
                            .child(caption("opened", self.modal_opened.to_string())),
                    ))
                    .child(demo_card("Drawer", drawers))
                    .child(demo_card(
                        "Dialog",
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(
                                Button::new("open-dialog", "Open dialog")
                                    .size(size)
                                    .color(color)
                                    .on_click(cx.listener(Self::open_dialog)),
                            )
                            .child(caption("opened", self.dialog_opened.to_string())),
                    ))
                    .child(demo_card("Tooltip", div().py_6().child(tooltips)))
                    .child(demo_card("HoverCard", div().pb_6().child(hover_card))),
            )
            .child(modal)
            .child(drawer)
            .child(dialog)
    }
}
