//! Feedback Page

use std::time::Duration;

use gpui::{
    div, prelude::*, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::copy_button::CopyButton;
use crate::components::composite::notification::{Notification, NotificationVariant};
use crate::components::layout::group::Group;
use crate::components::primitives::burger::Burger;
use crate::components::primitives::button::Button;
use crate::components::primitives::close_button::{CloseButton, CloseButtonVariant};
use crate::components::primitives::progress::{clamp_percent, Progress};
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::t;
use crate::theme::{Palette, Radius, Size};

const PROGRESS_STEP: f32 = 15.0;
const INSTALL_COMMAND: &str = "cargo add loom-ui";

const NOTIFICATIONS: [(NotificationVariant, Palette, &str, &str); 3] = [
    (NotificationVariant::Filled, Palette::Blue, "Saved", "Your changes were stored"),
    (NotificationVariant::Light, Palette::Green, "Deployed", "Version 1.4 is live"),
    (NotificationVariant::Outline, Palette::Red, "Build failed", "Check the compiler output"),
];

const CLOSE_VARIANTS: [(CloseButtonVariant, &str); 7] = [
    (CloseButtonVariant::Hover, "hover"),
    (CloseButtonVariant::Filled, "filled"),
    (CloseButtonVariant::Light, "light"),
    (CloseButtonVariant::Outline, "outline"),
    (CloseButtonVariant::Transparent, "transparent"),
    (CloseButtonVariant::White, "white"),
    (CloseButtonVariant::Default, "default"),
];

pub struct FeedbackPage {
    entities: AppEntities,
    progress: f32,
    copy: Entity<CopyButton>,
    copies: usize,
    notifications: [bool; 3],
    closes: usize,
    menu_opened: bool,
}

impl FeedbackPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let settings = entities.settings.read(cx);
        let timeout = Duration::from_millis(settings.copy_timeout_ms());
        let locale = settings.locale();

        let copy = cx.new(|_| {
            let mut copy = CopyButton::new("copy-install", INSTALL_COMMAND, timeout);
            copy.set_locale(locale);
            copy
        });
        let page = cx.weak_entity();
        copy.update(cx, |copy, _| {
            copy.on_copied(move |_value, _window, cx| {
                let _ = page.update(cx, |this, cx| {
                    this.copies += 1;
                    cx.notify();
                });
            });
        });

        cx.observe(&entities.settings, |this, settings, cx| {
            let settings = settings.read(cx);
            let (locale, size) = (settings.locale(), settings.size());
            this.copy.update(cx, |copy, cx| {
                copy.set_locale(locale);
                copy.set_size(size);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            progress: 45.0,
            copy,
            copies: 0,
            notifications: [true; 3],
            closes: 0,
            menu_opened: false,
        }
    }

    fn increase(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.progress = clamp_percent(self.progress + PROGRESS_STEP);
        cx.notify();
    }

    fn restore_notifications(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.notifications = [true; 3];
        cx.notify();
    }

    fn toggle_menu(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.menu_opened = !self.menu_opened;
        cx.notify();
    }

    fn decrease(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.progress = clamp_percent(self.progress - PROGRESS_STEP);
        cx.notify();
    }
}

impl Render for FeedbackPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (locale, size, color) = (settings.locale(), settings.size(), settings.color());
        let page = cx.entity();

        let progress = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Progress::new(self.progress).size(size).color(color))
            .child(
                Progress::new(self.progress)
                    .size(size)
                    .color(Palette::Teal)
                    .radius(Radius::Full)
                    .striped(true),
            )
            .child(caption("value", format!("{:.0}%", self.progress)))
            .child(
                Group::new()
                    .child(Button::outline("progress-decrease", "-").on_click(cx.listener(Self::decrease)))
                    .child(Button::outline("progress-increase", "+").on_click(cx.listener(Self::increase))),
            );

        let notifications = div()
            .flex()
            .flex_col()
            .gap_3()
            .children(NOTIFICATIONS.iter().enumerate().filter(|(index, _)| self.notifications[*index]).map(
                |(index, (variant, palette, title, message))| {
                    let page = page.clone();
                    Notification::new(("notification", index))
                        .variant(*variant)
                        .color(*palette)
                        .title(*title)
                        .message(*message)
                        .on_close(move |_window, cx| {
                            page.update(cx, |this, cx| {
                                this.notifications[index] = false;
                                cx.notify();
                            });
                        })
                },
            ))
            .child(
                Notification::new("notification-loading")
                    .title(t(locale, "loading"))
                    .message("Uploading data to the server")
                    .loading(true)
                    .with_close_button(false),
            )
            .child(
                Notification::new("notification-icon")
                    .color(Palette::Teal)
                    .icon("✓")
                    .title("All set")
                    .message("Notification with an icon"),
            )
            .child(
                Button::subtle("notifications-restore", "Show all again")
                    .size(size)
                    .on_click(cx.listener(Self::restore_notifications)),
            );

        let close_buttons = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(Group::new().gap(Size::Sm).children(CLOSE_VARIANTS.iter().enumerate().map(
                |(index, (variant, label))| {
                    let page = page.clone();
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap_1()
                        .child(
                            CloseButton::new(("close-variant", index))
                                .variant(*variant)
                                .size(size)
                                .color(color)
                                .on_click(move |_event, _window, cx| {
                                    page.update(cx, |this, cx| {
                                        this.closes += 1;
                                        cx.notify();
                                    });
                                }),
                        )
                        .child(caption("variant", SharedString::from(*label)))
                },
            )))
            .child(CloseButton::new("close-disabled").disabled(true))
            .child(caption("clicks", self.closes.to_string()));

        let burger = Group::new()
            .child(
                Burger::new("burger")
                    .opened(self.menu_opened)
                    .size(size)
                    .on_click(cx.listener(Self::toggle_menu)),
            )
            .child(Burger::new("burger-colored").opened(!self.menu_opened).color(color).size(size))
            .child(caption("opened", self.menu_opened.to_string()));

        page_column("feedback-page")
            .child(demo_card("Progress", progress))
            .child(demo_card("Notification", notifications))
            .child(demo_card("CloseButton", close_buttons))
            .child(demo_card("Burger", burger))
            .child(demo_card(
                "CopyButton",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        Group::new()
                            .child(div().text_sm().child(INSTALL_COMMAND))
                            .child(self.copy.clone()),
                    )
                    .child(caption("copied", self.copies.to_string())),
            ))
    }
}
