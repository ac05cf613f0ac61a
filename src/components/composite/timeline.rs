//! Timeline Component
//!
//! Vertical list of events joined by a line. Events up to `active` are
//! drawn in the palette color.

use gpui::{
    div, prelude::*, px, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// Whether the event at `index` has been reached
fn is_reached(index: usize, active: Option<usize>) -> bool {
    active.is_some_and(|active| index <= active)
}

pub struct TimelineItem {
    title: SharedString,
    timestamp: Option<SharedString>,
    content: Option<AnyElement>,
}

impl TimelineItem {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            timestamp: None,
            content: None,
        }
    }

    pub fn timestamp(mut self, timestamp: impl Into<SharedString>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }
}

#[derive(IntoElement)]
pub struct Timeline {
    items: Vec<TimelineItem>,
    active: Option<usize>,
    color: Palette,
    bullet_size: Size,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active: None,
            color: Palette::Blue,
            bullet_size: Size::Sm,
        }
    }

    pub fn item(mut self, item: TimelineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Last reached event; `None` draws every event neutral
    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn bullet_size(mut self, size: Size) -> Self {
        self.bullet_size = size;
        self
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Timeline {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let count = self.items.len();
        let (active, color) = (self.active, self.color);
        let bullet = self.bullet_size.indicator();

        div()
            .flex()
            .flex_col()
            .children(self.items.into_iter().enumerate().map(move |(index, item)| {
                let reached = is_reached(index, active);
                // The segment below a bullet is colored when the next event is reached too
                let line_reached = is_reached(index + 1, active);
                let last = index + 1 == count;

                div()
                    .flex()
                    .gap_3()
                    .child(
                        div()
                            .flex_none()
                            .flex()
                            .flex_col()
                            .items_center()
                            .w(bullet)
                            .child(
                                div()
                                    .size(bullet)
                                    .rounded_full()
                                    .border_2()
                                    .border_color(if reached { color.filled() } else { LoomColors::track() })
                                    .bg(if reached { color.filled() } else { LoomColors::surface() }),
                            )
                            .when(!last, |el| {
                                el.child(
                                    div()
                                        .flex_1()
                                        .w(px(2.0))
                                        .bg(if line_reached { color.filled() } else { LoomColors::track() }),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .pb_4()
                            .child(
                                div()
                                    .text_size(Size::Sm.font_size())
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(LoomColors::text_primary())
                                    .child(item.title),
                            )
                            .when_some(item.content, |el, content| {
                                el.child(
                                    div()
                                        .text_size(Size::Sm.font_size())
                                        .text_color(LoomColors::text_secondary())
                                        .child(content),
                                )
                            })
                            .when_some(item.timestamp, |el, timestamp| {
                                el.child(
                                    div()
                                        .text_size(Size::Xs.font_size())
                                        .text_color(LoomColors::text_muted())
                                        .child(timestamp),
                                )
                            }),
                    )
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_up_to_active_are_reached() {
        assert!(is_reached(0, Some(1)));
        assert!(is_reached(1, Some(1)));
        assert!(!is_reached(2, Some(1)));
        assert!(!is_reached(0, None));
    }
}
