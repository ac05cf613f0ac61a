//! HoverCard Component
//!
//! Floating card with arbitrary content shown while the trigger or the card
//! itself is hovered. Shares [`TooltipState`] for the delays and measured
//! geometry, so leaving the trigger for the card keeps it open as long as
//! the close delay covers the gap.

use gpui::{
    anchored, canvas, deferred, div, point, prelude::*, px, AnyElement, App, ElementId, Entity,
    InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::components::composite::tooltip::TooltipState;
use crate::constants::{DEFAULT_TOOLTIP_GUTTER, DEFAULT_TOOLTIP_OFFSET};
use crate::domain::tooltip::TooltipPosition;
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

#[derive(IntoElement)]
pub struct HoverCard {
    id: ElementId,
    state: Entity<TooltipState>,
    position: TooltipPosition,
    radius: Radius,
    width: Size,
    with_arrow: bool,
    trigger: Option<AnyElement>,
    content: Option<AnyElement>,
}

impl HoverCard {
    pub fn new(id: impl Into<ElementId>, state: &Entity<TooltipState>) -> Self {
        Self {
            id: id.into(),
            state: state.clone(),
            position: TooltipPosition::Top,
            radius: Radius::Md,
            width: Size::Xs,
            with_arrow: false,
            trigger: None,
            content: None,
        }
    }

    pub fn position(mut self, position: TooltipPosition) -> Self {
        self.position = position;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Card width, from the panel width scale
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn with_arrow(mut self, with_arrow: bool) -> Self {
        self.with_arrow = with_arrow;
        self
    }

    pub fn trigger(mut self, trigger: impl IntoElement) -> Self {
        self.trigger = Some(trigger.into_any_element());
        self
    }

    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }
}

impl RenderOnce for HoverCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state.read(cx);
        let visible = state.is_visible();
        let (trigger, (width, height)) = state.geometry();

        let hover_state = self.state.clone();
        let card_hover_state = self.state.clone();
        let trigger_state = self.state.clone();
        let card_state = self.state.clone();

        let placement = trigger.map(|trigger| {
            let (x, y) = self.position.place(trigger, width, height, DEFAULT_TOOLTIP_OFFSET, DEFAULT_TOOLTIP_GUTTER);
            point(px(x), px(y))
        });

        let glyph = match self.position {
            TooltipPosition::Top => "▼",
            TooltipPosition::Bottom => "▲",
            TooltipPosition::Left => "▶",
            TooltipPosition::Right => "◀",
        };
        let vertical = matches!(self.position, TooltipPosition::Top | TooltipPosition::Bottom);
        let arrow_first = matches!(self.position, TooltipPosition::Bottom | TooltipPosition::Right);
        let arrow = move || {
            div()
                .text_color(LoomColors::border())
                .text_size(px(8.0))
                .line_height(px(8.0))
                .child(glyph)
        };

        let card = div()
            .id("hover-card-panel")
            .occlude()
            .w(self.width.panel_width() * 0.75)
            .p_4()
            .bg(LoomColors::surface())
            .border_1()
            .border_color(LoomColors::border())
            .rounded(self.radius.pixels())
            .shadow_md()
            .text_size(Size::Sm.font_size())
            .text_color(LoomColors::text_primary())
            .on_hover(move |hovered: &bool, _window, cx| {
                card_hover_state.update(cx, |state, cx| state.hover(*hovered, cx));
            })
            .children(self.content);

        let floating = div()
            .relative()
            .flex()
            .items_center()
            .when(vertical, |el| el.flex_col())
            .when(self.with_arrow && arrow_first, |el| el.child(arrow()))
            .child(card)
            .when(self.with_arrow && !arrow_first, |el| el.child(arrow()))
            .child(
                canvas(
                    move |bounds, _window, cx| {
                        card_state.update(cx, |state, cx| {
                            if state.set_label_size(bounds) {
                                cx.notify();
                            }
                        });
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            );

        div()
            .id(self.id)
            .relative()
            .on_hover(move |hovered: &bool, _window, cx| {
                hover_state.update(cx, |state, cx| state.hover(*hovered, cx));
            })
            .children(self.trigger)
            .child(
                canvas(
                    move |bounds, _window, cx| {
                        trigger_state.update(cx, |state, _cx| state.set_trigger(bounds));
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            )
            .when_some(placement.filter(|_| visible), |el, position| {
                el.child(deferred(anchored().position(position).child(floating)).with_priority(3))
            })
    }
}
