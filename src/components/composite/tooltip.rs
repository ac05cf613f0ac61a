//! Tooltip Component
//!
//! Wraps a trigger element and shows a label next to it while hovered. The
//! open/close delays and the measured bounds live in a [`TooltipState`]
//! entity owned by the caller; the label is placed from the trigger bounds
//! captured during prepaint.

use std::time::Duration;

use gpui::{
    anchored, canvas, deferred, div, point, prelude::*, px, AnyElement, App, Bounds, Context,
    ElementId, Entity, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Task, Window,
};

use crate::constants::{DEFAULT_TOOLTIP_GUTTER, DEFAULT_TOOLTIP_OFFSET};
use crate::domain::tooltip::{Rect, TooltipPosition, TooltipVisibility};
use crate::theme::{Palette, Radius, Size};

const ARROW_SIZE: f32 = 8.0;

fn to_rect(bounds: Bounds<Pixels>) -> Rect {
    Rect::new(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

/// Visibility and measured geometry of one tooltip
pub struct TooltipState {
    visibility: TooltipVisibility,
    trigger: Option<Rect>,
    label_size: Option<(f32, f32)>,
    _pending: Option<Task<()>>,
}

impl TooltipState {
    pub fn new(open_delay: Duration, close_delay: Duration) -> Self {
        Self {
            visibility: TooltipVisibility::new(open_delay, close_delay),
            trigger: None,
            label_size: None,
            _pending: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Last measured trigger bounds and floating element size
    pub(crate) fn geometry(&self) -> (Option<Rect>, (f32, f32)) {
        (self.trigger, self.label_size.unwrap_or((0.0, 0.0)))
    }

    /// Disable the tooltip; a visible one hides at once
    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        self.visibility.set_disabled(disabled);
        self._pending = None;
        cx.notify();
    }

    /// Show or hide regardless of hover
    pub fn set_opened(&mut self, opened: bool, cx: &mut Context<Self>) {
        self.visibility.set_opened(opened);
        self._pending = None;
        cx.notify();
    }

    /// Pointer entered or left the trigger
    pub fn hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        let request = if hovered {
            self.visibility.request_show()
        } else {
            self.visibility.request_hide()
        };
        let Some((delay, generation)) = request else {
            return;
        };

        if delay.is_zero() {
            self._pending = None;
            if self.visibility.settle(generation) {
                cx.notify();
            }
            return;
        }

        self._pending = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |this, cx| {
                if this.visibility.settle(generation) {
                    cx.notify();
                }
            });
        }));
    }

    pub(crate) fn set_trigger(&mut self, bounds: Bounds<Pixels>) {
        self.trigger = Some(to_rect(bounds));
    }

    /// Record the rendered label size; returns whether it changed
    pub(crate) fn set_label_size(&mut self, bounds: Bounds<Pixels>) -> bool {
        let size = (f32::from(bounds.size.width), f32::from(bounds.size.height));
        if self.label_size == Some(size) {
            return false;
        }
        self.label_size = Some(size);
        true
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

#[derive(IntoElement)]
pub struct Tooltip {
    id: ElementId,
    state: Entity<TooltipState>,
    label: SharedString,
    position: TooltipPosition,
    color: Palette,
    radius: Radius,
    with_arrow: bool,
    multiline: bool,
    width: Pixels,
    offset: f32,
    child: Option<AnyElement>,
}

impl Tooltip {
    pub fn new(id: impl Into<ElementId>, state: &Entity<TooltipState>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            state: state.clone(),
            label: label.into(),
            position: TooltipPosition::Top,
            color: Palette::Dark,
            radius: Radius::Sm,
            with_arrow: false,
            multiline: false,
            width: px(220.0),
            offset: DEFAULT_TOOLTIP_OFFSET,
            child: None,
        }
    }

    pub fn position(mut self, position: TooltipPosition) -> Self {
        self.position = position;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_arrow(mut self, with_arrow: bool) -> Self {
        self.with_arrow = with_arrow;
        self
    }

    /// Wrap the label at `width` instead of keeping it on one line
    pub fn multiline(mut self, width: Pixels) -> Self {
        self.multiline = true;
        self.width = width;
        self
    }

    /// Distance between trigger and label
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// The trigger element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }

    fn render_label(&self) -> impl IntoElement + use<> {
        let glyph = match self.position {
            TooltipPosition::Top => "▼",
            TooltipPosition::Bottom => "▲",
            TooltipPosition::Left => "▶",
            TooltipPosition::Right => "◀",
        };
        let vertical = matches!(self.position, TooltipPosition::Top | TooltipPosition::Bottom);
        let arrow_first = matches!(self.position, TooltipPosition::Bottom | TooltipPosition::Right);

        let body = div()
            .px_2()
            .py_1()
            .rounded(self.radius.pixels())
            .bg(self.color.filled())
            .text_color(self.color.on_filled())
            .text_size(Size::Xs.font_size())
            .when(self.multiline, |el| el.w(self.width))
            .when(!self.multiline, |el| el.whitespace_nowrap())
            .child(self.label.clone());

        let color = self.color.filled();
        let arrow = move || {
            div()
                .text_color(color)
                .text_size(px(ARROW_SIZE))
                .line_height(px(ARROW_SIZE))
                .child(glyph)
        };

        div()
            .flex()
            .items_center()
            .when(vertical, |el| el.flex_col())
            .when(self.with_arrow && arrow_first, |el| el.child(arrow()))
            .child(body)
            .when(self.with_arrow && !arrow_first, |el| el.child(arrow()))
    }
}

impl RenderOnce for Tooltip {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state.read(cx);
        let visible = state.is_visible();
        let (trigger, (width, height)) = state.geometry();

        let hover_state = self.state.clone();
        let trigger_state = self.state.clone();
        let label_state = self.state.clone();

        let placement = trigger.map(|trigger| {
            let (x, y) = self.position.place(trigger, width, height, self.offset, DEFAULT_TOOLTIP_GUTTER);
            point(px(x), px(y))
        });
        let label = self.render_label();

        div()
            .id(self.id)
            .relative()
            .on_hover(move |hovered: &bool, _window, cx| {
                hover_state.update(cx, |state, cx| state.hover(*hovered, cx));
            })
            .children(self.child)
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
                el.child(
                    deferred(
                        anchored().position(position).child(
                            div()
                                .relative()
                                .child(label)
                                .child(
                                    canvas(
                                        move |bounds, _window, cx| {
                                            label_state.update(cx, |state, cx| {
                                                if state.set_label_size(bounds) {
                                                    cx.notify();
                                                }
                                            });
                                        },
                                        |_, _, _, _| {},
                                    )
                                    .absolute()
                                    .size_full(),
                                ),
                        ),
                    )
                    .with_priority(3),
                )
            })
    }
}
