//! ColorPicker Component
//!
//! Hue/saturation area plus an optional row of swatches. The area maps the
//! pointer to fractions of its size; its bounds are captured during
//! prepaint so mouse positions can be converted.

use gpui::{
    canvas, div, hsla, linear_color_stop, linear_gradient, prelude::*, px, relative, App, Bounds,
    ClickEvent, Context, ElementId, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Point, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::constants::DEFAULT_SWATCHES_PER_ROW;
use crate::domain::color::{thumb_position, HexColor, PickerDrag};
use crate::error::Result;
use crate::theme::colors::{hex_to_rgba, LoomColors};
use crate::theme::Size;

/// Number of hue columns drawn in the area
const HUE_COLUMNS: usize = 36;
const THUMB_SIZE: f32 = 14.0;
const SWATCH_SIZE: f32 = 22.0;

type ColorHandler = Box<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// Position of `point` inside `bounds` as clamped fractions
fn fraction_in(bounds: Bounds<Pixels>, point: Point<Pixels>) -> (f32, f32) {
    let width = f32::from(bounds.size.width);
    let height = f32::from(bounds.size.height);
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = f32::from(point.x - bounds.origin.x) / width;
    let y = f32::from(point.y - bounds.origin.y) / height;
    (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
}

pub struct ColorPicker {
    id: ElementId,
    drag: PickerDrag,
    area: Option<Bounds<Pixels>>,
    swatches: Vec<HexColor>,
    swatches_per_row: usize,
    with_picker: bool,
    size: Size,
    disabled: bool,
    on_change: Option<ColorHandler>,
    on_change_end: Option<ColorHandler>,
}

impl ColorPicker {
    pub fn new(id: impl Into<ElementId>, color: HexColor) -> Self {
        Self {
            id: id.into(),
            drag: PickerDrag::new(color),
            area: None,
            swatches: Vec::new(),
            swatches_per_row: DEFAULT_SWATCHES_PER_ROW,
            with_picker: true,
            size: Size::Sm,
            disabled: false,
            on_change: None,
            on_change_end: None,
        }
    }

    /// Selected color
    pub fn color(&self) -> HexColor {
        self.drag.color()
    }

    /// Selected color as `#rrggbb`
    pub fn value(&self) -> String {
        self.drag.color().to_string()
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.drag.set_color(color);
    }

    /// Adopt a controlled value given as a hex string
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        self.drag.set_color(HexColor::parse(value)?);
        Ok(())
    }

    pub fn set_swatches(&mut self, swatches: Vec<HexColor>) {
        self.swatches = swatches;
    }

    pub fn set_swatches_per_row(&mut self, per_row: usize) {
        self.swatches_per_row = per_row.max(1);
    }

    /// Show the saturation/hue area; off leaves only the swatches
    pub fn set_with_picker(&mut self, with_picker: bool) {
        self.with_picker = with_picker;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.drag.set_disabled(disabled);
    }

    /// Called on every color change, including while dragging
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Called once a drag ends or a swatch is picked
    pub fn on_change_end(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_change_end = Some(Box::new(handler));
    }

    fn emit_change(&self, color: HexColor, window: &mut Window, cx: &mut App) {
        if let Some(handler) = &self.on_change {
            handler(&color.to_string(), window, cx);
        }
    }

    fn emit_change_end(&self, color: HexColor, window: &mut Window, cx: &mut App) {
        debug!(color = %color, "Color picked");
        if let Some(handler) = &self.on_change_end {
            handler(&color.to_string(), window, cx);
        }
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(area) = self.area else {
            return;
        };
        let (x, y) = fraction_in(area, event.position);
        if let Some(color) = self.drag.pointer_down(x, y) {
            self.emit_change(color, window, cx);
            cx.notify();
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(area) = self.area else {
            return;
        };
        let (x, y) = fraction_in(area, event.position);
        if let Some(color) = self.drag.pointer_move(x, y) {
            self.emit_change(color, window, cx);
            cx.notify();
        }
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(color) = self.drag.pointer_up() {
            self.emit_change_end(color, window, cx);
            cx.notify();
        }
    }

    fn pick_swatch(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let Some(color) = self.swatches.get(index).copied() else {
            return;
        };
        self.drag.set_color(color);
        self.emit_change(color, window, cx);
        self.emit_change_end(color, window, cx);
        cx.notify();
    }

    fn render_area(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let width = self.size.picker();
        let (thumb_x, thumb_y) = thumb_position(self.drag.color());
        let entity = cx.entity();

        let columns = (0..HUE_COLUMNS).map(|column| {
            let hue = column as f32 / HUE_COLUMNS as f32;
            div().flex_1().h_full().bg(linear_gradient(
                180.0,
                linear_color_stop(hsla(hue, 0.0, 0.5, 1.0), 0.0),
                linear_color_stop(hsla(hue, 1.0, 0.5, 1.0), 1.0),
            ))
        });

        div()
            .id("color-picker-area")
            .relative()
            .w(width)
            .h(width * 0.6)
            .flex()
            .rounded_md()
            .overflow_hidden()
            .children(columns)
            .child(
                canvas(
                    move |bounds, _window, cx| {
                        entity.update(cx, |this, _cx| this.area = Some(bounds));
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            )
            .child(
                div()
                    .absolute()
                    .left(relative(thumb_x))
                    .top(relative(thumb_y))
                    .ml(px(-THUMB_SIZE / 2.0))
                    .mt(px(-THUMB_SIZE / 2.0))
                    .size(px(THUMB_SIZE))
                    .rounded_full()
                    .border_2()
                    .border_color(LoomColors::text_light())
                    .bg(hex_to_rgba(self.drag.color())),
            )
            .when(!self.disabled, |el| {
                el.cursor_crosshair()
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            })
    }

    fn render_swatches(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = self.drag.color();
        let rows = self
            .swatches
            .chunks(self.swatches_per_row)
            .enumerate()
            .map(|(row, chunk)| {
                div().flex().gap_1().children(chunk.iter().enumerate().map(|(offset, color)| {
                    let index = row * self.swatches_per_row + offset;
                    div()
                        .id(("color-swatch", index))
                        .size(px(SWATCH_SIZE))
                        .rounded_sm()
                        .bg(hex_to_rgba(*color))
                        .border_2()
                        .border_color(if *color == selected {
                            LoomColors::border_focus()
                        } else {
                            LoomColors::transparent()
                        })
                        .when(!self.disabled, |el| {
                            el.cursor_pointer()
                                .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                                    this.pick_swatch(index, window, cx);
                                }))
                        })
                }))
            })
            .collect::<Vec<_>>();

        div().flex().flex_col().gap_1().children(rows)
    }
}

impl Render for ColorPicker {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let value = SharedString::from(self.value());
        let with_swatches = !self.swatches.is_empty();

        div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap_2()
            .when(self.disabled, |el| el.opacity(0.5))
            .when(self.with_picker, |el| el.child(self.render_area(cx)))
            .when(with_swatches, |el| el.child(self.render_swatches(cx)))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_size(self.size.font_size())
                    .text_color(LoomColors::text_secondary())
                    .child(div().size(px(16.0)).rounded_sm().bg(hex_to_rgba(self.drag.color())))
                    .child(value),
            )
    }
}

#[cfg(test)]
mod tests {
    use gpui::{point, size};

    use super::*;

    #[test]
    fn pointer_fractions() {
        let area = Bounds::new(point(px(10.0), px(20.0)), size(px(200.0), px(100.0)));
        assert_eq!(fraction_in(area, point(px(110.0), px(45.0))), (0.5, 0.25));
        assert_eq!(fraction_in(area, point(px(0.0), px(500.0))), (0.0, 1.0));
    }

    #[test]
    fn empty_area() {
        let area = Bounds::new(point(px(10.0), px(20.0)), size(px(0.0), px(0.0)));
        assert_eq!(fraction_in(area, point(px(11.0), px(21.0))), (0.0, 0.0));
    }
}
