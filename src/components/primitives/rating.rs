//! Rating Component
//!
//! Row of star symbols; with `fractions > 1` each symbol is split into
//! clickable slices so partial values can be picked.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::domain::rating::{RatingModel, SymbolFill};
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

const SYMBOL: &str = "★";

type ValueHandler = Box<dyn Fn(f32, &mut Window, &mut App) + 'static>;

pub struct Rating {
    id: ElementId,
    model: RatingModel,
    color: Palette,
    size: Size,
    on_change: Option<ValueHandler>,
    on_hover: Option<ValueHandler>,
}

impl Rating {
    /// Create a rating with `count` symbols split into `fractions` parts
    pub fn new(id: impl Into<ElementId>, count: usize, fractions: usize) -> Self {
        let model = RatingModel::new(count, fractions);
        Self {
            id: id.into(),
            model,
            color: Palette::Yellow,
            size: Size::Sm,
            on_change: None,
            on_hover: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.model.current()
    }

    /// Adopt a controlled value
    pub fn set_value(&mut self, value: f32) {
        self.model.sync(Some(value));
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.model = std::mem::take(&mut self.model).read_only(read_only);
    }

    pub fn set_highlight_selected_only(&mut self, highlight: bool) {
        self.model = std::mem::take(&mut self.model).highlight_selected_only(highlight);
    }

    pub fn set_color(&mut self, color: Palette) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn on_change(&mut self, handler: impl Fn(f32, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    pub fn on_hover(&mut self, handler: impl Fn(f32, &mut Window, &mut App) + 'static) {
        self.on_hover = Some(Box::new(handler));
    }

    fn hover_part(&mut self, index: usize, hovered: bool, window: &mut Window, cx: &mut Context<Self>) {
        let value = if hovered {
            self.model.hover(index)
        } else {
            self.model.leave()
        };
        if let (Some(value), Some(handler)) = (value, &self.on_hover) {
            handler(value, window, cx);
        }
        cx.notify();
    }

    fn select_part(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(value) = self.model.select(index) {
            debug!(value, "Rating changed");
            if let Some(handler) = &self.on_change {
                handler(value, window, cx);
            }
            cx.notify();
        }
    }

    /// One clickable slice of a symbol
    fn render_part(&self, index: usize, cx: &Context<Self>) -> impl IntoElement {
        let fractions = self.model.fractions();
        let symbol_size = self.size.font_size() * 1.5;
        let slice = symbol_size / fractions as f32;
        let offset = slice * (index % fractions) as f32;
        let filled = self.color.filled();
        let empty = LoomColors::symbol_empty();

        let (base, overlay) = match self.model.fill(index) {
            SymbolFill::Partial(ratio) if !self.model.highlights_selected_only() => (empty, Some(ratio)),
            _ if self.model.is_highlighted(index) => (filled, None),
            _ => (empty, None),
        };

        // The glyph is shifted left so each slice shows its own part of the symbol
        let glyph = |color| {
            div()
                .absolute()
                .top_0()
                .left(-offset)
                .w(symbol_size)
                .text_size(symbol_size)
                .line_height(symbol_size)
                .text_color(color)
                .child(SYMBOL)
        };

        div()
            .id(("rating-part", index))
            .relative()
            .w(slice)
            .h(symbol_size)
            .overflow_hidden()
            .child(glyph(base))
            .when_some(overlay, |el, ratio| {
                el.child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .h_full()
                        .w(slice * ratio)
                        .overflow_hidden()
                        .child(glyph(filled)),
                )
            })
            .when(!self.model.is_read_only(), |el| {
                el.cursor_pointer()
                    .on_hover(cx.listener(move |this, hovered: &bool, window, cx| {
                        this.hover_part(index, *hovered, window, cx);
                    }))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                        this.select_part(index, window, cx);
                    }))
            })
    }
}

impl Render for Rating {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fractions = self.model.fractions();
        div()
            .id(self.id.clone())
            .flex()
            .gap(px(2.0))
            .children((0..self.model.count()).map(|symbol| {
                div()
                    .flex()
                    .children((0..fractions).map(|part| self.render_part(symbol * fractions + part, cx)))
            }))
    }
}
