//! Flex Component
//!
//! Flexbox container exposing direction, alignment, wrapping and gap.

use gpui::{div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::components::layout::group::GroupJustify;
use crate::theme::Size;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Cross axis alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlexAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(IntoElement)]
pub struct Flex {
    direction: FlexDirection,
    justify: GroupJustify,
    align: FlexAlign,
    wrap: bool,
    gap: Option<Size>,
    children: Vec<AnyElement>,
}

impl Flex {
    pub fn new() -> Self {
        Self {
            direction: FlexDirection::Row,
            justify: GroupJustify::Start,
            align: FlexAlign::Start,
            wrap: false,
            gap: None,
            children: Vec::new(),
        }
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn justify(mut self, justify: GroupJustify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: FlexAlign) -> Self {
        self.align = align;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn gap(mut self, gap: Size) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }
}

impl Default for Flex {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Flex {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .map(|el| match self.direction {
                FlexDirection::Row => el.flex_row(),
                FlexDirection::Column => el.flex_col(),
                FlexDirection::RowReverse => el.flex_row_reverse(),
                FlexDirection::ColumnReverse => el.flex_col_reverse(),
            })
            .map(|el| match self.justify {
                GroupJustify::Start => el.justify_start(),
                GroupJustify::Center => el.justify_center(),
                GroupJustify::End => el.justify_end(),
                GroupJustify::SpaceBetween => el.justify_between(),
            })
            .map(|el| match self.align {
                FlexAlign::Start => el.items_start(),
                FlexAlign::Center => el.items_center(),
                FlexAlign::End => el.items_end(),
            })
            .when(self.wrap, |el| el.flex_wrap())
            .when_some(self.gap, |el, gap| el.gap(gap.gap()))
            .children(self.children)
    }
}
