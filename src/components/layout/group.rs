//! Group Component
//!
//! Horizontal row of children with a size-scaled gap.

use gpui::{div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::Size;

/// Main axis distribution of a [`Group`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupJustify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(IntoElement)]
pub struct Group {
    gap: Size,
    justify: GroupJustify,
    wrap: bool,
    grow: bool,
    children: Vec<AnyElement>,
}

impl Group {
    pub fn new() -> Self {
        Self {
            gap: Size::Md,
            justify: GroupJustify::Start,
            wrap: true,
            grow: false,
            children: Vec::new(),
        }
    }

    pub fn gap(mut self, gap: Size) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: GroupJustify) -> Self {
        self.justify = justify;
        self
    }

    /// Wrap children onto new lines (default on)
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Let every child take an equal share of the row
    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
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

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Group {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let grow = self.grow;
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(self.gap.gap())
            .when(self.wrap, |el| el.flex_wrap())
            .map(|el| match self.justify {
                GroupJustify::Start => el.justify_start(),
                GroupJustify::Center => el.justify_center(),
                GroupJustify::End => el.justify_end(),
                GroupJustify::SpaceBetween => el.justify_between(),
            })
            .children(
                self.children
                    .into_iter()
                    .map(move |child| div().when(grow, |el| el.flex_1()).child(child)),
            )
    }
}
