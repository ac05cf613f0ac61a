//! Container Component
//!
//! Centers content horizontally with a size-dependent max width.

use gpui::{div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::Size;

#[derive(IntoElement)]
pub struct Container {
    size: Size,
    fluid: bool,
    children: Vec<AnyElement>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            size: Size::Md,
            fluid: false,
            children: Vec::new(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Take the full available width instead of the size's max width
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Container {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .mx_auto()
            .when(!self.fluid, |el| el.max_w(self.size.container_width()))
            .children(self.children)
    }
}
