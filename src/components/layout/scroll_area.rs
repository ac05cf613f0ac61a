//! ScrollArea Component

use gpui::{
    div, prelude::*, AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

/// Fixed size viewport that scrolls its content on the enabled axes
#[derive(IntoElement)]
pub struct ScrollArea {
    id: ElementId,
    horizontal: bool,
    vertical: bool,
    height: Option<Pixels>,
    width: Option<Pixels>,
    children: Vec<AnyElement>,
}

impl ScrollArea {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            horizontal: false,
            vertical: true,
            height: None,
            width: None,
            children: Vec::new(),
        }
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn height(mut self, height: Pixels) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: Pixels) -> Self {
        self.width = Some(width);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for ScrollArea {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (horizontal, vertical) = (self.horizontal, self.vertical);

        div()
            .id(self.id)
            .when_some(self.height, |el, height| el.h(height))
            .when_some(self.width, |el, width| el.w(width))
            .map(|el| match (horizontal, vertical) {
                (true, true) => el.overflow_scroll(),
                (true, false) => el.overflow_x_scroll().overflow_y_hidden(),
                (false, true) => el.overflow_y_scroll().overflow_x_hidden(),
                (false, false) => el.overflow_hidden(),
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .when(horizontal, |el| el.flex_none())
                    .children(self.children),
            )
    }
}
