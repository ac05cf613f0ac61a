//! Shell Component
//!
//! Full-window column holding the header and the body row.

use gpui::{div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::colors::LoomColors;

#[derive(IntoElement)]
pub struct Shell {
    header: Option<AnyElement>,
    sidebar: Option<AnyElement>,
    content: Option<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            header: None,
            sidebar: None,
            content: None,
        }
    }

    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    pub fn sidebar(mut self, sidebar: impl IntoElement) -> Self {
        self.sidebar = Some(sidebar.into_any_element());
        self
    }

    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(LoomColors::background())
            .text_color(LoomColors::text_primary())
            .children(self.header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .children(self.sidebar)
                    .child(
                        div()
                            .relative()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(LoomColors::surface_muted())
                            .children(self.content),
                    ),
            )
    }
}
