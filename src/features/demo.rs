//! Demo Frame
//!
//! Card and caption helpers shared by the gallery pages.

use gpui::{
    div, px, Div, FontWeight, InteractiveElement, IntoElement, ParentElement, SharedString,
    Stateful, StatefulInteractiveElement, Styled,
};

use crate::theme::colors::LoomColors;

/// Titled card around one component demo
pub fn demo_card(title: impl Into<SharedString>, body: impl IntoElement) -> Div {
    div()
        .w_full()
        .flex()
        .flex_col()
        .bg(LoomColors::surface())
        .border_1()
        .border_color(LoomColors::border())
        .rounded_md()
        .child(
            div()
                .px_4()
                .py_2()
                .border_b_1()
                .border_color(LoomColors::border())
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .child(title.into()),
        )
        .child(div().p_4().flex().flex_col().gap_3().child(body))
}

/// Small "label: value" line showing what a callback reported
pub fn caption(label: &str, value: impl Into<SharedString>) -> Div {
    div()
        .flex()
        .gap_1()
        .text_size(px(12.0))
        .text_color(LoomColors::text_secondary())
        .child(SharedString::from(format!("{label}:")))
        .child(value.into())
}

/// Scrollable page column
pub fn page_column(id: &'static str) -> Stateful<Div> {
    div()
        .id(id)
        .size_full()
        .flex()
        .flex_col()
        .overflow_y_scroll()
        .p_4()
        .gap_4()
}
