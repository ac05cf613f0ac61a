//! Modal Component
//!
//! A centered modal, a drawer that slides in from a window edge and a
//! dialog, all drawn over a backdrop. Clicking the modal or drawer backdrop
//! calls `on_close`; a dialog only closes from its close button. The caller
//! owns the opened flag.

use std::rc::Rc;

use gpui::{
    deferred, div, prelude::*, px, AnyElement, App, ClickEvent, Div, FontWeight,
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::close_button::CloseButton;
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

const DEFAULT_OVERLAY_OPACITY: f32 = 0.55;

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Window edge a drawer is attached to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerPosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

/// Title row with the optional close button
fn header(title: SharedString, close: Option<CloseHandler>, close_label: SharedString) -> Div {
    div()
        .px_6()
        .py_4()
        .border_b_1()
        .border_color(LoomColors::border())
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(LoomColors::text_primary())
                .child(title),
        )
        .when_some(close, |el, handler| {
            el.child(
                div()
                    .id("modal-close")
                    .h(px(24.0))
                    .px_2()
                    .gap_1()
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(LoomColors::text_muted())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(LoomColors::hover()))
                    .on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
                    .child(div().text_size(px(16.0)).child("×"))
                    .child(close_label),
            )
        })
}

/// Full window backdrop that closes on click
fn backdrop(close: Option<CloseHandler>) -> gpui::Stateful<Div> {
    div()
        .id("modal-backdrop")
        .absolute()
        .inset_0()
        .bg(LoomColors::overlay())
        .when_some(close, |el, handler| {
            el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
        })
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    opened: bool,
    size: Size,
    radius: Radius,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
    show_close_button: bool,
    close_label: SharedString,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            opened: true,
            size: Size::Md,
            radius: Radius::Md,
            children: Vec::new(),
            on_close: None,
            show_close_button: true,
            close_label: "Close".into(),
        }
    }

    /// Render nothing while closed
    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    /// Panel width
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Hide the close button
    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }

    /// Text beside the close glyph
    pub fn close_label(mut self, label: impl Into<SharedString>) -> Self {
        self.close_label = label.into();
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let close_button = self.on_close.clone().filter(|_| self.show_close_button);

        div().when(self.opened, |el| {
            el.absolute().inset_0().child(
                deferred(
                    div()
                        .absolute()
                        .inset_0()
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(backdrop(self.on_close.clone()))
                        .child(
                            // Modal container
                            div()
                                .id("modal-panel")
                                .relative()
                                .occlude()
                                .bg(LoomColors::surface())
                                .rounded(self.radius.pixels())
                                .shadow_lg()
                                .w(self.size.panel_width())
                                .flex()
                                .flex_col()
                                .child(header(self.title, close_button, self.close_label))
                                .child(
                                    div()
                                        .px_6()
                                        .py_4()
                                        .flex()
                                        .flex_col()
                                        .gap_4()
                                        .children(self.children),
                                ),
                        ),
                )
                .with_priority(2),
            )
        })
    }
}

/// Drawer component
#[derive(IntoElement)]
pub struct Drawer {
    title: SharedString,
    opened: bool,
    position: DrawerPosition,
    size: Size,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
    close_label: SharedString,
}

impl Drawer {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            opened: true,
            position: DrawerPosition::Right,
            size: Size::Md,
            children: Vec::new(),
            on_close: None,
            close_label: "Close".into(),
        }
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn position(mut self, position: DrawerPosition) -> Self {
        self.position = position;
        self
    }

    /// Width (or height for top/bottom drawers)
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn close_label(mut self, label: impl Into<SharedString>) -> Self {
        self.close_label = label.into();
        self
    }
}

impl RenderOnce for Drawer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let extent = self.size.panel_width();
        let position = self.position;

        let panel = div()
            .id("drawer-panel")
            .absolute()
            .occlude()
            .bg(LoomColors::surface())
            .shadow_lg()
            .flex()
            .flex_col()
            .map(|el| match position {
                DrawerPosition::Left => el.top_0().bottom_0().left_0().w(extent),
                DrawerPosition::Right => el.top_0().bottom_0().right_0().w(extent),
                DrawerPosition::Top => el.left_0().right_0().top_0().h(extent / 2.0),
                DrawerPosition::Bottom => el.left_0().right_0().bottom_0().h(extent / 2.0),
            })
            .child(header(self.title, self.on_close.clone(), self.close_label))
            .child(
                div()
                    .px_6()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .children(self.children),
            );

        div().when(self.opened, |el| {
            el.absolute().inset_0().child(
                deferred(
                    div()
                        .absolute()
                        .inset_0()
                        .child(backdrop(self.on_close))
                        .child(panel),
                )
                .with_priority(2),
            )
        })
    }
}

/// Dialog component
///
/// Like a [`Modal`] without the click-outside close, and with a tunable
/// backdrop opacity.
#[derive(IntoElement)]
pub struct Dialog {
    title: Option<SharedString>,
    opened: bool,
    size: Size,
    radius: Radius,
    overlay_opacity: f32,
    with_close_button: bool,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Dialog {
    pub fn new() -> Self {
        Self {
            title: None,
            opened: true,
            size: Size::Md,
            radius: Radius::Md,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            with_close_button: true,
            children: Vec::new(),
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Backdrop opacity, clamped to `0.0..=1.0`
    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_close_button(mut self, with_close_button: bool) -> Self {
        self.with_close_button = with_close_button;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Dialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let close = self
            .on_close
            .filter(|_| self.with_close_button)
            .map(|handler| {
                CloseButton::new("dialog-close")
                    .size(Size::Sm)
                    .on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            });

        let panel = div()
            .id("dialog-panel")
            .relative()
            .occlude()
            .bg(LoomColors::surface())
            .rounded(self.radius.pixels())
            .shadow_lg()
            .w(self.size.panel_width())
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(LoomColors::text_primary())
                            .children(self.title),
                    )
                    .children(close),
            )
            .children(self.children);

        div().when(self.opened, |el| {
            el.absolute().inset_0().child(
                deferred(
                    div()
                        .absolute()
                        .inset_0()
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(
                            // Swallows clicks so content underneath stays inert
                            div()
                                .id("dialog-backdrop")
                                .absolute()
                                .inset_0()
                                .occlude()
                                .bg(gpui::black())
                                .opacity(self.overlay_opacity),
                        )
                        .child(panel),
                )
                .with_priority(2),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_defaults() {
        let dialog = Dialog::new();
        assert!(dialog.opened);
        assert!(dialog.with_close_button);
        assert_eq!(dialog.size, Size::Md);
        assert_eq!(dialog.radius, Radius::Md);
        assert_eq!(dialog.overlay_opacity, DEFAULT_OVERLAY_OPACITY);
    }

    #[test]
    fn overlay_opacity_is_clamped() {
        assert_eq!(Dialog::new().overlay_opacity(1.8).overlay_opacity, 1.0);
        assert_eq!(Dialog::new().overlay_opacity(-0.2).overlay_opacity, 0.0);
    }
}
