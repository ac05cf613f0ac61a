//! NavLink Component
//!
//! Full width navigation row with label, description and side sections.

use gpui::{
    div, prelude::*, AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavLinkVariant {
    #[default]
    Light,
    Filled,
    /// Palette text only, no background
    Subtle,
}

/// (background, text) of a nav link
pub(crate) fn nav_link_colors(variant: NavLinkVariant, color: Palette, active: bool) -> (Rgba, Rgba) {
    if !active {
        return (LoomColors::transparent(), LoomColors::text_primary());
    }
    match variant {
        NavLinkVariant::Light => (color.light(), color.hover()),
        NavLinkVariant::Filled => (color.filled(), color.on_filled()),
        NavLinkVariant::Subtle => (LoomColors::transparent(), color.filled()),
    }
}

#[derive(IntoElement)]
pub struct NavLink {
    id: ElementId,
    label: SharedString,
    description: Option<SharedString>,
    left_section: Option<AnyElement>,
    right_section: Option<AnyElement>,
    active: bool,
    variant: NavLinkVariant,
    color: Palette,
    disabled: bool,
    no_wrap: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl NavLink {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            left_section: None,
            right_section: None,
            active: false,
            variant: NavLinkVariant::Light,
            color: Palette::Blue,
            disabled: false,
            no_wrap: false,
            on_click: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Icon before the label
    pub fn left_section(mut self, section: impl IntoElement) -> Self {
        self.left_section = Some(section.into_any_element());
        self
    }

    pub fn right_section(mut self, section: impl IntoElement) -> Self {
        self.right_section = Some(section.into_any_element());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn variant(mut self, variant: NavLinkVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Keep label and description on one line each
    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for NavLink {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = nav_link_colors(self.variant, self.color, self.active);
        let hover_bg = if self.active { bg } else { LoomColors::hover() };
        let no_wrap = self.no_wrap;

        div()
            .id(self.id)
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .px_3()
            .py_2()
            .bg(bg)
            .text_color(text)
            .when_some(self.left_section, |el, section| el.child(div().flex_none().child(section)))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(
                        div()
                            .text_size(Size::Sm.font_size())
                            .font_weight(if self.active { FontWeight::MEDIUM } else { FontWeight::NORMAL })
                            .when(no_wrap, |el| el.whitespace_nowrap().text_ellipsis())
                            .child(self.label),
                    )
                    .when_some(self.description, |el, description| {
                        el.child(
                            div()
                                .text_size(Size::Xs.font_size())
                                .text_color(LoomColors::text_secondary())
                                .when(no_wrap, |el| el.whitespace_nowrap().text_ellipsis())
                                .child(description),
                        )
                    }),
            )
            .when_some(self.right_section, |el, section| el.child(div().flex_none().child(section)))
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(hover_bg))
                    .when_some(self.on_click, |el, handler| el.on_click(handler))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_links_stay_neutral() {
        for variant in [NavLinkVariant::Light, NavLinkVariant::Filled, NavLinkVariant::Subtle] {
            assert_eq!(
                nav_link_colors(variant, Palette::Violet, false),
                (LoomColors::transparent(), LoomColors::text_primary())
            );
        }
    }

    #[test]
    fn active_filled_link_uses_palette_fill() {
        assert_eq!(
            nav_link_colors(NavLinkVariant::Filled, Palette::Violet, true),
            (Palette::Violet.filled(), Palette::Violet.on_filled())
        );
    }
}
