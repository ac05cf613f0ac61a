//! Tabs Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::disclosure::Selection;
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// Tab strip orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabsOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Tab look
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabsVariant {
    /// Underline under the active tab
    #[default]
    Default,
    /// Bordered active tab
    Outline,
    /// Filled pill on the active tab
    Pills,
}

/// A single tab
pub struct Tab {
    label: SharedString,
    content: Option<AnyElement>,
    disabled: bool,
}

impl Tab {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            content: None,
            disabled: false,
        }
    }

    /// Panel shown while this tab is active
    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Tab strip with the active panel below (or beside) it
#[derive(IntoElement)]
pub struct Tabs {
    id: ElementId,
    tabs: Vec<Tab>,
    active: usize,
    color: Palette,
    size: Size,
    orientation: TabsOrientation,
    variant: TabsVariant,
    on_change: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Tabs {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            tabs: Vec::new(),
            active: 0,
            color: Palette::Blue,
            size: Size::Sm,
            orientation: TabsOrientation::Horizontal,
            variant: TabsVariant::Default,
            on_change: None,
        }
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Index of the active tab (clamped to the tab count)
    pub fn active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn orientation(mut self, orientation: TabsOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn variant(mut self, variant: TabsVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Called with the index of a clicked, inactive tab
    pub fn on_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Tabs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selection = Selection::new(self.tabs.len(), self.active);
        let vertical = self.orientation == TabsOrientation::Vertical;
        let (padding_x, padding_y) = self.size.padding();
        let color = self.color;
        let variant = self.variant;
        let on_change = self.on_change;

        let mut panel = None;
        let mut headers = Vec::with_capacity(self.tabs.len());
        for (index, tab) in self.tabs.into_iter().enumerate() {
            let active = index == selection.active();
            if active {
                panel = tab.content;
            }

            let header = div()
                .id(("tab", index))
                .px(padding_x)
                .py(padding_y)
                .text_size(self.size.font_size())
                .text_color(match (variant, active) {
                    (TabsVariant::Pills, true) => color.on_filled(),
                    (_, true) => color.filled(),
                    (_, false) => LoomColors::text_secondary(),
                })
                .map(|el| match variant {
                    TabsVariant::Default => {
                        let edge = if active { color.filled() } else { LoomColors::transparent() };
                        if vertical {
                            el.border_r_2().border_color(edge)
                        } else {
                            el.border_b_2().border_color(edge)
                        }
                    }
                    TabsVariant::Outline => el
                        .rounded_t_md()
                        .border_1()
                        .border_color(if active { LoomColors::border() } else { LoomColors::transparent() })
                        .when(active, |el| el.bg(LoomColors::surface())),
                    TabsVariant::Pills => el.rounded_md().when(active, |el| el.bg(color.filled())),
                })
                .when(tab.disabled, |el| el.opacity(0.5))
                .when(!tab.disabled && !active, |el| {
                    let el = el.cursor_pointer().hover(|s| s.bg(LoomColors::hover()));
                    match on_change.clone() {
                        Some(handler) => el.on_click(move |_event, window, cx| handler(index, window, cx)),
                        None => el,
                    }
                })
                .child(tab.label);
            headers.push(header);
        }

        let strip = div()
            .flex()
            .when(vertical, |el| el.flex_col().border_r_1())
            .when(!vertical, |el| el.border_b_1())
            .border_color(LoomColors::border())
            .children(headers);

        div()
            .id(self.id)
            .flex()
            .when(!vertical, |el| el.flex_col())
            .gap_3()
            .child(strip)
            .when_some(panel, |el, panel| el.child(div().flex_1().child(panel)))
    }
}
