//! Pagination Component
//!
//! Page buttons with collapsed runs, optional previous/next and first/last
//! controls. Page state lives in a [`Pager`]; the visible items come from
//! the page range generator on every render.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::constants::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};
use crate::domain::page_range::PageRangeItem;
use crate::domain::pager::Pager;
use crate::i18n::{t, Locale};
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Radius, Size};

/// Navigation control beside the page buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

impl PageControl {
    fn id(&self) -> &'static str {
        match self {
            PageControl::First => "pagination-first",
            PageControl::Previous => "pagination-previous",
            PageControl::Next => "pagination-next",
            PageControl::Last => "pagination-last",
        }
    }

    /// Apply the control to `pager`; `None` when nothing changes
    pub fn apply(&self, pager: &mut Pager) -> Option<usize> {
        let enabled = match self {
            PageControl::First | PageControl::Previous => pager.can_previous(),
            PageControl::Next | PageControl::Last => pager.can_next(),
        };
        if !enabled {
            return None;
        }
        match self {
            PageControl::First => pager.first(),
            PageControl::Previous => pager.previous(),
            PageControl::Next => pager.next(),
            PageControl::Last => pager.last(),
        }
    }
}

/// Text of the controls and the collapse marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLabels {
    pub first: SharedString,
    pub previous: SharedString,
    pub next: SharedString,
    pub last: SharedString,
    pub dots: SharedString,
}

impl PaginationLabels {
    /// Default labels in `locale`
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            first: t(locale, "pagination-first"),
            previous: t(locale, "pagination-previous"),
            next: t(locale, "pagination-next"),
            last: t(locale, "pagination-last"),
            dots: t(locale, "pagination-dots"),
        }
    }

    fn control(&self, control: PageControl) -> SharedString {
        match control {
            PageControl::First => self.first.clone(),
            PageControl::Previous => self.previous.clone(),
            PageControl::Next => self.next.clone(),
            PageControl::Last => self.last.clone(),
        }
    }
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

type ChangeHandler = Box<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
pub struct Pagination {
    id: ElementId,
    pager: Pager,
    sibling_count: i64,
    boundary_count: i64,
    with_edges: bool,
    with_controls: bool,
    size: Size,
    radius: Radius,
    color: Palette,
    labels: PaginationLabels,
    on_change: Option<ChangeHandler>,
}

impl Pagination {
    /// Create a pagination over `total` pages, starting on page 1
    pub fn new(id: impl Into<ElementId>, total: usize) -> Self {
        Self {
            id: id.into(),
            pager: Pager::new(total),
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
            with_edges: true,
            with_controls: true,
            size: Size::Md,
            radius: Radius::Sm,
            color: Palette::Blue,
            labels: PaginationLabels::default(),
            on_change: None,
        }
    }

    /// Start on `page` instead of page 1
    pub fn default_value(mut self, page: usize) -> Self {
        self.pager = Pager::with_default(self.pager.total(), page);
        self
    }

    /// Get the current page
    pub fn value(&self) -> usize {
        self.pager.current()
    }

    /// Adopt a controlled value
    pub fn set_value(&mut self, page: Option<usize>) {
        self.pager.sync(page);
    }

    pub fn total(&self) -> usize {
        self.pager.total()
    }

    pub fn set_total(&mut self, total: usize) {
        self.pager.set_total(total);
    }

    /// Pages shown on each side of the current page
    pub fn set_siblings(&mut self, sibling_count: i64) {
        self.sibling_count = sibling_count;
    }

    /// Pages always shown at each end
    pub fn set_boundaries(&mut self, boundary_count: i64) {
        self.boundary_count = boundary_count;
    }

    /// Show first/last controls
    pub fn set_with_edges(&mut self, with_edges: bool) {
        self.with_edges = with_edges;
    }

    /// Show previous/next controls
    pub fn set_with_controls(&mut self, with_controls: bool) {
        self.with_controls = with_controls;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.radius = radius;
    }

    pub fn set_color(&mut self, color: Palette) {
        self.color = color;
    }

    pub fn set_labels(&mut self, labels: PaginationLabels) {
        self.labels = labels;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.pager.set_disabled(disabled);
    }

    /// Set the page change handler
    pub fn on_change(&mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn report(&self, page: Option<usize>, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(page) = page {
            debug!(page, total = self.pager.total(), "Pagination changed");
            if let Some(handler) = &self.on_change {
                handler(page, window, cx);
            }
            cx.notify();
        }
    }

    fn render_page(&self, page: usize, cx: &Context<Self>) -> impl IntoElement {
        let active = page == self.pager.current();
        let enabled = !self.pager.is_disabled();
        let (bg, text, border) = if active {
            (self.color.filled(), self.color.on_filled(), self.color.filled())
        } else {
            (LoomColors::surface(), LoomColors::text_primary(), LoomColors::input_border())
        };

        div()
            .id(("pagination-page", page))
            .h(self.size.control())
            .min_w(self.size.control())
            .px(px(6.0))
            .flex()
            .items_center()
            .justify_center()
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .text_color(text)
            .when(!enabled, |el| el.opacity(0.5))
            .when(enabled && !active, |el| el.hover(|s| s.bg(LoomColors::hover())))
            .when(enabled, |el| {
                // The active page reports again when clicked
                el.cursor_pointer()
                    .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                        let page = this.pager.set_page(page);
                        this.report(page, window, cx);
                    }))
            })
            .child(SharedString::from(page.to_string()))
    }

    fn render_dots(&self, index: usize) -> impl IntoElement {
        div()
            .id(("pagination-dots", index))
            .h(self.size.control())
            .min_w(self.size.control())
            .flex()
            .items_center()
            .justify_center()
            .text_size(self.size.font_size())
            .text_color(LoomColors::text_secondary())
            .child(self.labels.dots.clone())
    }

    fn render_control(&self, control: PageControl, cx: &Context<Self>) -> impl IntoElement {
        let enabled = match control {
            PageControl::First | PageControl::Previous => self.pager.can_previous(),
            PageControl::Next | PageControl::Last => self.pager.can_next(),
        };
        let (padding_x, _) = self.size.padding();

        div()
            .id(control.id())
            .h(self.size.control())
            .min_w(self.size.control())
            .px(padding_x / 2.0)
            .flex()
            .items_center()
            .justify_center()
            .bg(LoomColors::surface())
            .border_1()
            .border_color(LoomColors::input_border())
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .text_color(LoomColors::text_primary())
            .when(!enabled, |el| el.opacity(0.4))
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(LoomColors::hover()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                        let page = control.apply(&mut this.pager);
                        this.report(page, window, cx);
                    }))
            })
            .child(self.labels.control(control))
    }
}

impl Render for Pagination {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let items = self.pager.items(self.sibling_count, self.boundary_count);

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap(px(8.0))
            .when(self.with_edges, |el| el.child(self.render_control(PageControl::First, cx)))
            .when(self.with_controls, |el| {
                el.child(self.render_control(PageControl::Previous, cx))
            })
            .children(items.into_iter().enumerate().map(|(index, item)| match item {
                PageRangeItem::Page(page) => self.render_page(page, cx).into_any_element(),
                PageRangeItem::Ellipsis => self.render_dots(index).into_any_element(),
            }))
            .when(self.with_controls, |el| el.child(self.render_control(PageControl::Next, cx)))
            .when(self.with_edges, |el| el.child(self.render_control(PageControl::Last, cx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_move_the_pager() {
        let mut pager = Pager::with_default(10, 5);
        assert_eq!(PageControl::Previous.apply(&mut pager), Some(4));
        assert_eq!(PageControl::Next.apply(&mut pager), Some(5));
        assert_eq!(PageControl::Last.apply(&mut pager), Some(10));
        assert_eq!(PageControl::Next.apply(&mut pager), None);
        assert_eq!(PageControl::First.apply(&mut pager), Some(1));
        assert_eq!(PageControl::Previous.apply(&mut pager), None);
    }

    #[test]
    fn disabled_pager_ignores_controls() {
        let mut pager = Pager::with_default(10, 5);
        pager.set_disabled(true);
        assert_eq!(PageControl::Next.apply(&mut pager), None);
        assert_eq!(pager.current(), 5);
    }

    #[test]
    fn labels_follow_locale() {
        let labels = PaginationLabels::for_locale(Locale::ZhCN);
        assert_eq!(labels.next.as_ref(), "下一页");
        assert_eq!(labels.dots.as_ref(), "...");
        assert_eq!(PaginationLabels::default().previous.as_ref(), "Previous");
    }

    #[test]
    fn new_pagination_defaults() {
        let pagination = Pagination::new("pages", 12);
        assert_eq!(pagination.value(), 1);
        assert_eq!(pagination.total(), 12);
        assert!(pagination.with_edges);
        assert!(pagination.with_controls);
        assert_eq!(pagination.sibling_count, 1);
        assert_eq!(pagination.boundary_count, 1);
        assert_eq!(pagination.size, Size::Md);
        assert_eq!(pagination.radius, Radius::Sm);
        assert_eq!(pagination.color, Palette::Blue);
        assert_eq!(pagination.labels.first.as_ref(), "«");
        assert_eq!(pagination.labels.last.as_ref(), "»");
    }

    #[test]
    fn default_value_is_clamped() {
        let pagination = Pagination::new("pages", 3).default_value(9);
        assert_eq!(pagination.value(), 3);
    }
}
