//! Navigation Page
//!
//! Pagination is a stateful entity; tabs, stepper, accordion, breadcrumbs,
//! nav links and collapse are stateless and render from the selection kept
//! on this page.

use gpui::{
    div, prelude::*, px, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::accordion::{Accordion, AccordionItem};
use crate::components::composite::breadcrumbs::Breadcrumbs;
use crate::components::composite::collapse::Collapse;
use crate::components::composite::nav_link::{NavLink, NavLinkVariant};
use crate::components::composite::pagination::{Pagination, PaginationLabels};
use crate::components::composite::stepper::{Step, Stepper};
use crate::components::composite::tabs::{Tab, Tabs, TabsOrientation, TabsVariant};
use crate::components::layout::group::Group;
use crate::components::primitives::button::Button;
use crate::domain::disclosure::{Disclosure, Selection};
use crate::domain::number::format_number;
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::t;
use crate::settings::GallerySettings;
use crate::theme::Size;

const CRUMBS: [&str; 4] = ["Home", "Components", "Navigation", "Breadcrumbs"];

const LINKS: [(&str, &str, NavLinkVariant); 3] = [
    ("Dashboard", "Overview of your account", NavLinkVariant::Light),
    ("Releases", "Filled when active", NavLinkVariant::Filled),
    ("Security", "Subtle when active", NavLinkVariant::Subtle),
];

const STEPS: [(&str, &str); 3] = [
    ("Account", "Create an account"),
    ("Verify", "Confirm your email"),
    ("Done", "Start using the app"),
];

pub struct NavigationPage {
    entities: AppEntities,
    pagination: Entity<Pagination>,
    compact: Entity<Pagination>,
    page: usize,
    tab: Selection,
    step: usize,
    accordion: Disclosure,
    crumb: usize,
    link: usize,
    collapse_opened: bool,
}

impl NavigationPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let total = entities.settings.read(cx).pagination().total;

        let pagination = cx.new(|_| Pagination::new("pagination", total));
        let compact = cx.new(|_| {
            let mut pagination = Pagination::new("pagination-compact", total).default_value(total / 2);
            pagination.set_with_edges(false);
            pagination.set_siblings(0);
            pagination.set_boundaries(2);
            pagination
        });

        let page = cx.weak_entity();
        pagination.update(cx, |pagination, _| {
            pagination.on_change(move |value, _window, cx| {
                let _ = page.update(cx, |this, cx| {
                    this.page = value;
                    cx.notify();
                });
            });
        });

        cx.observe(&entities.settings, |this, settings, cx| {
            let settings = settings.read(cx).clone();
            this.apply_settings(&settings, cx);
        })
        .detach();

        let mut this = Self {
            entities,
            pagination,
            compact,
            page: 1,
            tab: Selection::new(3, 0),
            step: 1,
            accordion: Disclosure::new(false),
            crumb: CRUMBS.len() - 1,
            link: 0,
            collapse_opened: false,
        };
        let settings = this.entities.settings.read(cx).clone();
        this.apply_settings(&settings, cx);
        this
    }

    fn apply_settings(&mut self, settings: &GallerySettings, cx: &mut Context<Self>) {
        let labels = PaginationLabels::for_locale(settings.locale());
        let pagination_settings = settings.pagination().clone();
        self.pagination.update(cx, |pagination, cx| {
            pagination.set_total(pagination_settings.total);
            pagination.set_siblings(pagination_settings.siblings);
            pagination.set_boundaries(pagination_settings.boundaries);
            pagination.set_size(settings.size());
            pagination.set_color(settings.color());
            pagination.set_labels(labels.clone());
            cx.notify();
        });
        self.compact.update(cx, |pagination, cx| {
            pagination.set_size(settings.size());
            pagination.set_labels(labels);
            cx.notify();
        });
        cx.notify();
    }

    fn reset_pages(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.page = 1;
        self.pagination.update(cx, |pagination, cx| {
            pagination.set_value(Some(1));
            cx.notify();
        });
        cx.notify();
    }

    fn reset_crumbs(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.crumb = CRUMBS.len() - 1;
        cx.notify();
    }

    fn next_step(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.step = (self.step + 1).min(STEPS.len());
        cx.notify();
    }

    fn previous_step(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.step = self.step.saturating_sub(1);
        cx.notify();
    }
}

impl Render for NavigationPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (locale, size, color) = (settings.locale(), settings.size(), settings.color());
        let page = cx.entity();

        let pagination = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(self.pagination.clone())
            .child(
                Group::new()
                    .child(caption("page", format_number(self.page as i64)))
                    .child(caption("of", format_number(self.pagination.read(cx).total() as i64)))
                    .child(Button::subtle("pagination-reset", "Reset").on_click(cx.listener(Self::reset_pages))),
            )
            .child(self.compact.clone());

        let tabs = |orientation, variant, id: &'static str| {
            let page = page.clone();
            Tabs::new(id)
                .orientation(orientation)
                .variant(variant)
                .size(size)
                .color(color)
                .active(self.tab.active())
                .tab(Tab::new("Gallery").content(div().text_sm().child("Gallery tab content")))
                .tab(Tab::new("Messages").content(div().text_sm().child("Messages tab content")))
                .tab(Tab::new("Settings").disabled(true))
                .on_change(move |index, _window, cx| {
                    page.update(cx, |this, cx| {
                        this.tab.select(index);
                        cx.notify();
                    });
                })
        };

        let stepper = {
            let page = page.clone();
            Stepper::new(
                "stepper",
                STEPS
                    .iter()
                    .map(|(label, description)| Step::new(*label).description(*description))
                    .collect(),
            )
            .active(self.step)
            .size(size)
            .color(color)
            .allow_next_steps_select(false)
            .on_step_click(move |index, _window, cx| {
                page.update(cx, |this, cx| {
                    this.step = index;
                    cx.notify();
                });
            })
        };
        let completed = self.step == STEPS.len();

        let accordion_page = page.clone();
        let accordion = Accordion::new("accordion")
            .size(size)
            .state(self.accordion.clone())
            .item(AccordionItem::new("What is Loom UI?", div().text_sm().child("A set of GPUI components.")))
            .item(AccordionItem::new("Can I change sizes?", div().text_sm().child("Use the size switcher in the header.")))
            .item(AccordionItem::new("Is it translated?", div().text_sm().child("English and Chinese labels are built in.")))
            .on_toggle(move |index, _window, cx| {
                accordion_page.update(cx, |this, cx| {
                    this.accordion.toggle(index);
                    cx.notify();
                });
            });

        let breadcrumbs = {
            let page = page.clone();
            Breadcrumbs::new("breadcrumbs")
                .size(size)
                .color(color)
                .map(|crumbs| CRUMBS[..=self.crumb].iter().fold(crumbs, |crumbs, label| crumbs.item(*label)))
                .on_click(move |index, _window, cx| {
                    page.update(cx, |this, cx| {
                        this.crumb = index;
                        cx.notify();
                    });
                })
        };

        let links = div()
            .w(px(320.0))
            .flex()
            .flex_col()
            .children(LINKS.iter().enumerate().map(|(index, (label, description, variant))| {
                let page = page.clone();
                NavLink::new(("nav-link", index), *label)
                    .description(*description)
                    .variant(*variant)
                    .color(color)
                    .active(self.link == index)
                    .left_section("•")
                    .right_section("›")
                    .on_click(move |_event, _window, cx| {
                        page.update(cx, |this, cx| {
                            this.link = index;
                            cx.notify();
                        });
                    })
            }))
            .child(
                NavLink::new("nav-link-disabled", "Billing")
                    .description("Disabled links ignore clicks")
                    .disabled(true),
            )
            .child(
                NavLink::new("nav-link-no-wrap", "A very long navigation label that is cut off")
                    .no_wrap(true),
            );

        let collapse_page = page.clone();
        let collapse = Collapse::new("collapse-toggle")
            .opened(self.collapse_opened)
            .size(size)
            .color(color)
            .toggle_labels(t(locale, "collapse-open"), t(locale, "collapse-close"))
            .on_toggle(move |opened, _window, cx| {
                collapse_page.update(cx, |this, cx| {
                    this.collapse_opened = opened;
                    cx.notify();
                });
            })
            .child(div().text_sm().child("Collapsed content stays out of the layout until opened."));

        page_column("navigation-page")
            .child(demo_card("Pagination", pagination))
            .child(demo_card(
                "Tabs",
                div()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(tabs(TabsOrientation::Horizontal, TabsVariant::Default, "tabs-default"))
                    .child(tabs(TabsOrientation::Horizontal, TabsVariant::Pills, "tabs-pills"))
                    .child(tabs(TabsOrientation::Vertical, TabsVariant::Outline, "tabs-vertical")),
            ))
            .child(demo_card(
                "Stepper",
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(stepper)
                    .when(completed, |el| {
                        el.child(caption("status", t(locale, "stepper-completed")))
                    })
                    .child(
                        Group::new()
                            .child(Button::outline("step-back", "Back").on_click(cx.listener(Self::previous_step)))
                            .child(Button::new("step-next", "Next step").on_click(cx.listener(Self::next_step))),
                    ),
            ))
            .child(demo_card("Accordion", accordion))
            .child(demo_card(
                "Breadcrumbs",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(breadcrumbs)
                    .child(
                        Breadcrumbs::new("breadcrumbs-arrows")
                            .separator("→")
                            .separator_margin(Size::Md)
                            .item("Docs")
                            .item("Layout")
                            .item("Grid"),
                    )
                    .child(
                        Group::new()
                            .child(caption("depth", (self.crumb + 1).to_string()))
                            .child(Button::subtle("breadcrumbs-reset", "Reset").on_click(cx.listener(Self::reset_crumbs))),
                    ),
            ))
            .child(demo_card("NavLink", links))
            .child(demo_card("Collapse", collapse))
    }
}
