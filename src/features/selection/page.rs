//! Selection Page

use gpui::{
    div, prelude::*, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::native_select::{NativeSelect, SelectOption};
use crate::components::primitives::radio::{LabelPosition, Orientation, Radio, RadioGroup, RadioOption};
use crate::components::primitives::rating::Rating;
use crate::constants::DEFAULT_RATING_COUNT;
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::t;
use crate::theme::Palette;

const FRAMEWORKS: [(&str, &str); 4] = [
    ("gpui", "GPUI"),
    ("iced", "Iced"),
    ("egui", "egui"),
    ("slint", "Slint"),
];

const TOPPINGS: [&str; 3] = ["Cheese", "Olives", "Basil"];

const PLANS: [(&str, &str); 3] = [("free", "Free"), ("pro", "Pro"), ("team", "Team")];

/// Parent checkbox state from its children: (checked, indeterminate)
fn parent_state(children: &[bool]) -> (bool, bool) {
    let checked = children.iter().filter(|c| **c).count();
    (checked == children.len(), checked > 0 && checked < children.len())
}

pub struct SelectionPage {
    entities: AppEntities,
    select: Entity<NativeSelect>,
    toppings: [bool; 3],
    plan: Option<SharedString>,
    terms: bool,
    rating: Entity<Rating>,
    fractional: Entity<Rating>,
    read_only: Entity<Rating>,
    hovered: Option<f32>,
}

impl SelectionPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let options = FRAMEWORKS
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .chain(std::iter::once(SelectOption::new("druid", "Druid").disabled()))
            .collect();
        let select = cx.new(|_| NativeSelect::new("framework-select", options));

        let rating = cx.new(|_| {
            let mut rating = Rating::new("rating", DEFAULT_RATING_COUNT, 1);
            rating.set_value(3.0);
            rating
        });
        let fractional = cx.new(|_| {
            let mut rating = Rating::new("rating-fractional", DEFAULT_RATING_COUNT, 2);
            rating.set_value(2.5);
            rating.set_color(Palette::Orange);
            rating
        });
        let read_only = cx.new(|_| {
            let mut rating = Rating::new("rating-read-only", DEFAULT_RATING_COUNT, 4);
            rating.set_value(3.75);
            rating.set_read_only(true);
            rating
        });

        let page = cx.weak_entity();
        fractional.update(cx, |rating, _| {
            rating.on_hover(move |value, _window, cx| {
                let _ = page.update(cx, |this, cx| {
                    this.hovered = Some(value);
                    cx.notify();
                });
            });
        });

        cx.observe(&select, |_this, _, cx| cx.notify()).detach();
        cx.observe(&rating, |_this, _, cx| cx.notify()).detach();
        cx.observe(&fractional, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |this, settings, cx| {
            let settings = settings.read(cx);
            let (locale, size) = (settings.locale(), settings.size());
            this.select.update(cx, |select, cx| {
                select.set_placeholder(t(locale, "select-placeholder"));
                select.set_size(size);
                cx.notify();
            });
            for rating in [&this.rating, &this.fractional, &this.read_only] {
                rating.update(cx, |rating, cx| {
                    rating.set_size(size);
                    cx.notify();
                });
            }
        })
        .detach();

        let locale = entities.settings.read(cx).locale();
        select.update(cx, |select, _| select.set_placeholder(t(locale, "select-placeholder")));

        Self {
            entities,
            select,
            toppings: [true, false, false],
            plan: None,
            terms: false,
            rating,
            fractional,
            read_only,
            hovered: None,
        }
    }

    fn set_all(&mut self, checked: bool, cx: &mut Context<Self>) {
        self.toppings = [checked; 3];
        cx.notify();
    }

    fn set_plan(&mut self, plan: SharedString, cx: &mut Context<Self>) {
        self.plan = Some(plan);
        cx.notify();
    }

    fn set_topping(&mut self, index: usize, checked: bool, cx: &mut Context<Self>) {
        if let Some(topping) = self.toppings.get_mut(index) {
            *topping = checked;
        }
        cx.notify();
    }
}

impl Render for SelectionPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (size, color) = (settings.size(), settings.color());
        let selected = SharedString::from(self.select.read(cx).selected().unwrap_or("-").to_string());
        let rating = self.rating.read(cx).value();
        let fractional = self.fractional.read(cx).value();
        let hovered = self.hovered;
        let (all_checked, indeterminate) = parent_state(&self.toppings);
        let page = cx.entity();

        let toppings = div()
            .flex()
            .flex_col()
            .gap_2()
            .child({
                let page = page.clone();
                Checkbox::new("toppings-all")
                    .label("All toppings")
                    .size(size)
                    .color(color)
                    .checked(all_checked)
                    .indeterminate(indeterminate)
                    .on_change(move |checked, _window, cx| {
                        page.update(cx, |this, cx| this.set_all(checked, cx));
                    })
            })
            .children(TOPPINGS.iter().enumerate().map(|(index, label)| {
                let page = page.clone();
                div().pl_6().child(
                    Checkbox::new(("topping", index))
                        .label(*label)
                        .size(size)
                        .color(color)
                        .checked(self.toppings[index])
                        .on_change(move |checked, _window, cx| {
                            page.update(cx, |this, cx| this.set_topping(index, checked, cx));
                        }),
                )
            }))
            .child(
                Checkbox::new("topping-disabled")
                    .label("Pineapple")
                    .size(size)
                    .disabled(true),
            );

        let plan_page = page.clone();
        let terms_page = page.clone();
        let radios = div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                RadioGroup::new("plan-group")
                    .label("Plan")
                    .description("Billed monthly")
                    .required(true)
                    .size(size)
                    .color(color)
                    .value(self.plan.clone())
                    .options(PLANS.iter().map(|(value, label)| RadioOption::new(*value, *label)))
                    .option(RadioOption::new("enterprise", "Enterprise").disabled())
                    .when(self.plan.is_none(), |group| group.error("Pick a plan"))
                    .on_change(move |value, _window, cx| {
                        let value = value.clone();
                        plan_page.update(cx, |this, cx| this.set_plan(value, cx));
                    }),
            )
            .child(caption("plan", self.plan.clone().unwrap_or_else(|| "-".into())))
            .child(
                RadioGroup::new("plan-group-horizontal")
                    .orientation(Orientation::Horizontal)
                    .spacing(size)
                    .size(size)
                    .color(color)
                    .value(self.plan.clone())
                    .options(PLANS.iter().map(|(value, label)| RadioOption::new(*value, *label))),
            )
            .child(
                Radio::new("terms-radio")
                    .label("I accept the terms")
                    .description("Label drawn on the left")
                    .label_position(LabelPosition::Left)
                    .size(size)
                    .color(color)
                    .checked(self.terms)
                    .on_change(move |checked, _window, cx| {
                        terms_page.update(cx, |this, cx| {
                            this.terms = checked;
                            cx.notify();
                        });
                    }),
            );

        page_column("selection-page")
            .child(demo_card(
                "NativeSelect",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.select.clone())
                    .child(caption("selected", selected)),
            ))
            .child(demo_card("Checkbox", toppings))
            .child(demo_card("Radio", radios))
            .child(demo_card(
                "Rating",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.rating.clone())
                    .child(caption("value", rating.to_string()))
                    .child(self.fractional.clone())
                    .child(caption("value", fractional.to_string()))
                    .child(caption(
                        "hover",
                        hovered.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
                    ))
                    .child(self.read_only.clone()),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_checkbox_follows_children() {
        assert_eq!(parent_state(&[true, true, true]), (true, false));
        assert_eq!(parent_state(&[false, false, false]), (false, false));
        assert_eq!(parent_state(&[true, false, false]), (false, true));
    }
}
