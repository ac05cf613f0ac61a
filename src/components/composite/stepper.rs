//! Stepper Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::disclosure::Selection;
use crate::theme::colors::LoomColors;
use crate::theme::{Palette, Size};

/// A step with an optional description
#[derive(Debug, Clone)]
pub struct Step {
    pub label: SharedString,
    pub description: Option<SharedString>,
}

impl Step {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Where a step stands relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// State of step `index`; `active == steps` means every step is completed
pub fn step_state(index: usize, selection: &Selection) -> StepState {
    if selection.is_before(index) {
        StepState::Completed
    } else if index == selection.active() {
        StepState::Active
    } else {
        StepState::Pending
    }
}

/// Whether clicking step `index` is allowed
pub fn step_clickable(index: usize, selection: &Selection, allow_next_steps_select: bool) -> bool {
    index != selection.active() && (allow_next_steps_select || selection.is_before(index))
}

/// Horizontal list of numbered steps
#[derive(IntoElement)]
pub struct Stepper {
    id: ElementId,
    steps: Vec<Step>,
    active: usize,
    allow_next_steps_select: bool,
    completed_icon: SharedString,
    color: Palette,
    size: Size,
    on_step_click: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Stepper {
    pub fn new(id: impl Into<ElementId>, steps: Vec<Step>) -> Self {
        Self {
            id: id.into(),
            steps,
            active: 0,
            allow_next_steps_select: true,
            completed_icon: "✓".into(),
            color: Palette::Blue,
            size: Size::Md,
            on_step_click: None,
        }
    }

    /// Index of the active step; the step count marks the whole flow completed
    pub fn active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    /// Allow jumping to steps after the active one
    pub fn allow_next_steps_select(mut self, allow: bool) -> Self {
        self.allow_next_steps_select = allow;
        self
    }

    /// Glyph drawn inside completed step markers
    pub fn completed_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.completed_icon = icon.into();
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

    pub fn on_step_click(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_step_click = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Stepper {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selection = Selection::new(self.steps.len() + 1, self.active);
        let count = self.steps.len();
        let marker = self.size.control();

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .children(self.steps.into_iter().enumerate().map(|(index, step)| {
                let state = step_state(index, &selection);
                let clickable = step_clickable(index, &selection, self.allow_next_steps_select);
                let (bg, fg, border) = match state {
                    StepState::Completed => (self.color.filled(), self.color.on_filled(), self.color.filled()),
                    StepState::Active => (LoomColors::surface(), self.color.filled(), self.color.filled()),
                    StepState::Pending => (LoomColors::surface_muted(), LoomColors::text_secondary(), LoomColors::border()),
                };
                let icon = match state {
                    StepState::Completed => self.completed_icon.clone(),
                    _ => SharedString::from((index + 1).to_string()),
                };

                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .id(("step", index))
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .size(marker)
                                    .flex_none()
                                    .rounded_full()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .bg(bg)
                                    .border_2()
                                    .border_color(border)
                                    .text_color(fg)
                                    .text_size(self.size.font_size())
                                    .font_weight(FontWeight::BOLD)
                                    .child(icon),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .text_size(self.size.font_size())
                                            .text_color(LoomColors::text_primary())
                                            .child(step.label),
                                    )
                                    .when_some(step.description, |el, description| {
                                        el.child(
                                            div()
                                                .text_size(Size::Xs.font_size())
                                                .text_color(LoomColors::text_secondary())
                                                .child(description),
                                        )
                                    }),
                            )
                            .when(clickable, |el| {
                                let el = el.cursor_pointer();
                                match self.on_step_click.clone() {
                                    Some(handler) => {
                                        el.on_click(move |_event, window, cx| handler(index, window, cx))
                                    }
                                    None => el,
                                }
                            }),
                    )
                    .when(index + 1 < count, |el| {
                        el.child(div().w(px(40.0)).h(px(2.0)).bg(if state == StepState::Completed {
                            self.color.filled()
                        } else {
                            LoomColors::border()
                        }))
                    })
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_around_the_active_step() {
        let selection = Selection::new(4, 1);
        assert_eq!(step_state(0, &selection), StepState::Completed);
        assert_eq!(step_state(1, &selection), StepState::Active);
        assert_eq!(step_state(2, &selection), StepState::Pending);
    }

    #[test]
    fn finished_flow_completes_every_step() {
        let selection = Selection::new(4, 3);
        assert!((0..3).all(|index| step_state(index, &selection) == StepState::Completed));
    }

    #[test]
    fn next_steps_need_permission() {
        let selection = Selection::new(4, 1);
        assert!(step_clickable(0, &selection, false));
        assert!(!step_clickable(1, &selection, true));
        assert!(!step_clickable(2, &selection, false));
        assert!(step_clickable(2, &selection, true));
    }
}
