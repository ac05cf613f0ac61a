//! NativeSelect Component
//!
//! Field showing the selected option; clicking it opens the option list.

use gpui::{
    deferred, div, prelude::*, px, App, ClickEvent, Context, ElementId, InteractiveElement,
    IntoElement, MouseDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement,
    Styled, Window,
};

use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

/// A select option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Render the option but refuse to select it
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Label shown in the field for `selected`, if it names an option
pub fn selected_label<'a>(options: &'a [SelectOption], selected: Option<&str>) -> Option<&'a SharedString> {
    let selected = selected?;
    options
        .iter()
        .find(|option| option.value == selected)
        .map(|option| &option.label)
}

type ChangeHandler = Box<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A select/dropdown component
pub struct NativeSelect {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    size: Size,
    radius: Radius,
    disabled: bool,
    open: bool,
    on_change: Option<ChangeHandler>,
}

impl NativeSelect {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>, options: Vec<SelectOption>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options,
            placeholder: "Select...".into(),
            size: Size::Sm,
            radius: Radius::Sm,
            disabled: false,
            open: false,
            on_change: None,
        }
    }

    /// Get the selected value
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set the selected value; unknown values clear the selection
    pub fn set_selected(&mut self, value: Option<&str>) {
        self.selected = value
            .filter(|value| self.options.iter().any(|option| option.value == *value))
            .map(str::to_string);
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.radius = radius;
    }

    /// Set disabled state; disabling closes the list
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.open = false;
        }
    }

    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn choose(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        self.open = false;
        let Some(option) = self.options.get(index).filter(|option| !option.disabled) else {
            cx.notify();
            return;
        };
        let value = option.value.clone();
        if self.selected.as_deref() != Some(value.as_str()) {
            self.selected = Some(value.clone());
            if let Some(handler) = &self.on_change {
                handler(&value, window, cx);
            }
        }
        cx.notify();
    }

    fn render_menu(&self, cx: &Context<Self>) -> impl IntoElement {
        let (padding_x, padding_y) = self.size.padding();

        div()
            .absolute()
            .top(self.size.control() + px(4.0))
            .left_0()
            .w_full()
            .py_1()
            .bg(LoomColors::surface())
            .border_1()
            .border_color(LoomColors::border())
            .rounded(self.radius.pixels())
            .shadow_md()
            .children(self.options.iter().enumerate().map(|(index, option)| {
                let selected = self.selected.as_deref() == Some(option.value.as_str());
                div()
                    .id(("select-option", index))
                    .px(padding_x)
                    .py(padding_y / 2.0)
                    .text_size(self.size.font_size())
                    .text_color(if option.disabled {
                        LoomColors::text_muted()
                    } else {
                        LoomColors::text_primary()
                    })
                    .when(selected, |el| el.bg(LoomColors::hover()))
                    .when(!option.disabled, |el| {
                        el.cursor_pointer()
                            .hover(|s| s.bg(LoomColors::hover()))
                            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                                this.choose(index, window, cx);
                            }))
                    })
                    .child(option.label.clone())
            }))
    }
}

impl Render for NativeSelect {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let label = selected_label(&self.options, self.selected.as_deref()).cloned();
        let text_color = if label.is_some() {
            LoomColors::text_primary()
        } else {
            LoomColors::text_muted()
        };
        let display_text = label.unwrap_or_else(|| self.placeholder.clone());
        let (padding_x, _) = self.size.padding();

        div()
            .relative()
            .min_w(px(180.0))
            .child(
                div()
                    .id(self.id.clone())
                    .h(self.size.control())
                    .px(padding_x)
                    .bg(LoomColors::surface())
                    .border_1()
                    .border_color(if self.open {
                        LoomColors::border_focus()
                    } else {
                        LoomColors::input_border()
                    })
                    .rounded(self.radius.pixels())
                    .text_color(text_color)
                    .text_size(self.size.font_size())
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_2()
                    .when(self.disabled, |el| el.opacity(0.5))
                    .when(!self.disabled, |el| {
                        el.cursor_pointer().on_click(cx.listener(
                            |this, _event: &ClickEvent, _window, cx| {
                                this.open = !this.open;
                                cx.notify();
                            },
                        ))
                    })
                    .child(display_text)
                    .child(
                        div()
                            .text_color(LoomColors::text_muted())
                            .text_size(px(10.0))
                            .child("▼"),
                    ),
            )
            .when(self.open, |el| {
                el.on_mouse_down_out(cx.listener(|this, _event: &MouseDownEvent, _window, cx| {
                    this.open = false;
                    cx.notify();
                }))
                .child(deferred(self.render_menu(cx)).with_priority(1))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("rs", "Rust"),
            SelectOption::new("go", "Go"),
            SelectOption::new("zig", "Zig").disabled(),
        ]
    }

    #[test]
    fn label_of_selected_value() {
        let options = options();
        assert_eq!(selected_label(&options, Some("go")).map(|s| s.as_ref()), Some("Go"));
        assert_eq!(selected_label(&options, Some("c")), None);
        assert_eq!(selected_label(&options, None), None);
    }

    #[test]
    fn unknown_selection_is_cleared() {
        let mut select = NativeSelect::new("lang", options());
        select.set_selected(Some("rs"));
        assert_eq!(select.selected(), Some("rs"));
        select.set_selected(Some("cobol"));
        assert_eq!(select.selected(), None);
    }
}
