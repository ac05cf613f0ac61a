//! FileInput Component
//!
//! Input-looking field that opens the platform file dialog on click, and a
//! bare [`FileButton`] that wraps any trigger with the same dialog. Picked
//! paths are filtered by the `accept` list before they are reported.

use std::path::PathBuf;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, ElementId, InteractiveElement,
    IntoElement, ParentElement, PathPromptOptions, Render, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Task, Window,
};
use tracing::{debug, warn};

use crate::components::primitives::close_button::CloseButton;
use crate::components::primitives::text_input::{field_frame, InputVariant};
use crate::domain::file::{AcceptFilter, FileSelection, FileSummary};
use crate::i18n::{t, Locale};
use crate::theme::colors::LoomColors;
use crate::theme::{Radius, Size};

fn path_prompt(multiple: bool) -> PathPromptOptions {
    PathPromptOptions {
        files: true,
        directories: false,
        multiple,
        prompt: None,
    }
}

type PickHandler = Rc<dyn Fn(Vec<PathBuf>, &mut App) + 'static>;

/// Opens the file dialog when its child is clicked
#[derive(IntoElement)]
pub struct FileButton {
    id: ElementId,
    multiple: bool,
    accept: AcceptFilter,
    disabled: bool,
    child: Option<AnyElement>,
    on_pick: Option<PickHandler>,
}

impl FileButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            multiple: false,
            accept: AcceptFilter::default(),
            disabled: false,
            child: None,
            on_pick: None,
        }
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Comma separated extensions and `type/*` families, e.g. `".pdf,image/*"`
    pub fn accept(mut self, accept: &str) -> Self {
        self.accept = AcceptFilter::parse(accept);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The trigger element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }

    /// Called with the accepted paths; single mode reports at most one
    pub fn on_pick(mut self, handler: impl Fn(Vec<PathBuf>, &mut App) + 'static) -> Self {
        self.on_pick = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for FileButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (multiple, accept) = (self.multiple, self.accept);

        div()
            .id(self.id)
            .children(self.child)
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.on_pick.filter(|_| !self.disabled), |el, handler| {
                el.on_click(move |_event: &ClickEvent, _window, cx| {
                    let receiver = cx.prompt_for_paths(path_prompt(multiple));
                    let (handler, accept) = (handler.clone(), accept.clone());
                    cx.spawn(async move |cx| {
                        let Ok(Ok(Some(paths))) = receiver.await else {
                            return;
                        };
                        let mut selection = FileSelection::new(multiple);
                        if selection.pick(paths, &accept) {
                            let files = selection.files().to_vec();
                            let _ = cx.update(|cx| handler(files, cx));
                        }
                    })
                    .detach();
                })
            })
    }
}

type ChangeHandler = Box<dyn Fn(&[PathBuf], &mut Window, &mut Context<FileInput>) + 'static>;

pub struct FileInput {
    id: ElementId,
    selection: FileSelection,
    accept: AcceptFilter,
    locale: Locale,
    placeholder: Option<SharedString>,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    variant: InputVariant,
    size: Size,
    radius: Radius,
    required: bool,
    clearable: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
    _dialog: Option<Task<()>>,
}

impl FileInput {
    pub fn new(id: impl Into<ElementId>, multiple: bool) -> Self {
        Self {
            id: id.into(),
            selection: FileSelection::new(multiple),
            accept: AcceptFilter::default(),
            locale: Locale::default(),
            placeholder: None,
            label: None,
            description: None,
            error: None,
            variant: InputVariant::Default,
            size: Size::Sm,
            radius: Radius::Sm,
            required: false,
            clearable: true,
            disabled: false,
            on_change: None,
            _dialog: None,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        self.selection.files()
    }

    pub fn set_accept(&mut self, accept: &str) {
        self.accept = AcceptFilter::parse(accept);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Override the translated placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = Some(placeholder.into());
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_description(&mut self, description: impl Into<SharedString>) {
        self.description = Some(description.into());
    }

    pub fn set_error(&mut self, error: Option<SharedString>) {
        self.error = error;
    }

    pub fn set_variant(&mut self, variant: InputVariant) {
        self.variant = variant;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.radius = radius;
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Show a clear button while files are held (default on)
    pub fn set_clearable(&mut self, clearable: bool) {
        self.clearable = clearable;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Called with the held files after a pick or a clear
    pub fn on_change(&mut self, handler: impl Fn(&[PathBuf], &mut Window, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn emit_change(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.take() {
            handler(self.selection.files(), window, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }

    fn open_dialog(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let receiver = cx.prompt_for_paths(path_prompt(self.selection.is_multiple()));
        self._dialog = Some(cx.spawn_in(window, async move |this, cx| {
            let paths = match receiver.await {
                Ok(Ok(Some(paths))) => paths,
                Ok(Err(error)) => {
                    warn!(%error, "File dialog failed");
                    return;
                }
                _ => return,
            };
            let _ = this.update_in(cx, |this, window, cx| {
                if this.selection.pick(paths, &this.accept) {
                    debug!(count = this.selection.files().len(), "Files picked");
                    this.emit_change(window, cx);
                }
            });
        }));
    }

    fn clear(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        cx.stop_propagation();
        if self.selection.clear() {
            self.emit_change(window, cx);
        }
    }

    fn display_text(&self) -> Option<SharedString> {
        self.selection.summary().map(|summary| match summary {
            FileSummary::Name(name) => SharedString::from(name),
            FileSummary::Count(count) => {
                SharedString::from(format!("{count} {}", t(self.locale, "files-selected")))
            }
        })
    }
}

impl Render for FileInput {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (bg, border_color) = self.variant.colors(false, self.error.is_some());
        let (padding_x, padding_y) = self.size.padding();
        let text = self.display_text();
        let show_clear = self.clearable && !self.disabled && !self.selection.is_empty();
        let placeholder = self
            .placeholder
            .clone()
            .unwrap_or_else(|| t(self.locale, "file-input-placeholder"));

        let field = div()
            .id(self.id.clone())
            .when(self.variant != InputVariant::Unstyled, |el| el.px(padding_x).py(padding_y))
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded(self.radius.pixels())
            .text_size(self.size.font_size())
            .min_w(px(200.0))
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .text_color(if text.is_some() {
                        LoomColors::text_primary()
                    } else {
                        LoomColors::text_muted()
                    })
                    .child(text.unwrap_or(placeholder)),
            )
            .when(show_clear, |el| {
                el.child(
                    CloseButton::new("file-input-clear")
                        .size(Size::Xs)
                        .on_click(cx.listener(Self::clear)),
                )
            })
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| {
                el.cursor_pointer().on_click(cx.listener(Self::open_dialog))
            });

        field_frame(
            self.label.clone(),
            self.required,
            self.description.clone(),
            self.error.clone(),
            self.size,
            field,
        )
    }
}
