//! Inputs Page
//!
//! Stateful text and file inputs. Each input is its own entity; the page
//! observes them to show the current values.

use std::path::PathBuf;

use gpui::{
    div, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};
use tracing::info;

use crate::app::entities::AppEntities;
use crate::components::layout::group::Group;
use crate::components::primitives::button::Button;
use crate::components::primitives::file_input::{FileButton, FileInput};
use crate::components::primitives::number_input::NumberInput;
use crate::components::primitives::password_input::PasswordInput;
use crate::components::primitives::pin_input::PinInput;
use crate::components::primitives::text_input::{text_input, InputVariant, TextInput};
use crate::components::primitives::textarea::Textarea;
use crate::constants::DEFAULT_PIN_LENGTH;
use crate::domain::number::{NumberBounds, NumberFormat};
use crate::domain::pin::PinKind;
use crate::features::demo::{caption, demo_card, page_column};
use crate::i18n::{t, Locale};
use crate::theme::Size;

/// File names joined for the demo captions
fn file_names(files: &[PathBuf]) -> SharedString {
    if files.is_empty() {
        return "-".into();
    }
    let names: Vec<_> = files
        .iter()
        .filter_map(|file| file.file_name())
        .map(|name| name.to_string_lossy())
        .collect();
    SharedString::from(names.join(", "))
}

fn email_error(value: &str) -> Option<SharedString> {
    (!value.is_empty() && !value.contains('@')).then(|| SharedString::from("Invalid email"))
}

pub struct InputsPage {
    entities: AppEntities,
    name: Entity<TextInput>,
    email: Entity<TextInput>,
    filled: Entity<TextInput>,
    password: Entity<PasswordInput>,
    quantity: Entity<NumberInput>,
    price: Entity<NumberInput>,
    pin: Entity<PinInput>,
    code: Entity<PinInput>,
    completed_pin: Option<SharedString>,
    comment: Entity<Textarea>,
    notes: Entity<Textarea>,
    avatar: Entity<FileInput>,
    attachments: Entity<FileInput>,
    uploaded: Vec<PathBuf>,
}

impl InputsPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name = text_input("name-input", "", "Your name", window, cx);
        name.update(cx, |input, _| {
            input.set_label("Name");
            input.set_description("Shown on your public profile");
            input.set_required(true);
        });

        let email = text_input("email-input", "not-an-email", "you@example.com", window, cx);
        email.update(cx, |input, _| {
            input.set_label("Email");
            input.set_error(email_error("not-an-email"));
        });

        let filled = text_input("filled-input", "", "Filled variant", window, cx);
        filled.update(cx, |input, _| input.set_variant(InputVariant::Filled));

        let password = cx.new(|cx| PasswordInput::new("password-input", window, cx));
        password.update(cx, |password, cx| {
            password.input().update(cx, |input, _| {
                input.set_label("Password");
                input.set_placeholder("Secret");
            });
        });

        let quantity = cx.new(|cx| {
            let mut input = NumberInput::new("quantity-input", window, cx);
            input.set_label("Quantity");
            input.set_bounds(NumberBounds {
                min: Some(0.0),
                max: Some(10.0),
                step: 1.0,
            });
            input.set_value(Some(1.0));
            input
        });

        let price = cx.new(|cx| {
            let mut input = NumberInput::new("price-input", window, cx);
            input.set_label("Price");
            input.set_format(NumberFormat::default().precision(2).prefix("$ "));
            input.set_bounds(NumberBounds {
                min: Some(0.0),
                max: None,
                step: 0.5,
            });
            input.set_value(Some(1234.5));
            input
        });

        let pin = cx.new(|cx| {
            let mut pin = PinInput::new("pin-input", DEFAULT_PIN_LENGTH, cx);
            pin.set_kind(PinKind::Number);
            pin
        });
        let code = cx.new(|cx| {
            let mut code = PinInput::new("code-input", 6, cx);
            code.set_mask(true);
            code
        });

        let comment = cx.new(|cx| {
            let mut textarea = Textarea::new("comment-textarea", cx);
            textarea.set_label("Comment");
            textarea.set_placeholder("Autosize with 2 to 5 rows");
            textarea.set_autosize(true, 2, Some(5));
            textarea
        });
        let notes = cx.new(|cx| {
            let mut textarea = Textarea::new("notes-textarea", cx);
            textarea.set_label("Notes");
            textarea.set_description("Fixed at four rows");
            textarea.set_variant(InputVariant::Filled);
            textarea.set_autosize(false, 4, None);
            textarea
        });

        let avatar = cx.new(|_| {
            let mut input = FileInput::new("avatar-input", false);
            input.set_label("Avatar");
            input.set_description("Images only");
            input.set_accept("image/*");
            input
        });
        let attachments = cx.new(|_| {
            let mut input = FileInput::new("attachments-input", true);
            input.set_label("Attachments");
            input.set_accept(".pdf,.txt,.md");
            input.set_required(true);
            input
        });

        let page = cx.weak_entity();
        pin.update(cx, |pin, _| {
            pin.on_complete(move |value, _window, cx| {
                info!("Pin entered");
                let value = SharedString::from(value.to_string());
                let _ = page.update(cx, |this, cx| {
                    this.completed_pin = Some(value);
                    cx.notify();
                });
            });
        });

        cx.observe(&email, |_this, email, cx| {
            let error = email_error(email.read(cx).value());
            email.update(cx, |input, _| input.set_error(error));
            cx.notify();
        })
        .detach();
        for input in [&name, &filled] {
            cx.observe(input, |_this, _, cx| cx.notify()).detach();
        }
        cx.observe(&password, |_this, _, cx| cx.notify()).detach();
        cx.observe(&quantity, |_this, _, cx| cx.notify()).detach();
        cx.observe(&price, |_this, _, cx| cx.notify()).detach();
        cx.observe(&code, |_this, _, cx| cx.notify()).detach();
        for textarea in [&comment, &notes] {
            cx.observe(textarea, |_this, _, cx| cx.notify()).detach();
        }
        for input in [&avatar, &attachments] {
            cx.observe(input, |_this, _, cx| cx.notify()).detach();
        }

        cx.observe(&entities.settings, |this, settings, cx| {
            let settings = settings.read(cx);
            let (locale, size) = (settings.locale(), settings.size());
            this.apply_settings(locale, size, cx);
        })
        .detach();

        let mut this = Self {
            entities,
            name,
            email,
            filled,
            password,
            quantity,
            price,
            pin,
            code,
            completed_pin: None,
            comment,
            notes,
            avatar,
            attachments,
            uploaded: Vec::new(),
        };
        let settings = this.entities.settings.read(cx);
        let (locale, size) = (settings.locale(), settings.size());
        this.apply_settings(locale, size, cx);
        this
    }

    fn apply_settings(&mut self, locale: Locale, size: Size, cx: &mut Context<Self>) {
        for input in [&self.name, &self.email, &self.filled] {
            input.update(cx, |input, cx| {
                input.set_size(size);
                cx.notify();
            });
        }
        self.password.update(cx, |password, cx| {
            password.set_locale(locale);
            password.input().update(cx, |input, _| input.set_size(size));
            cx.notify();
        });
        for input in [&self.quantity, &self.price] {
            input.update(cx, |input, cx| {
                input.set_size(size);
                cx.notify();
            });
        }
        for pin in [&self.pin, &self.code] {
            pin.update(cx, |pin, cx| {
                pin.set_size(size);
                cx.notify();
            });
        }
        for textarea in [&self.comment, &self.notes] {
            textarea.update(cx, |textarea, cx| {
                textarea.set_size(size);
                cx.notify();
            });
        }
        for input in [&self.avatar, &self.attachments] {
            input.update(cx, |input, cx| {
                input.set_locale(locale);
                input.set_size(size);
                cx.notify();
            });
        }
        cx.notify();
    }
}

impl Render for InputsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx);
        let (locale, size, color) = (settings.locale(), settings.size(), settings.color());
        let comment_lines = self.comment.read(cx).value().split('\n').count();
        let avatar = file_names(self.avatar.read(cx).files());
        let attachments = self.attachments.read(cx).files().len();
        let uploaded = file_names(&self.uploaded);
        let page = cx.weak_entity();
        let name = SharedString::from(self.name.read(cx).value().to_string());
        let password_length = self.password.read(cx).value(cx).chars().count();
        let quantity = self.quantity.read(cx).value();
        let price = self.price.read(cx).value();
        let code = SharedString::from(self.code.read(cx).value());

        page_column("inputs-page")
            .child(demo_card(
                "TextInput",
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(self.name.clone())
                    .child(caption("value", name))
                    .child(self.email.clone())
                    .child(self.filled.clone()),
            ))
            .child(demo_card(
                "PasswordInput",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.password.clone())
                    .child(caption("length", password_length.to_string())),
            ))
            .child(demo_card(
                "NumberInput",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.quantity.clone())
                    .child(caption("quantity", format!("{quantity:?}")))
                    .child(self.price.clone())
                    .child(caption("price", format!("{price:?}"))),
            ))
            .child(demo_card(
                "PinInput",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.pin.clone())
                    .child(caption(
                        "completed",
                        self.completed_pin.clone().unwrap_or_else(|| "-".into()),
                    ))
                    .child(self.code.clone())
                    .child(caption("masked value", code)),
            ))
            .child(demo_card(
                "Textarea",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.comment.clone())
                    .child(caption("lines", comment_lines.to_string()))
                    .child(self.notes.clone()),
            ))
            .child(demo_card(
                "FileInput",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.avatar.clone())
                    .child(caption("avatar", avatar))
                    .child(self.attachments.clone())
                    .child(caption("attachments", attachments.to_string())),
            ))
            .child(demo_card(
                "FileButton",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        Group::new().child(
                            FileButton::new("upload-button")
                                .multiple(true)
                                .on_pick(move |files, cx| {
                                    let _ = page.update(cx, |this, cx| {
                                        this.uploaded = files;
                                        cx.notify();
                                    });
                                })
                                .child(
                                    Button::new("upload-trigger", t(locale, "file-button-label"))
                                        .size(size)
                                        .color(color),
                                ),
                        ),
                    )
                    .child(caption("picked", uploaded)),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_for_captions() {
        assert_eq!(file_names(&[]).as_ref(), "-");
        let files = [PathBuf::from("/tmp/a.txt"), PathBuf::from("b.md")];
        assert_eq!(file_names(&files).as_ref(), "a.txt, b.md");
    }

    #[test]
    fn email_validation() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("me@example.com"), None);
        assert!(email_error("me.example.com").is_some());
    }
}
