//! Color Page

use gpui::{
    div, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::color_picker::ColorPicker;
use crate::domain::color::HexColor;
use crate::features::demo::{caption, demo_card, page_column};
use crate::theme::colors::hex_to_rgba;

/// Swatches offered below the picker
const SWATCHES: [HexColor; 10] = [
    HexColor::new(0x25, 0x26, 0x2b),
    HexColor::new(0x86, 0x8e, 0x96),
    HexColor::new(0xfa, 0x52, 0x52),
    HexColor::new(0xe6, 0x49, 0x80),
    HexColor::new(0xbe, 0x4b, 0xdb),
    HexColor::new(0x79, 0x50, 0xf2),
    HexColor::new(0x4c, 0x6e, 0xf5),
    HexColor::new(0x22, 0x8b, 0xe6),
    HexColor::new(0x15, 0xaa, 0xbf),
    HexColor::new(0x12, 0xb8, 0x86),
];

pub struct ColorPage {
    entities: AppEntities,
    picker: Entity<ColorPicker>,
    swatches_only: Entity<ColorPicker>,
    live: SharedString,
    committed: SharedString,
}

impl ColorPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let initial = SWATCHES[7];
        let picker = cx.new(|_| {
            let mut picker = ColorPicker::new("color-picker", initial);
            picker.set_swatches(SWATCHES.to_vec());
            picker
        });
        let swatches_only = cx.new(|_| {
            let mut picker = ColorPicker::new("color-swatches", SWATCHES[2]);
            picker.set_swatches(SWATCHES.to_vec());
            picker.set_swatches_per_row(5);
            picker.set_with_picker(false);
            picker
        });

        let page = cx.weak_entity();
        picker.update(cx, |picker, _| {
            let live_page = page.clone();
            picker.on_change(move |value, _window, cx| {
                let value = SharedString::from(value.to_string());
                let _ = live_page.update(cx, |this, cx| {
                    this.live = value;
                    cx.notify();
                });
            });
            picker.on_change_end(move |value, _window, cx| {
                let value = SharedString::from(value.to_string());
                let _ = page.update(cx, |this, cx| {
                    this.committed = value;
                    cx.notify();
                });
            });
        });

        cx.observe(&swatches_only, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |this, settings, cx| {
            let size = settings.read(cx).size();
            for picker in [&this.picker, &this.swatches_only] {
                picker.update(cx, |picker, cx| {
                    picker.set_size(size);
                    cx.notify();
                });
            }
        })
        .detach();

        let value = SharedString::from(initial.to_string());
        Self {
            entities,
            picker,
            swatches_only,
            live: value.clone(),
            committed: value,
        }
    }
}

impl Render for ColorPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let swatch = self.swatches_only.read(cx).color();
        let size = self.entities.settings.read(cx).size();

        page_column("color-page")
            .child(demo_card(
                "ColorPicker",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.picker.clone())
                    .child(caption("change", self.live.clone()))
                    .child(caption("change end", self.committed.clone())),
            ))
            .child(demo_card(
                "Swatches",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.swatches_only.clone())
                    .child(
                        div()
                            .h(size.control())
                            .rounded_md()
                            .bg(hex_to_rgba(swatch)),
                    ),
            ))
    }
}
