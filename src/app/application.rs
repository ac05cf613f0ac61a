//! Application - App Initialization and Window Management

use gpui::{
    px, size, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{new_key_bindings, MenuAction};
use crate::i18n::t;
use crate::settings::GallerySettings;

fn handle_menu_action(action: &MenuAction, cx: &mut App) {
    match action {
        MenuAction::Quit => cx.quit(),
        MenuAction::SaveSettings => {
            let Some(entities) = cx.try_global::<AppEntities>() else {
                return;
            };
            match entities.settings.read(cx).save() {
                Ok(()) => info!("Gallery settings saved"),
                Err(err) => error!(error = %err, "Failed to save gallery settings"),
            }
        }
    }
}

/// Run the gallery application
pub fn run_app(settings: GallerySettings) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys(new_key_bindings());
        cx.on_action(handle_menu_action);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let title = t(settings.locale(), "gallery-title");
        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities, window, cx))
        }) {
            error!(error = %err, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
