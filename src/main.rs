//! Loom UI Gallery - Main Entry Point

use loom_ui::app::application::run_app;
use loom_ui::helpers::get_or_create_data_dir;
use loom_ui::settings::GallerySettings;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let log_dir = get_or_create_data_dir()?.join("logs");
    let file_appender = tracing_appender::rolling::daily(log_dir, "gallery.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    tracing::info!("Starting Loom UI gallery...");

    let settings = GallerySettings::load_or_default();
    run_app(settings);

    Ok(())
}
