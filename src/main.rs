mod app;
mod application;
mod domain;
mod gateway;
mod ui;
mod utils;

use iced::{window, Size};
use tracing::info;

fn main() -> iced::Result {
    // RUST_LOG overrides the default level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("YTV Downloader starting");

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("YTV Downloader")
        .theme(app::theme)
        .window(window::Settings {
            size: Size::new(550.0, 420.0),
            resizable: false,
            ..Default::default()
        })
        .run()
}
