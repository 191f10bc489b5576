use crate::application::{status_reporter, DownloadController, StartOutcome, StatusReport};
use crate::domain::{AppError, DownloadOutcome, DownloadPhase};
use crate::gateway::{DownloadGateway, GatewayConfig, YtDlpGateway};
use crate::ui::{dialogs, theme::ThemeStore, MainWindow, WindowMessage};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct DownloadApp {
    window: MainWindow,
    theme: ThemeStore,
    controller: DownloadController,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new(GatewayConfig::from_env())
    }
}

impl DownloadApp {
    pub fn new(config: GatewayConfig) -> Self {
        info!(program = %config.program, format = %config.format, "Using yt-dlp");
        Self::with_gateway(Arc::new(YtDlpGateway::new(config)))
    }

    pub fn with_gateway(gateway: Arc<dyn DownloadGateway>) -> Self {
        Self {
            window: MainWindow::default(),
            theme: ThemeStore::default(),
            controller: DownloadController::new(gateway),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(WindowMessage),
    FolderSelected(Option<PathBuf>),
    /// Posted by the worker when the gateway returns
    DownloadFinished(DownloadOutcome),
    NotificationClosed,
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.window.update(ui_msg.clone());

            match ui_msg {
                WindowMessage::ThemeTogglePressed => {
                    let palette = app.theme.toggle();
                    debug!(
                        dark = app.theme.is_dark(),
                        background = ?palette.background,
                        "Theme toggled"
                    );
                }
                WindowMessage::BrowsePressed => {
                    return Task::perform(dialogs::pick_folder(), Message::FolderSelected);
                }
                WindowMessage::DownloadPressed => {
                    return start_download(app);
                }
                WindowMessage::UrlChanged(_) | WindowMessage::FolderChanged(_) => {}
            }
        }
        Message::FolderSelected(Some(path)) => match path.to_str() {
            Some(folder) => {
                debug!(%folder, "Download folder selected");
                app.window.folder = folder.to_string();
            }
            None => {
                // a lossy copy would point yt-dlp at a different directory
                warn!(folder = %path.display(), "Selected folder is not valid UTF-8");
                let error = AppError::UnreadableFolder(path.display().to_string());
                return show_status(app, status_reporter::report(&DownloadPhase::Failed(error)));
            }
        },
        Message::FolderSelected(None) => {
            debug!("Folder selection cancelled");
        }
        Message::DownloadFinished(outcome) => {
            let status = app.controller.finish(outcome);
            return show_status(app, status);
        }
        Message::NotificationClosed => {}
    }
    Task::none()
}

fn start_download(app: &mut DownloadApp) -> Task<Message> {
    match app
        .controller
        .start_download(&app.window.url, &app.window.folder)
    {
        StartOutcome::Started { request, status } => {
            app.window.status = status;
            // iced Task::perform runs in the background tokio executor
            Task::perform(app.controller.run(request), Message::DownloadFinished)
        }
        StartOutcome::Rejected(status) => show_status(app, status),
        StartOutcome::Busy => Task::none(),
    }
}

fn show_status(app: &mut DownloadApp, status: StatusReport) -> Task<Message> {
    let notification = status.notification.clone();
    app.window.status = status;

    match notification {
        Some(notification) => Task::perform(dialogs::show_notification(notification), |_| {
            Message::NotificationClosed
        }),
        None => Task::none(),
    }
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.window
        .view(
            app.theme.current(),
            app.theme.toggle_icon(),
            app.controller.is_in_flight(),
        )
        .map(Message::UiMessage)
}

pub fn theme(app: &DownloadApp) -> iced::Theme {
    app.theme.iced_theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::download_controller::tests::StubGateway;
    use crate::application::status_reporter::{
        COMPLETE_TEXT, DOWNLOADING_TEXT, ERROR_TEXT, READY_TEXT,
    };
    use crate::domain::DownloadedMedia;
    use crate::ui::theme::{DARK, LIGHT};

    fn app_with(gateway: Arc<StubGateway>) -> DownloadApp {
        DownloadApp::with_gateway(gateway)
    }

    fn press(app: &mut DownloadApp, message: WindowMessage) {
        let _ = update(app, Message::UiMessage(message));
    }

    #[test]
    fn test_initial_state() {
        let app = app_with(StubGateway::new(Ok(DownloadedMedia::default())));
        assert_eq!(app.theme.current(), DARK);
        assert_eq!(app.window.status.text, READY_TEXT);
        assert!(!app.controller.is_in_flight());
    }

    #[test]
    fn test_empty_url_shows_error_without_download() {
        let gateway = StubGateway::new(Ok(DownloadedMedia::default()));
        let mut app = app_with(gateway.clone());

        press(&mut app, WindowMessage::FolderChanged("/tmp/out".into()));
        press(&mut app, WindowMessage::DownloadPressed);

        assert_eq!(app.window.status.text, ERROR_TEXT);
        let notification = app.window.status.notification.clone().unwrap();
        assert!(notification.body.contains("Please enter a YouTube link."));
        assert!(!app.controller.is_in_flight());
        assert_eq!(gateway.calls(), 0);
    }

    #[test]
    fn test_download_round_trip_through_messages() {
        let gateway = StubGateway::new(Ok(DownloadedMedia::default()));
        let mut app = app_with(gateway);

        press(
            &mut app,
            WindowMessage::UrlChanged("https://example.com/watch?v=abc".into()),
        );
        let _ = update(&mut app, Message::FolderSelected(Some(PathBuf::from("/tmp/out"))));
        press(&mut app, WindowMessage::DownloadPressed);

        assert_eq!(app.window.folder, "/tmp/out");
        assert_eq!(app.window.status.text, DOWNLOADING_TEXT);
        assert!(app.controller.is_in_flight());

        // a second click while disabled does nothing
        press(&mut app, WindowMessage::DownloadPressed);
        assert_eq!(app.window.status.text, DOWNLOADING_TEXT);

        let _ = update(
            &mut app,
            Message::DownloadFinished(Ok(DownloadedMedia::default())),
        );
        assert_eq!(app.window.status.text, COMPLETE_TEXT);
        assert!(app.window.status.notification.is_some());
        assert!(!app.controller.is_in_flight());
    }

    #[test]
    fn test_failed_download_reenables_control() {
        let mut app = app_with(StubGateway::new(Ok(DownloadedMedia::default())));

        press(
            &mut app,
            WindowMessage::UrlChanged("https://example.com/watch?v=abc".into()),
        );
        press(&mut app, WindowMessage::FolderChanged("/tmp/out".into()));
        press(&mut app, WindowMessage::DownloadPressed);

        let _ = update(
            &mut app,
            Message::DownloadFinished(Err(AppError::Download("network down".into()))),
        );
        assert_eq!(app.window.status.text, ERROR_TEXT);
        assert!(!app.controller.is_in_flight());
    }

    #[test]
    fn test_cancelled_folder_pick_keeps_field() {
        let mut app = app_with(StubGateway::new(Ok(DownloadedMedia::default())));
        press(&mut app, WindowMessage::FolderChanged("/tmp/out".into()));

        let _ = update(&mut app, Message::FolderSelected(None));
        assert_eq!(app.window.folder, "/tmp/out");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_is_rejected_not_mangled() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut app = app_with(StubGateway::new(Ok(DownloadedMedia::default())));
        press(&mut app, WindowMessage::FolderChanged("/tmp/out".into()));

        let picked = PathBuf::from(OsStr::from_bytes(b"/tmp/caf\xe9"));
        let _ = update(&mut app, Message::FolderSelected(Some(picked)));

        assert_eq!(app.window.folder, "/tmp/out");
        assert_eq!(app.window.status.text, ERROR_TEXT);
        let notification = app.window.status.notification.clone().unwrap();
        assert!(notification.body.contains("not valid UTF-8"));
    }

    #[test]
    fn test_theme_toggle_flips_palette() {
        let mut app = app_with(StubGateway::new(Ok(DownloadedMedia::default())));

        press(&mut app, WindowMessage::ThemeTogglePressed);
        assert_eq!(app.theme.current(), LIGHT);
        assert_eq!(app.theme.toggle_icon(), "🌙");

        press(&mut app, WindowMessage::ThemeTogglePressed);
        assert_eq!(app.theme.current(), DARK);
    }
}
