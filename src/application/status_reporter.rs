use iced::Color;

use crate::domain::DownloadPhase;

pub const READY_TEXT: &str = "Status: Ready to download";
pub const DOWNLOADING_TEXT: &str = "Status: Downloading...";
pub const COMPLETE_TEXT: &str = "Status: Download Complete! ✓";
pub const ERROR_TEXT: &str = "Status: Error occurred ✗";

pub const INFO_COLOR: Color = Color::from_rgb8(0x1E, 0x90, 0xFF);
pub const SUCCESS_COLOR: Color = Color::from_rgb8(0x00, 0xC8, 0x53);
pub const ERROR_COLOR: Color = Color::from_rgb8(0xFF, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A modal message box to show once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub text: &'static str,
    /// `None` means the palette foreground.
    pub color: Option<Color>,
    pub notification: Option<Notification>,
}

impl Default for StatusReport {
    fn default() -> Self {
        report(&DownloadPhase::Idle)
    }
}

pub fn report(phase: &DownloadPhase) -> StatusReport {
    match phase {
        DownloadPhase::Idle => StatusReport {
            text: READY_TEXT,
            color: None,
            notification: None,
        },
        DownloadPhase::Downloading => StatusReport {
            text: DOWNLOADING_TEXT,
            color: Some(INFO_COLOR),
            notification: None,
        },
        DownloadPhase::Completed(media) => {
            let body = match &media.title {
                Some(title) => format!("Video downloaded successfully!\n{}", title),
                None => "Video downloaded successfully!".to_string(),
            };

            StatusReport {
                text: COMPLETE_TEXT,
                color: Some(SUCCESS_COLOR),
                notification: Some(Notification {
                    level: NotificationLevel::Info,
                    title: "Success",
                    body,
                }),
            }
        }
        DownloadPhase::Failed(error) => StatusReport {
            text: ERROR_TEXT,
            color: Some(ERROR_COLOR),
            notification: Some(Notification {
                level: NotificationLevel::Error,
                title: "Error",
                body: format!("An error occurred:\n{}", error),
            }),
        },
    }
}
