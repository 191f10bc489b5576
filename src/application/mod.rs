pub mod download_controller;
pub mod status_reporter;

pub use download_controller::{DownloadController, StartOutcome};
pub use status_reporter::{Notification, NotificationLevel, StatusReport};
