use std::path::PathBuf;

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::application::{Notification, NotificationLevel};

pub async fn pick_folder() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select download folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Blocks until the user dismisses the box.
pub async fn show_notification(notification: Notification) {
    let level = match notification.level {
        NotificationLevel::Info => MessageLevel::Info,
        NotificationLevel::Error => MessageLevel::Error,
    };

    AsyncMessageDialog::new()
        .set_level(level)
        .set_title(notification.title)
        .set_description(notification.body)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
