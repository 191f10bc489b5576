use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Please enter a YouTube link.")]
    EmptyUrl,

    #[error("Please select a download folder.")]
    MissingFolder,

    #[error("The selected folder path is not valid UTF-8: {0}")]
    UnreadableFolder(String),

    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("{0}")]
    Download(String),

    #[error("Download worker stopped unexpectedly: {0}")]
    Worker(String),
}
