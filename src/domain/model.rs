use std::path::PathBuf;

use super::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub destination: PathBuf,
}

impl DownloadRequest {
    /// Validates raw field values; surrounding whitespace is ignored.
    pub fn new(url: &str, destination: &str) -> Result<Self, AppError> {
        let url = url.trim();
        let destination = destination.trim();

        if url.is_empty() {
            return Err(AppError::EmptyUrl);
        }
        if destination.is_empty() {
            return Err(AppError::MissingFolder);
        }

        Ok(Self {
            url: url.to_string(),
            destination: PathBuf::from(destination),
        })
    }
}

/// What yt-dlp reported about a finished download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadedMedia {
    pub title: Option<String>,
    pub path: Option<PathBuf>,
}

pub type DownloadOutcome = Result<DownloadedMedia, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPhase {
    Idle,
    Downloading,
    Completed(DownloadedMedia),
    Failed(AppError),
}

impl From<DownloadOutcome> for DownloadPhase {
    fn from(outcome: DownloadOutcome) -> Self {
        match outcome {
            Ok(media) => Self::Completed(media),
            Err(e) => Self::Failed(e),
        }
    }
}
