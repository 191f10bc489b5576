pub mod models;
pub mod ytdlp;

use crate::domain::{DownloadOutcome, DownloadRequest};

pub use models::GatewayConfig;
pub use ytdlp::YtDlpGateway;

/// Blocking call into the external download library.
///
/// Implementations must turn every library failure into `Err`; callers never
/// see panics or raw process errors from here.
pub trait DownloadGateway: Send + Sync {
    fn fetch(&self, request: &DownloadRequest) -> DownloadOutcome;
}
