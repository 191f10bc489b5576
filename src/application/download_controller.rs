use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::status_reporter::{report, StatusReport};
use crate::{
    domain::{AppError, DownloadOutcome, DownloadPhase, DownloadRequest},
    gateway::DownloadGateway,
};

#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// Input failed validation; the gateway was not called.
    Rejected(StatusReport),
    /// A download is already in flight.
    Busy,
    Started {
        request: DownloadRequest,
        status: StatusReport,
    },
}

/// Owns the in-flight flag and drives one request at a time through the gateway.
#[derive(Clone)]
pub struct DownloadController {
    gateway: Arc<dyn DownloadGateway>,
    in_flight: bool,
}

impl DownloadController {
    pub fn new(gateway: Arc<dyn DownloadGateway>) -> Self {
        Self {
            gateway,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn start_download(&mut self, url: &str, destination: &str) -> StartOutcome {
        if self.in_flight {
            debug!("Download already in flight, ignoring request");
            return StartOutcome::Busy;
        }

        match DownloadRequest::new(url, destination) {
            Ok(request) => {
                self.in_flight = true;
                info!(url = %request.url, destination = %request.destination.display(), "Download started");
                StartOutcome::Started {
                    request,
                    status: report(&DownloadPhase::Downloading),
                }
            }
            Err(e) => {
                warn!(error = %e, "Download request rejected");
                StartOutcome::Rejected(report(&DownloadPhase::Failed(e)))
            }
        }
    }

    /// Runs the blocking gateway call on a worker thread. A panic in the
    /// gateway comes back as `AppError::Worker`.
    pub fn run(
        &self,
        request: DownloadRequest,
    ) -> impl Future<Output = DownloadOutcome> + Send + 'static {
        let gateway = Arc::clone(&self.gateway);

        async move {
            match tokio::task::spawn_blocking(move || gateway.fetch(&request)).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(error = %e, "Download worker failed");
                    Err(AppError::Worker(e.to_string()))
                }
            }
        }
    }

    /// Always re-enables the download control.
    pub fn finish(&mut self, outcome: DownloadOutcome) -> StatusReport {
        self.in_flight = false;

        match &outcome {
            Ok(media) => info!(title = ?media.title, "Download complete"),
            Err(e) => warn!(error = %e, "Download failed"),
        }

        report(&DownloadPhase::from(outcome))
    }
}
