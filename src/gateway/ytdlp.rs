use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use regex::Regex;
use tracing::{debug, info, warn};

use super::models::{GatewayConfig, InfoJson};
use super::DownloadGateway;
use crate::domain::{AppError, DownloadOutcome, DownloadRequest, DownloadedMedia};

/// Runs the `yt-dlp` binary once per request.
#[derive(Debug, Clone)]
pub struct YtDlpGateway {
    config: GatewayConfig,
}

impl YtDlpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// The folder goes through `-P` so a `%` in it is never expanded, and `--`
    /// keeps a dash-leading URL from being read as an option.
    fn build_args(&self, request: &DownloadRequest) -> Vec<String> {
        vec![
            "--no-colors".to_string(),
            "--no-simulate".to_string(),
            "--dump-json".to_string(),
            "-f".to_string(),
            self.config.format.clone(),
            "-P".to_string(),
            request.destination.to_string_lossy().into_owned(),
            "-o".to_string(),
            self.config.output_template.clone(),
            "--".to_string(),
            request.url.clone(),
        ]
    }

    /// The last parsable info line wins; a playlist prints one per entry.
    fn parse_media(stdout: &[u8]) -> DownloadedMedia {
        let stdout = String::from_utf8_lossy(stdout);

        stdout
            .lines()
            .rev()
            .find_map(|line| serde_json::from_str::<InfoJson>(line.trim()).ok())
            .map(|info| DownloadedMedia {
                title: info.title,
                path: info
                    .filename
                    .or(info.legacy_filename)
                    .map(PathBuf::from),
            })
            .unwrap_or_default()
    }

    fn failure_message(stderr: &[u8], status: ExitStatus) -> String {
        let stderr = String::from_utf8_lossy(stderr);

        let error_re = Regex::new(r"^ERROR:\s*(.+?)\s*$").ok();
        let error_line = error_re.as_ref().and_then(|re| {
            stderr
                .lines()
                .rev()
                .find_map(|line| re.captures(line).map(|caps| caps[1].to_string()))
        });

        error_line
            .or_else(|| {
                stderr
                    .lines()
                    .map(str::trim)
                    .rev()
                    .find(|line| !line.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("yt-dlp exited with {}", status))
    }
}

impl DownloadGateway for YtDlpGateway {
    fn fetch(&self, request: &DownloadRequest) -> DownloadOutcome {
        let args = self.build_args(request);
        info!(
            url = %request.url,
            destination = %request.destination.display(),
            "Starting yt-dlp download"
        );
        debug!(program = %self.config.program, ?args, "yt-dlp command");

        let output = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                warn!(program = %self.config.program, error = %e, "Failed to launch yt-dlp");
                AppError::Launch {
                    program: self.config.program.clone(),
                    reason: e.to_string(),
                }
            })?;

        if !output.status.success() {
            let message = Self::failure_message(&output.stderr, output.status);
            warn!(status = %output.status, %message, "yt-dlp reported a failure");
            return Err(AppError::Download(message));
        }

        let media = Self::parse_media(&output.stdout);
        info!(title = ?media.title, path = ?media.path, "yt-dlp download finished");
        Ok(media)
    }
}
