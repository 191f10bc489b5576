use serde::Deserialize;

use crate::utils::locate_program;

const PROGRAM_ENV: &str = "YTV_YTDLP_PATH";

/// JSON info object yt-dlp prints for every downloaded item
#[derive(Debug, Clone, Deserialize)]
pub struct InfoJson {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "_filename")]
    pub legacy_filename: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Configuration for the yt-dlp gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub program: String,
    pub format: String,
    pub output_template: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            format: "best".to_string(),
            output_template: "%(title)s.%(ext)s".to_string(),
        }
    }
}

impl GatewayConfig {
    /// `YTV_YTDLP_PATH` wins, then the usual install locations, then `PATH`.
    pub fn from_env() -> Self {
        let program = std::env::var(PROGRAM_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| locate_program("yt-dlp"));

        Self {
            program,
            ..Default::default()
        }
    }
}
