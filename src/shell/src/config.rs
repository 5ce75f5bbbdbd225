use anyhow::{Context, Result};
use std::env;

/// SoftAP address the device answers on before it joins a network
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Shell configuration loaded from the environment at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Base URL of the device API, without trailing slash
    pub device_url: String,

    /// Offset from UTC used to display device timestamps
    pub utc_offset_minutes: i32,
}

impl ShellConfig {
    /// Load configuration from process environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let device_url = lookup("DEVICE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string());

        anyhow::ensure!(
            device_url.starts_with("http://") || device_url.starts_with("https://"),
            "DEVICE_URL must start with http:// or https://, got {device_url:?}"
        );

        let utc_offset_minutes = match lookup("PANEL_UTC_OFFSET_MINUTES") {
            Some(value) => value
                .trim()
                .parse::<i32>()
                .context("failed to parse PANEL_UTC_OFFSET_MINUTES")?,
            None => 0,
        };

        anyhow::ensure!(
            utc_offset_minutes.abs() <= MAX_UTC_OFFSET_MINUTES,
            "PANEL_UTC_OFFSET_MINUTES out of range: {utc_offset_minutes}"
        );

        Ok(Self {
            device_url,
            utc_offset_minutes,
        })
    }
}
