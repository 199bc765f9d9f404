use std::time::Duration;

use crate::models::DEFAULT_PAGE_SIZE;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,

    pub token: Option<String>,

    pub request_timeout: Duration,

    pub refresh_interval: Duration,

    pub page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = std::env::var("WORKFLOWHUB_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let token = std::env::var("WORKFLOWHUB_TOKEN").ok();

        let request_timeout = std::env::var("WORKFLOWHUB_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let refresh_interval = std::env::var("WORKFLOWHUB_REFRESH_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);

        let page_size = std::env::var("WORKFLOWHUB_PAGE_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api_url,
            token,
            request_timeout,
            refresh_interval,
            page_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
