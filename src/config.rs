//! Application settings shared by the server and the browser bundle.
//!
//! Values are baked in at compile time so the hydrated client and the
//! server-rendered markup agree without a round trip.
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://tws-backend-jssr.up.railway.app";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Reads `REVIEWS_API_BASE_URL` and `REVIEWS_POLL_INTERVAL_MS` as set
    /// when the crate was compiled, falling back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("REVIEWS_API_BASE_URL"),
            option_env!("REVIEWS_POLL_INTERVAL_MS"),
        )
    }

    pub fn from_values(base_url: Option<&str>, poll_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        let poll_interval = match poll_ms.map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(ms)) if ms > 0 => Duration::from_millis(ms),
            Some(_) => {
                leptos::logging::warn!(
                    "[CONFIG] Ignoring invalid REVIEWS_POLL_INTERVAL_MS, using {:?}",
                    defaults.poll_interval
                );
                defaults.poll_interval
            }
            None => defaults.poll_interval,
        };
        Self {
            api_base_url,
            poll_interval,
        }
    }
}
