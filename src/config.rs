//! Application Configuration
//!
//! Values are baked in at build time (`trunk build` / `cargo build`) from
//! environment variables, with defaults matching a local backend.

use log::LevelFilter;

/// Default backend base URL, including the `/api` prefix
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Local storage key holding the registered user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Smallest pledge accepted by the pledge form
pub const MIN_PLEDGE: f64 = 100.0;

/// Longest pledge comment the backend stores
pub const MAX_PLEDGE_MESSAGE: usize = 500;

/// Image shown for projects without a usable `image_url`
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_url: String,
    pub log_level: LevelFilter,
    /// Projects requested for the landing grid
    pub page_size: u32,
    pub storage_key: &'static str,
    /// How long a toast stays visible
    pub toast_millis: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            page_size: 12,
            storage_key: CURRENT_USER_KEY,
            toast_millis: 4000,
        }
    }
}

impl AppConfig {
    /// Build-time configuration (`CROWDFUND_API_URL`, `CROWDFUND_LOG`)
    pub fn load() -> Self {
        Self::from_values(option_env!("CROWDFUND_API_URL"), option_env!("CROWDFUND_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level {
            config.log_level = console_logger::parse_level(level);
        }
        config
    }
}
