//! Environment-based configuration.

use weekgoals_api::DEFAULT_BASE_URL;

pub struct Config {
    /// Base origin of the goals backend.
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("GOALS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { api_base_url }
    }
}
