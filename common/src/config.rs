//! Client configuration: where the API lives and which headers go on every request.

/// Build-time variable holding the API base URL.
pub const API_URL_VAR: &str = "VOLUNTEER_API_URL";

/// Base URL used when [`API_URL_VAR`] is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix), without a trailing slash.
    pub base_url: String,

    /// Headers attached to every request before the bearer header.
    pub default_headers: Vec<(String, String)>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                // The development API sits behind an ngrok tunnel.
                ("ngrok-skip-browser-warning".to_string(), "true".to_string()),
            ],
        }
    }

    /// Reads the base URL baked in at build time, as the browser bundle has no
    /// process environment at runtime.
    pub fn from_env() -> Self {
        Self::new(option_env!("VOLUNTEER_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Absolute URL for an API path such as `/api/opportunities/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://api.example.org//");
        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(
            config.url("/api/leaderboard/"),
            "https://api.example.org/api/leaderboard/"
        );
    }

    #[test]
    fn json_and_tunnel_headers_are_always_present() {
        let config = ApiConfig::new(DEFAULT_BASE_URL);
        let names: Vec<&str> = config
            .default_headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Content-Type", "ngrok-skip-browser-warning"]);
    }
}
