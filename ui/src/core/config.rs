//! Runtime configuration shared through Dioxus context.
//!
//! On the web the backend is assumed to be same-origin, so the API base is the
//! page origin. Native builds read `WORDGLASS_API_BASE` and fall back to a local
//! development backend.

use crate::cloud::MAX_WORDS;

/// Environment variable consulted by native builds for the backend origin.
pub const API_BASE_ENV: &str = "WORDGLASS_API_BASE";

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// How long the "recomputed" notice stays visible.
pub const STATUS_CLEAR_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub max_words: usize,
    pub status_clear_ms: u64,
}

impl AppConfig {
    /// Resolve configuration for the current platform.
    pub fn from_env() -> Self {
        Self {
            api_base: resolve_api_base(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_words: MAX_WORDS,
            status_clear_ms: STATUS_CLEAR_MS,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn resolve_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_api_base() -> String {
    api_base_from(std::env::var(API_BASE_ENV).ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn api_base_from(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cloud_limits() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.max_words, 120);
        assert_eq!(cfg.status_clear_ms, 2_000);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        assert_eq!(api_base_from(None), DEFAULT_API_BASE);
        assert_eq!(api_base_from(Some("   ".into())), DEFAULT_API_BASE);
        assert_eq!(
            api_base_from(Some(" https://words.example ".into())),
            "https://words.example"
        );
    }

    #[test]
    fn builder_overrides_base() {
        let cfg = AppConfig::default().with_api_base("http://localhost:8080");
        assert_eq!(cfg.api_base, "http://localhost:8080");
    }
}
