// config.rs — Tuner configuration.
//
// The adapter is "configured" exactly when an API key is present. The
// key comes from the environment, mirroring how the set is deployed:
// no key means the auto-tuner runs in its offline Documentary mode.

use std::time::Duration;

/// Environment variable holding the naming service API key.
pub const API_KEY_ENV: &str = "RTV_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the naming service adapter.
#[derive(Debug, Clone)]
pub struct TunerConfig {
    /// API key. `None` means unconfigured — no network call is ever made.
    pub api_key: Option<String>,

    /// Service base URL (no trailing slash).
    pub base_url: String,

    /// Model identifier to request.
    pub model: String,

    /// Hard bound on each naming call. A slow service must not wedge the
    /// create flow; timeouts resolve to the interrupted-broadcast fallback.
    pub timeout: Duration,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TunerConfig {
    /// Build a config from the environment: defaults everywhere, the API
    /// key from [`API_KEY_ENV`] if set and non-empty.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Whether a key is present — i.e. whether calls will hit the network.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
