//! Process-wide configuration.
//!
//! Built once in `main` from CLI flags (with environment fallbacks) and
//! shared read-only with every component that talks to the outside world.

use std::time::Duration;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_WEB: &str = "https://github.com";
pub const DEFAULT_RAW_CONTENT: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_INFERENCE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "qwen-2.5-32b";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the GitHub API and raw host. Optional.
    pub github_token: Option<String>,
    pub github_api_base: String,
    /// Prefix of browsable file URLs, e.g. `https://github.com`.
    pub github_web_base: String,
    /// Prefix of raw content URLs, e.g. `https://raw.githubusercontent.com`.
    pub raw_content_base: String,
    pub inference: InferenceConfig,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Required for annotation; a missing key surfaces when a call is made.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_base: DEFAULT_GITHUB_API.to_string(),
            github_web_base: DEFAULT_GITHUB_WEB.to_string(),
            raw_content_base: DEFAULT_RAW_CONTENT.to_string(),
            inference: InferenceConfig {
                api_key: None,
                base_url: DEFAULT_INFERENCE_URL.to_string(),
                model: DEFAULT_MODEL.to_string(),
            },
            timeout: Duration::from_secs(120),
        }
    }
}

/// Treats empty strings (e.g. `GITHUB_TOKEN=`) as unset.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_count_as_missing() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("ghp_x".to_string())), Some("ghp_x".to_string()));
    }
}
