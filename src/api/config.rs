use crate::error::SummaryError;

/// Placeholder shipped in sample configuration; never a usable key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// Production DeepAffects proxy
pub const DEFAULT_BASE_URL: &str = "https://proxy.api.deepaffects.com";

const SUMMARY_PATH: &str = "/text/generic/api/v1/async/summary";
const STATUS_PATH: &str = "/transaction/generic/api/v1/async/status";

/// Configuration for the DeepAffects API client
#[derive(Debug, Clone)]
pub struct DeepAffectsConfig {
    /// API key (from DEEPAFFECTS_API_KEY env var)
    pub api_key: String,
    /// Scheme and host the endpoint paths are appended to
    pub base_url: String,
}

impl DeepAffectsConfig {
    /// Create config from environment variables
    ///
    /// `DEEPAFFECTS_BASE_URL` overrides the endpoint host when set.
    pub fn from_env() -> Result<Self, SummaryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SummaryError> {
        let api_key = lookup("DEEPAFFECTS_API_KEY").ok_or(SummaryError::MissingApiKey)?;
        let config = Self::new(api_key)?;

        Ok(match lookup("DEEPAFFECTS_BASE_URL") {
            Some(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }

    /// Create with the default endpoint, rejecting empty or placeholder keys
    pub fn new(api_key: impl Into<String>) -> Result<Self, SummaryError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(SummaryError::MissingApiKey);
        }
        if api_key == API_KEY_PLACEHOLDER {
            return Err(SummaryError::PlaceholderApiKey);
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn summary_url(&self) -> String {
        format!("{}{}", self.base_url, SUMMARY_PATH)
    }

    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url, STATUS_PATH)
    }
}
