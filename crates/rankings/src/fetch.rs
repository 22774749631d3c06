use serde_json::Value;

use crate::fallback::fallback_rankings;
use crate::record::CountryRecord;
use crate::request::{MODEL, RankingsError, extract_text, parse_rankings, request_body};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the one-shot rankings request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl FetchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: MODEL.to_string(),
        }
    }

    /// Reads the key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn from_env() -> Option<Self> {
        std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .map(Self::new)
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Fetches the GDP rankings, absorbing every failure into the fallback
/// dataset. Callers always receive a valid, non-empty array.
pub async fn fetch_rankings(client: &reqwest::Client, config: &FetchConfig) -> Vec<CountryRecord> {
    match try_fetch(client, config).await {
        Ok(records) => {
            tracing::info!(count = records.len(), "fetched GDP rankings");
            records
        }
        Err(err) => {
            tracing::warn!(error = %err, "GDP fetch failed, substituting fallback dataset");
            fallback_rankings()
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &FetchConfig,
) -> Result<Vec<CountryRecord>, RankingsError> {
    let response = client
        .post(config.endpoint())
        .header("x-goog-api-key", &config.api_key)
        .json(&request_body())
        .send()
        .await?
        .error_for_status()?;

    let envelope: Value = response.json().await?;
    let text = extract_text(&envelope).ok_or(RankingsError::MissingText)?;
    parse_rankings(text)
}

#[cfg(test)]
mod tests {
    use super::FetchConfig;

    #[test]
    fn endpoint_layout() {
        let config = FetchConfig::new("k");
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let trailing = FetchConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..FetchConfig::new("k")
        };
        assert_eq!(
            trailing.endpoint(),
            "http://localhost:8080/models/gemini-2.5-flash:generateContent"
        );
    }
}
