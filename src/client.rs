///! NASA NEO REST API client
///!
///! Owns the HTTP client, base URL, and API key. One method per endpoint;
///! each issues a single GET, checks the status code, and reads the whole
///! body into memory before anything is parsed. No retries, no caching.

use std::time::Duration;

use crate::config::NeoConfig;
use crate::error::NeoError;

pub struct NeoApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NeoApiClient {
    pub fn new(config: &NeoConfig) -> Result<Self, NeoError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("neofeed/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the raw feed JSON for a date window. The dates are not
    /// validated here; a malformed date surfaces as whatever rejection the
    /// API returns. They are percent-encoded, so arbitrary caller input
    /// cannot break out of its query parameter.
    pub async fn fetch_feed(&self, start_date: &str, end_date: &str) -> Result<String, NeoError> {
        // Deliberately not logging the URL: it carries the API key.
        tracing::info!("Fetching NEO feed for {} .. {}", start_date, end_date);
        self.get_text(&self.feed_url(start_date, end_date)).await
    }

    /// Fetch the raw JSON record of a single NEO by its NASA reference ID.
    pub async fn fetch_neo(&self, reference_id: &str) -> Result<String, NeoError> {
        tracing::info!("Fetching NEO record {}", reference_id);
        let url = format!(
            "{}/neo/{}?api_key={}",
            self.base_url,
            urlencoding::encode(reference_id),
            urlencoding::encode(&self.api_key),
        );
        self.get_text(&url).await
    }

    pub(crate) fn feed_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/feed?start_date={}&end_date={}&api_key={}",
            self.base_url,
            urlencoding::encode(start_date),
            urlencoding::encode(end_date),
            urlencoding::encode(&self.api_key),
        )
    }

    async fn get_text(&self, url: &str) -> Result<String, NeoError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NeoError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
