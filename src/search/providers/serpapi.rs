use crate::config::Config;
use crate::search::{SearchError, SearchProvider, SearchResult, SearchResults};
use serde::Deserialize;

/// SerpApi Google-search provider, locked to the Indonesian market
///
/// Every request carries the same locale parameters the bot was built for:
/// location=Indonesia, google_domain=google.co.id, gl=id, hl=id.
/// Documentation: https://serpapi.com/search-api
pub struct SerpApiProvider {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
    device: Option<String>,
}

const ENDPOINT: &str = "https://serpapi.com/search.json";

impl SerpApiProvider {
    /// Create a provider from the startup configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap(),
            api_key: config.serpapi_key.clone(),
            max_results: config.max_results,
            device: config.device.clone(),
        }
    }

    async fn request(&self, query: &str) -> Result<SearchResults, SearchError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("engine", "google"),
            ("q", query),
            ("location", "Indonesia"),
            ("google_domain", "google.co.id"),
            ("gl", "id"),
            ("hl", "id"),
            ("api_key", self.api_key.as_str()),
        ];
        if let Some(device) = &self.device {
            params.push(("device", device.as_str()));
        }

        tracing::debug!(query = %query, "performing serpapi search");

        let response = self.client.get(ENDPOINT).query(&params).send().await?;
        let payload: SerpApiResponse = response.json().await?;

        let results = reduce(payload, self.max_results)?;

        tracing::debug!(
            query = %query,
            result_count = results.items.len(),
            "serpapi search completed"
        );

        Ok(results)
    }
}

#[async_trait::async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        let outcome = self.request(query).await;

        if let Err(err) = &outcome {
            tracing::warn!(query = %query, error = %err, "serpapi search failed");
        }

        outcome
    }
}

/// The slice of the SerpApi payload this bot cares about.
#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    /// Explicit error text from the provider (invalid key, quota, ...)
    error: Option<String>,

    #[serde(default)]
    organic_results: Vec<SearchResult>,
}

/// Reduce a decoded payload to results, honoring the result cap (0 = uncapped).
fn reduce(payload: SerpApiResponse, max_results: usize) -> Result<SearchResults, SearchError> {
    if let Some(message) = payload.error {
        return Err(SearchError::Api(message));
    }

    let mut items = payload.organic_results;
    if max_results > 0 && items.len() > max_results {
        items.truncate(max_results);
    }

    Ok(SearchResults { items })
}
