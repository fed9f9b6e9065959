use crate::models::CourtRecord;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Public Courts and Tribunals Finder endpoint
pub const DEFAULT_BASE_URL: &str = "https://courttribunalfinder.service.gov.uk";

/// Default bound on a single lookup
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Errors that can occur when querying the Courts and Tribunals Finder
#[derive(Debug, Error)]
pub enum CourtFinderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("No courts found for postcode {postcode}, check the postcode is correct")]
    NoCourtsFound { postcode: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Courts and Tribunals Finder API client
///
/// Returns the (up to ten) nearest courts for a postcode, unfiltered.
pub struct CourtFinderClient {
    base_url: String,
    client: Client,
}

impl CourtFinderClient {
    /// Create a new client with a bounded per-request wait
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CourtFinderError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Build the search URL for a postcode
    pub fn search_url(&self, postcode: &str) -> String {
        format!(
            "{}/search/results.json?postcode={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(postcode)
        )
    }

    /// Fetch the courts nearest to `postcode`
    ///
    /// An empty result is an error: the API answers with `[]` for postcodes
    /// it cannot resolve.
    pub async fn get_courts(&self, postcode: &str) -> Result<Vec<CourtRecord>, CourtFinderError> {
        let url = self.search_url(postcode);

        tracing::debug!("Fetching courts from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::warn!("Court search for {} failed: {} - {}", postcode, status, body);
            return Err(CourtFinderError::ApiError(format!(
                "Failed to search courts: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let entries = json
            .as_array()
            .ok_or_else(|| CourtFinderError::InvalidResponse("Expected a JSON array of courts".into()))?;

        if entries.is_empty() {
            return Err(CourtFinderError::NoCourtsFound {
                postcode: postcode.to_string(),
            });
        }

        let courts = entries
            .iter()
            .map(|entry| {
                serde_json::from_value::<CourtRecord>(entry.clone())
                    .map_err(|e| CourtFinderError::InvalidResponse(format!("Failed to parse court: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Found {} courts near {}", courts.len(), postcode);

        Ok(courts)
    }
}
