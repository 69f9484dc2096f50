use crate::services::upstream::{fetch_json, UpstreamError};
use reqwest::Client;
use serde_json::Value;

const FRED_BASE_URL: &str = "https://api.stlouisfed.org";

#[derive(Debug, Clone)]
pub struct FredClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FredClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self::with_base_url(client, api_key, FRED_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn observations_url(&self, series_id: &str) -> String {
        format!(
            "{}/fred/series/observations?series_id={}&api_key={}&file_type=json",
            self.base_url, series_id, self.api_key
        )
    }

    /// Fetches all observations for a FRED series and passes the
    /// upstream JSON through unchanged.
    pub async fn fetch_series(&self, series_id: &str) -> Result<Value, UpstreamError> {
        let url = self.observations_url(series_id);
        let context = format!("FRED series {}", series_id);
        fetch_json(&self.client, &url, &context).await
    }
}
