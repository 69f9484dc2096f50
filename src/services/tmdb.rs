use crate::services::upstream::{fetch_json, UpstreamError};
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Number of movies kept per year, in whatever order upstream returns.
const TOP_MOVIES_PER_YEAR: usize = 10;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self::with_base_url(client, api_key, TMDB_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn discover_url(&self, year: i32) -> String {
        format!(
            "{}/discover/movie?api_key={}&language=en-US&sort_by=revenue.desc&primary_release_year={}&page=1",
            self.base_url, self.api_key, year
        )
    }

    /// Top movies by revenue for one release year, truncated to
    /// `TOP_MOVIES_PER_YEAR` entries. Entries are kept as opaque JSON.
    pub async fn top_movies_for_year(&self, year: i32) -> Result<Vec<Value>, UpstreamError> {
        let url = self.discover_url(year);
        let context = format!("TMDB discover for year {}", year);
        let data = fetch_json(&self.client, &url, &context).await?;
        Ok(take_results(data))
    }

    /// Aggregates top movies for every year in `start..=end`, ascending,
    /// one sequential upstream call per year. All-or-nothing: the first
    /// failing year aborts the aggregation and its error is returned,
    /// discarding years already collected.
    pub async fn aggregate_top_movies(
        &self,
        start: i32,
        end: i32,
    ) -> Result<BTreeMap<i32, Vec<Value>>, UpstreamError> {
        let mut all_top_movies = BTreeMap::new();

        for year in start..=end {
            let movies = self.top_movies_for_year(year).await?;
            all_top_movies.insert(year, movies);
        }

        info!(
            "Aggregated top movies for {} years ({}-{})",
            all_top_movies.len(),
            start,
            end
        );
        Ok(all_top_movies)
    }
}

fn take_results(data: Value) -> Vec<Value> {
    match data.get("results").and_then(Value::as_array) {
        Some(results) => results
            .iter()
            .take(TOP_MOVIES_PER_YEAR)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}
