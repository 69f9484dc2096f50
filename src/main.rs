use dashboard_service::{router, AppState};
use dashboard_service::services::{fred::FredClient, tmdb::TmdbClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("dashboard_service=info,tower_http=info")
        .init();

    let fred_api_key = std::env::var("FRED_API_KEY").expect("FRED_API_KEY must be set");
    let tmdb_api_key = std::env::var("TMDB_API_KEY").expect("TMDB_API_KEY must be set");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client");

    let state = Arc::new(AppState {
        fred: FredClient::new(client.clone(), fred_api_key),
        tmdb: TmdbClient::new(client, tmdb_api_key),
    });

    let app = router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Dashboard service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
