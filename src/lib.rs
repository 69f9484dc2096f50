use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod models;
pub mod routes;
pub mod services;

use routes::{
    fred::{fred_series, inflation},
    health::health_check,
    movies::{not_found, top_movies_all},
};
use services::{fred::FredClient, tmdb::TmdbClient};

pub struct AppState {
    pub fred: FredClient,
    pub tmdb: TmdbClient,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/api/fred", get(fred_series))
        .route("/api/inflation", get(inflation))
        .route("/api/top-movies/all", get(top_movies_all))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
