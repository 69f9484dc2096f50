use crate::models::responses::ErrorResponse;
use crate::SharedState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Datelike, Utc};
use tracing::error;

const START_YEAR: i32 = 2000;

/// Top movies by revenue for every year from 2000 through the current
/// year, keyed by year. Any failure collapses to a plain 500 so that
/// existing clients keep seeing the same error shape.
pub async fn top_movies_all(State(state): State<SharedState>) -> Response {
    let current_year = Utc::now().year();

    match state.tmdb.aggregate_top_movies(START_YEAR, current_year).await {
        Ok(all_top_movies) => Json(all_top_movies).into_response(),
        Err(e) => {
            error!("Failed to aggregate top movies: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Page not found").into_response()
}
