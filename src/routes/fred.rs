use crate::models::responses::ErrorResponse;
use crate::services::upstream::UpstreamError;
use crate::SharedState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use tracing::error;

const GDP_SERIES_ID: &str = "GDP";
const CPI_SERIES_ID: &str = "CPIAUCSL";

pub async fn fred_series(State(state): State<SharedState>) -> Response {
    match state.fred.fetch_series(GDP_SERIES_ID).await {
        Ok(data) => Json::<Value>(data).into_response(),
        Err(e) => {
            error!("Failed to fetch FRED data: {}", e);
            series_error_response(&e, "Error fetching data from FRED")
        }
    }
}

pub async fn inflation(State(state): State<SharedState>) -> Response {
    match state.fred.fetch_series(CPI_SERIES_ID).await {
        Ok(data) => Json::<Value>(data).into_response(),
        Err(e) => {
            error!("Failed to fetch inflation data: {}", e);
            series_error_response(&e, "Error fetching inflation data from FRED")
        }
    }
}

// Non-success upstream statuses propagate as-is with a route-specific
// message; transport failures become a plain 500.
fn series_error_response(err: &UpstreamError, message: &str) -> Response {
    let (status, error) = match err {
        UpstreamError::Http { .. } => (
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message.to_string(),
        ),
        UpstreamError::Transport { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    (status, Json(ErrorResponse { error })).into_response()
}
