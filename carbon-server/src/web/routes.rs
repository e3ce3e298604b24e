//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::geocode::GeocodeError;
use crate::itinerary::{self, SubmitError, SubmitItinerary};
use crate::store::ItineraryStore;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations/search", get(search_locations))
        .route(
            "/api/itineraries",
            get(list_itineraries).post(create_itinerary),
        )
        .route("/api/itineraries/preview", post(preview_itinerary))
        .route("/api/itineraries/:id", get(get_itinerary))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing recorded itineraries.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let itineraries = state
        .store
        .get_all_itineraries()
        .await
        .iter()
        .map(ItinerarySummaryView::from_record)
        .collect();

    let html = IndexTemplate { itineraries }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html).into_response())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search locations by free text.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Result<Json<LocationSearchResponse>, AppError> {
    let limit = req.effective_limit();
    let places = state.geocoder.search(&req.q).await?;

    let places = places.iter().take(limit).cloned().collect();

    Ok(Json(LocationSearchResponse { places }))
}

/// Parse a submission body, logging it when it isn't valid JSON.
fn parse_submission(body: &Bytes) -> Result<SubmitItinerary, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid itinerary JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Compute emissions for a submission without storing it.
async fn preview_itinerary(body: Bytes) -> Result<Response, AppError> {
    let req = parse_submission(&body)?;
    let estimate = itinerary::preview(&req)?;
    Ok(Json(estimate).into_response())
}

/// Create an itinerary, computing and storing its emissions.
async fn create_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req = parse_submission(&body)?;
    let details = itinerary::submit(state.store.as_ref(), &req).await?;
    Ok(Json(CreateItineraryResponse::new(details)).into_response())
}

/// List all stored itineraries.
async fn list_itineraries(State(state): State<AppState>) -> Response {
    Json(state.store.get_all_itineraries().await).into_response()
}

/// Get one itinerary with its segments.
async fn get_itinerary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: u64 = id.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid itinerary id: {id}"),
    })?;

    let details = itinerary::load(state.store.as_ref(), id).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = ItineraryTemplate {
            itinerary: ItineraryView::from_details(&details),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(details).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SubmitError> for AppError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::NotFound(_) => AppError::NotFound {
                message: "Itinerary not found".to_string(),
            },
            e if e.is_validation() => AppError::BadRequest {
                message: e.to_string(),
            },
            e => {
                error!(error = %e, "failed to store itinerary");
                AppError::Internal {
                    message: "Failed to create itinerary".to_string(),
                }
            }
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        error!(error = %e, "location search failed");
        AppError::Internal {
            message: "Location search failed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
