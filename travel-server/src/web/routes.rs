//! HTTP route handlers.

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::cache::SuggestionKey;
use crate::domain::{BudgetRequest, Destination, EngineError, SearchHistoryEntry, SearchType};
use crate::engine::{compute_budget_recommendations, compute_nearby_suggestions};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/destinations", get(list_destinations))
        .route("/api/budget", post(budget_recommendations))
        .route("/api/nearby", get(nearby_suggestions))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search forms.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let destinations = state.catalog.destinations().await;
    let template = IndexTemplate {
        destinations: destinations.iter().map(|d| d.name.clone()).collect(),
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List the catalog.
async fn list_destinations(State(state): State<AppState>) -> Json<DestinationListResponse> {
    let destinations = state.catalog.destinations().await;

    Json(DestinationListResponse {
        destinations: destinations
            .iter()
            .map(DestinationSummary::from_destination)
            .collect(),
        total: destinations.len(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Bound the number of destinations handed to the engine.
fn candidates<'a>(state: &AppState, destinations: &'a [Destination]) -> &'a [Destination] {
    if destinations.len() > state.max_candidates {
        warn!(
            available = destinations.len(),
            max = state.max_candidates,
            "catalog larger than candidate cap, truncating"
        );
        &destinations[..state.max_candidates]
    } else {
        destinations
    }
}

/// Append a search to the history. Failures are logged, not returned.
async fn record(state: &AppState, user_id: &str, kind: SearchType, names: Vec<String>) {
    if user_id.is_empty() {
        return;
    }

    let entry = SearchHistoryEntry::new(user_id, kind, names, Utc::now());
    if let Err(e) = state.catalog.record_search(entry).await {
        warn!(error = %e, "failed to record search");
    }
}

/// Rank destinations for a budget.
async fn budget_recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: BudgetSearchRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "rejected budget request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = BudgetRequest::parse(&req.search)?;
    let destinations = state.catalog.destinations().await;
    let result =
        compute_budget_recommendations(&request, candidates(&state, &destinations), &state.engine)?;

    let user_id = req.user_id.as_deref().unwrap_or_default().trim();
    let names = result.recommendations.iter().map(|r| r.name.clone()).collect();
    record(&state, user_id, SearchType::BudgetSearch, names).await;

    if accepts_html(&headers) {
        let html = BudgetResultsTemplate::from_result(&result, Utc::now().month() as u8)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(result).into_response())
    }
}

/// Suggest destinations near a center point, through the result cache.
async fn nearby_suggestions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NearbyQuery>,
) -> Result<Response, AppError> {
    let request = query.to_request()?;
    let key = SuggestionKey::for_request(&request, &state.engine)?;

    let result = match state.cache.get(&key).await {
        Some(cached) => {
            debug!(?key, "nearby cache hit");
            cached
        }
        None => {
            let destinations = state.catalog.destinations().await;
            let history = state.catalog.history().await;
            let computed = Arc::new(compute_nearby_suggestions(
                &request,
                candidates(&state, &destinations),
                &history,
                Utc::now(),
                &state.engine,
            )?);
            state.cache.insert(key, Arc::clone(&computed)).await;
            computed
        }
    };

    let names = result.center.name.iter().cloned().collect();
    record(&state, &request.requester_id, SearchType::Nearby, names).await;

    if accepts_html(&headers) {
        let html = NearbyResultsTemplate::from_result(&result)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(result.as_ref()).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        debug!(error = %e, "engine rejected request");
        let message = e.user_message();
        match e {
            EngineError::Validation(_) => AppError::BadRequest { message },
            EngineError::NotFound(_) => AppError::NotFound { message },
            EngineError::Computation(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::catalog::Catalog;
    use crate::engine::EngineConfig;
    use crate::engine::fixtures::{five_destinations, search};
    use axum::body::to_bytes;
    use axum::http::HeaderValue;

    fn state() -> AppState {
        let history = vec![
            search("u1", SearchType::Planner, &["Murree"], 2),
            search("u1", SearchType::Planner, &["Murree"], 3),
        ];
        let catalog = Catalog::from_parts(five_destinations(), history).unwrap();
        AppState::new(catalog, &CacheConfig::default(), EngineConfig::default(), 500)
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn nearby_query(destination: &str, user_id: &str) -> NearbyQuery {
        NearbyQuery {
            destination: Some(destination.to_string()),
            user_id: Some(user_id.to_string()),
            ..NearbyQuery::default()
        }
    }

    #[test]
    fn accepts_html_checks_header() {
        assert!(accepts_html(&html_headers()));
        assert!(!accepts_html(&HeaderMap::new()));
    }

    #[test]
    fn engine_errors_map_to_status() {
        let status = |e: EngineError| AppError::from(e).into_response().status();
        assert_eq!(status(EngineError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status(EngineError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(
            status(EngineError::Computation("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn candidates_are_capped() {
        let mut state = state();
        state.max_candidates = 2;
        let destinations = five_destinations();
        assert_eq!(candidates(&state, &destinations).len(), 2);

        state.max_candidates = 10;
        assert_eq!(candidates(&state, &destinations).len(), 5);
    }

    #[tokio::test]
    async fn budget_returns_json_and_records_search() {
        let state = state();
        let body = Bytes::from_static(
            br#"{"budget": "30000", "days": 3, "starting_city": "Lahore", "travel_type": "Solo", "user_id": "u2"}"#,
        );

        let response = budget_recommendations(State(state.clone()), HeaderMap::new(), body)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = json(response).await;
        assert_eq!(value["total_cities_analyzed"], 5);
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(value["recommendations"][0]["name"], "Hunza");
        assert_eq!(value["input"]["days"], 3);

        let history = state.catalog.history().await;
        let last = history.last().unwrap();
        assert_eq!(last.user_id, "u2");
        assert_eq!(last.search_type, SearchType::BudgetSearch);
        assert_eq!(last.destinations, vec!["Hunza", "Karachi", "Islamabad"]);
    }

    #[tokio::test]
    async fn budget_renders_html_fragment() {
        let body = Bytes::from_static(br#"{"budget": 30000, "days": 3}"#);
        let response = budget_recommendations(State(state()), html_headers(), body)
            .await
            .unwrap();

        let html = text(response).await;
        assert!(html.contains("Hunza"));
        assert!(html.contains("30,000 for 3 days"));
    }

    #[tokio::test]
    async fn budget_rejects_bad_input() {
        let err = budget_recommendations(State(state()), HeaderMap::new(), Bytes::from_static(b"{"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let body = Bytes::from_static(br#"{"budget": "lots", "days": 3}"#);
        let response = budget_recommendations(State(state()), HeaderMap::new(), body)
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["error"], "Invalid input: budget must be numeric");
    }

    #[tokio::test]
    async fn budget_with_empty_catalog_is_not_found() {
        let catalog = Catalog::from_parts(vec![], vec![]).unwrap();
        let state = AppState::new(catalog, &CacheConfig::default(), EngineConfig::default(), 500);
        let body = Bytes::from_static(br#"{"budget": 30000, "days": 3}"#);

        let err = budget_recommendations(State(state), HeaderMap::new(), body)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn nearby_returns_json_and_caches() {
        let state = state();
        let response = nearby_suggestions(
            State(state.clone()),
            HeaderMap::new(),
            Query(nearby_query("Islamabad", "u1")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = json(response).await;
        assert_eq!(value["total"], 2);
        assert_eq!(value["suggestions"][0]["name"], "Murree");
        assert_eq!(value["suggestions"][0]["matches_preference"], true);
        assert_eq!(value["user_preferences"][0], "Murree");

        let request = nearby_query("ISLAMABAD", "u1").to_request().unwrap();
        let key = SuggestionKey::for_request(&request, &state.engine).unwrap();
        assert!(state.cache.get(&key).await.is_some());

        let history = state.catalog.history().await;
        assert_eq!(history.last().unwrap().search_type, SearchType::Nearby);
    }

    #[tokio::test]
    async fn nearby_renders_html_fragment() {
        let response = nearby_suggestions(
            State(state()),
            html_headers(),
            Query(nearby_query("islamabad", "")),
        )
        .await
        .unwrap();

        let html = text(response).await;
        assert!(html.contains("Within 300 km of Islamabad"));
        assert!(html.contains("Lahore"));
    }

    #[tokio::test]
    async fn nearby_errors() {
        let err = nearby_suggestions(State(state()), HeaderMap::new(), Query(NearbyQuery::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = nearby_suggestions(
            State(state()),
            HeaderMap::new(),
            Query(nearby_query("Atlantis", "")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn named_center_at_coordinates_is_excluded_after_unnamed_lookup() {
        let state = state();
        let at = |destination: Option<&str>| NearbyQuery {
            destination: destination.map(str::to_string),
            lat: Some("33.70".to_string()),
            lng: Some("73.06".to_string()),
            ..NearbyQuery::default()
        };

        let response = nearby_suggestions(State(state.clone()), HeaderMap::new(), Query(at(None)))
            .await
            .unwrap();
        let unnamed = json(response).await;
        assert_eq!(unnamed["suggestions"][0]["name"], "Islamabad");

        let response = nearby_suggestions(
            State(state.clone()),
            HeaderMap::new(),
            Query(at(Some("Islamabad"))),
        )
        .await
        .unwrap();
        let named = json(response).await;
        assert_eq!(named["center"]["name"], "Islamabad");
        let names: Vec<&str> = named["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Murree", "Lahore"]);
    }

    #[tokio::test]
    async fn lists_destinations() {
        let Json(listing) = list_destinations(State(state())).await;
        assert_eq!(listing.total, 5);
        assert_eq!(listing.destinations[0].name, "Murree");
        assert_eq!(listing.destinations[0].best_months[0], "April");
    }
}
