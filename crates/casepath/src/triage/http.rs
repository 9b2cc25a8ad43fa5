use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::extractor::TriageIntake;
use super::merit::{Deadline, Precedent};
use super::service::{TriageError, TriageService};

/// Full decision payload: the intake fields plus optional collaborator
/// inputs. `today` defaults to the server clock when absent.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    #[serde(flatten)]
    pub intake: TriageIntake,
    #[serde(default)]
    pub precedents: Vec<Precedent>,
    #[serde(default)]
    pub deadlines: Vec<Deadline>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the triage endpoints.
pub fn triage_router(service: Arc<TriageService>) -> Router {
    Router::new()
        .route("/api/v1/triage/decision", post(decision_handler))
        .route("/api/v1/triage/route", post(route_handler))
        .route("/api/v1/triage/catalog", get(catalog_handler))
        .with_state(service)
}

pub(crate) async fn decision_handler(
    State(service): State<Arc<TriageService>>,
    axum::Json(request): axum::Json<DecisionRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    match service.decide(&request.intake, &request.precedents, &request.deadlines, today) {
        Ok(decision) => (StatusCode::OK, axum::Json(decision)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn route_handler(
    State(service): State<Arc<TriageService>>,
    axum::Json(intake): axum::Json<TriageIntake>,
) -> Response {
    match service.route(&intake) {
        Ok(routing) => (StatusCode::OK, axum::Json(routing)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn catalog_handler(State(service): State<Arc<TriageService>>) -> Response {
    let catalog = service.catalog();
    let payload = json!({
        "version": catalog.version(),
        "rule_count": catalog.len(),
        "tribunals": catalog.tribunals(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_response(error: TriageError) -> Response {
    let status = match &error {
        TriageError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TriageError::PathwayRequired(_) => StatusCode::BAD_REQUEST,
        TriageError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
