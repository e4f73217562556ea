//! HTTP request handlers for the Construction Cost Estimating Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers only parse, delegate to the pure calculation functions, and
//! wrap the results; no cost arithmetic lives here.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_breakdown, compute_direct_totals, compute_unit_cost, evaluate_quantity,
    reorder_entries, summarize_categories, top_categories,
};

use super::request::{
    BreakdownRequest, DirectTotalsRequest, QuantityRequest, ReorderRequest, StatementRequest,
    SummaryRequest, UnitCostRequest, index_analyses,
};
use super::response::{
    ApiError, ApiErrorResponse, QuantityResponse, StatementResponse, SummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compute/unit-cost", post(unit_cost_handler))
        .route("/compute/direct-totals", post(direct_totals_handler))
        .route("/compute/breakdown", post(breakdown_handler))
        .route("/compute/summary", post(summary_handler))
        .route("/compute/statement", post(statement_handler))
        .route("/estimate/reorder", post(reorder_handler))
        .route("/quantity/evaluate", post(quantity_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Unwraps a parsed JSON payload or produces the 400 response.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(rejection_response(correlation_id, rejection)),
    }
}

/// Handler for `POST /compute/unit-cost`.
async fn unit_cost_handler(payload: Result<Json<UnitCostRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let cost = compute_unit_cost(&request.analysis);
    info!(
        correlation_id = %correlation_id,
        analysis_id = %request.analysis.id,
        unit_price = %cost.total(),
        "Resolved unit cost"
    );
    (StatusCode::OK, Json(cost)).into_response()
}

/// Handler for `POST /compute/direct-totals`.
async fn direct_totals_handler(
    payload: Result<Json<DirectTotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let analyses = index_analyses(request.analyses);
    let summary = compute_direct_totals(&request.entries, &analyses);
    info!(
        correlation_id = %correlation_id,
        entries = request.entries.len(),
        categories = summary.per_category.len(),
        direct_total = %summary.totals.total(),
        "Aggregated direct costs"
    );
    (StatusCode::OK, Json(summary)).into_response()
}

/// Handler for `POST /compute/breakdown`.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rates = request.rates.unwrap_or_else(|| state.rates().clone());
    let breakdown = compute_breakdown(&request.direct, &rates);
    info!(
        correlation_id = %correlation_id,
        final_total = %breakdown.final_total(),
        "Computed statutory breakdown"
    );
    (StatusCode::OK, Json(breakdown)).into_response()
}

/// Handler for `POST /compute/summary`.
async fn summary_handler(payload: Result<Json<SummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let analyses = index_analyses(request.analyses);
    let summary = compute_direct_totals(&request.entries, &analyses);
    let shares = summarize_categories(&summary);
    let top = request.top_n.map(|n| top_categories(&summary, n));
    info!(
        correlation_id = %correlation_id,
        categories = shares.len(),
        "Projected category summary"
    );
    (StatusCode::OK, Json(SummaryResponse { shares, top })).into_response()
}

/// Handler for `POST /compute/statement`.
///
/// Runs the full pipeline: direct cost aggregation followed by the
/// statutory breakdown, wrapped in a statement envelope.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let analyses = index_analyses(request.analyses);
    let direct = compute_direct_totals(&request.entries, &analyses);
    let rates = request.rates.unwrap_or_else(|| state.rates().clone());
    let breakdown = compute_breakdown(&direct.totals, &rates);

    info!(
        correlation_id = %correlation_id,
        entries = request.entries.len(),
        categories = direct.per_category.len(),
        final_total = %breakdown.final_total(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Statement computed successfully"
    );

    let response = StatementResponse {
        statement_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        direct,
        breakdown,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for `POST /estimate/reorder`.
async fn reorder_handler(payload: Result<Json<ReorderRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match reorder_entries(&request.entries, request.from_index, request.to_index) {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                from = request.from_index,
                to = request.to_index,
                "Reordered estimate entries"
            );
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reorder rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `POST /quantity/evaluate`.
async fn quantity_handler(payload: Result<Json<QuantityRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match evaluate_quantity(&request.formula) {
        Ok(quantity) => {
            info!(
                correlation_id = %correlation_id,
                quantity = %quantity,
                "Evaluated quantity formula"
            );
            (
                StatusCode::OK,
                Json(QuantityResponse {
                    quantity,
                    formula: request.formula,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quantity formula rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
