//! Response types for the Construction Cost Estimating Engine API.
//!
//! This module defines the error response structures, error mapping, and
//! the response envelopes for the statement, summary, and quantity
//! endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::CategoryShare;
use crate::error::EngineError;
use crate::models::{CategoryTotal, CostBreakdown, DirectCostSummary};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::FormulaSyntax {
                expression,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FORMULA_SYNTAX",
                    format!("Invalid quantity formula '{}'", expression),
                    message,
                ),
            },
            EngineError::FormulaEvaluation {
                expression,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FORMULA_EVALUATION",
                    format!("Failed to evaluate quantity formula '{}'", expression),
                    message,
                ),
            },
            EngineError::InvalidReorder { from, len } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_REORDER",
                    format!("Cannot reorder from index {}", from),
                    format!("The sequence has {} entries", len),
                ),
            },
        }
    }
}

/// Response envelope for `POST /compute/statement`.
///
/// The identifier, timestamp, and engine version belong to the request
/// envelope only; the wrapped summary and breakdown are the deterministic
/// engine output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementResponse {
    /// Unique identifier for this statement computation.
    pub statement_id: Uuid,
    /// When the statement was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the statement.
    pub engine_version: String,
    /// Direct cost aggregation output.
    pub direct: DirectCostSummary,
    /// The statutory breakdown chain.
    pub breakdown: CostBreakdown,
}

/// Response body for `POST /compute/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Per-category shares in sequence order.
    pub shares: Vec<CategoryShare>,
    /// Top-N ranking by total, present when the request asked for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Vec<CategoryTotal>>,
}

/// Response body for `POST /quantity/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityResponse {
    /// The evaluated quantity, rounded to three decimal places.
    pub quantity: Decimal,
    /// The formula the quantity was evaluated from.
    pub formula: String,
}
