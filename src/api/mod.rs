//! HTTP API module for the Construction Cost Estimating Engine.
//!
//! This module provides the REST API endpoints wrapping the pure
//! calculation functions: unit cost resolution, direct cost aggregation,
//! the statutory breakdown, summary projection, entry reordering, and
//! quantity formula evaluation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BreakdownRequest, DirectTotalsRequest, QuantityRequest, ReorderRequest, StatementRequest,
    SummaryRequest, UnitCostRequest,
};
pub use response::{ApiError, QuantityResponse, StatementResponse, SummaryResponse};
pub use state::AppState;
