//! Core data models for the Construction Cost Estimating Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis;
mod breakdown;
mod direct_cost;
mod estimate;

pub use analysis::{ResourceKind, ResourceLine, UnitAnalysis, UnitCost};
pub use breakdown::{BreakdownLine, CostBreakdown, StepKey};
pub use direct_cost::{CategoryTotal, DirectCostSummary, DirectCostTotals};
pub use estimate::{EntryKind, EstimateEntry};
