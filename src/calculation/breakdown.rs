//! Statutory cost breakdown chain.
//!
//! A fixed, ordered waterfall over the direct totals M (material),
//! L (labor), E (expense). Every rate-derived amount is truncated to the
//! whole currency unit the moment it is computed, and later steps consume
//! the truncated value. The senior care surcharge bases on the already
//! truncated health insurance amount — the only step whose base is a
//! derived surcharge rather than a direct total.
//!
//! The output lists every named total in chain order with a formula
//! description over earlier step keys; an external exporter regenerates
//! spreadsheet formulas from exactly this dependency chain, so steps are
//! never inlined, collapsed, or reordered.

use rust_decimal::Decimal;

use crate::config::{RateKey, RateSchedule};
use crate::models::{BreakdownLine, CostBreakdown, DirectCostTotals, StepKey};

use super::rounding::floored_percent;

/// Computes the statutory breakdown chain from direct totals and a rate
/// schedule.
///
/// Rates absent from the schedule read as zero, so the chain always
/// completes. All-zero direct totals produce an all-zero chain. The
/// function is deterministic: identical inputs yield identical output.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::compute_breakdown;
/// use estimate_engine::config::RateSchedule;
/// use estimate_engine::models::{DirectCostTotals, StepKey};
/// use rust_decimal::Decimal;
///
/// let direct = DirectCostTotals {
///     material: Decimal::from(1_000_000),
///     labor: Decimal::from(500_000),
///     expense: Decimal::from(100_000),
/// };
///
/// let breakdown = compute_breakdown(&direct, &RateSchedule::standard());
/// assert_eq!(
///     breakdown.amount(StepKey::IndirectLabor),
///     Some(Decimal::from(72_500))
/// );
/// assert_eq!(
///     breakdown.amount(StepKey::TotalLabor),
///     Some(Decimal::from(572_500))
/// );
/// ```
pub fn compute_breakdown(direct: &DirectCostTotals, rates: &RateSchedule) -> CostBreakdown {
    let r = |key: RateKey| rates.percent(key);

    let indirect_labor = floored_percent(direct.labor, r(RateKey::IndirectLabor));
    let total_labor = direct.labor + indirect_labor;

    let employment_ins = floored_percent(direct.labor, r(RateKey::EmploymentIns));
    let health_ins = floored_percent(direct.labor, r(RateKey::HealthIns));
    let pension = floored_percent(direct.labor, r(RateKey::Pension));
    // Bases on the truncated health insurance amount, not its pre-floor
    // value.
    let senior_care = floored_percent(health_ins, r(RateKey::SeniorCare));
    let safety_mgmt = floored_percent(direct.material + direct.labor, r(RateKey::SafetyMgmt));
    let other_expense = floored_percent(direct.material + total_labor, r(RateKey::OtherExpense));

    let total_expense = direct.expense
        + employment_ins
        + health_ins
        + pension
        + senior_care
        + safety_mgmt
        + other_expense;

    let pure_cost = direct.material + total_labor + total_expense;

    let gen_admin = floored_percent(pure_cost, r(RateKey::GenAdmin));
    let total_cost = pure_cost + gen_admin;

    // Material is excluded from the profit base.
    let profit = floored_percent(total_labor + total_expense + gen_admin, r(RateKey::Profit));

    let supply_price = total_cost + profit;
    let vat = floored_percent(supply_price, r(RateKey::Vat));
    let final_total = supply_price + vat;

    let plain = |key: StepKey, formula: &str, amount: Decimal| BreakdownLine {
        key,
        label: key.label().to_string(),
        formula: formula.to_string(),
        rate: None,
        amount,
    };
    let rated = |key: StepKey, formula: &str, rate_key: RateKey, amount: Decimal| BreakdownLine {
        key,
        label: key.label().to_string(),
        formula: formula.to_string(),
        rate: Some(r(rate_key)),
        amount,
    };

    CostBreakdown {
        lines: vec![
            plain(
                StepKey::DirectMaterial,
                "sum of category material totals",
                direct.material,
            ),
            plain(
                StepKey::DirectLabor,
                "sum of category labor totals",
                direct.labor,
            ),
            rated(
                StepKey::IndirectLabor,
                "direct_labor × rate",
                RateKey::IndirectLabor,
                indirect_labor,
            ),
            plain(
                StepKey::TotalLabor,
                "direct_labor + indirect_labor",
                total_labor,
            ),
            plain(
                StepKey::DirectExpense,
                "sum of category expense totals",
                direct.expense,
            ),
            rated(
                StepKey::EmploymentIns,
                "direct_labor × rate",
                RateKey::EmploymentIns,
                employment_ins,
            ),
            rated(
                StepKey::HealthIns,
                "direct_labor × rate",
                RateKey::HealthIns,
                health_ins,
            ),
            rated(
                StepKey::Pension,
                "direct_labor × rate",
                RateKey::Pension,
                pension,
            ),
            rated(
                StepKey::SeniorCare,
                "health_ins × rate",
                RateKey::SeniorCare,
                senior_care,
            ),
            rated(
                StepKey::SafetyMgmt,
                "(direct_material + direct_labor) × rate",
                RateKey::SafetyMgmt,
                safety_mgmt,
            ),
            rated(
                StepKey::OtherExpense,
                "(direct_material + total_labor) × rate",
                RateKey::OtherExpense,
                other_expense,
            ),
            plain(
                StepKey::TotalExpense,
                "direct_expense + employment_ins + health_ins + pension \
                 + senior_care + safety_mgmt + other_expense",
                total_expense,
            ),
            plain(
                StepKey::PureCost,
                "direct_material + total_labor + total_expense",
                pure_cost,
            ),
            rated(
                StepKey::GenAdmin,
                "pure_cost × rate",
                RateKey::GenAdmin,
                gen_admin,
            ),
            plain(StepKey::TotalCost, "pure_cost + gen_admin", total_cost),
            rated(
                StepKey::Profit,
                "(total_labor + total_expense + gen_admin) × rate",
                RateKey::Profit,
                profit,
            ),
            plain(
                StepKey::SupplyPrice,
                "total_cost + profit",
                supply_price,
            ),
            rated(StepKey::Vat, "supply_price × rate", RateKey::Vat, vat),
            plain(StepKey::FinalTotal, "supply_price + vat", final_total),
        ],
    }
}
