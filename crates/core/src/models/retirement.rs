use serde::{Deserialize, Serialize};

use super::asset::RiskBand;

/// Inputs to the retirement timeline projection.
///
/// All rates are percentages (7 means 7%). Monetary amounts are in the same
/// currency-agnostic units as asset values. The mapping from `risk_profile`
/// to `investment_return` is the frontend's concern — the engine takes the
/// return rate it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementAssumptions {
    pub current_age: u32,

    /// Must be >= `current_age` for a meaningful timeline
    pub retirement_age: u32,

    /// Gross annual income today
    pub current_income: f64,

    /// Annual income growth rate (%), applied only while working
    pub annual_income_growth: f64,

    /// Monthly living expenses today
    pub monthly_expenses: f64,

    /// Annual expense growth rate (%), applied every year
    pub expense_growth_rate: f64,

    /// Opening net worth
    pub current_savings: f64,

    /// Voluntary monthly savings contribution, stops at retirement
    pub monthly_savings_amount: f64,

    /// Annual investment return rate (%) on net worth
    pub investment_return: f64,

    /// Monthly holiday/discretionary budget today
    pub monthly_holiday_budget: f64,

    /// Annual holiday budget growth rate (%), applied every year
    pub holiday_growth_rate: f64,

    /// Accepted for interface compatibility; not referenced by the
    /// projection recurrence.
    pub inflation_rate: f64,

    /// Retirement income as a percentage of final working income
    pub retirement_income_replacement: f64,

    /// The user's overall risk appetite (informational here)
    pub risk_profile: RiskBand,
}

/// One simulated year of the retirement timeline.
///
/// Rows are produced in ascending age order and are fully re-derivable from
/// the assumptions — regenerating a timeline for identical input yields an
/// identical sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementData {
    pub age: u32,

    /// Gross income for the year (salary while working, replacement income
    /// once retired)
    pub income: f64,

    /// Living expenses for the year (12 x monthly level)
    pub expenses: f64,

    /// Voluntary savings for the year; 0 once retired
    pub savings: f64,

    /// Return on the year's opening net worth
    pub investment_returns: f64,

    /// Holiday spending for the year (12 x monthly level)
    pub holiday_expenses: f64,

    /// Net cash flow for the year, before savings contributions
    pub carryover: f64,

    /// Net worth at year end, clamped at 0
    pub net_worth: f64,

    /// The retirement age this row was simulated against
    pub retirement_age: u32,

    /// True from the retirement age onward — a one-way transition
    pub is_retired: bool,
}

/// Verdict over a full timeline: can the plan fund the whole horizon?
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementReadiness {
    /// True when the final simulated year still has positive net worth
    pub is_ready: bool,

    /// How far below zero the final net worth fell. Always 0 while the
    /// simulator clamps net worth at 0; kept for forward compatibility.
    pub shortfall: f64,

    /// Suggested savings rate (%) to close the shortfall, capped at 50
    pub recommended_savings_rate: f64,
}

impl RetirementReadiness {
    /// The zeroed, not-ready verdict returned for an empty timeline.
    pub fn not_ready() -> Self {
        Self {
            is_ready: false,
            shortfall: 0.0,
            recommended_savings_rate: 0.0,
        }
    }
}
