use crate::models::retirement::{RetirementAssumptions, RetirementData, RetirementReadiness};

/// Cap on the recommended savings rate (%).
const MAX_RECOMMENDED_SAVINGS_RATE: f64 = 50.0;

/// Horizon floor: the timeline always runs to at least this age.
const MIN_HORIZON_AGE: u32 = 90;

/// Years modeled past retirement when retiring after 65.
const POST_RETIREMENT_YEARS: u32 = 25;

/// Simulates a year-by-year personal balance sheet from the current age to
/// the end of the horizon, and judges whether the plan holds up.
///
/// Pure arithmetic over a bounded loop — no I/O, no stored state, no failure
/// path. Identical assumptions always produce an identical timeline.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project the full retirement timeline.
    ///
    /// Runs from `current_age` to `max(90, retirement_age + 25)` inclusive,
    /// so at least 25 post-retirement years are modeled even for very early
    /// retirement. Per year: income (salary while working, fixed replacement
    /// income once retired), expenses and holiday budget at 12x their growing
    /// monthly levels, voluntary savings while working only, and investment
    /// returns on the opening balance. Net worth is clamped at 0.
    ///
    /// The year's investment returns enter the balance twice — once directly
    /// and once inside the net cash flow. The published projections depend on
    /// that recurrence; keep it unless a product decision changes it.
    ///
    /// `retirement_age < current_age` is caller error: the output is
    /// nonsensical but safe (no panic, possibly a short timeline).
    pub fn retirement_timeline(&self, assumptions: &RetirementAssumptions) -> Vec<RetirementData> {
        let mut timeline = Vec::new();
        let mut net_worth = assumptions.current_savings;
        let mut income = assumptions.current_income;
        let mut monthly_expenses = assumptions.monthly_expenses;
        let mut monthly_holiday_budget = assumptions.monthly_holiday_budget;

        let end_age = assumptions
            .retirement_age
            .saturating_add(POST_RETIREMENT_YEARS)
            .max(MIN_HORIZON_AGE);

        for age in assumptions.current_age..=end_age {
            let is_retired = age >= assumptions.retirement_age;

            let yearly_income = if is_retired {
                // Replacement income: the final working-year salary, frozen,
                // scaled by the replacement ratio. Constant for every retired
                // year — it does not track the running income level.
                let working_years = assumptions
                    .retirement_age
                    .saturating_sub(assumptions.current_age);
                let final_working_income = assumptions.current_income
                    * (1.0 + assumptions.annual_income_growth / 100.0).powi(working_years as i32);
                final_working_income * (assumptions.retirement_income_replacement / 100.0)
            } else {
                income
            };

            let yearly_expenses = monthly_expenses * 12.0;
            let yearly_holiday_expenses = monthly_holiday_budget * 12.0;

            let yearly_savings = if is_retired {
                0.0
            } else {
                assumptions.monthly_savings_amount * 12.0
            };

            // Returns are computed on the opening balance, before this
            // year's contributions land.
            let investment_returns = net_worth * (assumptions.investment_return / 100.0);

            let total_income = yearly_income + investment_returns;
            let total_expenses = yearly_expenses + yearly_holiday_expenses;
            let net_cash_flow = total_income - total_expenses;

            // What's left after expenses, before savings are added.
            let carryover = net_cash_flow;

            net_worth =
                (net_worth + investment_returns + yearly_savings + net_cash_flow).max(0.0);

            timeline.push(RetirementData {
                age,
                income: yearly_income,
                expenses: yearly_expenses,
                savings: yearly_savings,
                investment_returns,
                holiday_expenses: yearly_holiday_expenses,
                carryover,
                net_worth,
                retirement_age: assumptions.retirement_age,
                is_retired,
            });

            // Grow the running levels for next year. Salary growth stops at
            // retirement; expenses and holidays keep growing throughout.
            if !is_retired {
                income *= 1.0 + assumptions.annual_income_growth / 100.0;
            }
            monthly_expenses *= 1.0 + assumptions.expense_growth_rate / 100.0;
            monthly_holiday_budget *= 1.0 + assumptions.holiday_growth_rate / 100.0;
        }

        timeline
    }

    /// Judge a timeline: solvent through the horizon, or short?
    ///
    /// Returns the zeroed not-ready verdict when the timeline is empty or has
    /// no retirement-transition row.
    pub fn retirement_readiness(&self, timeline: &[RetirementData]) -> RetirementReadiness {
        let retirement_row = timeline.iter().find(|row| row.age == row.retirement_age);
        let (first_row, final_row) = match (timeline.first(), timeline.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return RetirementReadiness::not_ready(),
        };
        let retirement_row = match retirement_row {
            Some(row) => row,
            None => return RetirementReadiness::not_ready(),
        };

        let is_ready = final_row.net_worth > 0.0;
        let shortfall = (-final_row.net_worth).max(0.0);

        let recommended_savings_rate = if is_ready {
            0.0
        } else {
            let years_to_retirement = retirement_row.retirement_age.saturating_sub(first_row.age);
            let earning_capacity = first_row.income * f64::from(years_to_retirement);
            if earning_capacity > 0.0 {
                ((shortfall / earning_capacity) * 100.0).min(MAX_RECOMMENDED_SAVINGS_RATE)
            } else {
                0.0
            }
        };

        RetirementReadiness {
            is_ready,
            shortfall,
            recommended_savings_rate,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
