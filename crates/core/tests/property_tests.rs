// ═══════════════════════════════════════════════════════════════════
// Property tests — aggregation and projection invariants that must
// hold for arbitrary portfolios and assumptions
// ═══════════════════════════════════════════════════════════════════

use proptest::prelude::*;

use finplan_core::models::asset::{Asset, AssetType, RiskBand};
use finplan_core::models::retirement::RetirementAssumptions;
use finplan_core::services::allocation_service::AllocationService;
use finplan_core::services::projection_service::ProjectionService;

const TYPES: [AssetType; 4] = [
    AssetType::Stock,
    AssetType::Fund,
    AssetType::Sipp,
    AssetType::Cash,
];

fn arb_asset() -> impl Strategy<Value = Asset> {
    (
        "[A-Za-z ]{3,16}",
        0u64..100_000_000, // pennies, up to 1M units
        0usize..TYPES.len(),
        0usize..RiskBand::ALL.len(),
        0usize..RiskBand::ALL.len(),
    )
        .prop_map(|(name, pennies, t, r, p)| {
            Asset::new(
                name,
                pennies as f64 / 100.0,
                TYPES[t],
                RiskBand::ALL[r],
                RiskBand::ALL[p],
            )
        })
}

fn arb_portfolio() -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec(arb_asset(), 0..24)
}

fn arb_assumptions() -> impl Strategy<Value = RetirementAssumptions> {
    (
        (18u32..70, 0u32..40),
        (0u32..200_000, 0u32..15, 0u32..500_000, 0u32..4_000),
        (0u32..8_000, 0u32..10, 0u32..2_000, 0u32..10),
        (0u32..20, 0u32..120, 0u32..10),
    )
        .prop_map(
            |(
                (current_age, working_years),
                (income, income_growth, savings, monthly_savings),
                (monthly_expenses, expense_growth, monthly_holiday, holiday_growth),
                (investment_return, replacement, inflation),
            )| {
                RetirementAssumptions {
                    current_age,
                    retirement_age: current_age + working_years,
                    current_income: f64::from(income),
                    annual_income_growth: f64::from(income_growth),
                    monthly_expenses: f64::from(monthly_expenses),
                    expense_growth_rate: f64::from(expense_growth),
                    current_savings: f64::from(savings),
                    monthly_savings_amount: f64::from(monthly_savings),
                    investment_return: f64::from(investment_return),
                    monthly_holiday_budget: f64::from(monthly_holiday),
                    holiday_growth_rate: f64::from(holiday_growth),
                    inflation_rate: f64::from(inflation),
                    retirement_income_replacement: f64::from(replacement),
                    risk_profile: RiskBand::Balanced,
                }
            },
        )
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_group_values_sum_to_portfolio_value(assets in arb_portfolio()) {
        let service = AllocationService::new();
        let total = service.portfolio_value(&assets);
        let tolerance = 1e-9 * (1.0 + total);

        let by_type: f64 = service.allocations_by_type(&assets).iter().map(|a| a.value).sum();
        let by_risk: f64 = service.allocations_by_risk(&assets).iter().map(|a| a.value).sum();
        let by_pot: f64 = service.allocations_by_pot(&assets).iter().map(|a| a.value).sum();

        prop_assert!((by_type - total).abs() <= tolerance);
        prop_assert!((by_risk - total).abs() <= tolerance);
        prop_assert!((by_pot - total).abs() <= tolerance);
    }

    #[test]
    fn prop_percentages_sum_to_100_and_stay_in_range(assets in arb_portfolio()) {
        let service = AllocationService::new();
        let total = service.portfolio_value(&assets);

        for percentages in [
            service.allocations_by_type(&assets).iter().map(|a| a.percentage).collect::<Vec<_>>(),
            service.allocations_by_risk(&assets).iter().map(|a| a.percentage).collect::<Vec<_>>(),
            service.allocations_by_pot(&assets).iter().map(|a| a.percentage).collect::<Vec<_>>(),
        ] {
            for pct in &percentages {
                prop_assert!((0.0..=100.0 + 1e-6).contains(pct));
            }
            if total > 0.0 && !percentages.is_empty() {
                let sum: f64 = percentages.iter().sum();
                prop_assert!((sum - 100.0).abs() <= 1e-6, "sum was {sum}");
            } else {
                prop_assert!(percentages.iter().all(|p| *p == 0.0));
            }
        }
    }

    #[test]
    fn prop_grouping_is_stable(assets in arb_portfolio()) {
        let service = AllocationService::new();
        prop_assert_eq!(
            service.allocations_by_type(&assets),
            service.allocations_by_type(&assets)
        );
        prop_assert_eq!(
            service.allocations_by_risk(&assets),
            service.allocations_by_risk(&assets)
        );
        prop_assert_eq!(
            service.allocations_by_pot(&assets),
            service.allocations_by_pot(&assets)
        );
    }

    #[test]
    fn prop_pot_groups_partition_the_assets(assets in arb_portfolio()) {
        let service = AllocationService::new();
        let pots = service.allocations_by_pot(&assets);
        let member_count: usize = pots.iter().map(|p| p.assets.len()).sum();
        prop_assert_eq!(member_count, assets.len());
        for pot in &pots {
            prop_assert!(pot.assets.iter().all(|a| a.pot.pot_label() == pot.label));
        }
    }

    #[test]
    fn prop_annotation_preserves_assets_and_shares_sum_to_100(assets in arb_portfolio()) {
        let service = AllocationService::new();
        let total = service.portfolio_value(&assets);
        let annotated = service.with_allocation_percentages(&assets);

        prop_assert_eq!(annotated.len(), assets.len());
        for (before, after) in assets.iter().zip(&annotated) {
            prop_assert_eq!(before.id, after.id);
            prop_assert_eq!(before.value, after.value);
        }
        if total > 0.0 {
            let sum: f64 = annotated.iter().map(|a| a.allocation.unwrap()).sum();
            prop_assert!((sum - 100.0).abs() <= 1e-6);
        } else {
            prop_assert!(annotated.iter().all(|a| a.allocation == Some(0.0)));
        }
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(48))]

    #[test]
    fn prop_timeline_shape(assumptions in arb_assumptions()) {
        let rows = ProjectionService::new().retirement_timeline(&assumptions);

        let end_age = (assumptions.retirement_age + 25).max(90);
        prop_assert_eq!(rows.len() as u32, end_age - assumptions.current_age + 1);
        prop_assert_eq!(rows[0].age, assumptions.current_age);
        for pair in rows.windows(2) {
            prop_assert_eq!(pair[1].age, pair[0].age + 1);
        }
    }

    #[test]
    fn prop_retirement_flag_matches_age_and_never_reverses(assumptions in arb_assumptions()) {
        let rows = ProjectionService::new().retirement_timeline(&assumptions);
        let mut seen_retired = false;
        for row in &rows {
            prop_assert_eq!(row.is_retired, row.age >= assumptions.retirement_age);
            if seen_retired {
                prop_assert!(row.is_retired);
            }
            seen_retired |= row.is_retired;
        }
    }

    #[test]
    fn prop_net_worth_is_finite_and_non_negative(assumptions in arb_assumptions()) {
        for row in ProjectionService::new().retirement_timeline(&assumptions) {
            prop_assert!(row.net_worth.is_finite());
            prop_assert!(row.net_worth >= 0.0);
        }
    }

    #[test]
    fn prop_savings_cease_at_retirement(assumptions in arb_assumptions()) {
        for row in ProjectionService::new().retirement_timeline(&assumptions) {
            if row.is_retired {
                prop_assert_eq!(row.savings, 0.0);
            } else {
                prop_assert_eq!(row.savings, assumptions.monthly_savings_amount * 12.0);
            }
        }
    }

    #[test]
    fn prop_projection_is_idempotent(assumptions in arb_assumptions()) {
        let service = ProjectionService::new();
        prop_assert_eq!(
            service.retirement_timeline(&assumptions),
            service.retirement_timeline(&assumptions)
        );
    }

    #[test]
    fn prop_readiness_is_consistent_with_final_row(assumptions in arb_assumptions()) {
        let service = ProjectionService::new();
        let rows = service.retirement_timeline(&assumptions);
        let verdict = service.retirement_readiness(&rows);

        match rows.iter().find(|r| r.age == r.retirement_age) {
            Some(_) => {
                prop_assert_eq!(verdict.is_ready, rows.last().unwrap().net_worth > 0.0);
            }
            None => prop_assert!(!verdict.is_ready),
        }
        prop_assert!(verdict.shortfall >= 0.0);
        prop_assert!((0.0..=50.0).contains(&verdict.recommended_savings_rate));
    }
}
