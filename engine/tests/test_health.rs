//! Health classification over computed snapshots
//!
//! The band boundaries themselves are pinned in unit tests next to the
//! assessor; these tests exercise the composition: a full ledger goes
//! through the metrics engine and the resulting snapshot values classify
//! the way the thresholds say they should.

use chrono::NaiveDate;
use startup_finance_core_rs::{
    ChurnBand, CompanyLedger, ExpenseBreakdown, HealthAssessor, MetricValue, MetricsEngine,
    MonthlyRecord, OnboardingBaseline, Runway, RunwayBand, UnitEconomicsBand,
};

fn month(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap()
}

fn create_baseline(initial_cash: i64, initial_customers: u32) -> OnboardingBaseline {
    OnboardingBaseline {
        company_id: "acme".to_string(),
        company_name: "Acme Robotics".to_string(),
        industry: "saas".to_string(),
        target_revenue: 10_000_000,
        planned_expenses: ExpenseBreakdown {
            product_dev: 2_000_000,
            manpower: 3_000_000,
            marketing: 2_000_000,
            operations: 1_000_000,
            other: 0,
        },
        initial_cash,
        initial_customers,
        current_employees: 10,
        target_runway_months: 18,
        onboarding_date: month(0),
    }
}

fn create_record(
    i: usize,
    revenue: i64,
    marketing: i64,
    other_expenses: i64,
    new: u32,
    active: u32,
) -> MonthlyRecord {
    MonthlyRecord::new(
        month(i),
        revenue,
        ExpenseBreakdown {
            product_dev: other_expenses / 2,
            manpower: other_expenses / 2,
            marketing,
            operations: 0,
            other: 0,
        },
        new,
        active,
    )
    .unwrap()
}

#[test]
fn test_cash_flow_positive_company_is_healthy() {
    // Revenue 10M, expenses 7M every month: no depletion horizon at all
    let records = (1..=3)
        .map(|i| create_record(i, 10_000_000, 1_000_000, 6_000_000, 5, 100))
        .collect();
    let ledger = CompanyLedger::new(create_baseline(50_000_000, 100), records).unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    let assessor = HealthAssessor::new();

    assert_eq!(snapshot.runway, Runway::Unbounded);
    assert_eq!(assessor.runway_band(&snapshot.runway), RunwayBand::Healthy);
}

#[test]
fn test_burning_company_runway_degrades_through_bands() {
    // burn 5M/mo; three recorded months consume 15M before the snapshot
    let cases = [
        (80_000_000, RunwayBand::Healthy),  // 65M left -> 13 months
        (45_000_000, RunwayBand::Adequate), // 30M left -> 6 months
        (30_000_000, RunwayBand::Short),    // 15M left -> 3 months
        (25_000_000, RunwayBand::Critical), // 10M left -> 2 months
    ];
    let assessor = HealthAssessor::new();

    for (initial_cash, expected) in cases {
        let records = (1..=3)
            .map(|i| create_record(i, 2_000_000, 1_000_000, 6_000_000, 5, 100))
            .collect();
        let ledger = CompanyLedger::new(create_baseline(initial_cash, 100), records).unwrap();
        let snapshot = MetricsEngine::new().snapshot(&ledger, 3);

        assert_eq!(
            assessor.runway_band(&snapshot.runway),
            expected,
            "initial cash {initial_cash}"
        );
    }
}

#[test]
fn test_churn_rate_from_history_classifies() {
    // 100 active, +8 new, 100 at month end each month: 8% churn -> Good
    let records = (1..=3)
        .map(|i| create_record(i, 10_000_000, 1_000_000, 6_000_000, 8, 100))
        .collect();
    let ledger = CompanyLedger::new(create_baseline(50_000_000, 100), records).unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    assert!((snapshot.avg_churn_rate_pct - 8.0).abs() < 1e-9);
    assert_eq!(
        HealthAssessor::new().churn_band(snapshot.avg_churn_rate_pct),
        ChurnBand::Good
    );
}

#[test]
fn test_ltv_cac_ratio_from_snapshot_classifies() {
    // ARPU 100k (10M / 100 active); churn 5%/mo -> lifespan 20 -> LTV 2M.
    // CAC: 1.5M marketing x3 / 15 new = 300k. Ratio 6.67 -> Excellent.
    let records = (1..=3)
        .map(|i| create_record(i, 10_000_000, 1_500_000, 6_000_000, 5, 100))
        .collect();
    let ledger = CompanyLedger::new(create_baseline(50_000_000, 100), records).unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    assert_eq!(snapshot.ltv.ltv, MetricValue::Finite(2_000_000.0));
    assert_eq!(snapshot.cac, MetricValue::Finite(300_000.0));

    let ratio = snapshot.ltv_cac_ratio.as_finite().unwrap();
    assert!((ratio - 2_000_000.0 / 300_000.0).abs() < 1e-9);
    assert_eq!(
        HealthAssessor::new().ltv_cac_band(&snapshot.ltv_cac_ratio),
        UnitEconomicsBand::Excellent
    );
}

#[test]
fn test_no_churn_no_acquisition_yields_unknown_economics() {
    // Zero churn makes LTV unbounded; zero marketing with zero acquisition
    // makes CAC indeterminate. The ratio carries no information and the band
    // must say so instead of guessing.
    let records = (1..=3)
        .map(|i| create_record(i, 10_000_000, 0, 6_000_000, 0, 100))
        .collect();
    let ledger = CompanyLedger::new(create_baseline(50_000_000, 100), records).unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    assert!(snapshot.ltv.ltv.is_unbounded());
    assert!(snapshot.cac.is_indeterminate());
    assert!(snapshot.ltv_cac_ratio.is_indeterminate());
    assert_eq!(
        HealthAssessor::new().ltv_cac_band(&snapshot.ltv_cac_ratio),
        UnitEconomicsBand::Unknown
    );
}

#[test]
fn test_unbounded_ltv_against_finite_cac_is_excellent() {
    // Zero churn but real acquisition spend: unbounded LTV over finite CAC
    let records = (1..=3)
        .map(|i| create_record(i, 10_000_000, 1_500_000, 6_000_000, 5, 105 + (i as u32 * 5)))
        .collect();
    let ledger = CompanyLedger::new(create_baseline(50_000_000, 105), records).unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    assert_eq!(snapshot.avg_churn_rate_pct, 0.0);
    assert!(snapshot.ltv.ltv.is_unbounded());
    assert!(snapshot.ltv_cac_ratio.is_unbounded());
    assert_eq!(
        HealthAssessor::new().ltv_cac_band(&snapshot.ltv_cac_ratio),
        UnitEconomicsBand::Excellent
    );
}
