//! Churn recurrence tests
//!
//! The churned-customer count is reconstructed from the identity
//! `previous + new - churned = current`, seeded by the baseline's initial
//! customer count and clamped at zero. These tests pin the recurrence, the
//! clamp, and the state threading between months.

use chrono::NaiveDate;
use startup_finance_core_rs::{
    CompanyLedger, ExpenseBreakdown, MetricsEngine, MonthlyRecord, OnboardingBaseline,
};

fn month(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap()
}

fn create_baseline(initial_customers: u32) -> OnboardingBaseline {
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
        initial_cash: 50_000_000,
        initial_customers,
        current_employees: 10,
        target_runway_months: 18,
        onboarding_date: month(0),
    }
}

fn customer_record(i: usize, new: u32, active: u32) -> MonthlyRecord {
    MonthlyRecord::new(month(i), 5_000_000, ExpenseBreakdown::default(), new, active).unwrap()
}

#[test]
fn test_recurrence_basic() {
    // 100 active, +10 new, 105 at month end: 5 churned, 5.0% rate, +5 growth
    let ledger =
        CompanyLedger::new(create_baseline(100), vec![customer_record(1, 10, 105)]).unwrap();

    let series = MetricsEngine::new().churn_series(&ledger);
    assert_eq!(series.len(), 1);

    let step = &series[0];
    assert_eq!(step.previous_active, 100);
    assert_eq!(step.new_customers, 10);
    assert_eq!(step.churned, 5);
    assert_eq!(step.current_active, 105);
    assert_eq!(step.churn_rate_pct, 5.0);
    assert_eq!(step.net_growth, 5);
}

#[test]
fn test_negative_churn_clamped_to_zero() {
    // 100 active, +20 new, 130 at month end: raw churn would be -10.
    // The clamp keeps it at zero; the surplus growth is deliberately lost.
    let ledger =
        CompanyLedger::new(create_baseline(100), vec![customer_record(1, 20, 130)]).unwrap();

    let step = MetricsEngine::new().churn_series(&ledger)[0];
    assert_eq!(step.churned, 0);
    assert_eq!(step.churn_rate_pct, 0.0);
    assert_eq!(step.net_growth, 30);
}

#[test]
fn test_zero_previous_active_has_zero_rate() {
    // Nobody to lose: rate is 0, not a division fault
    let ledger =
        CompanyLedger::new(create_baseline(0), vec![customer_record(1, 10, 10)]).unwrap();

    let step = MetricsEngine::new().churn_series(&ledger)[0];
    assert_eq!(step.previous_active, 0);
    assert_eq!(step.churned, 0);
    assert_eq!(step.churn_rate_pct, 0.0);
}

#[test]
fn test_recurrence_threads_state_between_months() {
    let ledger = CompanyLedger::new(
        create_baseline(100),
        vec![
            customer_record(1, 10, 105), // churn 5
            customer_record(2, 20, 115), // prev must be 105, churn 10
            customer_record(3, 0, 100),  // prev 115, churn 15
        ],
    )
    .unwrap();

    let series = MetricsEngine::new().churn_series(&ledger);
    assert_eq!(series[1].previous_active, 105);
    assert_eq!(series[1].churned, 10);
    assert_eq!(series[2].previous_active, 115);
    assert_eq!(series[2].churned, 15);
    assert_eq!(series[2].net_growth, -15);
}

#[test]
fn test_empty_history_empty_series() {
    let ledger = CompanyLedger::new(create_baseline(100), vec![]).unwrap();
    assert!(MetricsEngine::new().churn_series(&ledger).is_empty());
}

#[test]
fn test_trailing_churn_rate_in_snapshot() {
    // Rates 5%, ~9.52%, ~13.04% over three months
    let ledger = CompanyLedger::new(
        create_baseline(100),
        vec![
            customer_record(1, 10, 105),
            customer_record(2, 20, 115),
            customer_record(3, 0, 100),
        ],
    )
    .unwrap();

    let snapshot = MetricsEngine::new().snapshot(&ledger, 3);
    let expected = (5.0 + 10.0 / 105.0 * 100.0 + 15.0 / 115.0 * 100.0) / 3.0;
    assert!((snapshot.avg_churn_rate_pct - expected).abs() < 1e-9);
}
