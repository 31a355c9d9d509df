//! Scenario engine
//!
//! Pure what-if transforms over a `MetricSnapshot`. Every operation takes
//! the snapshot plus scenario parameters and returns a result value object;
//! nothing here reads the ledger, mutates history, or keeps state between
//! calls. Re-running any scenario with the same snapshot and parameters
//! returns the same answer.

use crate::health::HealthAssessor;
use crate::metrics::MetricSnapshot;
use crate::numeric::{MetricValue, Runway};
use crate::scenario::types::{
    CategoryReview, ChurnImpact, CutScenario, ExpenseOptimization, FundraisingAnalysis,
    FundraisingParams, HiringAffordability, HiringParams, MarketingScaling,
    MarketingScalingParams, Milestone, ScenarioError, ScenarioParams, ScenarioProjection,
};

// ============================================================================
// Scenario Policy Constants
// ============================================================================

/// Months at which the forward projection records the cash balance.
pub const MILESTONE_MONTHS: [usize; 5] = [3, 6, 12, 18, 24];

/// Safety buffer applied when the engine sizes a raise from a runway target
/// (1.2 = raise 20% more than the bare requirement).
pub const FUNDRAISE_SAFETY_BUFFER: f64 = 1.2;

/// A category holding more than this share of total spend is flagged.
pub const DOMINANT_SHARE_PCT: f64 = 40.0;

/// A category this far over its planned figure (percent of plan) is flagged.
pub const OVER_PLAN_TOLERANCE_PCT: f64 = 10.0;

/// Proportional cuts simulated by expense optimization.
pub const EXPENSE_CUT_STEPS_PCT: [f64; 3] = [5.0, 10.0, 20.0];

/// Pure transforms from `(snapshot, parameters)` to scenario results.
#[derive(Debug, Default)]
pub struct ScenarioEngine {
    assessor: HealthAssessor,
}

impl ScenarioEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward cash projection under revenue/expense/marketing deltas.
    ///
    /// The marketing delta is applied first (an absolute budget wins over a
    /// percentage when both are given), then the overall expense percentage
    /// on top of the marketing-adjusted base.
    pub fn project(
        &self,
        snapshot: &MetricSnapshot,
        params: &ScenarioParams,
    ) -> Result<ScenarioProjection, ScenarioError> {
        if params.horizon_months == 0 {
            return Err(ScenarioError::InvalidInput {
                reason: "horizon_months must be at least 1".to_string(),
            });
        }
        for (name, pct) in [
            ("revenue_pct", params.revenue_pct),
            ("expense_pct", params.expense_pct),
            ("marketing_pct", params.marketing_pct.unwrap_or(0.0)),
        ] {
            if pct < -100.0 {
                return Err(ScenarioError::InvalidInput {
                    reason: format!("{name} cannot cut below -100%"),
                });
            }
        }
        if matches!(params.marketing_absolute, Some(a) if a < 0) {
            return Err(ScenarioError::InvalidInput {
                reason: "marketing_absolute cannot be negative".to_string(),
            });
        }

        let current_marketing = snapshot.trailing.expenses.marketing;
        let adjusted_marketing = match (params.marketing_absolute, params.marketing_pct) {
            // Tie-break: an absolute budget overrides a percentage delta
            (Some(absolute), _) => absolute as f64,
            (None, Some(pct)) => current_marketing * (1.0 + pct / 100.0),
            (None, None) => current_marketing,
        };

        let marketing_adjusted_base =
            snapshot.trailing.expenses.total() - current_marketing + adjusted_marketing;
        let adjusted_expenses = marketing_adjusted_base * (1.0 + params.expense_pct / 100.0);
        let adjusted_revenue = snapshot.trailing.revenue * (1.0 + params.revenue_pct / 100.0);

        let net_burn = adjusted_expenses - adjusted_revenue;
        let runway = Runway::from_burn(snapshot.cash, net_burn);
        let cash_positive = net_burn <= 0.0;

        let mut milestones = Vec::new();
        let mut depletion_month = None;
        let mut cash = snapshot.cash as f64;
        for month in 1..=params.horizon_months {
            cash -= net_burn;
            if !cash_positive && cash <= 0.0 {
                depletion_month = Some(month);
                if MILESTONE_MONTHS.contains(&month) {
                    milestones.push(Milestone {
                        month,
                        projected_cash: 0,
                    });
                }
                break;
            }
            if MILESTONE_MONTHS.contains(&month) {
                milestones.push(Milestone {
                    month,
                    projected_cash: cash.round() as i64,
                });
            }
        }

        Ok(ScenarioProjection {
            company_id: snapshot.company_id.clone(),
            adjusted_revenue,
            adjusted_expenses,
            adjusted_marketing,
            net_burn,
            runway_band: self.assessor.runway_band(&runway),
            runway,
            cash_positive,
            depletion_month,
            milestones,
        })
    }

    /// Runway impact of adding headcount at a given salary.
    ///
    /// The salary is required: a hiring question without a salary cannot be
    /// answered and is an explicit error.
    pub fn hiring_affordability(
        &self,
        snapshot: &MetricSnapshot,
        params: &HiringParams,
    ) -> Result<HiringAffordability, ScenarioError> {
        let salary = params
            .monthly_salary
            .ok_or_else(|| ScenarioError::MissingSalary {
                role: params.role.clone(),
            })?;
        if salary <= 0 {
            return Err(ScenarioError::InvalidInput {
                reason: "monthly_salary must be positive".to_string(),
            });
        }
        if params.num_hires == 0 {
            return Err(ScenarioError::InvalidInput {
                reason: "num_hires must be at least 1".to_string(),
            });
        }

        let monthly_cost = salary * params.num_hires as i64;
        let new_expenses = snapshot.trailing.expenses.total() + monthly_cost as f64;
        let new_net_burn = new_expenses - snapshot.trailing.revenue;
        let new_runway = Runway::from_burn(snapshot.cash, new_net_burn);

        let total_cost_over_horizon = monthly_cost * params.months_ahead as i64;

        Ok(HiringAffordability {
            role: params.role.clone(),
            monthly_cost,
            new_net_burn,
            current_runway: snapshot.runway,
            runway_delta_months: new_runway.delta_months(&snapshot.runway),
            new_runway_band: self.assessor.runway_band(&new_runway),
            new_runway,
            total_cost_over_horizon,
            cash_after_horizon: snapshot.cash - total_cost_over_horizon,
        })
    }

    /// Size a raise against a runway target, or analyze a proposed one.
    ///
    /// When no amount is supplied the raise is
    /// `max(0, net_burn x target_months x 1.2 - cash)` - the bare cash
    /// requirement plus the safety buffer.
    pub fn fundraising_analysis(
        &self,
        snapshot: &MetricSnapshot,
        params: &FundraisingParams,
    ) -> Result<FundraisingAnalysis, ScenarioError> {
        if matches!(params.raise_amount, Some(a) if a < 0) {
            return Err(ScenarioError::InvalidInput {
                reason: "raise_amount cannot be negative".to_string(),
            });
        }
        if matches!(params.pre_money_valuation, Some(v) if v <= 0) {
            return Err(ScenarioError::InvalidInput {
                reason: "pre_money_valuation must be positive".to_string(),
            });
        }

        let sized_by_engine = params.raise_amount.is_none();
        let raise_amount = match params.raise_amount {
            Some(amount) => amount,
            None => {
                let requirement = snapshot.net_burn
                    * params.target_runway_months as f64
                    * FUNDRAISE_SAFETY_BUFFER
                    - snapshot.cash as f64;
                requirement.max(0.0).round() as i64
            }
        };

        let new_cash = snapshot.cash + raise_amount;
        let dilution_pct = params
            .pre_money_valuation
            .map(|pre| raise_amount as f64 / (pre + raise_amount) as f64 * 100.0);

        Ok(FundraisingAnalysis {
            raise_amount,
            sized_by_engine,
            new_cash,
            new_runway: Runway::from_burn(new_cash, snapshot.net_burn),
            dilution_pct,
            round_type: self.assessor.round_type(raise_amount),
        })
    }

    /// Project acquisition volume and CAC under a changed marketing budget
    /// and acquisition efficiency.
    pub fn marketing_scaling(
        &self,
        snapshot: &MetricSnapshot,
        params: &MarketingScalingParams,
    ) -> Result<MarketingScaling, ScenarioError> {
        if params.budget_change_pct < -100.0 {
            return Err(ScenarioError::InvalidInput {
                reason: "budget_change_pct cannot cut below -100%".to_string(),
            });
        }
        if params.efficiency_change_pct <= -100.0 {
            return Err(ScenarioError::InvalidInput {
                reason: "efficiency_change_pct must stay above -100%".to_string(),
            });
        }

        let adjusted_budget =
            snapshot.trailing.expenses.marketing * (1.0 + params.budget_change_pct / 100.0);

        // Customers acquired per cent of marketing spend, from the trailing
        // window totals.
        let baseline_rate = MetricValue::ratio(
            snapshot.trailing.new_customers_total as f64,
            snapshot.trailing.marketing_spend_total as f64,
        );
        let scaled_rate = baseline_rate.scale(1.0 + params.efficiency_change_pct / 100.0);
        let projected_new_customers = scaled_rate.scale(adjusted_budget);
        let projected_cac = MetricValue::Finite(adjusted_budget).div(projected_new_customers);

        Ok(MarketingScaling {
            adjusted_budget,
            baseline_acquisition_rate: baseline_rate,
            scaled_acquisition_rate: scaled_rate,
            projected_new_customers,
            current_cac: snapshot.cac,
            projected_cac,
        })
    }

    /// Unit economics at one hypothetical churn rate, holding ARPU and CAC
    /// at their snapshot values.
    pub fn churn_impact(
        &self,
        snapshot: &MetricSnapshot,
        churn_rate_pct: f64,
    ) -> Result<ChurnImpact, ScenarioError> {
        if churn_rate_pct < 0.0 {
            return Err(ScenarioError::InvalidInput {
                reason: "churn rate cannot be negative".to_string(),
            });
        }

        let lifespan_months = if churn_rate_pct > 0.0 {
            MetricValue::Finite(100.0 / churn_rate_pct)
        } else {
            MetricValue::Unbounded
        };
        let ltv = lifespan_months.scale(snapshot.arpu);
        let ltv_cac_ratio = ltv.div(snapshot.cac);

        // Payback depends only on CAC and ARPU, so it is identical for every
        // hypothetical churn rate.
        let payback_months = snapshot.cac.div(MetricValue::Finite(snapshot.arpu));

        Ok(ChurnImpact {
            churn_rate_pct,
            lifespan_months,
            ltv,
            ltv_cac_band: self.assessor.ltv_cac_band(&ltv_cac_ratio),
            ltv_cac_ratio,
            payback_months,
        })
    }

    /// `churn_impact` across several hypothetical rates, for side-by-side
    /// sensitivity comparison.
    pub fn churn_scenario_comparison(
        &self,
        snapshot: &MetricSnapshot,
        rates_pct: &[f64],
    ) -> Result<Vec<ChurnImpact>, ScenarioError> {
        rates_pct
            .iter()
            .map(|rate| self.churn_impact(snapshot, *rate))
            .collect()
    }

    /// Review spending concentration and plan adherence per category, and
    /// simulate proportional across-the-board cuts.
    pub fn expense_optimization(&self, snapshot: &MetricSnapshot) -> ExpenseOptimization {
        let total = snapshot.trailing.expenses.total();

        let categories = crate::models::ExpenseCategory::ALL
            .iter()
            .map(|category| {
                let monthly_avg = match category {
                    crate::models::ExpenseCategory::ProductDev => {
                        snapshot.trailing.expenses.product_dev
                    }
                    crate::models::ExpenseCategory::Manpower => snapshot.trailing.expenses.manpower,
                    crate::models::ExpenseCategory::Marketing => {
                        snapshot.trailing.expenses.marketing
                    }
                    crate::models::ExpenseCategory::Operations => {
                        snapshot.trailing.expenses.operations
                    }
                    crate::models::ExpenseCategory::Other => snapshot.trailing.expenses.other,
                };
                let planned = snapshot.planned_expenses.get(*category);
                let share_pct = if total > 0.0 {
                    monthly_avg / total * 100.0
                } else {
                    0.0
                };
                let over_plan_pct =
                    MetricValue::ratio((monthly_avg - planned as f64) * 100.0, planned as f64);
                let over_plan = match over_plan_pct {
                    MetricValue::Finite(pct) => pct > OVER_PLAN_TOLERANCE_PCT,
                    // Spend against a zero plan is over plan whenever it is
                    // actually positive
                    MetricValue::Unbounded => monthly_avg > 0.0,
                    MetricValue::Indeterminate => false,
                };

                CategoryReview {
                    category: *category,
                    monthly_avg,
                    share_pct,
                    planned,
                    over_plan_pct,
                    dominant: share_pct > DOMINANT_SHARE_PCT,
                    over_plan,
                }
            })
            .collect();

        let cut_scenarios = EXPENSE_CUT_STEPS_PCT
            .iter()
            .map(|cut_pct| {
                let new_expenses = total * (1.0 - cut_pct / 100.0);
                let new_net_burn = new_expenses - snapshot.trailing.revenue;
                let new_runway = Runway::from_burn(snapshot.cash, new_net_burn);
                CutScenario {
                    cut_pct: *cut_pct,
                    new_expenses,
                    new_net_burn,
                    runway_extension_months: new_runway.delta_months(&snapshot.runway),
                    new_runway,
                }
            })
            .collect();

        ExpenseOptimization {
            window_months: snapshot.trailing.months,
            total_monthly: total,
            categories,
            cut_scenarios,
        }
    }
}
