//! Health assessment thresholds
//!
//! Fixed business-policy constants mapping numeric metrics to qualitative
//! bands. Every threshold in the crate lives here, in one place, so the
//! bands can be unit-tested (and revised) independently of the formulas
//! that produce the input values.

use serde::{Deserialize, Serialize};

use crate::numeric::{MetricValue, Runway};

// ============================================================================
// Policy Constants
// ============================================================================

/// Runway at or above this many months is healthy.
pub const RUNWAY_HEALTHY_MONTHS: u32 = 12;
/// Runway at or above this many months (but below healthy) is adequate.
pub const RUNWAY_ADEQUATE_MONTHS: u32 = 6;
/// Runway at or above this many months (but below adequate) is short;
/// anything below is critical.
pub const RUNWAY_SHORT_MONTHS: u32 = 3;

/// Monthly churn below this percentage is excellent.
pub const CHURN_EXCELLENT_PCT: f64 = 5.0;
/// Monthly churn below this percentage is good.
pub const CHURN_GOOD_PCT: f64 = 10.0;
/// Monthly churn below this percentage is concerning; at or above, critical.
pub const CHURN_CONCERNING_PCT: f64 = 20.0;

/// LTV:CAC at or above this ratio is excellent.
pub const LTV_CAC_EXCELLENT: f64 = 3.0;
/// LTV:CAC at or above this ratio is good.
pub const LTV_CAC_GOOD: f64 = 2.0;
/// LTV:CAC at or above this ratio is break-even; below, critical.
pub const LTV_CAC_BREAKEVEN: f64 = 1.0;

/// Raise-size bands for round-type classification (cents). Policy
/// thresholds, not derived from anything.
pub const ROUND_PRE_SEED_MAX: i64 = 75_000_000; // $750k
pub const ROUND_SEED_MAX: i64 = 300_000_000; // $3M
pub const ROUND_SERIES_A_MAX: i64 = 1_500_000_000; // $15M
pub const ROUND_SERIES_B_MAX: i64 = 5_000_000_000; // $50M

// ============================================================================
// Bands
// ============================================================================

/// Qualitative runway status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayBand {
    Healthy,
    Adequate,
    Short,
    Critical,
}

/// Qualitative churn status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChurnBand {
    Excellent,
    Good,
    Concerning,
    Critical,
}

/// Qualitative unit-economics status for the LTV:CAC ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitEconomicsBand {
    Excellent,
    Good,
    Breakeven,
    Critical,

    /// The ratio was indeterminate (e.g. unbounded LTV against unbounded
    /// CAC); no judgment can be made
    Unknown,
}

/// Funding round classification by raise size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    Growth,
}

// ============================================================================
// Assessor
// ============================================================================

/// Table-driven classifier from metric values to status bands.
#[derive(Debug, Default)]
pub struct HealthAssessor;

impl HealthAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Classify a runway. Unbounded runway (cash-flow positive) is healthy
    /// by definition, including exactly at break-even.
    pub fn runway_band(&self, runway: &Runway) -> RunwayBand {
        match runway {
            Runway::Unbounded => RunwayBand::Healthy,
            Runway::Months(m) if *m >= RUNWAY_HEALTHY_MONTHS => RunwayBand::Healthy,
            Runway::Months(m) if *m >= RUNWAY_ADEQUATE_MONTHS => RunwayBand::Adequate,
            Runway::Months(m) if *m >= RUNWAY_SHORT_MONTHS => RunwayBand::Short,
            Runway::Months(_) => RunwayBand::Critical,
        }
    }

    /// Classify a monthly churn rate (percent).
    pub fn churn_band(&self, churn_rate_pct: f64) -> ChurnBand {
        if churn_rate_pct < CHURN_EXCELLENT_PCT {
            ChurnBand::Excellent
        } else if churn_rate_pct < CHURN_GOOD_PCT {
            ChurnBand::Good
        } else if churn_rate_pct < CHURN_CONCERNING_PCT {
            ChurnBand::Concerning
        } else {
            ChurnBand::Critical
        }
    }

    /// Classify an LTV:CAC ratio. Unbounded LTV against finite CAC is
    /// excellent; an indeterminate ratio maps to `Unknown` rather than being
    /// forced into a judgment.
    pub fn ltv_cac_band(&self, ratio: &MetricValue) -> UnitEconomicsBand {
        match ratio {
            MetricValue::Unbounded => UnitEconomicsBand::Excellent,
            MetricValue::Indeterminate => UnitEconomicsBand::Unknown,
            MetricValue::Finite(r) if *r >= LTV_CAC_EXCELLENT => UnitEconomicsBand::Excellent,
            MetricValue::Finite(r) if *r >= LTV_CAC_GOOD => UnitEconomicsBand::Good,
            MetricValue::Finite(r) if *r >= LTV_CAC_BREAKEVEN => UnitEconomicsBand::Breakeven,
            MetricValue::Finite(_) => UnitEconomicsBand::Critical,
        }
    }

    /// Classify a raise amount (cents) into a round type.
    pub fn round_type(&self, raise_amount: i64) -> RoundType {
        if raise_amount < ROUND_PRE_SEED_MAX {
            RoundType::PreSeed
        } else if raise_amount < ROUND_SEED_MAX {
            RoundType::Seed
        } else if raise_amount < ROUND_SERIES_A_MAX {
            RoundType::SeriesA
        } else if raise_amount < ROUND_SERIES_B_MAX {
            RoundType::SeriesB
        } else {
            RoundType::Growth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_band_boundaries() {
        let assessor = HealthAssessor::new();
        assert_eq!(assessor.runway_band(&Runway::Months(12)), RunwayBand::Healthy);
        assert_eq!(assessor.runway_band(&Runway::Months(11)), RunwayBand::Adequate);
        assert_eq!(assessor.runway_band(&Runway::Months(6)), RunwayBand::Adequate);
        assert_eq!(assessor.runway_band(&Runway::Months(5)), RunwayBand::Short);
        assert_eq!(assessor.runway_band(&Runway::Months(3)), RunwayBand::Short);
        assert_eq!(assessor.runway_band(&Runway::Months(2)), RunwayBand::Critical);
        assert_eq!(assessor.runway_band(&Runway::Months(0)), RunwayBand::Critical);
    }

    #[test]
    fn test_unbounded_runway_is_healthy() {
        let assessor = HealthAssessor::new();
        assert_eq!(assessor.runway_band(&Runway::Unbounded), RunwayBand::Healthy);
    }

    #[test]
    fn test_churn_band_boundaries() {
        let assessor = HealthAssessor::new();
        assert_eq!(assessor.churn_band(0.0), ChurnBand::Excellent);
        assert_eq!(assessor.churn_band(4.99), ChurnBand::Excellent);
        assert_eq!(assessor.churn_band(5.0), ChurnBand::Good);
        assert_eq!(assessor.churn_band(9.99), ChurnBand::Good);
        assert_eq!(assessor.churn_band(10.0), ChurnBand::Concerning);
        assert_eq!(assessor.churn_band(19.99), ChurnBand::Concerning);
        assert_eq!(assessor.churn_band(20.0), ChurnBand::Critical);
    }

    #[test]
    fn test_ltv_cac_band_boundaries() {
        let assessor = HealthAssessor::new();
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Finite(3.0)),
            UnitEconomicsBand::Excellent
        );
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Finite(2.0)),
            UnitEconomicsBand::Good
        );
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Finite(1.0)),
            UnitEconomicsBand::Breakeven
        );
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Finite(0.99)),
            UnitEconomicsBand::Critical
        );
    }

    #[test]
    fn test_ltv_cac_sentinels() {
        let assessor = HealthAssessor::new();
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Unbounded),
            UnitEconomicsBand::Excellent
        );
        assert_eq!(
            assessor.ltv_cac_band(&MetricValue::Indeterminate),
            UnitEconomicsBand::Unknown
        );
    }

    #[test]
    fn test_round_type_bands() {
        let assessor = HealthAssessor::new();
        assert_eq!(assessor.round_type(50_000_000), RoundType::PreSeed);
        assert_eq!(assessor.round_type(75_000_000), RoundType::Seed);
        assert_eq!(assessor.round_type(299_999_999), RoundType::Seed);
        assert_eq!(assessor.round_type(300_000_000), RoundType::SeriesA);
        assert_eq!(assessor.round_type(1_500_000_000), RoundType::SeriesB);
        assert_eq!(assessor.round_type(5_000_000_000), RoundType::Growth);
    }
}
