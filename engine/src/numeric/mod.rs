//! Numeric sentinel types
//!
//! Financial ratios routinely divide by quantities that can legitimately be
//! zero (no customers acquired, no churn observed, no prior revenue). Instead
//! of letting IEEE-754 infinities and NaNs leak through every downstream
//! formula, division results are carried as a tagged value:
//!
//! - `Finite(v)` - a real, usable number
//! - `Unbounded` - the denominator was zero (or itself unbounded growth),
//!   e.g. CAC with zero new customers, lifespan with zero churn
//! - `Indeterminate` - the ratio carries no information, e.g. 0/0 or a
//!   finite value measured against an unbounded one
//!
//! Sentinels propagate through dependent formulas explicitly, so "no data"
//! arithmetic is a set of documented rules rather than platform-dependent
//! float behavior.
//!
//! CRITICAL: All money values are i64 (cents); ratios and rates are f64.

use serde::{Deserialize, Serialize};

/// A metric value that may be undefined rather than infinite.
///
/// # Example
/// ```
/// use startup_finance_core_rs::MetricValue;
///
/// // CAC with marketing spend but no customers acquired
/// let cac = MetricValue::ratio(150_000.0, 0.0);
/// assert_eq!(cac, MetricValue::Unbounded);
///
/// // LTV:CAC when both sides are unbounded says nothing
/// assert_eq!(
///     MetricValue::Unbounded.div(MetricValue::Unbounded),
///     MetricValue::Indeterminate
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// A real number (units depend on the metric: cents, percent, months...)
    Finite(f64),

    /// Division by zero with a non-zero numerator: the metric grows without
    /// bound as the denominator approaches zero (e.g. infinite runway,
    /// infinite customer lifespan)
    Unbounded,

    /// No meaningful value can be assigned (0/0, finite vs. unbounded)
    Indeterminate,
}

impl MetricValue {
    /// Safe division of two finite quantities.
    ///
    /// * denominator > 0 (or < 0): plain division
    /// * denominator == 0, numerator != 0: `Unbounded`
    /// * denominator == 0, numerator == 0: `Indeterminate`
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator != 0.0 {
            MetricValue::Finite(numerator / denominator)
        } else if numerator != 0.0 {
            MetricValue::Unbounded
        } else {
            MetricValue::Indeterminate
        }
    }

    /// Division with full sentinel propagation.
    ///
    /// | numerator | denominator | result |
    /// |---|---|---|
    /// | Finite | Finite | `ratio()` |
    /// | Unbounded | Finite | Unbounded |
    /// | Unbounded | Unbounded | Indeterminate |
    /// | Finite | Unbounded | Indeterminate |
    /// | Indeterminate | any | Indeterminate |
    pub fn div(self, denominator: MetricValue) -> Self {
        match (self, denominator) {
            (MetricValue::Finite(n), MetricValue::Finite(d)) => MetricValue::ratio(n, d),
            (MetricValue::Unbounded, MetricValue::Finite(_)) => MetricValue::Unbounded,
            _ => MetricValue::Indeterminate,
        }
    }

    /// Scale by a finite factor.
    ///
    /// `Unbounded` stays unbounded for a positive factor; scaling an
    /// unbounded value by zero is `Indeterminate` (0 x infinity).
    pub fn scale(self, factor: f64) -> Self {
        match self {
            MetricValue::Finite(v) => MetricValue::Finite(v * factor),
            MetricValue::Unbounded if factor > 0.0 => MetricValue::Unbounded,
            MetricValue::Unbounded => MetricValue::Indeterminate,
            MetricValue::Indeterminate => MetricValue::Indeterminate,
        }
    }

    /// The finite value, if there is one.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            MetricValue::Finite(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, MetricValue::Unbounded)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, MetricValue::Indeterminate)
    }
}

/// Months of operation remaining at the current net burn.
///
/// A cash-flow-positive (or break-even) company has no depletion horizon, so
/// runway is a tagged type rather than a number with a magic value.
///
/// # Example
/// ```
/// use startup_finance_core_rs::Runway;
///
/// assert_eq!(Runway::from_burn(12_000_000, 2_000_000.0), Runway::Months(6));
/// assert_eq!(Runway::from_burn(10_000_000, 0.0), Runway::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Runway {
    /// Whole months remaining, truncated toward zero (never rounded up)
    Months(u32),

    /// Net burn <= 0: cash-flow positive or break-even
    Unbounded,
}

impl Runway {
    /// Compute runway from a cash position (cents) and net burn (cents/month).
    ///
    /// Net burn at or below zero means the company is not depleting cash.
    /// A non-positive cash position with positive burn is zero months, not
    /// a negative figure.
    pub fn from_burn(cash: i64, net_burn: f64) -> Self {
        if net_burn <= 0.0 {
            Runway::Unbounded
        } else if cash <= 0 {
            Runway::Months(0)
        } else {
            Runway::Months((cash as f64 / net_burn).floor() as u32)
        }
    }

    /// Finite month count, if bounded.
    pub fn months(&self) -> Option<u32> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::Unbounded => None,
        }
    }

    /// Signed difference in months against another runway.
    ///
    /// Returns `None` when exactly one side is unbounded (the delta is not a
    /// finite number); two unbounded runways compare as zero change.
    pub fn delta_months(&self, from: &Runway) -> Option<i64> {
        match (self, from) {
            (Runway::Months(a), Runway::Months(b)) => Some(*a as i64 - *b as i64),
            (Runway::Unbounded, Runway::Unbounded) => Some(0),
            _ => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Runway::Unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_normal() {
        assert_eq!(MetricValue::ratio(100.0, 4.0), MetricValue::Finite(25.0));
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(MetricValue::ratio(100.0, 0.0), MetricValue::Unbounded);
    }

    #[test]
    fn test_ratio_zero_over_zero() {
        assert_eq!(MetricValue::ratio(0.0, 0.0), MetricValue::Indeterminate);
    }

    #[test]
    fn test_div_unbounded_over_finite() {
        let r = MetricValue::Unbounded.div(MetricValue::Finite(3.0));
        assert_eq!(r, MetricValue::Unbounded);
    }

    #[test]
    fn test_div_unbounded_over_unbounded() {
        let r = MetricValue::Unbounded.div(MetricValue::Unbounded);
        assert_eq!(r, MetricValue::Indeterminate);
    }

    #[test]
    fn test_div_finite_over_unbounded() {
        let r = MetricValue::Finite(1000.0).div(MetricValue::Unbounded);
        assert_eq!(r, MetricValue::Indeterminate);
    }

    #[test]
    fn test_scale_unbounded_by_zero() {
        assert_eq!(
            MetricValue::Unbounded.scale(0.0),
            MetricValue::Indeterminate
        );
    }

    #[test]
    fn test_runway_floor_not_round() {
        // 11.9 months of cash is 11 months of runway
        assert_eq!(
            Runway::from_burn(11_900_000, 1_000_000.0),
            Runway::Months(11)
        );
    }

    #[test]
    fn test_runway_negative_cash() {
        assert_eq!(Runway::from_burn(-500_000, 1_000_000.0), Runway::Months(0));
    }

    #[test]
    fn test_runway_break_even_is_unbounded() {
        assert_eq!(Runway::from_burn(10_000_000, 0.0), Runway::Unbounded);
        assert_eq!(Runway::from_burn(10_000_000, -250_000.0), Runway::Unbounded);
    }

    #[test]
    fn test_sentinel_wire_format() {
        // The tagged representation is an API contract: consumers branch on
        // "kind" instead of parsing magic numbers.
        assert_eq!(
            serde_json::to_string(&MetricValue::Finite(2.5)).unwrap(),
            r#"{"kind":"finite","value":2.5}"#
        );
        assert_eq!(
            serde_json::to_string(&MetricValue::Unbounded).unwrap(),
            r#"{"kind":"unbounded"}"#
        );
        assert_eq!(
            serde_json::to_string(&Runway::Months(6)).unwrap(),
            r#"{"kind":"months","months":6}"#
        );
        assert_eq!(
            serde_json::to_string(&Runway::Unbounded).unwrap(),
            r#"{"kind":"unbounded"}"#
        );
    }

    #[test]
    fn test_runway_delta() {
        assert_eq!(
            Runway::Months(8).delta_months(&Runway::Months(11)),
            Some(-3)
        );
        assert_eq!(Runway::Unbounded.delta_months(&Runway::Months(11)), None);
        assert_eq!(Runway::Unbounded.delta_months(&Runway::Unbounded), Some(0));
    }
}
