use super::metrics::{AggregatedMetrics, AVG_DAYS_PER_MONTH};
use serde::Serialize;

/// Net-income factors applied when explicit expense figures are unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonAssumptions {
    /// Long-term rentals keep roughly this share of gross rent.
    pub ltr_net_factor: f64,
    /// Default STR net share (the 45% expense assumption) used for the
    /// break-even rate and when no computed net revenue is supplied.
    pub str_net_factor: f64,
}

impl Default for ComparisonAssumptions {
    fn default() -> Self {
        Self {
            ltr_net_factor: 0.75,
            str_net_factor: 0.55,
        }
    }
}

/// Which rental strategy the comparison favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RentalStrategy {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "LTR")]
    Ltr,
}

impl RentalStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Str => "Short-term rental",
            Self::Ltr => "Long-term rental",
        }
    }
}

/// Risk grade from the cushion between projected and break-even occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    Higher,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk - Strong occupancy cushion",
            Self::Moderate => "Moderate Risk - Reasonable occupancy cushion",
            Self::Higher => "Higher Risk - Minimal occupancy cushion",
            Self::High => "High Risk - Projected occupancy below break-even",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyIncome {
    pub monthly_gross: f64,
    pub monthly_net: f64,
    pub annual_net: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeDifference {
    pub monthly: f64,
    pub annual: f64,
    /// Monthly difference as a share of LTR net income, rounded to a whole
    /// percent; zero when there is no LTR income to compare against.
    pub percentage: f64,
}

/// Outcome of the LTR/STR income comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub long_term: StrategyIncome,
    pub short_term: StrategyIncome,
    pub difference: IncomeDifference,
    /// Fraction of nights the STR must book to match LTR net income.
    pub break_even_occupancy: f64,
    pub recommendation: RentalStrategy,
    pub risk: RiskLevel,
    pub risk_label: &'static str,
}

/// Compares STR net income against an externally estimated LTR rent.
///
/// A zero `ltr_monthly_rent` zeroes the LTR side and the result is
/// structurally biased toward the STR recommendation; that source behavior is
/// kept deliberately.
pub fn compare(
    metrics: &AggregatedMetrics,
    str_monthly_net: Option<f64>,
    ltr_monthly_rent: f64,
    assumptions: &ComparisonAssumptions,
) -> ComparisonResult {
    let str_monthly_net = str_monthly_net
        .unwrap_or(metrics.monthly_revenue * assumptions.str_net_factor);
    let ltr_monthly_net = ltr_monthly_rent * assumptions.ltr_net_factor;

    let monthly_difference = str_monthly_net - ltr_monthly_net;
    let annual_difference = monthly_difference * 12.0;

    let percentage = if ltr_monthly_net > 0.0 {
        (monthly_difference / ltr_monthly_net * 100.0).round()
    } else {
        0.0
    };

    let break_even_occupancy = break_even_occupancy(
        metrics.avg_nightly_rate,
        ltr_monthly_net,
        assumptions.str_net_factor,
    );

    let recommendation = if monthly_difference > 0.0 {
        RentalStrategy::Str
    } else {
        RentalStrategy::Ltr
    };

    let risk = assess_risk(metrics.occupancy_rate, break_even_occupancy);

    ComparisonResult {
        long_term: StrategyIncome {
            monthly_gross: ltr_monthly_rent,
            monthly_net: ltr_monthly_net.round(),
            annual_net: (ltr_monthly_net * 12.0).round(),
        },
        short_term: StrategyIncome {
            monthly_gross: metrics.monthly_revenue,
            monthly_net: str_monthly_net.round(),
            annual_net: (str_monthly_net * 12.0).round(),
        },
        difference: IncomeDifference {
            monthly: monthly_difference.round(),
            annual: annual_difference.round(),
            percentage,
        },
        break_even_occupancy,
        recommendation,
        risk,
        risk_label: risk.label(),
    }
}

/// Nights-per-month the STR must book, as a fraction of the month, for its
/// net income to match the LTR's. An unpriced STR cannot break even against
/// real LTR income, so that case pins the result to full occupancy.
fn break_even_occupancy(avg_nightly_rate: f64, ltr_monthly_net: f64, str_net_factor: f64) -> f64 {
    let str_daily_net = avg_nightly_rate * str_net_factor;
    if str_daily_net > 0.0 {
        ltr_monthly_net / str_daily_net / AVG_DAYS_PER_MONTH
    } else if ltr_monthly_net > 0.0 {
        1.0
    } else {
        0.0
    }
}

fn assess_risk(projected_occupancy: f64, break_even_occupancy: f64) -> RiskLevel {
    let cushion = projected_occupancy - break_even_occupancy;

    if cushion > 0.20 {
        RiskLevel::Low
    } else if cushion > 0.10 {
        RiskLevel::Moderate
    } else if cushion > 0.0 {
        RiskLevel::Higher
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(avg_rate: f64, occupancy: f64) -> AggregatedMetrics {
        AggregatedMetrics {
            avg_nightly_rate: avg_rate,
            occupancy_rate: occupancy,
            monthly_revenue: (avg_rate * AVG_DAYS_PER_MONTH * occupancy).round(),
            annual_revenue: (avg_rate * AVG_DAYS_PER_MONTH * occupancy * 12.0).round(),
            ..AggregatedMetrics::empty()
        }
    }

    #[test]
    fn break_even_example_lands_near_seventy_two_percent() {
        let result = compare(
            &metrics(200.0, 0.75),
            None,
            3200.0,
            &ComparisonAssumptions::default(),
        );

        assert_eq!(result.long_term.monthly_net, 2400.0);
        // 2400 / (200 * 0.55) / 30.4
        assert!((result.break_even_occupancy - 0.7177).abs() < 0.001);
        assert_eq!((result.break_even_occupancy * 100.0).round(), 72.0);
    }

    #[test]
    fn supplied_net_revenue_overrides_the_default_factor() {
        let base = metrics(200.0, 0.75);
        let result = compare(&base, Some(3000.0), 3200.0, &ComparisonAssumptions::default());
        assert_eq!(result.short_term.monthly_net, 3000.0);
        assert_eq!(result.short_term.annual_net, 36_000.0);
        assert_eq!(result.difference.monthly, 600.0);
        assert_eq!(result.recommendation, RentalStrategy::Str);
    }

    #[test]
    fn percentage_measures_uplift_over_ltr_net() {
        let result = compare(
            &metrics(200.0, 0.75),
            Some(3120.0),
            3200.0,
            &ComparisonAssumptions::default(),
        );
        // (3120 - 2400) / 2400
        assert_eq!(result.difference.percentage, 30.0);
    }

    #[test]
    fn ltr_wins_when_str_net_falls_short() {
        let result = compare(
            &metrics(100.0, 0.55),
            None,
            3200.0,
            &ComparisonAssumptions::default(),
        );
        assert_eq!(result.recommendation, RentalStrategy::Ltr);
        assert_eq!(result.risk, RiskLevel::High);
    }

    #[test]
    fn zero_ltr_rent_biases_toward_str() {
        let result = compare(
            &metrics(200.0, 0.75),
            None,
            0.0,
            &ComparisonAssumptions::default(),
        );
        assert_eq!(result.long_term.monthly_net, 0.0);
        assert_eq!(result.break_even_occupancy, 0.0);
        assert_eq!(result.recommendation, RentalStrategy::Str);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(result.difference.percentage, 0.0);
    }

    #[test]
    fn unpriced_str_pins_break_even_to_full_occupancy() {
        let result = compare(
            &metrics(0.0, 0.0),
            None,
            3200.0,
            &ComparisonAssumptions::default(),
        );
        assert_eq!(result.break_even_occupancy, 1.0);
        assert_eq!(result.risk, RiskLevel::High);
        assert!(result.break_even_occupancy.is_finite());
    }

    #[test]
    fn risk_bands_follow_the_occupancy_cushion() {
        assert_eq!(assess_risk(0.80, 0.55), RiskLevel::Low);
        assert_eq!(assess_risk(0.80, 0.65), RiskLevel::Moderate);
        assert_eq!(assess_risk(0.80, 0.75), RiskLevel::Higher);
        assert_eq!(assess_risk(0.70, 0.75), RiskLevel::High);
        assert_eq!(assess_risk(0.70, 0.70), RiskLevel::High);
    }
}
