use super::expenses::ExpenseBreakdown;
use super::metrics::AggregatedMetrics;
use serde::Serialize;

/// Sentinel for an undefined payback period (non-positive NOI). Callers must
/// treat this as "unknown", never as a computed horizon.
pub const PAYBACK_UNKNOWN_YEARS: f64 = 999.0;

/// Share of the purchase price assumed as the cash down payment.
const DOWN_PAYMENT_SHARE: f64 = 0.20;

/// Investment return metrics. Percentages and years round to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialMetrics {
    pub cap_rate: f64,
    pub cash_on_cash_return: f64,
    pub payback_period: f64,
    pub net_operating_income: f64,
}

pub fn calculate(
    metrics: &AggregatedMetrics,
    expenses: &ExpenseBreakdown,
    property_price: f64,
) -> FinancialMetrics {
    let net_operating_income = metrics.annual_revenue - expenses.annual.total;

    let cap_rate = if property_price > 0.0 {
        net_operating_income / property_price * 100.0
    } else {
        0.0
    };

    let down_payment = property_price * DOWN_PAYMENT_SHARE;
    let cash_on_cash_return = if down_payment > 0.0 {
        net_operating_income / down_payment * 100.0
    } else {
        0.0
    };

    let payback_period = if net_operating_income > 0.0 {
        property_price / net_operating_income
    } else {
        PAYBACK_UNKNOWN_YEARS
    };

    FinancialMetrics {
        cap_rate: round1(cap_rate),
        cash_on_cash_return: round1(cash_on_cash_return),
        payback_period: round1(payback_period),
        net_operating_income: net_operating_income.round(),
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::PropertyProfile;
    use crate::analysis::expenses::{estimate, ExpenseAssumptions};
    use crate::analysis::metrics::AggregatedMetrics;

    fn metrics_with_revenue(annual_revenue: f64) -> AggregatedMetrics {
        AggregatedMetrics {
            annual_revenue,
            monthly_revenue: (annual_revenue / 12.0).round(),
            ..AggregatedMetrics::empty()
        }
    }

    fn property(price: f64) -> PropertyProfile {
        PropertyProfile {
            price,
            bedrooms: Some(2),
            bathrooms: Some(1.0),
            sqft: None,
            property_type: None,
            property_taxes: None,
            hoa_fees: None,
            address: None,
        }
    }

    #[test]
    fn healthy_revenue_produces_positive_returns() {
        let property = property(500_000.0);
        let metrics = metrics_with_revenue(90_000.0);
        let expenses = estimate(
            metrics.annual_revenue,
            &property,
            &ExpenseAssumptions::default(),
        );

        let financial = calculate(&metrics, &expenses, property.price);
        assert!(financial.net_operating_income > 0.0);
        assert!(financial.cap_rate > 0.0);
        // 20% down magnifies the cap rate fivefold.
        assert!(
            (financial.cash_on_cash_return - financial.cap_rate * 5.0).abs() <= 0.3,
            "cash-on-cash {} should be about five times cap rate {}",
            financial.cash_on_cash_return,
            financial.cap_rate
        );
        assert!(financial.payback_period < PAYBACK_UNKNOWN_YEARS);
    }

    #[test]
    fn non_positive_noi_returns_the_payback_sentinel() {
        let property = property(500_000.0);
        let metrics = metrics_with_revenue(0.0);
        let expenses = estimate(0.0, &property, &ExpenseAssumptions::default());

        let financial = calculate(&metrics, &expenses, property.price);
        assert!(financial.net_operating_income < 0.0);
        assert_eq!(financial.payback_period, PAYBACK_UNKNOWN_YEARS);
        assert!(financial.cap_rate < 0.0);
    }

    #[test]
    fn zero_price_degrades_ratios_to_zero() {
        let metrics = metrics_with_revenue(60_000.0);
        let expenses = estimate(60_000.0, &property(0.0), &ExpenseAssumptions::default());

        let financial = calculate(&metrics, &expenses, 0.0);
        assert_eq!(financial.cap_rate, 0.0);
        assert_eq!(financial.cash_on_cash_return, 0.0);
        // Zero price pays itself back immediately when NOI is positive.
        if financial.net_operating_income > 0.0 {
            assert_eq!(financial.payback_period, 0.0);
        } else {
            assert_eq!(financial.payback_period, PAYBACK_UNKNOWN_YEARS);
        }
    }

    #[test]
    fn rates_round_to_one_decimal() {
        let property = property(850_000.0);
        let metrics = metrics_with_revenue(56_544.0);
        let expenses = estimate(
            metrics.annual_revenue,
            &property,
            &ExpenseAssumptions::default(),
        );

        let financial = calculate(&metrics, &expenses, property.price);
        assert_eq!(financial.cap_rate, round1(financial.cap_rate));
        assert_eq!(
            financial.cash_on_cash_return,
            round1(financial.cash_on_cash_return)
        );
        assert_eq!(financial.payback_period, round1(financial.payback_period));
    }
}
