use super::domain::{Confidence, PropertyProfile};
use super::metrics::{AggregatedMetrics, AVG_DAYS_PER_MONTH};

/// Price-derived assumptions used when no comparable listings survive
/// normalization and filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackAssumptions {
    /// Nightly rate as a share of the purchase price.
    pub nightly_rate_price_share: f64,
    pub occupancy_rate: f64,
}

impl Default for FallbackAssumptions {
    fn default() -> Self {
        Self {
            nightly_rate_price_share: 0.001,
            occupancy_rate: 0.70,
        }
    }
}

/// Estimates market metrics from the purchase price alone. The result always
/// carries low confidence and zero data points so downstream consumers can
/// tell it apart from comparable-backed figures.
pub fn estimated_metrics(
    property: &PropertyProfile,
    assumptions: &FallbackAssumptions,
) -> AggregatedMetrics {
    let nightly_rate = (property.price * assumptions.nightly_rate_price_share).round();
    let occupancy_rate = assumptions.occupancy_rate;
    let monthly_revenue = (nightly_rate * AVG_DAYS_PER_MONTH * occupancy_rate).round();

    AggregatedMetrics {
        avg_nightly_rate: nightly_rate,
        median_nightly_rate: nightly_rate,
        occupancy_rate,
        monthly_revenue,
        annual_revenue: monthly_revenue * 12.0,
        confidence: Confidence::Low,
        data_points: 0,
        price_range: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(price: f64) -> PropertyProfile {
        PropertyProfile {
            price,
            bedrooms: Some(2),
            bathrooms: Some(1.0),
            sqft: None,
            property_type: Some("Condo".to_string()),
            property_taxes: None,
            hoa_fees: None,
            address: None,
        }
    }

    #[test]
    fn nightly_rate_is_a_tenth_of_a_percent_of_price() {
        let metrics = estimated_metrics(&property(650_000.0), &FallbackAssumptions::default());
        assert_eq!(metrics.avg_nightly_rate, 650.0);
        assert_eq!(metrics.median_nightly_rate, 650.0);
        assert_eq!(metrics.occupancy_rate, 0.70);
        // 650 * 30.4 * 0.70
        assert_eq!(metrics.monthly_revenue, 13_832.0);
        assert_eq!(metrics.annual_revenue, 165_984.0);
    }

    #[test]
    fn estimates_always_carry_low_confidence() {
        let metrics = estimated_metrics(&property(650_000.0), &FallbackAssumptions::default());
        assert_eq!(metrics.confidence, Confidence::Low);
        assert_eq!(metrics.data_points, 0);
        assert!(metrics.price_range.is_none());
    }

    #[test]
    fn zero_price_yields_zero_metrics() {
        let metrics = estimated_metrics(&property(0.0), &FallbackAssumptions::default());
        assert_eq!(metrics.avg_nightly_rate, 0.0);
        assert_eq!(metrics.monthly_revenue, 0.0);
        assert_eq!(metrics.annual_revenue, 0.0);
    }
}
