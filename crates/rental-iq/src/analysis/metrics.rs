use super::comparables::ScoredComparable;
use super::domain::{Confidence, PropertyProfile};
use serde::{Deserialize, Serialize};

/// Average days per month used across all revenue projections.
pub const AVG_DAYS_PER_MONTH: f64 = 30.4;

/// Occupancy assumptions by property type, applied when no comparable carries
/// an occupancy reading. Matching is case-insensitive and exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyDefaults {
    entries: &'static [(&'static str, f64)],
    fallback: f64,
}

impl OccupancyDefaults {
    pub const fn new(entries: &'static [(&'static str, f64)], fallback: f64) -> Self {
        Self { entries, fallback }
    }

    pub fn rate_for(&self, property_type: Option<&str>) -> f64 {
        let Some(property_type) = property_type else {
            return self.fallback;
        };
        let wanted = property_type.trim().to_ascii_lowercase();

        self.entries
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.fallback)
    }
}

impl Default for OccupancyDefaults {
    fn default() -> Self {
        Self::new(
            &[
                ("single family", 0.70),
                ("condo", 0.75),
                ("townhouse", 0.72),
                ("apartment", 0.75),
                ("house", 0.70),
            ],
            0.70,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Descriptive statistics over the filtered comparable pool. Immutable once
/// produced; downstream components only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetrics {
    pub avg_nightly_rate: f64,
    pub median_nightly_rate: f64,
    /// Fraction of nights booked, in [0, 1].
    pub occupancy_rate: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub confidence: Confidence,
    pub data_points: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl AggregatedMetrics {
    /// The defined degenerate result for empty or price-less comparable
    /// pools. Sparse data is expected, never an error.
    pub fn empty() -> Self {
        Self {
            avg_nightly_rate: 0.0,
            median_nightly_rate: 0.0,
            occupancy_rate: 0.0,
            monthly_revenue: 0.0,
            annual_revenue: 0.0,
            confidence: Confidence::Low,
            data_points: 0,
            price_range: None,
        }
    }
}

/// Aggregates the scored pool into market metrics. Revenue projections are
/// computed at full precision and rounded on output: rates to whole dollars,
/// occupancy to two decimals, revenue to whole dollars.
pub fn aggregate(
    comparables: &[ScoredComparable],
    property: &PropertyProfile,
    defaults: &OccupancyDefaults,
) -> AggregatedMetrics {
    let prices: Vec<f64> = comparables
        .iter()
        .map(|comparable| comparable.listing.nightly_price)
        .filter(|price| *price > 0.0)
        .collect();

    if prices.is_empty() {
        return AggregatedMetrics::empty();
    }

    let avg_nightly_rate = mean(&prices);
    let median_nightly_rate = median(&prices);

    let occupancy_readings: Vec<f64> = comparables
        .iter()
        .filter_map(|comparable| comparable.listing.occupancy_rate)
        .filter(|rate| *rate > 0.0 && *rate <= 1.0)
        .collect();

    let occupancy_rate = if occupancy_readings.is_empty() {
        defaults.rate_for(property.property_type.as_deref())
    } else {
        mean(&occupancy_readings)
    };

    let monthly_revenue = avg_nightly_rate * AVG_DAYS_PER_MONTH * occupancy_rate;
    let annual_revenue = monthly_revenue * 12.0;

    let price_range = PriceRange {
        min: prices.iter().copied().fold(f64::INFINITY, f64::min),
        max: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    AggregatedMetrics {
        avg_nightly_rate: avg_nightly_rate.round(),
        median_nightly_rate: median_nightly_rate.round(),
        occupancy_rate: round2(occupancy_rate),
        monthly_revenue: monthly_revenue.round(),
        annual_revenue: annual_revenue.round(),
        confidence: confidence_for(comparables.len(), prices.len()),
        data_points: comparables.len(),
        price_range: Some(price_range),
    }
}

/// Data-quality ladder over comparable and valid-price counts.
pub fn confidence_for(comparable_count: usize, price_count: usize) -> Confidence {
    if comparable_count >= 10 && price_count >= 8 {
        Confidence::High
    } else if comparable_count >= 5 && price_count >= 4 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("nightly prices are finite"));
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
