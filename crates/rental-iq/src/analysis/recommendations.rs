use super::comparison::{ComparisonResult, RentalStrategy};
use super::domain::PropertyProfile;
use super::metrics::AggregatedMetrics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Positive,
    Warning,
    Info,
}

impl RecommendationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A single plain-language takeaway for the investor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Builds the advisory list in a fixed rule order: occupancy strength, rate
/// strength, strategy verdict, layout notes, then break-even risk.
pub fn generate(
    metrics: &AggregatedMetrics,
    comparison: &ComparisonResult,
    property: &PropertyProfile,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.occupancy_rate > 0.75 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Positive,
            "High projected occupancy rate indicates strong STR demand in this area",
        ));
    } else if metrics.occupancy_rate < 0.60 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Warning,
            "Below-average occupancy projections suggest researching local STR regulations and demand",
        ));
    }

    if metrics.avg_nightly_rate > 200.0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Positive,
            "Premium nightly rates achievable in this market",
        ));
    }

    if comparison.recommendation == RentalStrategy::Str && comparison.difference.percentage > 30.0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Positive,
            format!(
                "STR projected to generate {}% more income than traditional rental",
                comparison.difference.percentage
            ),
        ));
    } else if comparison.recommendation == RentalStrategy::Ltr {
        recommendations.push(Recommendation::new(
            RecommendationKind::Warning,
            "Long-term rental may be more profitable with less management overhead",
        ));
    }

    if property.bedrooms.unwrap_or(0) >= 3 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Info,
            "Larger properties can command premium rates for group bookings",
        ));
    }

    if comparison.break_even_occupancy > 0.70 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Warning,
            "High break-even occupancy leaves little margin for market downturns",
        ));
    }

    recommendations
}
