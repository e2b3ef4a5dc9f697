use super::metrics::{AggregatedMetrics, AVG_DAYS_PER_MONTH};
use serde::Serialize;

/// Rate and occupancy adjustments applied around the realistic baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioAdjustments {
    pub conservative_occupancy_delta: f64,
    /// Conservative occupancy never drops below this floor, so a weak
    /// baseline can produce a conservative scenario above the realistic one.
    pub conservative_occupancy_floor: f64,
    pub conservative_rate_factor: f64,
    pub optimistic_occupancy_delta: f64,
    pub optimistic_occupancy_ceiling: f64,
    pub optimistic_rate_factor: f64,
}

impl Default for ScenarioAdjustments {
    fn default() -> Self {
        Self {
            conservative_occupancy_delta: 0.15,
            conservative_occupancy_floor: 0.40,
            conservative_rate_factor: 0.85,
            optimistic_occupancy_delta: 0.10,
            optimistic_occupancy_ceiling: 0.90,
            optimistic_rate_factor: 1.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub occupancy_rate: f64,
    pub nightly_rate: f64,
    pub monthly_revenue: f64,
}

/// Conservative, realistic, and optimistic revenue projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub conservative: Scenario,
    pub realistic: Scenario,
    pub optimistic: Scenario,
}

pub fn generate(metrics: &AggregatedMetrics, adjustments: &ScenarioAdjustments) -> ScenarioSet {
    let conservative_occupancy = (metrics.occupancy_rate
        - adjustments.conservative_occupancy_delta)
        .max(adjustments.conservative_occupancy_floor);
    let conservative_rate = metrics.avg_nightly_rate * adjustments.conservative_rate_factor;

    let optimistic_occupancy = (metrics.occupancy_rate + adjustments.optimistic_occupancy_delta)
        .min(adjustments.optimistic_occupancy_ceiling);
    let optimistic_rate = metrics.avg_nightly_rate * adjustments.optimistic_rate_factor;

    ScenarioSet {
        conservative: Scenario {
            occupancy_rate: conservative_occupancy,
            nightly_rate: conservative_rate.round(),
            monthly_revenue: monthly_revenue(conservative_rate, conservative_occupancy),
        },
        realistic: Scenario {
            occupancy_rate: metrics.occupancy_rate,
            nightly_rate: metrics.avg_nightly_rate,
            monthly_revenue: metrics.monthly_revenue,
        },
        optimistic: Scenario {
            occupancy_rate: optimistic_occupancy,
            nightly_rate: optimistic_rate.round(),
            monthly_revenue: monthly_revenue(optimistic_rate, optimistic_occupancy),
        },
    }
}

fn monthly_revenue(nightly_rate: f64, occupancy_rate: f64) -> f64 {
    (nightly_rate * AVG_DAYS_PER_MONTH * occupancy_rate).round()
}
