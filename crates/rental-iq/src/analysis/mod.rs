//! Short-term rental investment analysis.
//!
//! The engine runs a fixed pipeline over caller-supplied comparable listings:
//! similarity filtering, market metric aggregation, operating cost modeling,
//! investment ratios, seasonal and scenario projections, a long-term rental
//! comparison, and plain-language recommendations. Every stage is a pure
//! function over its inputs; the engine itself only carries configuration.

pub mod comparables;
pub mod comparison;
pub mod domain;
pub mod expenses;
pub mod fallback;
pub mod financial;
pub mod ingest;
pub mod listings;
pub mod metrics;
pub mod recommendations;
pub mod scenarios;
pub mod seasonal;

pub use comparables::{filter_comparables, similarity_score, ScoredComparable};
pub use comparison::{
    compare, ComparisonAssumptions, ComparisonResult, RentalStrategy, RiskLevel,
};
pub use domain::{Confidence, DataProvenance, MarketContext, PropertyProfile};
pub use expenses::{ExpenseAssumptions, ExpenseBreakdown};
pub use fallback::FallbackAssumptions;
pub use financial::{FinancialMetrics, PAYBACK_UNKNOWN_YEARS};
pub use ingest::{ListingImportError, ListingImporter};
pub use listings::{canonicalize_all, ComparableListing, RawListing};
pub use metrics::{AggregatedMetrics, OccupancyDefaults, PriceRange, AVG_DAYS_PER_MONTH};
pub use recommendations::{Recommendation, RecommendationKind};
pub use scenarios::{Scenario, ScenarioAdjustments, ScenarioSet};
pub use seasonal::{Season, SeasonProjection, SeasonalProfile};

use serde::Serialize;

/// How many of the strongest comparables the report retains.
pub const TOP_COMPARABLES: usize = 5;

/// Tunable assumptions for every pipeline stage. `Default` reproduces the
/// production model; callers override individual tables for what-if runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisConfig {
    pub occupancy_defaults: OccupancyDefaults,
    pub expenses: ExpenseAssumptions,
    pub scenarios: ScenarioAdjustments,
    pub seasonal: SeasonalProfile,
    pub comparison: ComparisonAssumptions,
    pub fallback: FallbackAssumptions,
}

/// Complete analysis report for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrAnalysis {
    pub metrics: AggregatedMetrics,
    /// The strongest comparables backing the metrics, at most
    /// [`TOP_COMPARABLES`] of them. Empty for estimated analyses.
    pub comparables: Vec<ScoredComparable>,
    pub expenses: ExpenseBreakdown,
    pub net_monthly_income: f64,
    pub net_annual_income: f64,
    pub financial: FinancialMetrics,
    pub seasonal: Vec<SeasonProjection>,
    pub scenarios: ScenarioSet,
    pub comparison: ComparisonResult,
    pub recommendations: Vec<Recommendation>,
    pub provenance: DataProvenance,
}

/// Stateless pipeline runner. Cheap to construct and to clone; holds only the
/// assumption tables.
#[derive(Debug, Clone, Default)]
pub struct StrAnalysisEngine {
    config: AnalysisConfig,
}

impl StrAnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes the property against a pool of comparable listings. When no
    /// listing survives similarity filtering the engine falls back to the
    /// price-based estimate and tags the result accordingly.
    pub fn analyze(
        &self,
        property: &PropertyProfile,
        listings: &[ComparableListing],
        market: &MarketContext,
    ) -> StrAnalysis {
        let comparables = filter_comparables(listings, property);
        if comparables.is_empty() {
            return self.analyze_estimated(property, market);
        }

        let metrics = metrics::aggregate(&comparables, property, &self.config.occupancy_defaults);
        self.finish(
            property,
            market,
            metrics,
            comparables,
            DataProvenance::Comparables,
        )
    }

    /// Analyzes the property from its purchase price alone, without any
    /// comparable data.
    pub fn analyze_estimated(
        &self,
        property: &PropertyProfile,
        market: &MarketContext,
    ) -> StrAnalysis {
        let metrics = fallback::estimated_metrics(property, &self.config.fallback);
        self.finish(property, market, metrics, Vec::new(), DataProvenance::Estimated)
    }

    fn finish(
        &self,
        property: &PropertyProfile,
        market: &MarketContext,
        metrics: AggregatedMetrics,
        mut comparables: Vec<ScoredComparable>,
        provenance: DataProvenance,
    ) -> StrAnalysis {
        let expenses = expenses::estimate(metrics.annual_revenue, property, &self.config.expenses);
        let net_monthly_income = metrics.monthly_revenue - expenses.monthly.total;
        let net_annual_income = metrics.annual_revenue - expenses.annual.total;

        let financial = financial::calculate(&metrics, &expenses, property.price);
        let seasonal = seasonal::project(
            metrics.avg_nightly_rate,
            metrics.occupancy_rate,
            &self.config.seasonal,
        );
        let scenarios = scenarios::generate(&metrics, &self.config.scenarios);

        let comparison = compare(
            &metrics,
            Some(net_monthly_income),
            market.ltr_monthly_rent.unwrap_or(0.0),
            &self.config.comparison,
        );
        let recommendations = recommendations::generate(&metrics, &comparison, property);

        comparables.truncate(TOP_COMPARABLES);

        StrAnalysis {
            metrics,
            comparables,
            expenses,
            net_monthly_income,
            net_annual_income,
            financial,
            seasonal,
            scenarios,
            comparison,
            recommendations,
            provenance,
        }
    }
}
