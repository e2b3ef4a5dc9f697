use clap::Args;
use rental_iq::analysis::{
    ListingImporter, MarketContext, PropertyProfile, RawListing, StrAnalysis, StrAnalysisEngine,
};
use rental_iq::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to the target property profile (JSON)
    #[arg(long)]
    pub(crate) property: PathBuf,
    /// Optional comparable listings export (JSON array)
    #[arg(long)]
    pub(crate) comparables: Option<PathBuf>,
    /// Optional comparable listings export (CSV)
    #[arg(long)]
    pub(crate) comparables_csv: Option<PathBuf>,
    /// Estimated long-term monthly rent for the comparison
    #[arg(long)]
    pub(crate) ltr_rent: Option<f64>,
    /// Emit the full analysis as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the sample long-term monthly rent
    #[arg(long)]
    pub(crate) ltr_rent: Option<f64>,
    /// Emit the full analysis as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        property,
        comparables,
        comparables_csv,
        ltr_rent,
        json,
    } = args;

    let raw = std::fs::read_to_string(property)?;
    let property: PropertyProfile = serde_json::from_str(&raw)?;

    let mut listings = Vec::new();
    if let Some(path) = comparables {
        listings.extend(ListingImporter::from_json_path(path)?);
    }
    if let Some(path) = comparables_csv {
        listings.extend(ListingImporter::from_csv_path(path)?);
    }

    let market = MarketContext {
        ltr_monthly_rent: ltr_rent,
    };
    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&property, &listings, &market);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        render_analysis(&property, &analysis);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { ltr_rent, json } = args;

    let property = sample_property();
    let listings: Vec<_> = sample_comparables()
        .into_iter()
        .map(RawListing::canonicalize)
        .collect();
    let market = MarketContext {
        ltr_monthly_rent: Some(ltr_rent.unwrap_or(3200.0)),
    };

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&property, &listings, &market);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Rental IQ demo analysis");
        render_analysis(&property, &analysis);
    }

    Ok(())
}

pub(crate) fn render_analysis(property: &PropertyProfile, analysis: &StrAnalysis) {
    println!(
        "Property: {} | ${:.0} | {} bed / {} bath",
        property.address.as_deref().unwrap_or("unknown address"),
        property.price,
        property
            .bedrooms
            .map(|count| count.to_string())
            .unwrap_or_else(|| "?".to_string()),
        property
            .bathrooms
            .map(|count| count.to_string())
            .unwrap_or_else(|| "?".to_string()),
    );
    println!("Data source: {}", analysis.provenance.label());

    let metrics = &analysis.metrics;
    println!("\nMarket metrics");
    println!(
        "- Nightly rate: ${:.0} avg / ${:.0} median",
        metrics.avg_nightly_rate, metrics.median_nightly_rate
    );
    println!("- Occupancy: {:.0}%", metrics.occupancy_rate * 100.0);
    println!(
        "- Revenue: ${:.0}/mo | ${:.0}/yr",
        metrics.monthly_revenue, metrics.annual_revenue
    );
    println!(
        "- Confidence: {} ({} comparables)",
        metrics.confidence.label(),
        metrics.data_points
    );
    if let Some(range) = &metrics.price_range {
        println!("- Comparable rates: ${:.0} to ${:.0}", range.min, range.max);
    }

    if !analysis.comparables.is_empty() {
        println!("\nTop comparables");
        for comparable in &analysis.comparables {
            println!(
                "- {} | ${:.0}/night | similarity {}",
                comparable
                    .listing
                    .title
                    .as_deref()
                    .unwrap_or(comparable.listing.id.as_str()),
                comparable.listing.nightly_price,
                comparable.similarity_score
            );
        }
    }

    println!("\nOperating costs");
    println!(
        "- ${:.0}/mo | ${:.0}/yr ({:.0}% of revenue)",
        analysis.expenses.monthly.total,
        analysis.expenses.annual.total,
        analysis.expenses.percentage_of_revenue
    );
    println!(
        "- Net income: ${:.0}/mo | ${:.0}/yr",
        analysis.net_monthly_income, analysis.net_annual_income
    );

    let financial = &analysis.financial;
    println!("\nInvestment metrics");
    println!("- Cap rate: {:.1}%", financial.cap_rate);
    println!("- Cash-on-cash: {:.1}%", financial.cash_on_cash_return);
    if financial.payback_period < rental_iq::analysis::PAYBACK_UNKNOWN_YEARS {
        println!("- Payback: {:.1} years", financial.payback_period);
    } else {
        println!("- Payback: not reachable at projected income");
    }

    println!("\nSeasonal outlook");
    for projection in &analysis.seasonal {
        println!(
            "- {}: ${:.0}/night | {:.0}% occupancy | ${:.0} revenue | {} bookings",
            projection.season.label(),
            projection.avg_rate,
            projection.occupancy * 100.0,
            projection.revenue,
            projection.bookings
        );
    }

    let scenarios = &analysis.scenarios;
    println!("\nScenarios (monthly revenue)");
    println!(
        "- Conservative ${:.0} | Realistic ${:.0} | Optimistic ${:.0}",
        scenarios.conservative.monthly_revenue,
        scenarios.realistic.monthly_revenue,
        scenarios.optimistic.monthly_revenue
    );

    let comparison = &analysis.comparison;
    println!("\nStrategy comparison");
    println!(
        "- STR net ${:.0}/mo vs LTR net ${:.0}/mo",
        comparison.short_term.monthly_net, comparison.long_term.monthly_net
    );
    println!(
        "- Difference: ${:.0}/mo ({:.0}%)",
        comparison.difference.monthly, comparison.difference.percentage
    );
    println!(
        "- Break-even occupancy: {:.0}%",
        comparison.break_even_occupancy * 100.0
    );
    println!("- Verdict: {}", comparison.recommendation.label());
    println!("- {}", comparison.risk_label);

    if !analysis.recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &analysis.recommendations {
            println!(
                "- [{}] {}",
                recommendation.kind.label(),
                recommendation.message
            );
        }
    }
}

pub(crate) fn sample_property() -> PropertyProfile {
    PropertyProfile {
        price: 850_000.0,
        bedrooms: Some(3),
        bathrooms: Some(2.0),
        sqft: Some(1400),
        property_type: Some("Condo".to_string()),
        property_taxes: Some(5400.0),
        hoa_fees: Some(420.0),
        address: Some("101 Harbor Front, Unit 2304".to_string()),
    }
}

pub(crate) fn sample_comparables() -> Vec<RawListing> {
    let base = |id: &str, title: &str, price: f64, occupancy: f64| RawListing {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        nightly_price: Some(price),
        bedrooms: Some(3),
        bathrooms: Some(2.0),
        property_type: Some("condo".to_string()),
        occupancy_rate: Some(occupancy),
        rating: Some(4.8),
        reviews_count: Some(120),
        ..RawListing::default()
    };

    vec![
        base("hv-101", "Harborview Corner Suite", 215.0, 0.81),
        base("hv-102", "Skyline Two-Level Condo", 245.0, 0.77),
        base("hv-103", "Waterfront Family Retreat", 189.0, 0.74),
        base("hv-104", "Old Town Designer Loft", 205.0, 0.79),
        base("hv-105", "Marina District Hideaway", 232.0, 0.72),
        base("hv-106", "Garden Terrace Apartment", 168.0, 0.69),
    ]
}
