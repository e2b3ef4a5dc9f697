use rental_iq::analysis::{
    canonicalize_all, Confidence, DataProvenance, MarketContext, PropertyProfile, RawListing,
    RentalStrategy, StrAnalysisEngine, AVG_DAYS_PER_MONTH, PAYBACK_UNKNOWN_YEARS, TOP_COMPARABLES,
};

fn harborview_condo() -> PropertyProfile {
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

fn condo_listing(id: &str, price: f64, occupancy: f64) -> RawListing {
    RawListing {
        id: Some(id.to_string()),
        nightly_price: Some(price),
        bedrooms: Some(3),
        bathrooms: Some(2.0),
        property_type: Some("condo".to_string()),
        occupancy_rate: Some(occupancy),
        ..RawListing::default()
    }
}

fn market() -> MarketContext {
    MarketContext {
        ltr_monthly_rent: Some(3200.0),
    }
}

#[test]
fn full_pipeline_produces_a_consistent_report() {
    let listings = canonicalize_all(vec![
        condo_listing("c1", 215.0, 0.81),
        condo_listing("c2", 245.0, 0.77),
        condo_listing("c3", 189.0, 0.74),
        condo_listing("c4", 205.0, 0.79),
        condo_listing("c5", 232.0, 0.72),
        condo_listing("c6", 168.0, 0.69),
    ]);

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &listings, &market());

    assert_eq!(analysis.provenance, DataProvenance::Comparables);
    assert_eq!(analysis.metrics.data_points, 6);
    assert_eq!(analysis.metrics.confidence, Confidence::Medium);
    assert!(analysis.comparables.len() <= TOP_COMPARABLES);

    // Revenue identity within rounding tolerance; occupancy rounds to two
    // decimals on output, so allow one percent of slack.
    let reconstructed =
        analysis.metrics.avg_nightly_rate * AVG_DAYS_PER_MONTH * analysis.metrics.occupancy_rate;
    let tolerance = analysis.metrics.monthly_revenue * 0.01 + 1.0;
    assert!((reconstructed - analysis.metrics.monthly_revenue).abs() <= tolerance);

    // Net income ties the metrics and expense model together.
    assert_eq!(
        analysis.net_annual_income,
        analysis.metrics.annual_revenue - analysis.expenses.annual.total
    );
    assert_eq!(
        analysis.comparison.short_term.monthly_net,
        analysis.net_monthly_income.round()
    );

    assert_eq!(analysis.seasonal.len(), 4);
    assert!(
        analysis.scenarios.conservative.monthly_revenue
            <= analysis.scenarios.optimistic.monthly_revenue
    );
    assert!(!analysis.recommendations.is_empty());
}

#[test]
fn strongest_comparables_lead_the_report() {
    let mut listings = canonicalize_all(vec![
        condo_listing("strong-1", 210.0, 0.80),
        condo_listing("strong-2", 220.0, 0.78),
    ]);
    // A mismatched listing scores lower and must sort after the condos.
    listings.extend(canonicalize_all(vec![RawListing {
        id: Some("weak-1".to_string()),
        nightly_price: Some(400.0),
        bedrooms: Some(1),
        bathrooms: Some(1.0),
        property_type: Some("house".to_string()),
        ..RawListing::default()
    }]));

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &listings, &market());

    let scores: Vec<u8> = analysis
        .comparables
        .iter()
        .map(|comparable| comparable.similarity_score)
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert_eq!(analysis.comparables[0].listing.id, "strong-1");
}

#[test]
fn empty_comparable_pool_falls_back_to_price_estimate() {
    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &[], &market());

    assert_eq!(analysis.provenance, DataProvenance::Estimated);
    assert!(analysis.comparables.is_empty());
    assert_eq!(analysis.metrics.avg_nightly_rate, 850.0);
    assert_eq!(analysis.metrics.occupancy_rate, 0.70);
    assert_eq!(analysis.metrics.confidence, Confidence::Low);
    assert_eq!(analysis.metrics.data_points, 0);

    // The rest of the pipeline still runs over the estimate.
    assert_eq!(analysis.seasonal.len(), 4);
    assert!(analysis.expenses.annual.total > 0.0);
}

#[test]
fn unpriced_comparables_degrade_without_erroring() {
    let listings = canonicalize_all(vec![
        RawListing {
            id: Some("p1".to_string()),
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            property_type: Some("condo".to_string()),
            ..RawListing::default()
        },
        RawListing {
            id: Some("p2".to_string()),
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            property_type: Some("condo".to_string()),
            ..RawListing::default()
        },
    ]);

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &listings, &market());

    // Listings matched on attributes but carried no prices, so the metrics
    // degrade to zeros while the report still completes.
    assert_eq!(analysis.provenance, DataProvenance::Comparables);
    assert_eq!(analysis.metrics.avg_nightly_rate, 0.0);
    assert_eq!(analysis.metrics.monthly_revenue, 0.0);
    assert_eq!(analysis.financial.payback_period, PAYBACK_UNKNOWN_YEARS);
    assert!(analysis.comparison.break_even_occupancy >= 1.0);
}

#[test]
fn ltr_estimate_flips_the_verdict_for_weak_str_markets() {
    let listings = canonicalize_all(vec![
        condo_listing("w1", 85.0, 0.55),
        condo_listing("w2", 95.0, 0.52),
    ]);

    let engine = StrAnalysisEngine::default();
    let strong_ltr = MarketContext {
        ltr_monthly_rent: Some(4500.0),
    };
    let analysis = engine.analyze(&harborview_condo(), &listings, &strong_ltr);

    assert_eq!(
        analysis.comparison.recommendation,
        RentalStrategy::Ltr
    );
    assert!(analysis.recommendations.iter().any(|entry| {
        entry.message == "Long-term rental may be more profitable with less management overhead"
    }));
}

#[test]
fn missing_ltr_estimate_defaults_the_comparison_to_str() {
    let listings = canonicalize_all(vec![
        condo_listing("c1", 215.0, 0.81),
        condo_listing("c2", 245.0, 0.77),
    ]);

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &listings, &MarketContext::default());

    assert_eq!(analysis.comparison.long_term.monthly_net, 0.0);
    assert_eq!(analysis.comparison.recommendation, RentalStrategy::Str);
    assert_eq!(analysis.comparison.difference.percentage, 0.0);
}

#[test]
fn analysis_serializes_with_snake_case_fields() {
    let listings = canonicalize_all(vec![
        condo_listing("c1", 215.0, 0.81),
        condo_listing("c2", 245.0, 0.77),
    ]);

    let engine = StrAnalysisEngine::default();
    let analysis = engine.analyze(&harborview_condo(), &listings, &market());

    let value = serde_json::to_value(&analysis).expect("analysis serializes");
    assert!(value.get("metrics").is_some());
    assert_eq!(
        value["provenance"],
        serde_json::json!("comparables")
    );
    assert_eq!(value["comparison"]["recommendation"], serde_json::json!("STR"));
    assert!(value["metrics"]["price_range"]["min"].is_number());
}
