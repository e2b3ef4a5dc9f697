use super::domain::PropertyProfile;
use super::listings::ComparableListing;
use serde::Serialize;

/// Minimum similarity score required to clear the primary filter.
const SIMILARITY_THRESHOLD: u8 = 30;
/// Listings in the 20..30 band backfill the pool when too few clear the
/// threshold.
const BACKFILL_FLOOR: u8 = 20;
/// Preferred pool size after filtering.
const TARGET_POOL_SIZE: usize = 5;
/// Nightly prices inside this band earn the sanity bonus.
const SANE_NIGHTLY_PRICE: std::ops::RangeInclusive<f64> = 50.0..=1000.0;

/// A comparable annotated with its similarity to the target property.
/// Ephemeral: derived per call and never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComparable {
    #[serde(flatten)]
    pub listing: ComparableListing,
    pub similarity_score: u8,
}

/// Scores every listing against the target property, keeps those at or above
/// the threshold sorted by descending similarity, and backfills from the
/// 20..30 band until the pool reaches five entries or candidates run out.
pub fn filter_comparables(
    listings: &[ComparableListing],
    property: &PropertyProfile,
) -> Vec<ScoredComparable> {
    let mut scored: Vec<ScoredComparable> = listings
        .iter()
        .map(|listing| ScoredComparable {
            similarity_score: similarity_score(listing, property),
            listing: listing.clone(),
        })
        .collect();
    scored.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));

    let mut filtered: Vec<ScoredComparable> = scored
        .iter()
        .filter(|comparable| comparable.similarity_score >= SIMILARITY_THRESHOLD)
        .cloned()
        .collect();

    if filtered.len() < TARGET_POOL_SIZE {
        let shortfall = TARGET_POOL_SIZE - filtered.len();
        filtered.extend(
            scored
                .into_iter()
                .filter(|comparable| {
                    comparable.similarity_score >= BACKFILL_FLOOR
                        && comparable.similarity_score < SIMILARITY_THRESHOLD
                })
                .take(shortfall),
        );
    }

    filtered
}

/// Composite similarity in [0, 100]. Attributes missing on either side simply
/// contribute nothing to their term.
pub fn similarity_score(listing: &ComparableListing, property: &PropertyProfile) -> u8 {
    bedroom_points(listing, property)
        + property_type_points(listing, property)
        + bathroom_points(listing, property)
        + price_sanity_points(listing)
}

fn bedroom_points(listing: &ComparableListing, property: &PropertyProfile) -> u8 {
    match (property.bedrooms, listing.bedrooms) {
        (Some(target), Some(candidate)) => match target.abs_diff(candidate) {
            0 => 40,
            1 => 20,
            2 => 10,
            _ => 0,
        },
        _ => 0,
    }
}

fn property_type_points(listing: &ComparableListing, property: &PropertyProfile) -> u8 {
    let (Some(target), Some(candidate)) =
        (property.property_type.as_deref(), listing.property_type.as_deref())
    else {
        return 0;
    };

    let target = target.to_ascii_lowercase();
    let candidate = candidate.to_ascii_lowercase();

    if target == candidate {
        30
    } else if related_types(&target, &candidate) {
        20
    } else if candidate.contains("entire") || candidate.contains("private") {
        // Any residential Airbnb category still tells us something.
        10
    } else {
        0
    }
}

fn related_types(target: &str, candidate: &str) -> bool {
    (target.contains("condo") && candidate.contains("apartment"))
        || (target.contains("apartment") && candidate.contains("condo"))
        || (target.contains("house") && candidate.contains("house"))
        || (target.contains("townhouse") && candidate.contains("town"))
}

fn bathroom_points(listing: &ComparableListing, property: &PropertyProfile) -> u8 {
    match (property.bathrooms, listing.bathrooms) {
        (Some(target), Some(candidate)) => {
            let diff = (target - candidate).abs();
            if diff == 0.0 {
                20
            } else if diff <= 0.5 {
                15
            } else if diff <= 1.0 {
                10
            } else {
                0
            }
        }
        _ => 0,
    }
}

fn price_sanity_points(listing: &ComparableListing) -> u8 {
    if SANE_NIGHTLY_PRICE.contains(&listing.nightly_price) {
        10
    } else {
        0
    }
}
