use serde::{Deserialize, Serialize};

/// Canonical comparable listing shape. Scoring and aggregation operate on this
/// type only; provider records must pass through [`RawListing::canonicalize`]
/// before they reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableListing {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Advertised nightly rate. Zero when the source carried no usable price;
    /// the aggregator skips such listings instead of erroring.
    pub nightly_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Observed fraction of nights booked, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Listing record as delivered by upstream comparable sources. Field names
/// vary per provider (`price` vs `nightly_price` vs `nightly_rate`,
/// `occupancy` vs `occupancy_rate`), so every field is optional here and the
/// variants collapse in [`RawListing::canonicalize`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "nightlyPrice")]
    pub nightly_price: Option<f64>,
    #[serde(default, alias = "nightlyRate")]
    pub nightly_rate: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default, alias = "propertyType")]
    pub property_type: Option<String>,
    #[serde(default, alias = "occupancyRate")]
    pub occupancy_rate: Option<f64>,
    #[serde(default)]
    pub occupancy: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "reviewCount", alias = "reviewsCount")]
    pub reviews_count: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawListing {
    /// Collapses provider field variants into the canonical listing shape.
    /// Price variants are tried in order of specificity; occupancy readings
    /// prefer the explicitly named field.
    pub fn canonicalize(self) -> ComparableListing {
        let nightly_price = self
            .nightly_price
            .or(self.price)
            .or(self.nightly_rate)
            .unwrap_or(0.0);

        ComparableListing {
            id: self.id.unwrap_or_default(),
            title: self.title,
            nightly_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            property_type: self.property_type,
            occupancy_rate: self.occupancy_rate.or(self.occupancy),
            rating: self.rating,
            reviews_count: self.reviews_count,
            url: self.url,
        }
    }
}

/// Normalizes a batch of provider records.
pub fn canonicalize_all(raw: Vec<RawListing>) -> Vec<ComparableListing> {
    raw.into_iter().map(RawListing::canonicalize).collect()
}
