use serde::{Deserialize, Serialize};

/// Target property under evaluation. Caller-constructed; the engine never
/// mutates it and retains no reference once an analysis returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    /// Purchase price. A zero or missing price degrades the derived ratios to
    /// zero and the payback period to its sentinel rather than failing.
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub sqft: Option<u32>,
    #[serde(default)]
    pub property_type: Option<String>,
    /// Annual property taxes. When absent the expense model assumes 1% of the
    /// purchase price.
    #[serde(default)]
    pub property_taxes: Option<f64>,
    /// Monthly HOA or condo dues.
    #[serde(default, alias = "condo_fees")]
    pub hoa_fees: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Market context supplied by external estimators.
///
/// A missing or zero `ltr_monthly_rent` zeroes the long-term side of the
/// comparison, which structurally favors the STR recommendation. That matches
/// the upstream product behavior and is deliberately left unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    #[serde(default)]
    pub ltr_monthly_rent: Option<f64>,
}

/// Data-quality grade derived from how many comparables and valid prices
/// backed an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Records whether an analysis was grounded in market comparables or in the
/// price-based estimation fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataProvenance {
    Comparables,
    Estimated,
}

impl DataProvenance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comparables => "Market comparables",
            Self::Estimated => "Estimated from purchase price",
        }
    }
}
