use super::domain::PropertyProfile;
use serde::Serialize;

/// Revenue-proportional cost rates for a professionally managed STR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueCostRates {
    pub management: f64,
    pub cleaning: f64,
    pub supplies: f64,
    pub platform_fees: f64,
    pub marketing: f64,
}

impl Default for RevenueCostRates {
    fn default() -> Self {
        Self {
            management: 0.20,
            cleaning: 0.10,
            supplies: 0.03,
            platform_fees: 0.03,
            marketing: 0.02,
        }
    }
}

/// Fixed and property-derived cost assumptions independent of revenue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCostAssumptions {
    /// Base monthly utility bill for a one-bedroom unit.
    pub base_monthly_utilities: f64,
    /// Utility growth per bedroom beyond the first.
    pub utility_step_per_bedroom: f64,
    /// STRs run hotter than long-term units.
    pub str_utility_premium: f64,
    /// Homeowners insurance as a share of the purchase price.
    pub insurance_rate: f64,
    pub liability_premium: f64,
    pub contents_coverage: f64,
    /// Baseline maintenance as a share of the purchase price.
    pub maintenance_rate: f64,
    /// Guest turnover wears a unit faster.
    pub str_maintenance_premium: f64,
    pub internet_annual: f64,
    pub cable_annual: f64,
    pub licenses_annual: f64,
    /// Property tax share of price, used only when taxes are not provided.
    pub property_tax_rate: f64,
}

impl Default for FixedCostAssumptions {
    fn default() -> Self {
        Self {
            base_monthly_utilities: 200.0,
            utility_step_per_bedroom: 0.2,
            str_utility_premium: 1.5,
            insurance_rate: 0.005,
            liability_premium: 1000.0,
            contents_coverage: 500.0,
            maintenance_rate: 0.01,
            str_maintenance_premium: 1.5,
            internet_annual: 1200.0,
            cable_annual: 600.0,
            licenses_annual: 500.0,
            property_tax_rate: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseAssumptions {
    pub revenue_rates: RevenueCostRates,
    pub fixed: FixedCostAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBasedCosts {
    pub management: f64,
    pub cleaning: f64,
    pub supplies: f64,
    pub platform_fees: f64,
    pub marketing: f64,
}

impl RevenueBasedCosts {
    fn total(&self) -> f64 {
        self.management + self.cleaning + self.supplies + self.platform_fees + self.marketing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedCosts {
    pub utilities: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub internet: f64,
    pub cable: f64,
    pub licenses: f64,
}

impl FixedCosts {
    fn total(&self) -> f64 {
        self.utilities + self.insurance + self.maintenance + self.internet + self.cable
            + self.licenses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCosts {
    pub property_tax: f64,
    pub hoa_fees: f64,
}

impl PropertyCosts {
    fn total(&self) -> f64 {
        self.property_tax + self.hoa_fees
    }
}

/// One period's worth of costs, grouped the way the report presents them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSchedule {
    pub revenue_based: RevenueBasedCosts,
    pub fixed: FixedCosts,
    pub property_specific: PropertyCosts,
    pub total: f64,
}

/// Annual and monthly operating cost breakdown for the target property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub annual: ExpenseSchedule,
    pub monthly: ExpenseSchedule,
    /// Total annual cost as a percentage of annual revenue, rounded to a
    /// whole percent. Zero when there is no revenue to compare against.
    pub percentage_of_revenue: f64,
}

/// Derives the operating cost breakdown from projected annual revenue and the
/// property's attributes. Annual line items keep full precision; the monthly
/// schedule and the totals are rounded to whole dollars.
pub fn estimate(
    annual_revenue: f64,
    property: &PropertyProfile,
    assumptions: &ExpenseAssumptions,
) -> ExpenseBreakdown {
    let rates = &assumptions.revenue_rates;
    let revenue_based = RevenueBasedCosts {
        management: annual_revenue * rates.management,
        cleaning: annual_revenue * rates.cleaning,
        supplies: annual_revenue * rates.supplies,
        platform_fees: annual_revenue * rates.platform_fees,
        marketing: annual_revenue * rates.marketing,
    };

    let fixed = FixedCosts {
        utilities: annual_utilities(property, &assumptions.fixed),
        insurance: annual_insurance(property, &assumptions.fixed),
        maintenance: annual_maintenance(property, &assumptions.fixed),
        internet: assumptions.fixed.internet_annual,
        cable: assumptions.fixed.cable_annual,
        licenses: assumptions.fixed.licenses_annual,
    };

    let property_specific = PropertyCosts {
        property_tax: property
            .property_taxes
            .unwrap_or(property.price * assumptions.fixed.property_tax_rate),
        hoa_fees: property.hoa_fees.unwrap_or(0.0) * 12.0,
    };

    let total_annual = revenue_based.total() + fixed.total() + property_specific.total();

    let monthly = ExpenseSchedule {
        revenue_based: RevenueBasedCosts {
            management: (revenue_based.management / 12.0).round(),
            cleaning: (revenue_based.cleaning / 12.0).round(),
            supplies: (revenue_based.supplies / 12.0).round(),
            platform_fees: (revenue_based.platform_fees / 12.0).round(),
            marketing: (revenue_based.marketing / 12.0).round(),
        },
        fixed: FixedCosts {
            utilities: (fixed.utilities / 12.0).round(),
            insurance: (fixed.insurance / 12.0).round(),
            maintenance: (fixed.maintenance / 12.0).round(),
            internet: (fixed.internet / 12.0).round(),
            cable: (fixed.cable / 12.0).round(),
            licenses: (fixed.licenses / 12.0).round(),
        },
        property_specific: PropertyCosts {
            property_tax: (property_specific.property_tax / 12.0).round(),
            hoa_fees: (property_specific.hoa_fees / 12.0).round(),
        },
        total: (total_annual / 12.0).round(),
    };

    let percentage_of_revenue = if annual_revenue > 0.0 {
        (total_annual / annual_revenue * 100.0).round()
    } else {
        0.0
    };

    ExpenseBreakdown {
        annual: ExpenseSchedule {
            revenue_based,
            fixed,
            property_specific,
            total: total_annual.round(),
        },
        monthly,
        percentage_of_revenue,
    }
}

fn annual_utilities(property: &PropertyProfile, fixed: &FixedCostAssumptions) -> f64 {
    let bedrooms = property.bedrooms.unwrap_or(1).max(1);
    let bedroom_multiplier = 1.0 + fixed.utility_step_per_bedroom * (bedrooms - 1) as f64;
    fixed.base_monthly_utilities * bedroom_multiplier * fixed.str_utility_premium * 12.0
}

fn annual_insurance(property: &PropertyProfile, fixed: &FixedCostAssumptions) -> f64 {
    property.price * fixed.insurance_rate + fixed.liability_premium + fixed.contents_coverage
}

fn annual_maintenance(property: &PropertyProfile, fixed: &FixedCostAssumptions) -> f64 {
    property.price * fixed.maintenance_rate * fixed.str_maintenance_premium
}
