use serde::Serialize;

/// Days in one projection season, roughly a quarter of the year.
pub const DAYS_PER_SEASON: f64 = 91.0;

/// Projected occupancy never exceeds this cap regardless of season.
pub const SEASONAL_OCCUPANCY_CAP: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const fn ordered() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalMultipliers {
    pub rate: f64,
    pub occupancy: f64,
}

/// Per-season rate and occupancy multipliers around the annual baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalProfile {
    entries: [(Season, SeasonalMultipliers); 4],
}

impl SeasonalProfile {
    pub fn multipliers_for(&self, season: Season) -> SeasonalMultipliers {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == season)
            .map(|(_, multipliers)| *multipliers)
            .expect("profile covers every season")
    }
}

impl Default for SeasonalProfile {
    fn default() -> Self {
        Self {
            entries: [
                (
                    Season::Spring,
                    SeasonalMultipliers {
                        rate: 0.95,
                        occupancy: 0.90,
                    },
                ),
                (
                    Season::Summer,
                    SeasonalMultipliers {
                        rate: 1.15,
                        occupancy: 1.10,
                    },
                ),
                (
                    Season::Fall,
                    SeasonalMultipliers {
                        rate: 1.00,
                        occupancy: 0.95,
                    },
                ),
                (
                    Season::Winter,
                    SeasonalMultipliers {
                        rate: 0.90,
                        occupancy: 0.85,
                    },
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonProjection {
    pub season: Season,
    pub avg_rate: f64,
    pub occupancy: f64,
    pub revenue: f64,
    /// Nights booked over the season, rounded to whole stays.
    pub bookings: u32,
}

/// Projects each season from the annual averages. The seasonal rate is
/// rounded before revenue is computed, matching how the figures are reported.
pub fn project(
    avg_nightly_rate: f64,
    occupancy_rate: f64,
    profile: &SeasonalProfile,
) -> Vec<SeasonProjection> {
    Season::ordered()
        .into_iter()
        .map(|season| {
            let multipliers = profile.multipliers_for(season);
            let rate = (avg_nightly_rate * multipliers.rate).round();
            let occupancy = (occupancy_rate * multipliers.occupancy).min(SEASONAL_OCCUPANCY_CAP);

            SeasonProjection {
                season,
                avg_rate: rate,
                occupancy,
                revenue: (rate * DAYS_PER_SEASON * occupancy).round(),
                bookings: (DAYS_PER_SEASON * occupancy).round() as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_all_four_seasons_in_order() {
        let projections = project(200.0, 0.75, &SeasonalProfile::default());
        let seasons: Vec<Season> = projections.iter().map(|entry| entry.season).collect();
        assert_eq!(seasons, Season::ordered());
    }

    #[test]
    fn summer_peaks_and_winter_dips() {
        let projections = project(200.0, 0.75, &SeasonalProfile::default());
        let summer = &projections[1];
        let winter = &projections[3];

        assert_eq!(summer.avg_rate, 230.0);
        assert!((summer.occupancy - 0.825).abs() < 1e-9);
        assert_eq!(summer.revenue, (230.0 * 91.0 * 0.825_f64).round());

        assert_eq!(winter.avg_rate, 180.0);
        assert!((winter.occupancy - 0.6375).abs() < 1e-9);
    }

    #[test]
    fn occupancy_caps_at_ninety_five_percent() {
        let projections = project(200.0, 0.90, &SeasonalProfile::default());
        let summer = &projections[1];
        assert_eq!(summer.occupancy, SEASONAL_OCCUPANCY_CAP);
    }

    #[test]
    fn bookings_round_to_whole_nights() {
        let projections = project(200.0, 0.75, &SeasonalProfile::default());
        let fall = &projections[2];
        // 91 * 0.7125 = 64.8...
        assert_eq!(fall.bookings, 65);
    }

    #[test]
    fn zero_baseline_projects_zero_revenue() {
        let projections = project(0.0, 0.0, &SeasonalProfile::default());
        assert!(projections
            .iter()
            .all(|entry| entry.revenue == 0.0 && entry.bookings == 0));
    }
}
