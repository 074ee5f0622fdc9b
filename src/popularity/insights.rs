use crate::models::{RegionPopularity, Trend};

const TOP_REGION_COUNT: usize = 5;
const HIGH_POPULARITY: u32 = 75;
const MEDIUM_POPULARITY: u32 = 50;

/// Share of regions in each popularity band, as rounded percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopularityDistribution {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Global summary of a song's regional popularity
#[derive(Debug, Clone)]
pub struct SongInsights {
    pub total_listeners: i64,
    pub average_popularity: u32,
    pub overall_trend: Trend,
    pub distribution: PopularityDistribution,
    pub top_regions: Vec<RegionPopularity>,
}

impl SongInsights {
    pub fn from_records(records: &[RegionPopularity]) -> Self {
        if records.is_empty() {
            return Self {
                total_listeners: 0,
                average_popularity: 0,
                overall_trend: Trend::Stable,
                distribution: PopularityDistribution::default(),
                top_regions: Vec::new(),
            };
        }

        let total = records.len() as f64;
        let total_listeners = records.iter().map(|r| r.listeners).sum();
        let popularity_sum: u64 = records.iter().map(|r| u64::from(r.popularity)).sum();
        let average_popularity = (popularity_sum as f64 / total).round() as u32;

        let up = records.iter().filter(|r| r.trend == Trend::Up).count() as f64;
        let down = records.iter().filter(|r| r.trend == Trend::Down).count() as f64;
        let overall_trend = if up > total * 0.6 {
            Trend::Up
        } else if down > total * 0.4 {
            Trend::Down
        } else {
            Trend::Stable
        };

        let share = |count: usize| ((count as f64 / total) * 100.0).round() as u32;
        let distribution = PopularityDistribution {
            high: share(records.iter().filter(|r| r.popularity >= HIGH_POPULARITY).count()),
            medium: share(
                records
                    .iter()
                    .filter(|r| (MEDIUM_POPULARITY..HIGH_POPULARITY).contains(&r.popularity))
                    .count(),
            ),
            low: share(records.iter().filter(|r| r.popularity < MEDIUM_POPULARITY).count()),
        };

        let mut top_regions = records.to_vec();
        top_regions.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        top_regions.truncate(TOP_REGION_COUNT);

        Self {
            total_listeners,
            average_popularity,
            overall_trend,
            distribution,
            top_regions,
        }
    }
}

/// Compact listener count: `1.2M`, `3.4K`, or the plain number
pub fn format_listener_count(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
