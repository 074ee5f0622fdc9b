use crate::models::Trend;
use chrono::NaiveDate;
use rand::Rng;

const NEW_RELEASE_DAYS: i64 = 30;
const RECENT_RELEASE_DAYS: i64 = 120;

/// Release-age based trend model
pub struct TrendModel;

impl TrendModel {
    /// Whole days between release and `today`; negative for future releases
    pub fn days_since_release(release_date: NaiveDate, today: NaiveDate) -> i64 {
        (today - release_date).num_days()
    }

    /// Draw a trend for a song released on `release_date`.
    ///
    /// New songs mostly trend up, songs a few months old are mixed, and older
    /// songs lean stable or down. The draw is independent of popularity.
    pub fn determine<R: Rng + ?Sized>(release_date: NaiveDate, today: NaiveDate, rng: &mut R) -> Trend {
        let days = Self::days_since_release(release_date, today);
        let roll: f64 = rng.gen_range(0.0..1.0);

        if days < NEW_RELEASE_DAYS {
            if roll < 0.8 { Trend::Up } else { Trend::Stable }
        } else if days < RECENT_RELEASE_DAYS {
            if roll < 0.4 {
                Trend::Up
            } else if roll < 0.7 {
                Trend::Stable
            } else {
                Trend::Down
            }
        } else if roll < 0.2 {
            Trend::Up
        } else if roll < 0.6 {
            Trend::Stable
        } else {
            Trend::Down
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    const SAMPLES: usize = 10_000;
    const TOLERANCE: f64 = 0.03;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fractions(release: NaiveDate, today: NaiveDate, seed: u64) -> HashMap<Trend, f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts: HashMap<Trend, usize> = HashMap::new();
        for _ in 0..SAMPLES {
            *counts
                .entry(TrendModel::determine(release, today, &mut rng))
                .or_insert(0) += 1;
        }
        [Trend::Up, Trend::Stable, Trend::Down]
            .into_iter()
            .map(|t| (t, *counts.get(&t).unwrap_or(&0) as f64 / SAMPLES as f64))
            .collect()
    }

    #[test]
    fn test_days_since_release() {
        let today = date(2025, 3, 31);
        assert_eq!(TrendModel::days_since_release(date(2025, 3, 1), today), 30);
        assert_eq!(TrendModel::days_since_release(today, today), 0);
        assert_eq!(TrendModel::days_since_release(date(2025, 4, 2), today), -2);
    }

    #[test]
    fn test_new_release_distribution() {
        let today = date(2025, 3, 20);
        let f = fractions(date(2025, 3, 10), today, 42);
        assert!((f[&Trend::Up] - 0.8).abs() < TOLERANCE, "up = {}", f[&Trend::Up]);
        assert!((f[&Trend::Stable] - 0.2).abs() < TOLERANCE, "stable = {}", f[&Trend::Stable]);
        assert_eq!(f[&Trend::Down], 0.0);
    }

    #[test]
    fn test_recent_release_distribution() {
        let today = date(2025, 3, 20);
        let f = fractions(date(2025, 1, 20), today, 7);
        assert!((f[&Trend::Up] - 0.4).abs() < TOLERANCE);
        assert!((f[&Trend::Stable] - 0.3).abs() < TOLERANCE);
        assert!((f[&Trend::Down] - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn test_old_release_distribution() {
        let today = date(2025, 3, 20);
        let f = fractions(date(2024, 7, 12), today, 99);
        assert!((f[&Trend::Up] - 0.2).abs() < TOLERANCE);
        assert!((f[&Trend::Stable] - 0.4).abs() < TOLERANCE);
        assert!((f[&Trend::Down] - 0.4).abs() < TOLERANCE);
    }

    #[test]
    fn test_bucket_boundaries() {
        let today = date(2025, 6, 1);
        // Day 30 is no longer new, so "down" becomes possible
        let f = fractions(today - chrono::Duration::days(30), today, 1);
        assert!(f[&Trend::Down] > 0.0);
        let f = fractions(today - chrono::Duration::days(29), today, 1);
        assert_eq!(f[&Trend::Down], 0.0);
    }

    #[test]
    fn test_future_release_counts_as_new() {
        let today = date(2025, 6, 1);
        let f = fractions(date(2025, 12, 25), today, 5);
        assert_eq!(f[&Trend::Down], 0.0);
    }
}
