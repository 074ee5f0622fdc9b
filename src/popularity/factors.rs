use crate::world::{BroadRegion, find_genre};
use rand::Rng;
use std::ops::Range;

/// Base popularity for songs flagged as global hits
pub const GLOBAL_HIT_BASE: Range<f64> = 70.0..90.0;
/// Base popularity for everything else
pub const REGULAR_BASE: Range<f64> = 40.0..60.0;
/// Real-world sampling noise layered over the base draw
pub const BASE_JITTER: Range<f64> = 0.85..1.15;

pub const LANGUAGE_MATCH_BOOST: Range<f64> = 1.10..1.20;
pub const ENGLISH_FALLBACK_BOOST: Range<f64> = 1.05..1.10;
pub const LANGUAGE_MISMATCH_PENALTY: Range<f64> = 0.85..0.95;

pub const HOME_REGION_BOOST: Range<f64> = 1.20..1.30;
pub const NEIGHBOR_REGION_BOOST: Range<f64> = 1.05..1.10;

pub const LISTENER_JITTER: Range<f64> = 0.8..1.2;
const LISTENERS_PER_POINT: f64 = 10_000.0;

/// Per-stage multipliers of the popularity model.
///
/// Every stage takes the running popularity and returns the next value, so
/// the generator can chain them in a fixed order. Lookups that miss leave
/// the value unchanged.
pub struct PopularityFactors;

impl PopularityFactors {
    /// Draw a base popularity and scale it by an independent jitter
    pub fn base_popularity<R: Rng + ?Sized>(is_global_hit: bool, rng: &mut R) -> f64 {
        let base = if is_global_hit {
            rng.gen_range(GLOBAL_HIT_BASE)
        } else {
            rng.gen_range(REGULAR_BASE)
        };
        base * rng.gen_range(BASE_JITTER)
    }

    /// Multiplier in [0.7, 1.3] from the average influence of the song's known genres.
    ///
    /// Returns `None` when no genre has influence data for the region.
    pub fn genre_influence_multiplier(genres: &[String], region: BroadRegion) -> Option<f64> {
        let influences: Vec<f64> = genres
            .iter()
            .filter_map(|genre| find_genre(genre))
            .filter_map(|genre| genre.influence_in(region))
            .map(f64::from)
            .collect();

        if influences.is_empty() {
            return None;
        }

        let average = influences.iter().sum::<f64>() / influences.len() as f64;
        Some(0.7 + (average / 100.0) * 0.6)
    }

    pub fn apply_genre_influence(popularity: f64, genres: &[String], region: BroadRegion) -> f64 {
        match Self::genre_influence_multiplier(genres, region) {
            Some(multiplier) => popularity * multiplier,
            None => popularity,
        }
    }

    /// Boost songs in a dominant language, give English a smaller boost, penalise the rest
    pub fn apply_language_factor<R: Rng + ?Sized>(
        popularity: f64,
        language: &str,
        region: BroadRegion,
        rng: &mut R,
    ) -> f64 {
        let dominant = region.dominant_languages();

        if dominant.iter().any(|dominant| *dominant == language) {
            popularity * rng.gen_range(LANGUAGE_MATCH_BOOST)
        } else if language == "English" {
            popularity * rng.gen_range(ENGLISH_FALLBACK_BOOST)
        } else {
            popularity * rng.gen_range(LANGUAGE_MISMATCH_PENALTY)
        }
    }

    /// Artists do best at home and a little better next door
    pub fn apply_artist_origin_factor<R: Rng + ?Sized>(
        popularity: f64,
        artist_origin: &str,
        region: BroadRegion,
        rng: &mut R,
    ) -> f64 {
        if artist_origin == region.name() {
            popularity * rng.gen_range(HOME_REGION_BOOST)
        } else if region
            .neighbors()
            .iter()
            .any(|neighbor| *neighbor == artist_origin)
        {
            popularity * rng.gen_range(NEIGHBOR_REGION_BOOST)
        } else {
            popularity
        }
    }

    /// Scale by the share of the city using the platform
    pub fn apply_penetration(popularity: f64, spotify_penetration: f64) -> f64 {
        popularity * (spotify_penetration / 100.0)
    }

    /// Estimate listener count from popularity and city size.
    ///
    /// The market factor is `log10(population) / 2`, which is zero at one
    /// million people and negative below that, so small cities produce
    /// negative counts.
    pub fn estimate_listeners<R: Rng + ?Sized>(
        popularity: f64,
        population_millions: f64,
        rng: &mut R,
    ) -> i64 {
        let market_factor = population_millions.log10() / 2.0;
        (popularity * market_factor * LISTENERS_PER_POINT * rng.gen_range(LISTENER_JITTER)).floor()
            as i64
    }
}
