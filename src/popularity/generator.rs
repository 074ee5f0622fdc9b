use super::factors::PopularityFactors;
use super::trend::TrendModel;
use crate::clock::Clock;
use crate::models::{HslColor, RegionPopularity, SongProfile};
use crate::world::{WORLD_REGIONS, WorldRegion, classify};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Final rounding of the stacked popularity value.
///
/// No clamp is applied: boosts can push the result past 100.
pub fn normalize_popularity(popularity: f64) -> u32 {
    popularity.round() as u32
}

/// Synthesizes per-city popularity records for a song
pub struct PopularityGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> PopularityGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Generate one record per world region, in table order.
    ///
    /// Every random draw comes from `rng`, so a seeded generator reproduces
    /// the same output for the same profile and date.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &SongProfile,
        rng: &mut R,
    ) -> Vec<RegionPopularity> {
        let today = self.clock.today();

        let records: Vec<RegionPopularity> = WORLD_REGIONS
            .iter()
            .map(|region| Self::generate_region(profile, region, today, &mut *rng))
            .collect();

        debug!(
            song_id = %profile.id,
            regions = records.len(),
            "generated regional popularity"
        );

        records
    }

    /// Convenience wrapper that seeds a fresh `StdRng`
    pub fn generate_seeded(&self, profile: &SongProfile, seed: u64) -> Vec<RegionPopularity> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(profile, &mut rng)
    }

    fn generate_region<R: Rng + ?Sized>(
        profile: &SongProfile,
        region: &WorldRegion,
        today: chrono::NaiveDate,
        rng: &mut R,
    ) -> RegionPopularity {
        let broad_region = classify(region.name);

        // Stages are multiplicative and must run in this order
        let mut popularity = PopularityFactors::base_popularity(profile.is_global_hit, rng);
        popularity =
            PopularityFactors::apply_genre_influence(popularity, &profile.genres, broad_region);
        popularity = PopularityFactors::apply_language_factor(
            popularity,
            &profile.language,
            broad_region,
            rng,
        );
        if let Some(origin) = &profile.artist_origin {
            popularity =
                PopularityFactors::apply_artist_origin_factor(popularity, origin, broad_region, rng);
        }
        popularity = PopularityFactors::apply_penetration(popularity, region.spotify_penetration);

        let listeners = PopularityFactors::estimate_listeners(popularity, region.population, rng);
        let trend = TrendModel::determine(profile.release_date, today, rng);
        let popularity = normalize_popularity(popularity);

        RegionPopularity {
            region: region.name.to_string(),
            coordinates: region.coordinates,
            popularity,
            listeners,
            trend,
            color: HslColor::from_popularity(popularity),
        }
    }
}
