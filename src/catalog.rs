use crate::clock::Clock;
use crate::models::{Song, SongProfile};
use crate::popularity::PopularityGenerator;
use crate::world::BroadRegion;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use serde::Deserialize;
use tracing::{info, warn};

/// A song profile plus the display metadata the view shows alongside it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub profile: SongProfile,
    pub album: String,
    #[serde(default)]
    pub cover: String,
    pub duration: u32, // in seconds
}

impl CatalogEntry {
    #[allow(clippy::too_many_arguments)]
    fn builtin(
        id: &str,
        title: &str,
        artist: &str,
        genres: &[&str],
        release: (i32, u32, u32),
        language: &str,
        is_global_hit: bool,
        artist_origin: &str,
        album: &str,
        cover: &str,
        duration: u32,
    ) -> Self {
        let (year, month, day) = release;
        Self {
            profile: SongProfile {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                release_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                language: language.to_string(),
                is_global_hit,
                artist_origin: Some(artist_origin.to_string()),
            },
            album: album.to_string(),
            cover: format!(
                "https://images.pexels.com/photos/{cover}/pexels-photo-{cover}.jpeg?auto=compress&cs=tinysrgb&w=400"
            ),
            duration,
        }
    }
}

/// The demo library shipped with the app
pub fn builtin_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::builtin("1", "Cosmic Dream", "Aurora Eclipse", &["Electronic", "Pop"], (2025, 1, 15), "English", true, "Europe", "Stellar Journey", "167092", 241),
        CatalogEntry::builtin("2", "Digital Horizon", "Pixel Wave", &["Indie", "Electronic"], (2024, 11, 5), "English", false, "North America", "Electric Dreams", "167491", 197),
        CatalogEntry::builtin("3", "Neon Nights", "Synthwave Collective", &["Electronic", "Synthwave"], (2024, 9, 20), "English", true, "Europe", "Retrowave", "167699", 224),
        CatalogEntry::builtin("4", "Ocean Whispers", "Aqua Serenity", &["Ambient", "Classical"], (2024, 7, 12), "Instrumental", false, "Oceania", "Deep Blue", "1694900", 268),
        CatalogEntry::builtin("5", "Urban Pulse", "City Lights", &["Hip Hop", "R&B"], (2025, 3, 3), "English", true, "North America", "Metropolitan", "1763075", 184),
        CatalogEntry::builtin("6", "Sakura Dreams", "Tokyo Drift", &["J-Pop", "Electronic"], (2024, 12, 1), "Japanese", false, "East Asia", "Cherry Blossom", "1105666", 198),
        CatalogEntry::builtin("7", "Seoul City Pop", "K-Wave", &["K-Pop", "Pop"], (2025, 2, 20), "Korean", true, "East Asia", "Neon Seoul", "1190298", 212),
        CatalogEntry::builtin("8", "Latin Rhythm", "Salsa Kings", &["Latin", "Reggaeton"], (2024, 10, 15), "Spanish", true, "South America", "Fuego", "210922", 235),
        CatalogEntry::builtin("9", "African Beats", "Rhythm Tribe", &["Afrobeats", "World"], (2025, 3, 10), "Mixed", false, "Africa", "Motherland", "965989", 256),
        CatalogEntry::builtin("10", "Desert Mirage", "Oasis", &["Rock", "Alternative"], (2024, 8, 5), "English", true, "Europe", "Sandstorm", "1694900", 212),
    ]
}

/// Load catalog entries from a JSON array file
pub fn load_catalog(path: &str) -> Result<Vec<CatalogEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file '{path}'"))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file '{path}'"))?;

    for entry in &entries {
        if let Some(origin) = &entry.profile.artist_origin {
            if origin.parse::<BroadRegion>().is_err() {
                warn!(
                    song_id = %entry.profile.id,
                    origin = %origin,
                    "artist origin is not a broad region; origin boost will not apply"
                );
            }
        }
    }

    info!(path, songs = entries.len(), "loaded catalog");
    Ok(entries)
}

/// Generate regional popularity for every entry, in catalog order.
///
/// Each song gets its own seed drawn from `rng`, so one song's output does not
/// depend on how many draws the songs before it consumed.
pub fn build_songs<C: Clock, R: Rng + ?Sized>(
    entries: &[CatalogEntry],
    generator: &PopularityGenerator<C>,
    rng: &mut R,
) -> Vec<Song> {
    entries
        .iter()
        .map(|entry| (entry, rng.next_u64()))
        .map(|(entry, song_seed)| Song {
            id: entry.profile.id.clone(),
            title: entry.profile.title.clone(),
            artist: entry.profile.artist.clone(),
            album: entry.album.clone(),
            cover: entry.cover.clone(),
            duration: entry.duration,
            popularity: generator.generate_seeded(&entry.profile, song_seed),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::world::WORLD_REGIONS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn mock_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        clock
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 10);
        let kpop = catalog.iter().find(|e| e.profile.id == "7").unwrap();
        assert_eq!(kpop.profile.language, "Korean");
        assert_eq!(kpop.profile.artist_origin.as_deref(), Some("East Asia"));
        assert!(kpop.cover.contains("pexels-photo-1190298"));

        for entry in &catalog {
            let origin = entry.profile.artist_origin.as_deref().unwrap();
            assert!(origin.parse::<BroadRegion>().is_ok(), "{origin}");
        }
    }

    #[test]
    fn test_build_songs_keeps_catalog_order() {
        let generator = PopularityGenerator::new(mock_clock());
        let mut rng = StdRng::seed_from_u64(10);
        let catalog = builtin_catalog();
        let songs = build_songs(&catalog, &generator, &mut rng);

        assert_eq!(songs.len(), catalog.len());
        for (song, entry) in songs.iter().zip(&catalog) {
            assert_eq!(song.id, entry.profile.id);
            assert_eq!(song.duration, entry.duration);
            assert_eq!(song.popularity.len(), WORLD_REGIONS.len());
        }
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("song-globe-catalog-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{
                "id": "x1",
                "title": "Test Tune",
                "artist": "Tester",
                "genres": ["Rock"],
                "releaseDate": "2024-05-01",
                "language": "English",
                "isGlobalHit": false,
                "artistOrigin": "Atlantis",
                "album": "Tests",
                "duration": 200
            }}]"#
        )
        .unwrap();

        let entries = load_catalog(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].profile.title, "Test Tune");
        assert_eq!(entries[0].profile.artist_origin.as_deref(), Some("Atlantis"));
        assert_eq!(entries[0].cover, "");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
