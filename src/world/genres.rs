use super::classifier::BroadRegion;
use super::classifier::BroadRegion::*;

/// How strongly a genre resonates in each broad region (0-100)
#[derive(Debug, Clone, PartialEq)]
pub struct GenreInfluence {
    pub genre: &'static str,
    pub regions: &'static [(BroadRegion, u8)],
}

impl GenreInfluence {
    /// Influence score for a broad region, if the table has one
    pub fn influence_in(&self, region: BroadRegion) -> Option<u8> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, influence)| *influence)
    }
}

// No genre carries a South Asia entry, so genre influence is neutral there.
pub static GENRE_INFLUENCES: &[GenreInfluence] = &[
    GenreInfluence {
        genre: "Pop",
        regions: &[
            (NorthAmerica, 90),
            (Europe, 85),
            (EastAsia, 80),
            (SoutheastAsia, 75),
            (Oceania, 88),
            (SouthAmerica, 75),
            (MiddleEast, 60),
            (Africa, 55),
        ],
    },
    GenreInfluence {
        genre: "Hip Hop",
        regions: &[
            (NorthAmerica, 95),
            (Europe, 80),
            (EastAsia, 65),
            (SoutheastAsia, 60),
            (Oceania, 75),
            (SouthAmerica, 70),
            (MiddleEast, 45),
            (Africa, 70),
        ],
    },
    GenreInfluence {
        genre: "Rock",
        regions: &[
            (NorthAmerica, 85),
            (Europe, 90),
            (EastAsia, 60),
            (SoutheastAsia, 55),
            (Oceania, 85),
            (SouthAmerica, 80),
            (MiddleEast, 50),
            (Africa, 40),
        ],
    },
    GenreInfluence {
        genre: "Electronic/Dance",
        regions: &[
            (NorthAmerica, 80),
            (Europe, 95),
            (EastAsia, 75),
            (SoutheastAsia, 70),
            (Oceania, 85),
            (SouthAmerica, 70),
            (MiddleEast, 40),
            (Africa, 45),
        ],
    },
    GenreInfluence {
        genre: "Latin",
        regions: &[
            (NorthAmerica, 75),
            (Europe, 70),
            (EastAsia, 30),
            (SoutheastAsia, 25),
            (Oceania, 50),
            (SouthAmerica, 98),
            (MiddleEast, 20),
            (Africa, 25),
        ],
    },
    GenreInfluence {
        genre: "K-Pop",
        regions: &[
            (NorthAmerica, 65),
            (Europe, 60),
            (EastAsia, 98),
            (SoutheastAsia, 90),
            (Oceania, 60),
            (SouthAmerica, 55),
            (MiddleEast, 40),
            (Africa, 30),
        ],
    },
    GenreInfluence {
        genre: "R&B/Soul",
        regions: &[
            (NorthAmerica, 90),
            (Europe, 75),
            (EastAsia, 65),
            (SoutheastAsia, 60),
            (Oceania, 70),
            (SouthAmerica, 65),
            (MiddleEast, 40),
            (Africa, 80),
        ],
    },
    GenreInfluence {
        genre: "Afrobeats",
        regions: &[
            (NorthAmerica, 60),
            (Europe, 55),
            (EastAsia, 20),
            (SoutheastAsia, 25),
            (Oceania, 45),
            (SouthAmerica, 40),
            (MiddleEast, 30),
            (Africa, 95),
        ],
    },
    GenreInfluence {
        genre: "Reggaeton",
        regions: &[
            (NorthAmerica, 75),
            (Europe, 65),
            (EastAsia, 25),
            (SoutheastAsia, 30),
            (Oceania, 50),
            (SouthAmerica, 95),
            (MiddleEast, 25),
            (Africa, 30),
        ],
    },
    GenreInfluence {
        genre: "Indie",
        regions: &[
            (NorthAmerica, 85),
            (Europe, 90),
            (EastAsia, 65),
            (SoutheastAsia, 60),
            (Oceania, 88),
            (SouthAmerica, 75),
            (MiddleEast, 40),
            (Africa, 35),
        ],
    },
    GenreInfluence {
        genre: "Classical",
        regions: &[
            (NorthAmerica, 70),
            (Europe, 85),
            (EastAsia, 80),
            (SoutheastAsia, 65),
            (Oceania, 70),
            (SouthAmerica, 65),
            (MiddleEast, 60),
            (Africa, 55),
        ],
    },
];

/// Case-insensitive genre lookup
pub fn find_genre(name: &str) -> Option<&'static GenreInfluence> {
    let wanted = name.to_lowercase();
    GENRE_INFLUENCES
        .iter()
        .find(|influence| influence.genre.to_lowercase() == wanted)
}
