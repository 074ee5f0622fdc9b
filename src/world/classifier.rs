//! Coarse geographic buckets used for genre, language and artist-origin lookups

use std::fmt;
use std::str::FromStr;

/// One of the nine broad regions, or `Other` for cities outside the mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadRegion {
    NorthAmerica,
    SouthAmerica,
    Europe,
    EastAsia,
    SoutheastAsia,
    SouthAsia,
    Oceania,
    MiddleEast,
    Africa,
    Other,
}

impl BroadRegion {
    /// The nine real regions, excluding the `Other` sentinel
    pub const ALL: [BroadRegion; 9] = [
        BroadRegion::NorthAmerica,
        BroadRegion::SouthAmerica,
        BroadRegion::Europe,
        BroadRegion::EastAsia,
        BroadRegion::SoutheastAsia,
        BroadRegion::SouthAsia,
        BroadRegion::Oceania,
        BroadRegion::MiddleEast,
        BroadRegion::Africa,
    ];

    /// Display name, also the spelling artist origins are compared against
    pub fn name(&self) -> &'static str {
        match self {
            BroadRegion::NorthAmerica => "North America",
            BroadRegion::SouthAmerica => "South America",
            BroadRegion::Europe => "Europe",
            BroadRegion::EastAsia => "East Asia",
            BroadRegion::SoutheastAsia => "Southeast Asia",
            BroadRegion::SouthAsia => "South Asia",
            BroadRegion::Oceania => "Oceania",
            BroadRegion::MiddleEast => "Middle East",
            BroadRegion::Africa => "Africa",
            BroadRegion::Other => "Other",
        }
    }

    /// Languages that get the full language-match boost in this region
    pub fn dominant_languages(&self) -> &'static [&'static str] {
        match self {
            BroadRegion::NorthAmerica => &["English", "Spanish"],
            BroadRegion::SouthAmerica => &["Spanish", "Portuguese"],
            BroadRegion::Europe => &["English", "Spanish", "French", "German", "Italian", "Portuguese"],
            BroadRegion::EastAsia => &["Japanese", "Korean", "Mandarin", "Cantonese"],
            BroadRegion::SoutheastAsia => &["English", "Malay", "Indonesian", "Thai", "Vietnamese"],
            BroadRegion::SouthAsia => &["Hindi", "Bengali", "Urdu", "English"],
            BroadRegion::Oceania => &["English"],
            BroadRegion::MiddleEast => &["Arabic", "Hebrew", "Persian", "Turkish"],
            BroadRegion::Africa => &["English", "French", "Arabic", "Swahili", "Yoruba"],
            BroadRegion::Other => &["English"],
        }
    }

    /// Origins that count as neighbouring for the artist-origin boost.
    ///
    /// Europe lists "North Africa", which is not a broad region; it only
    /// matches an artist origin spelled exactly that way.
    pub fn neighbors(&self) -> &'static [&'static str] {
        match self {
            BroadRegion::NorthAmerica => &["South America"],
            BroadRegion::SouthAmerica => &["North America"],
            BroadRegion::Europe => &["Middle East", "North Africa"],
            BroadRegion::EastAsia => &["Southeast Asia"],
            BroadRegion::SoutheastAsia => &["East Asia", "South Asia", "Oceania"],
            BroadRegion::SouthAsia => &["Southeast Asia", "Middle East"],
            BroadRegion::Oceania => &["Southeast Asia"],
            BroadRegion::MiddleEast => &["South Asia", "Europe", "Africa"],
            BroadRegion::Africa => &["Middle East", "Europe"],
            BroadRegion::Other => &[],
        }
    }
}

impl fmt::Display for BroadRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BroadRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BroadRegion::ALL
            .into_iter()
            .chain(std::iter::once(BroadRegion::Other))
            .find(|region| region.name() == s)
            .ok_or_else(|| format!("unknown broad region '{s}'"))
    }
}

/// Map a city name to its broad region; unmapped names yield `Other`
pub fn classify(city: &str) -> BroadRegion {
    match city {
        "New York" | "Los Angeles" | "Chicago" | "Toronto" | "Mexico City" | "Miami"
        | "Vancouver" | "Montreal" | "Houston" | "Havana" => BroadRegion::NorthAmerica,

        "São Paulo" | "Rio de Janeiro" | "Buenos Aires" | "Lima" | "Santiago" | "Bogotá"
        | "Caracas" | "Quito" | "Montevideo" => BroadRegion::SouthAmerica,

        "London" | "Paris" | "Berlin" | "Madrid" | "Rome" | "Amsterdam" | "Stockholm"
        | "Barcelona" | "Vienna" | "Milan" | "Brussels" | "Prague" | "Copenhagen" | "Dublin"
        | "Athens" | "Warsaw" | "Moscow" | "Istanbul" => BroadRegion::Europe,

        "Tokyo" | "Seoul" | "Beijing" | "Shanghai" | "Hong Kong" | "Osaka" | "Taipei" => {
            BroadRegion::EastAsia
        }

        "Singapore" | "Bangkok" | "Jakarta" | "Manila" | "Kuala Lumpur" => {
            BroadRegion::SoutheastAsia
        }

        "Mumbai" | "Delhi" => BroadRegion::SouthAsia,

        "Sydney" | "Melbourne" | "Auckland" => BroadRegion::Oceania,

        "Dubai" | "Cairo" | "Riyadh" | "Tel Aviv" => BroadRegion::MiddleEast,

        "Lagos" | "Johannesburg" | "Cape Town" | "Nairobi" | "Casablanca" | "Accra"
        | "Addis Ababa" | "Algiers" => BroadRegion::Africa,

        _ => BroadRegion::Other,
    }
}
