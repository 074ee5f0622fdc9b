use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Song metadata the popularity generator works from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongProfile {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genres: Vec<String>,
    pub release_date: NaiveDate,
    pub language: String,
    pub is_global_hit: bool,
    #[serde(default)]
    pub artist_origin: Option<String>, // broad region name the artist comes from
}

/// Direction of recent popularity momentum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Display color in HSL space, rendered as a CSS `hsl(...)` string
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64, // percent
    pub lightness: f64,  // percent
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {:.1}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<HslColor> for String {
    fn from(color: HslColor) -> Self {
        color.to_string()
    }
}

/// Generated popularity of one song in one world region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPopularity {
    pub region: String,
    pub coordinates: Coordinates,
    pub popularity: u32,
    pub listeners: i64, // negative for sub-million populations, see PopularityFactors::estimate_listeners
    pub trend: Trend,
    pub color: HslColor,
}

/// A weighted point handed to the globe renderer for a single frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedPoint {
    pub lat: f64,
    pub lng: f64,
    pub popularity: f64,
    pub color: HslColor,
    pub region: Option<String>,
    pub listeners: Option<i64>,
    pub trend: Option<Trend>,
}

impl AnimatedPoint {
    /// Labelled point for a generated region record
    pub fn from_record(record: &RegionPopularity) -> Self {
        Self {
            lat: record.coordinates.lat,
            lng: record.coordinates.lng,
            popularity: f64::from(record.popularity),
            color: record.color,
            region: Some(record.region.clone()),
            listeners: Some(record.listeners),
            trend: Some(record.trend),
        }
    }

    /// Unlabelled point used for filler and flow effects
    pub fn synthetic(lat: f64, lng: f64, popularity: f64, color: HslColor) -> Self {
        Self {
            lat,
            lng,
            popularity,
            color,
            region: None,
            listeners: None,
            trend: None,
        }
    }

    pub fn is_region(&self) -> bool {
        self.region.is_some()
    }
}

/// A catalog song together with its generated regional popularity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub duration: u32, // in seconds
    pub popularity: Vec<RegionPopularity>,
}
