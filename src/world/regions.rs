use crate::models::Coordinates;

/// A city tracked on the globe, with the market data used to scale popularity
#[derive(Debug, Clone, PartialEq)]
pub struct WorldRegion {
    pub name: &'static str,
    pub coordinates: Coordinates,
    pub population: f64,          // in millions, approximate
    pub spotify_penetration: f64, // 0-100, estimated market penetration %
}

impl WorldRegion {
    const fn new(
        name: &'static str,
        lat: f64,
        lng: f64,
        population: f64,
        spotify_penetration: f64,
    ) -> Self {
        Self {
            name,
            coordinates: Coordinates::new(lat, lng),
            population,
            spotify_penetration,
        }
    }
}

/// Every city the generator produces a record for, in output order
pub static WORLD_REGIONS: &[WorldRegion] = &[
    // North America
    WorldRegion::new("New York", 40.7128, -74.0060, 8.4, 85.0),
    WorldRegion::new("Los Angeles", 34.0522, -118.2437, 4.0, 82.0),
    WorldRegion::new("Chicago", 41.8781, -87.6298, 2.7, 80.0),
    WorldRegion::new("Toronto", 43.6532, -79.3832, 2.9, 78.0),
    WorldRegion::new("Mexico City", 19.4326, -99.1332, 9.2, 65.0),
    WorldRegion::new("Miami", 25.7617, -80.1918, 0.45, 75.0),
    WorldRegion::new("Vancouver", 49.2827, -123.1207, 0.68, 76.0),
    WorldRegion::new("Montreal", 45.5017, -73.5673, 1.8, 75.0),
    WorldRegion::new("Houston", 29.7604, -95.3698, 2.3, 72.0),
    WorldRegion::new("Havana", 23.1136, -82.3666, 2.1, 35.0),

    // South America
    WorldRegion::new("São Paulo", -23.5505, -46.6333, 12.3, 70.0),
    WorldRegion::new("Rio de Janeiro", -22.9068, -43.1729, 6.7, 68.0),
    WorldRegion::new("Buenos Aires", -34.6037, -58.3816, 3.1, 65.0),
    WorldRegion::new("Lima", -12.0464, -77.0428, 10.5, 55.0),
    WorldRegion::new("Santiago", -33.4489, -70.6693, 6.8, 62.0),
    WorldRegion::new("Bogotá", 4.7110, -74.0721, 7.4, 60.0),
    WorldRegion::new("Caracas", 10.4806, -66.9036, 2.9, 45.0),
    WorldRegion::new("Quito", -0.1807, -78.4678, 1.9, 52.0),
    WorldRegion::new("Montevideo", -34.9011, -56.1645, 1.4, 61.0),

    // Europe
    WorldRegion::new("London", 51.5074, -0.1278, 9.0, 88.0),
    WorldRegion::new("Paris", 48.8566, 2.3522, 2.2, 80.0),
    WorldRegion::new("Berlin", 52.5200, 13.4050, 3.7, 82.0),
    WorldRegion::new("Madrid", 40.4168, -3.7038, 3.3, 75.0),
    WorldRegion::new("Rome", 41.9028, 12.4964, 2.8, 72.0),
    WorldRegion::new("Amsterdam", 52.3676, 4.9041, 0.87, 85.0),
    WorldRegion::new("Stockholm", 59.3293, 18.0686, 0.97, 90.0),
    WorldRegion::new("Barcelona", 41.3851, 2.1734, 1.6, 74.0),
    WorldRegion::new("Vienna", 48.2082, 16.3738, 1.9, 78.0),
    WorldRegion::new("Milan", 45.4642, 9.1900, 1.4, 70.0),
    WorldRegion::new("Brussels", 50.8476, 4.3572, 1.2, 79.0),
    WorldRegion::new("Prague", 50.0755, 14.4378, 1.3, 75.0),
    WorldRegion::new("Copenhagen", 55.6761, 12.5683, 0.6, 88.0),
    WorldRegion::new("Dublin", 53.3498, -6.2603, 0.55, 82.0),
    WorldRegion::new("Athens", 37.9838, 23.7275, 0.66, 65.0),
    WorldRegion::new("Warsaw", 52.2297, 21.0122, 1.8, 70.0),
    WorldRegion::new("Moscow", 55.7558, 37.6173, 12.5, 55.0),
    WorldRegion::new("Istanbul", 41.0082, 28.9784, 15.5, 50.0),

    // Asia & Pacific
    WorldRegion::new("Tokyo", 35.6762, 139.6503, 13.9, 65.0),
    WorldRegion::new("Seoul", 37.5665, 126.9780, 9.8, 70.0),
    WorldRegion::new("Beijing", 39.9042, 116.4074, 21.5, 15.0),
    WorldRegion::new("Shanghai", 31.2304, 121.4737, 26.3, 15.0),
    WorldRegion::new("Mumbai", 19.0760, 72.8777, 20.4, 30.0),
    WorldRegion::new("Delhi", 28.6139, 77.2090, 30.3, 28.0),
    WorldRegion::new("Singapore", 1.3521, 103.8198, 5.7, 75.0),
    WorldRegion::new("Bangkok", 13.7563, 100.5018, 10.5, 60.0),
    WorldRegion::new("Hong Kong", 22.3193, 114.1694, 7.5, 65.0),
    WorldRegion::new("Sydney", -33.8688, 151.2093, 5.3, 80.0),
    WorldRegion::new("Melbourne", -37.8136, 144.9631, 5.0, 78.0),
    WorldRegion::new("Jakarta", -6.2088, 106.8456, 10.6, 45.0),
    WorldRegion::new("Manila", 14.5995, 120.9842, 13.9, 50.0),
    WorldRegion::new("Osaka", 34.6937, 135.5022, 2.7, 62.0),
    WorldRegion::new("Taipei", 25.0330, 121.5654, 2.6, 60.0),
    WorldRegion::new("Kuala Lumpur", 3.1390, 101.6869, 7.8, 55.0),
    WorldRegion::new("Auckland", -36.8485, 174.7633, 1.5, 78.0),
    WorldRegion::new("Dubai", 25.2048, 55.2708, 3.3, 60.0),
    WorldRegion::new("Cairo", 30.0444, 31.2357, 9.9, 35.0),

    // Middle East & Africa
    WorldRegion::new("Riyadh", 24.7136, 46.6753, 7.7, 45.0),
    WorldRegion::new("Tel Aviv", 32.0853, 34.7818, 0.45, 65.0),
    WorldRegion::new("Lagos", 6.5244, 3.3792, 14.4, 25.0),
    WorldRegion::new("Johannesburg", -26.2041, 28.0473, 5.8, 45.0),
    WorldRegion::new("Cape Town", -33.9249, 18.4241, 4.6, 50.0),
    WorldRegion::new("Nairobi", -1.2921, 36.8219, 4.4, 30.0),
    WorldRegion::new("Casablanca", 33.5731, -7.5898, 3.4, 40.0),
    WorldRegion::new("Accra", 5.6037, -0.1870, 2.5, 28.0),
    WorldRegion::new("Addis Ababa", 9.0320, 38.7469, 4.8, 20.0),
    WorldRegion::new("Algiers", 36.7538, 3.0588, 3.4, 35.0),
];

/// Look up a city by exact name
pub fn find_region(name: &str) -> Option<&'static WorldRegion> {
    WORLD_REGIONS.iter().find(|region| region.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_names_are_unique() {
        let names: HashSet<_> = WORLD_REGIONS.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), WORLD_REGIONS.len());
        assert_eq!(WORLD_REGIONS.len(), 66);
    }

    #[test]
    fn test_region_values_are_in_range() {
        for region in WORLD_REGIONS {
            assert!((-90.0..=90.0).contains(&region.coordinates.lat), "{}", region.name);
            assert!((-180.0..=180.0).contains(&region.coordinates.lng), "{}", region.name);
            assert!(region.population > 0.0, "{}", region.name);
            assert!(
                (0.0..=100.0).contains(&region.spotify_penetration),
                "{}",
                region.name
            );
        }
    }

    #[test]
    fn test_find_region() {
        let seoul = find_region("Seoul").unwrap();
        assert_eq!(seoul.population, 9.8);
        assert_eq!(seoul.spotify_penetration, 70.0);
        assert!(find_region("Atlantis").is_none());
        assert!(find_region("seoul").is_none());
    }
}
