use crate::models::AnimatedPoint;
use std::cmp::Ordering;
use std::f64::consts::PI;

/// Tunables for the inter-region flow effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSettings {
    pub speed: f64,            // radians per millisecond of the progress wave
    pub top_regions: usize,    // how many of the hottest regions get connected
    pub points_per_path: usize,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            speed: 0.0005,
            top_regions: 5,
            points_per_path: 10,
        }
    }
}

/// Shared time offset added to every slot along every path, in [0, 0.5]
pub fn flow_offset(now: f64, speed: f64) -> f64 {
    ((now * speed).sin() + 1.0) / 2.0 * 0.5
}

/// Weight of a flow point, peaking at the middle of its path
pub fn flow_point_popularity(progress: f64) -> f64 {
    30.0 + (progress * PI).sin() * 20.0
}

/// Append animated points travelling between the most popular regions.
///
/// The labelled points are ranked by weight and each consecutive pair in that
/// ranking is joined by a straight lat/lng path. Slots whose progress passes
/// the end of the path are left out for this frame, so the point count
/// changes from frame to frame.
pub fn flow(points: &[AnimatedPoint], now: f64, settings: &FlowSettings) -> Vec<AnimatedPoint> {
    let mut animated = points.to_vec();

    let mut ranked: Vec<&AnimatedPoint> = points.iter().filter(|p| p.is_region()).collect();
    ranked.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(settings.top_regions);

    let offset = flow_offset(now, settings.speed);
    let slots = settings.points_per_path;

    for pair in ranked.windows(2) {
        let (start, end) = (pair[0], pair[1]);

        for slot in 0..slots {
            let progress = slot as f64 / slots as f64 + offset;
            if progress > 1.0 {
                continue;
            }

            animated.push(AnimatedPoint::synthetic(
                start.lat + (end.lat - start.lat) * progress,
                start.lng + (end.lng - start.lng) * progress,
                flow_point_popularity(progress),
                start.color,
            ));
        }
    }

    animated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HslColor, Trend};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn region(name: &str, lat: f64, lng: f64, popularity: f64) -> AnimatedPoint {
        AnimatedPoint {
            lat,
            lng,
            popularity,
            color: HslColor::from_popularity(popularity as u32),
            region: Some(name.to_string()),
            listeners: Some(1000),
            trend: Some(Trend::Up),
        }
    }

    fn filler(lat: f64, lng: f64, popularity: f64) -> AnimatedPoint {
        AnimatedPoint::synthetic(lat, lng, popularity, HslColor::from_popularity(10))
    }

    /// A timestamp where the wave sits at its minimum, giving zero offset
    fn trough(speed: f64) -> f64 {
        (3.0 * PI / 2.0) / speed
    }

    #[test]
    fn test_fewer_than_two_regions_adds_nothing() {
        let settings = FlowSettings::default();
        let points = vec![region("Tokyo", 35.0, 139.0, 90.0), filler(36.0, 140.0, 99.0)];
        assert_eq!(flow(&points, 1234.0, &settings), points);

        let only_fillers = vec![filler(0.0, 0.0, 50.0), filler(1.0, 1.0, 60.0)];
        assert_eq!(flow(&only_fillers, 1234.0, &settings), only_fillers);

        assert!(flow(&[], 0.0, &settings).is_empty());
    }

    #[test]
    fn test_two_regions_at_zero_offset() {
        let settings = FlowSettings::default();
        let points = vec![region("A", 0.0, 0.0, 40.0), region("B", 10.0, 20.0, 80.0)];
        let animated = flow(&points, trough(settings.speed), &settings);

        // Input points first, untouched
        assert_eq!(&animated[..2], &points[..]);
        let flow_points = &animated[2..];
        assert_eq!(flow_points.len(), 10);

        // Path runs from the more popular region to the less popular one
        assert_relative_eq!(flow_points[0].lat, 10.0, epsilon = 1e-6);
        assert_relative_eq!(flow_points[0].lng, 20.0, epsilon = 1e-6);
        assert_relative_eq!(flow_points[5].lat, 5.0, epsilon = 1e-6);
        assert_relative_eq!(flow_points[5].popularity, 50.0, epsilon = 1e-6);
        assert_relative_eq!(flow_points[0].popularity, 30.0, epsilon = 1e-6);

        for point in flow_points {
            assert!(!point.is_region());
            assert!(point.listeners.is_none());
            assert!(point.trend.is_none());
            assert_eq!(point.color, points[1].color);
        }
    }

    #[test]
    fn test_slots_past_path_end_are_dropped() {
        let settings = FlowSettings::default();
        let points = vec![region("A", 0.0, 0.0, 40.0), region("B", 10.0, 20.0, 80.0)];
        // Wave at its peak: offset 0.5, so slots 0..=5 survive
        let now = (PI / 2.0) / settings.speed;
        let animated = flow(&points, now, &settings);
        assert_eq!(animated.len() - points.len(), 6);
        for point in &animated[2..] {
            assert!(point.lat <= 10.0 && point.lat >= 0.0);
        }
    }

    #[test]
    fn test_only_top_regions_are_chained() {
        let settings = FlowSettings::default();
        let points: Vec<_> = (0..8)
            .map(|i| region(&format!("R{i}"), i as f64, i as f64, 10.0 * i as f64))
            .collect();
        let animated = flow(&points, trough(settings.speed), &settings);
        // Top 5 gives 4 paths of 10 slots
        assert_eq!(animated.len() - points.len(), 40);

        // First path starts at the hottest region, R7
        assert_relative_eq!(animated[8].lat, 7.0, epsilon = 1e-6);
        // No path touches the three coolest regions
        for point in &animated[8..] {
            assert!(point.lat >= 3.0 - 1e-9);
        }
    }

    #[test]
    fn test_fillers_are_ignored_when_ranking() {
        let settings = FlowSettings::default();
        let points = vec![
            filler(50.0, 50.0, 1000.0),
            region("A", 0.0, 0.0, 40.0),
            region("B", 10.0, 10.0, 80.0),
        ];
        let animated = flow(&points, trough(settings.speed), &settings);
        assert_eq!(animated.len(), 13);
        assert!(animated[3..].iter().all(|p| p.lat <= 10.0 + 1e-9));
    }

    #[test]
    fn test_flow_offset_range() {
        for step in 0..1000 {
            let offset = flow_offset(step as f64 * 13.0, 0.0005);
            assert!((0.0..=0.5).contains(&offset));
        }
    }
}
