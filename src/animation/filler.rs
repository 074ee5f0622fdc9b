use crate::models::AnimatedPoint;
use rand::Rng;
use std::f64::consts::PI;
use std::ops::Range;

/// Per-axis scale applied to the ring radius for each filler
const RADIUS_JITTER: Range<f64> = 0.5..1.0;
/// Filler weight as a fraction of the parent region's weight
const WEIGHT_FRACTION: Range<f64> = 0.2..0.5;

/// Surround each labelled point with a ring of unlabelled fillers.
///
/// The renderer bins points spatially, so the ring spreads a city's weight
/// over neighbouring bins and smooths the heatmap. Each labelled point is
/// followed directly by its fillers. Unlabelled input points pass through
/// without a ring.
pub fn expand_with_fillers<R: Rng + ?Sized>(
    points: &[AnimatedPoint],
    count: usize,
    radius: f64,
    rng: &mut R,
) -> Vec<AnimatedPoint> {
    let capacity = count
        .checked_add(1)
        .and_then(|per_point| per_point.checked_mul(points.len()))
        .unwrap_or(points.len());
    let mut expanded = Vec::with_capacity(capacity);

    for point in points {
        expanded.push(point.clone());
        if !point.is_region() {
            continue;
        }

        for i in 0..count {
            let angle = (i as f64 / count as f64) * PI * 2.0;
            let lat = point.lat + angle.cos() * radius * rng.gen_range(RADIUS_JITTER);
            let lng = point.lng + angle.sin() * radius * rng.gen_range(RADIUS_JITTER);
            expanded.push(AnimatedPoint::synthetic(
                lat,
                lng,
                point.popularity * rng.gen_range(WEIGHT_FRACTION),
                point.color,
            ));
        }
    }

    expanded
}
