use crate::models::AnimatedPoint;
use std::f64::consts::PI;

/// Default pulse angular speed, in radians per millisecond
pub const DEFAULT_PULSE_SPEED: f64 = 0.001;

/// Per-point phase offset so neighbouring points don't pulse in lockstep
pub fn pulse_phase(lat: f64, lng: f64) -> f64 {
    (lat * 0.1 + lng * 0.1) % (2.0 * PI)
}

/// Scale each point's weight by `0.85 + 0.15 * sin(now * speed + phase)`,
/// an oscillation between 0.70 and 1.00 of the original value.
pub fn pulse(points: &[AnimatedPoint], base_speed: f64, now: f64) -> Vec<AnimatedPoint> {
    points
        .iter()
        .map(|point| {
            let wave = (now * base_speed + pulse_phase(point.lat, point.lng)).sin();
            AnimatedPoint {
                popularity: point.popularity * (0.85 + wave * 0.15),
                ..point.clone()
            }
        })
        .collect()
}
