use super::filler::expand_with_fillers;
use super::flow::{FlowSettings, flow};
use super::pulse::{DEFAULT_PULSE_SPEED, pulse};
use crate::models::{AnimatedPoint, RegionPopularity};
use rand::Rng;
use tracing::trace;

/// Settings for turning popularity records into per-frame point clouds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub pulse_speed: f64,
    pub flow: FlowSettings,
    pub filler_points: usize, // fillers around each region
    pub filler_radius: f64,   // in degrees
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pulse_speed: DEFAULT_PULSE_SPEED,
            flow: FlowSettings::default(),
            filler_points: 12,
            filler_radius: 5.0,
        }
    }
}

/// Builds the renderer's point cloud for the selected song
pub struct Compositor {
    config: AnimationConfig,
}

impl Compositor {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// Static point cloud for a song: one labelled point per region plus fillers.
    ///
    /// Computed once per song selection; frames are derived from it.
    pub fn prepare<R: Rng + ?Sized>(
        &self,
        records: &[RegionPopularity],
        rng: &mut R,
    ) -> Vec<AnimatedPoint> {
        let points: Vec<AnimatedPoint> = records.iter().map(AnimatedPoint::from_record).collect();
        expand_with_fillers(
            &points,
            self.config.filler_points,
            self.config.filler_radius,
            rng,
        )
    }

    /// One animation frame: pulse every point, then add flow points.
    ///
    /// Recomputed from `base` on every tick; the point count is not stable
    /// between frames.
    pub fn frame(&self, base: &[AnimatedPoint], now: f64) -> Vec<AnimatedPoint> {
        let pulsed = pulse(base, self.config.pulse_speed, now);
        let frame = flow(&pulsed, now, &self.config.flow);
        trace!(now, points = frame.len(), "composited frame");
        frame
    }
}

/// Tooltip for a renderer bin, built from the first labelled point in it
pub fn region_tooltip(points: &[AnimatedPoint]) -> Option<String> {
    let main = points.iter().find(|p| p.is_region())?;
    let region = main.region.as_deref()?;
    let listeners = main
        .listeners
        .map(format_thousands)
        .unwrap_or_else(|| "-".to_string());
    let trend = main
        .trend
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());

    Some(format!(
        "{region}\nPopularity: {}%\nListeners: {listeners}\nTrend: {trend}",
        main.popularity.round()
    ))
}

/// `1234567` -> `1,234,567`
fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
