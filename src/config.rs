use anyhow::{Context, Result, bail};
use std::str::FromStr;

use crate::animation::AnimationConfig;

/// Upper bound for `GLOBE_FILLER_POINTS`, one filler per degree of the ring
pub const MAX_FILLER_POINTS: usize = 360;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: Option<u64>,
    pub pulse_speed: f64,
    pub frame_interval_ms: u64,
    pub filler_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pulse_speed: AnimationConfig::default().pulse_speed,
            frame_interval_ms: 16, // ~60 Hz
            filler_points: AnimationConfig::default().filler_points,
        }
    }
}

impl Config {
    /// Animation settings with the env overrides applied
    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig {
            pulse_speed: self.pulse_speed,
            filler_points: self.filler_points,
            ..AnimationConfig::default()
        }
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    config_from(|key| std::env::var(key).ok())
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let defaults = Config::default();

    let filler_points = parse_var(&lookup, "GLOBE_FILLER_POINTS")?.unwrap_or(defaults.filler_points);
    if filler_points > MAX_FILLER_POINTS {
        bail!("Invalid value '{filler_points}' for GLOBE_FILLER_POINTS: must be at most {MAX_FILLER_POINTS}");
    }

    Ok(Config {
        seed: parse_var(&lookup, "GLOBE_SEED")?,
        pulse_speed: parse_var(&lookup, "GLOBE_PULSE_SPEED")?.unwrap_or(defaults.pulse_speed),
        frame_interval_ms: parse_var(&lookup, "GLOBE_FRAME_INTERVAL_MS")?
            .unwrap_or(defaults.frame_interval_ms),
        filler_points,
    })
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value '{raw}' for {key}")),
        _ => Ok(None),
    }
}
