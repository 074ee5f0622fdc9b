use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod animation;
mod catalog;
mod clock;
mod config;
mod models;
mod popularity;
mod world;


use crate::animation::{AnimationConfig, Compositor, region_tooltip};
use crate::catalog::{build_songs, builtin_catalog, load_catalog};
use crate::clock::{Clock, SystemClock};
use crate::config::load_config;
use crate::models::{AnimatedPoint, Song};
use crate::popularity::{PopularityGenerator, SongInsights, format_listener_count};
use crate::world::find_region;

#[derive(Parser)]
#[command(name = "song-globe")]
#[command(about = "Regional song popularity heatmap data for a 3D globe")]
#[command(version)]
struct Args {
    /// Path to a JSON catalog of song profiles (defaults to the built-in library)
    #[arg(short = 'c', long = "catalog")]
    catalog_file: Option<String>,

    /// Song id to select; without it every song is summarised
    #[arg(short = 's', long = "song")]
    song: Option<String>,

    /// Seed for all random draws (overrides GLOBE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Play the selected song for this many animation frames, printed as JSON lines
    #[arg(short = 'f', long = "frames", default_value_t = 0)]
    frames: usize,

    /// Print popularity records as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only errors are logged
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// One rendered tick handed to the external globe renderer
#[derive(Serialize)]
struct FrameOutput<'a> {
    frame: usize,
    time: f64,
    points: &'a [AnimatedPoint],
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = load_config()?;
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(|| SystemClock.now_millis() as u64);
    info!(seed, "seeding popularity generator");

    let entries = match &args.catalog_file {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let generator = PopularityGenerator::new(SystemClock);
    let songs = build_songs(&entries, &generator, &mut rng);

    let Some(song_id) = &args.song else {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&songs)?);
        } else {
            println!("Library: {} songs (seed {seed})", songs.len());
            for song in &songs {
                print_song_line(song);
            }
        }
        return Ok(());
    };

    let song = songs
        .iter()
        .find(|song| &song.id == song_id)
        .with_context(|| format!("Song '{song_id}' not found in catalog"))?;

    let animation = config.animation();
    let compositor = Compositor::new(animation);
    let base_points = compositor.prepare(&song.popularity, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&song.popularity)?);
    } else {
        print_song_details(song, &base_points, &animation);
    }

    if args.frames > 0 {
        play(&compositor, &base_points, args.frames, config.frame_interval_ms)?;
    }

    Ok(())
}

fn init_logging(args: &Args) {
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if args.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Emit composited frames as JSON lines until `frames` ticks have been drawn
fn play(
    compositor: &Compositor,
    base_points: &[AnimatedPoint],
    frames: usize,
    frame_interval_ms: u64,
) -> Result<()> {
    let clock = SystemClock;
    let interval = std::time::Duration::from_millis(frame_interval_ms);

    for frame in 0..frames {
        let now = clock.now_millis();
        let points = compositor.frame(base_points, now);
        let line = serde_json::to_string(&FrameOutput {
            frame,
            time: now,
            points: &points,
        })?;
        println!("{line}");
        debug!(frame, points = points.len(), "emitted frame");

        if frame + 1 < frames {
            std::thread::sleep(interval);
        }
    }

    Ok(())
}

fn print_song_line(song: &Song) {
    let insights = SongInsights::from_records(&song.popularity);
    println!(
        "- [{}] \"{}\" by {} | Avg: {}% | Listeners: {} | Trend: {}",
        song.id,
        song.title,
        song.artist,
        insights.average_popularity,
        format_listener_count(insights.total_listeners),
        insights.overall_trend
    );
}

fn print_song_details(song: &Song, base_points: &[AnimatedPoint], animation: &AnimationConfig) {
    let insights = SongInsights::from_records(&song.popularity);

    println!("{} - {} [{}]", song.title, song.artist, song.album);
    println!("{}", "=".repeat(song.title.len() + song.artist.len() + 3));
    println!(
        "Duration: {}:{:02} | Regions: {}",
        song.duration / 60,
        song.duration % 60,
        song.popularity.len()
    );
    println!(
        "Total listeners: {} | Average popularity: {}% | Overall trend: {}",
        format_listener_count(insights.total_listeners),
        insights.average_popularity,
        insights.overall_trend
    );
    println!(
        "Distribution: High {}% | Medium {}% | Low {}%",
        insights.distribution.high, insights.distribution.medium, insights.distribution.low
    );

    println!("\nTop regions:");
    // Each region is followed by its filler ring in the prepared cloud
    let bins: Vec<&[AnimatedPoint]> = base_points
        .chunks(animation.filler_points.saturating_add(1))
        .collect();
    for (rank, record) in insights.top_regions.iter().enumerate() {
        let bin = bins
            .iter()
            .find(|bin| bin.first().and_then(|p| p.region.as_deref()) == Some(record.region.as_str()));
        let label = bin
            .and_then(|bin| region_tooltip(bin))
            .map(|tooltip| tooltip.replace('\n', " | "))
            .unwrap_or_else(|| record.region.clone());
        match find_region(&record.region) {
            Some(market) => println!(
                "{}. {} (pop. {}M, {}% penetration)",
                rank + 1,
                label,
                market.population,
                market.spotify_penetration
            ),
            None => println!("{}. {}", rank + 1, label),
        }
    }
}
