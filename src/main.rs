//! SurfNotify CLI - surf suitability for a surfer's nearby spots.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surfnotify::config::LoggingConfig;
use surfnotify::surf::{
    CandidateQuery, SearchArea, assess_candidates, best_assessment, nearby_spots,
    shortlist_candidates,
};
use surfnotify::{
    Coordinate, InMemoryStore, ScoringInput, SkillLevel, SpotCatalog, Strictness,
    SurfNotifyConfig, SurfNotifyError, UserStore, score_spot,
};

#[derive(Parser)]
#[command(name = "surfnotify")]
#[command(author, version, about = "Skill-aware surf suitability scoring", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog spots, optionally for one region.
    Spots {
        #[arg(long)]
        region: Option<String>,
    },

    /// Split the catalog into spots within and beyond a radius.
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Radius in km; the configured search radius when omitted.
        #[arg(short, long)]
        radius: Option<f64>,
    },

    /// Score one set of conditions at a spot.
    Score {
        /// Catalog spot whose orientation is used.
        #[arg(long, conflicts_with = "orientation")]
        spot: Option<String>,

        /// Compass bearing the beach faces, instead of a catalog spot.
        #[arg(long)]
        orientation: Option<f64>,

        #[arg(long)]
        swell_height: f64,

        #[arg(long)]
        swell_period: f64,

        #[arg(long)]
        swell_direction: f64,

        #[arg(long)]
        wave_height: f64,

        #[arg(long)]
        wave_period: f64,

        /// Wind speed at 2 m, km/h.
        #[arg(long)]
        wind_speed: Option<f64>,

        /// Wind speed at 10 m, km/h; corrected down when no 2 m reading is given.
        #[arg(long)]
        wind_speed_10m: Option<f64>,

        #[arg(long)]
        wind_direction: f64,

        #[arg(long, default_value = "intermediate")]
        skill: SkillLevel,

        /// Local hour of day, 0-23.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: Option<u8>,
    },

    /// Assess the nearest spots for a stored user and report the best one.
    Check {
        #[arg(short, long)]
        user: String,

        /// Snapshot of users and conditions; overrides the configured path.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Distance strictness (harsh or lenient); overrides the user's own.
        #[arg(long)]
        strictness: Option<Strictness>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match SurfNotifyConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", describe(&err));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging, cli.verbose);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Command failed: {err:?}");
            eprintln!("Error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("surfnotify={level},warn").into());

    // stdout carries command output, logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "compact" {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn describe(err: &anyhow::Error) -> String {
    err.downcast_ref::<SurfNotifyError>()
        .map_or_else(|| format!("{err:#}"), SurfNotifyError::user_message)
}

fn run(command: Commands, config: &SurfNotifyConfig) -> Result<()> {
    match command {
        Commands::Spots { region } => list_spots(config, region.as_deref()),
        Commands::Nearby { lat, lon, radius } => {
            let center = Coordinate::new(lat, lon);
            center.validate()?;
            let radius_km = radius.unwrap_or(config.search.radius_km);
            if radius_km.is_nan() || radius_km <= 0.0 {
                return Err(SurfNotifyError::validation("Radius must be greater than 0 km").into());
            }

            let catalog = load_catalog(config)?;
            let result = nearby_spots(catalog.all(), center, radius_km);
            info!(
                "{} spots within {radius_km} km of {}, {} beyond",
                result.within.len(),
                center.format_coordinates(),
                result.outside.len()
            );
            print_json(&result)
        }
        Commands::Score {
            spot,
            orientation,
            swell_height,
            swell_period,
            swell_direction,
            wave_height,
            wave_period,
            wind_speed,
            wind_speed_10m,
            wind_direction,
            skill,
            hour,
        } => {
            let spot_orientation = match (spot, orientation) {
                (_, Some(orientation)) => orientation,
                (Some(id), None) => load_catalog(config)?
                    .get(&id)
                    .map(|s| s.orientation)
                    .ok_or_else(|| SurfNotifyError::validation(format!("Unknown spot '{id}'")))?,
                (None, None) => {
                    return Err(SurfNotifyError::validation(
                        "Either --spot or --orientation is required",
                    )
                    .into());
                }
            };
            if wind_speed.is_none() && wind_speed_10m.is_none() {
                warn!("No wind speed given, scoring as calm");
            }

            let input = ScoringInput {
                swell_height,
                swell_period,
                swell_direction,
                wave_height,
                wave_period,
                wind_speed_2m: wind_speed,
                wind_speed_10m,
                wind_direction,
                spot_orientation,
                ability: skill,
                local_hour: hour,
            };
            let result = score_spot(&input);

            println!("Score: {:.1}/10 ({})", result.score, result.quality_label());
            for reason in &result.reasons {
                println!("  - {reason}");
            }
            Ok(())
        }
        Commands::Check {
            user,
            snapshot,
            strictness,
        } => check_user(config, &user, snapshot.as_deref(), strictness),
    }
}

fn list_spots(config: &SurfNotifyConfig, region: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config)?;
    let spots: Vec<_> = match region {
        Some(region) => catalog.by_region(region),
        None => catalog.all().iter().collect(),
    };

    for spot in spots {
        println!(
            "{:<22} {:<22} {:<8} {:>5.0}°  {}, {}",
            spot.id,
            spot.name,
            spot.spot_type.to_string(),
            spot.orientation,
            spot.county,
            spot.region
        );
    }
    Ok(())
}

fn check_user(
    config: &SurfNotifyConfig,
    user_id: &str,
    snapshot: Option<&Path>,
    strictness: Option<Strictness>,
) -> Result<()> {
    let snapshot_path = snapshot
        .map(Path::to_path_buf)
        .or_else(|| config.data.snapshot_path.clone())
        .ok_or_else(|| {
            SurfNotifyError::config(
                "No snapshot configured; set data.snapshot_path or pass --snapshot",
            )
        })?;

    let store = InMemoryStore::from_path(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;
    let user = store
        .find_user(user_id)?
        .ok_or_else(|| SurfNotifyError::validation(format!("Unknown user '{user_id}'")))?;

    if !user.notifications_enabled {
        info!("Notifications disabled for {}, skipping", user.id);
        return print_json(&json!({ "userId": user.id, "skipped": "notifications disabled" }));
    }

    let catalog = load_catalog(config)?;
    let mut query = CandidateQuery::for_user(
        &user,
        config.search.fallback_location,
        config.search.default_strictness,
        config.search.candidate_limit,
    );
    if let Some(strictness) = strictness {
        query.strictness = strictness;
    }
    match (&user.last_location, &query.area) {
        (None, SearchArea::Regions(regions)) => info!(
            "No known location for {}, checking spots in {}",
            user.id,
            regions.join(", ")
        ),
        (None, SearchArea::Around(center)) => info!(
            "No known location or region for {}, using fallback {}",
            user.id,
            center.format_coordinates()
        ),
        (Some(_), _) => {}
    }

    let candidates = shortlist_candidates(catalog.all(), &query);
    let assessments = assess_candidates(&candidates, &store, user.profile.skill)?;
    let best = best_assessment(&assessments);

    match best {
        Some(best) => info!(
            "Best spot for {} is {} (score {:.1})",
            user.id,
            best.spot_name,
            best.suitability.as_ref().map_or(0.0, |s| s.score)
        ),
        None => warn!("No candidate for {} has live conditions", user.id),
    }

    print_json(&json!({
        "userId": user.id,
        "skill": user.profile.skill,
        "area": query.area,
        "strictness": query.strictness,
        "assessments": assessments,
        "best": best,
    }))
}

fn load_catalog(config: &SurfNotifyConfig) -> Result<SpotCatalog> {
    let catalog = match &config.data.spots_path {
        Some(path) => SpotCatalog::from_path(path)
            .with_context(|| format!("Failed to load spot catalog {}", path.display()))?,
        None => SpotCatalog::bundled()?,
    };
    Ok(catalog)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
