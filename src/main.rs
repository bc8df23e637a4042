//! quadplot - plots a quadrotor's flown path from CSV position files.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quadplot::{
    Axis, AxisPair, FixedRoot, PackageResolver, PathPlotter, PositionReader, Positions,
    RenderConfig, ViewAngle,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "quadplot")]
#[command(about = "Plot a quadrotor's flown path against its planned path and waypoints", long_about = None)]
struct Args {
    /// Figure to write
    #[arg(value_enum)]
    kind: Kind,

    /// CSV file with the flown path, one x,y,z position per row
    #[arg(long)]
    flown: PathBuf,

    /// CSV file with the planned path
    #[arg(long)]
    planned: Option<PathBuf>,

    /// CSV file with the waypoints
    #[arg(long)]
    waypoints: Option<PathBuf>,

    /// Horizontal axis of a single 2D projection (x, y or z)
    #[arg(long, default_value = "x")]
    h_axis: Axis,

    /// Vertical axis of a single 2D projection (x, y or z)
    #[arg(long, default_value = "y")]
    v_axis: Axis,

    /// Camera azimuth of 3D views, in degrees
    #[arg(long, default_value_t = ViewAngle::DEFAULT_AZIMUTH, allow_negative_numbers = true)]
    azimuth: f64,

    /// Camera elevation of 3D views, in degrees
    #[arg(long, default_value_t = ViewAngle::DEFAULT_ELEVATION, allow_negative_numbers = true)]
    elevation: f64,

    /// Project root holding output_data/ (skips the ROS package lookup)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Package whose root holds output_data/
    #[arg(long, default_value = "quad_controller")]
    package: String,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Single 2D projection
    One,
    /// Single 3D perspective
    Isometric,
    /// 2x2 grid of projections and perspective
    Grid,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let flown = read_positions(&args.flown)?;
    let planned = args.planned.as_deref().map(read_positions).transpose()?;
    let waypoints = args.waypoints.as_deref().map(read_positions).transpose()?;

    let config = RenderConfig {
        package: args.package.clone(),
        ..RenderConfig::default()
    };

    let out = match &args.root {
        Some(root) => plot(
            &PathPlotter::with_resolver(FixedRoot::new(root)).with_config(config),
            &args,
            &flown,
            planned.as_ref(),
            waypoints.as_ref(),
        )?,
        None => plot(
            &PathPlotter::from_env().with_config(config),
            &args,
            &flown,
            planned.as_ref(),
            waypoints.as_ref(),
        )?,
    };

    println!("{}", out.display());
    tracing::info!("quadplot exited");
    Ok(())
}

fn plot<R: PackageResolver>(
    plotter: &PathPlotter<R>,
    args: &Args,
    flown: &Positions,
    planned: Option<&Positions>,
    waypoints: Option<&Positions>,
) -> quadplot::Result<PathBuf> {
    let view = ViewAngle::new(args.azimuth, args.elevation);
    match args.kind {
        Kind::One => plotter.plot_path_2d(
            flown,
            planned,
            waypoints,
            AxisPair::new(args.h_axis, args.v_axis),
        ),
        Kind::Isometric => plotter.plot_path_3d(flown, planned, waypoints, view),
        Kind::Grid => plotter.plot_path_grid(flown, planned, waypoints, view),
    }
}

fn read_positions(path: &Path) -> Result<Positions> {
    PositionReader::read_file(path)
        .with_context(|| format!("Failed to read positions from {}", path.display()))
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    // Set up file logging if --log option is provided
    if let Some(log_path) = log {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting quadplot");
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))
}
