//! Magna CLI
//!
//! Preview the site's animations as ASCII frames and check site
//! configuration without booting the whole frontend.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod doctor;
mod preview;

#[derive(Parser)]
#[command(name = "magna")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Magna Coders site tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Animation {
    /// Typewriter headline with rotating terminal lines
    Hero,
    /// Account-card border draw/erase trace
    Border,
    /// Avatar orbit ring layout
    Orbit,
    /// Bouncing-ball title marquee
    Marquee,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an animation as ASCII frames on stdout
    Preview {
        /// Which animation to preview
        #[arg(value_enum)]
        animation: Animation,

        /// How long to run, in seconds
        #[arg(short, long, default_value = "6")]
        seconds: f32,

        /// Frames per second
        #[arg(short, long, default_value = "10")]
        fps: u32,
    },

    /// Validate site configuration from the environment
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(filter)
        .init();

    match cli.command {
        Commands::Preview {
            animation,
            seconds,
            fps,
        } => preview::run(animation, seconds, fps),
        Commands::Doctor => doctor::run(),
    }
}
