//! Voxsub CLI — subtitle and transcript generation from recognizer output.
//!
//! Usage:
//!   voxsub generate <RESULTS> <AUDIO>   Generate .srt and .txt outputs
//!   voxsub inspect <RESULTS>            Show recognition dump statistics

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "voxsub",
    about = "Time-aligned subtitles from word-level speech recognition output",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an explicit config file (overrides the standard location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate subtitle and transcript files from a recognition dump
    Generate {
        /// Path to the recognition dump (JSON)
        results: PathBuf,

        /// Path to the decoded audio (WAV)
        audio: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output filename stem (defaults to the current timestamp)
        #[arg(long)]
        stem: Option<String>,

        /// Word-correction lexicon (JSON object of word→correction)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Ceiling on a speech cue's spoken span (seconds)
        #[arg(long)]
        max_cue_duration: Option<f64>,

        /// Minimum unexplained interval before a gap cue is considered (seconds)
        #[arg(long)]
        gap_threshold: Option<f64>,

        /// RMS amplitude at or below which a gap counts as silence
        #[arg(long)]
        silence_floor: Option<f64>,
    },

    /// Show statistics for a recognition dump
    Inspect {
        /// Path to the recognition dump (JSON)
        results: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => voxsub_common::config::AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => voxsub_common::config::AppConfig::load(),
    };

    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    voxsub_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Generate {
            results,
            audio,
            output,
            stem,
            lexicon,
            max_cue_duration,
            gap_threshold,
            silence_floor,
        } => commands::generate::run(
            &app_config,
            results,
            audio,
            output,
            stem,
            lexicon,
            max_cue_duration,
            gap_threshold,
            silence_floor,
        ),
        Commands::Inspect { results } => commands::inspect::run(results),
    }
}
