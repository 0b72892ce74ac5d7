//! Storyboard CLI Tool
//!
//! Command-line interface for parsing storyboard scripts and sampling the
//! resulting timelines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storyboard_core::Layer;
use storyboard_parser::{ParseOutput, ParserConfig};
use storyboard_player::Player;

#[derive(Parser)]
#[command(name = "storyboard")]
#[command(about = "Storyboard script parser and timeline expander")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a script and show the resolved timeline
    Parse {
        /// Input script path
        input: PathBuf,

        /// Write the timeline as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Loop count for animated sprites whose span cannot be computed
        #[arg(long, default_value = "10")]
        fallback_loops: u32,
    },

    /// Print the state of every element alive at a playback time
    Sample {
        /// Input script path
        input: PathBuf,

        /// Playback time in milliseconds
        #[arg(short, long)]
        time: f64,

        /// Loop count for animated sprites whose span cannot be computed
        #[arg(long, default_value = "10")]
        fallback_loops: u32,
    },
}

fn main() -> Result<()> {
    // Diagnostics are reported through tracing as they are found
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            json,
            fallback_loops,
        } => parse_script(&input, json, fallback_loops)?,

        Commands::Sample {
            input,
            time,
            fallback_loops,
        } => sample_script(&input, time, fallback_loops)?,
    }

    Ok(())
}

fn load(input: &Path, fallback_loops: u32) -> Result<ParseOutput> {
    tracing::info!("Parsing storyboard script: {}", input.display());

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read script {}", input.display()))?;

    let config = ParserConfig {
        fallback_loop_count: fallback_loops,
        ..ParserConfig::default()
    };

    Ok(storyboard_parser::Parser::new(config).parse(&source))
}

fn parse_script(input: &Path, json: Option<PathBuf>, fallback_loops: u32) -> Result<()> {
    let output = load(input, fallback_loops)?;
    print_info(&output);

    if let Some(path) = json {
        let json = output.timeline.to_json().context("Failed to serialize timeline")?;
        std::fs::write(&path, json).context("Failed to write JSON output file")?;
        println!("\nWrote timeline to {}", path.display());
    }

    Ok(())
}

fn sample_script(input: &Path, time: f64, fallback_loops: u32) -> Result<()> {
    let output = load(input, fallback_loops)?;
    let player = Player::new(&output.timeline);
    let states = player
        .sample(time)
        .with_context(|| format!("Failed to sample timeline at {time}ms"))?;

    println!("=== {} elements alive at {}ms ===", states.len(), time);
    for state in &states {
        let (left, top) = state.top_left();
        println!(
            "  [{}] {} at ({}, {}) {:?}, top-left ({}, {}) scale=({}, {}) rot={} alpha={:.3} color={}",
            state.z_index,
            state.file,
            state.x,
            state.y,
            state.origin,
            left,
            top,
            state.scale.0,
            state.scale.1,
            state.rotation,
            state.alpha,
            state.color
        );
    }

    Ok(())
}

fn print_info(output: &ParseOutput) {
    let timeline = &output.timeline;

    println!("\n=== Storyboard Information ===");
    println!("Canvas: {}x{}", timeline.width, timeline.height);
    println!(
        "Duration: {} ms ({:.2} seconds)",
        timeline.duration(),
        timeline.duration() / 1000.0
    );
    println!("Elements: {}", timeline.elements.len());
    for layer in [Layer::Background, Layer::Foreground, Layer::Overlay] {
        let count = timeline.elements.iter().filter(|e| e.layer == layer).count();
        println!("  {:?}: {}", layer, count);
    }
    println!("Animations: {}", timeline.animation_count());
    println!("Diagnostics: {}", output.diagnostics.len());

    println!("\n=== Elements (first 10) ===");
    for element in timeline.elements.iter().take(10) {
        println!(
            "  [{}] {} from {}ms to {}ms at ({}, {}) {:?}, {} animations",
            element.z_index,
            element.file(),
            element.start_time,
            element.end_time,
            element.x,
            element.y,
            element.layer,
            element.animations.len()
        );
    }
    if timeline.elements.len() > 10 {
        println!("  ... and {} more elements", timeline.elements.len() - 10);
    }
}
