//! solviz CLI - Render solver coloring solutions as force-directed SVG graphs.
//!
//! Reads a solved instance (node, edge and color atoms exported as JSON),
//! extracts the colored view graph, lays it out with a force simulation and
//! writes an SVG picture.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;

use solviz_core::{IdPolicy, Palette};

/// solviz - Draw constraint-solver coloring solutions.
///
/// Run `solviz sample | solviz render -` to try the pipeline without a
/// solver export at hand.
#[derive(Parser, Debug)]
#[command(
    name = "solviz",
    author,
    version,
    about = "solviz: Render solver coloring solutions as SVG graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an instance to an SVG file.
    Render {
        /// Instance JSON to render (`-` reads from stdin).
        instance: PathBuf,

        /// Output SVG path.
        #[arg(short, long, default_value = "graph.svg")]
        output: PathBuf,

        /// Canvas width in pixels.
        #[arg(long, env = "SOLVIZ_WIDTH", default_value_t = 800.0)]
        width: f32,

        /// Canvas height in pixels.
        #[arg(long, env = "SOLVIZ_HEIGHT", default_value_t = 600.0)]
        height: f32,

        /// Simulation ticks to run before reading positions.
        #[arg(long, default_value_t = 300)]
        ticks: u32,

        /// Identifier derivation: full or trailing-char.
        #[arg(long, default_value = "full")]
        id_policy: String,

        /// Comma-separated fill palette override.
        #[arg(long)]
        palette: Option<String>,

        /// Background fill (transparent when omitted).
        #[arg(long)]
        background: Option<String>,

        /// Also dump the extracted view graph as JSON to this path.
        #[arg(long)]
        dump_graph: Option<PathBuf>,
    },

    /// Summarize an instance without rendering.
    Inspect {
        /// Instance JSON to inspect (`-` reads from stdin).
        instance: PathBuf,

        /// Identifier derivation: full or trailing-char.
        #[arg(long, default_value = "full")]
        id_policy: String,
    },

    /// Print the built-in sample instance as JSON.
    Sample {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Render {
            instance,
            output,
            width,
            height,
            ticks,
            id_policy,
            palette,
            background,
            dump_graph,
        } => {
            let id_policy: IdPolicy = id_policy.parse()?;
            let palette = match palette {
                Some(spec) => spec.parse()?,
                None => Palette::default(),
            };
            commands::render::execute(commands::render::RenderRequest {
                instance,
                output,
                width,
                height,
                ticks,
                id_policy,
                palette,
                background,
                dump_graph,
            })?;
        }

        Commands::Inspect {
            instance,
            id_policy,
        } => {
            let id_policy: IdPolicy = id_policy.parse()?;
            commands::inspect::execute(&instance, id_policy)?;
        }

        Commands::Sample { output } => {
            commands::sample::execute(output)?;
        }
    }

    Ok(())
}
