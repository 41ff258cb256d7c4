//! lavs - Layered Authenticity Verification System
//!
//! Reads producer evidence as JSON and prints fused verdicts.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lavs_core::config::{CliOverrides, LavsConfig};
use lavs_core::errors::{ConfigError, InputError, LavsErrorCode};
use lavs_core::tracing::setup::{init_tracing, init_tracing_with_filter};

mod commands;

use commands::CommandContext;

/// lavs - Layered Authenticity Verification System
#[derive(Parser, Debug)]
#[command(name = "lavs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project directory containing `lavs.toml`
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Log filter, overrides `LAVS_LOG` (e.g. `debug`, `lavs_fusion=trace`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Risk substituted for buckets without evidence
    #[arg(long, global = true)]
    neutral_prior: Option<f64>,

    /// Maximum number of top signals in a verdict
    #[arg(long, global = true)]
    max_top_signals: Option<usize>,

    /// Run producers one after another instead of in parallel
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append the behavioral layer to producer evidence and aggregate
    Fuse(commands::fuse::EvidenceArgs),

    /// Aggregate evidence as-is, without a behavioral layer
    Aggregate(commands::fuse::EvidenceArgs),

    /// Run only the behavioral analyzer over evidence
    Behavioral(commands::behavioral::BehavioralArgs),

    /// Classify a file or URL, run the evidence producers for it, and report
    Verify(commands::verify::VerifyArgs),

    /// Classify a file or URL
    Classify(commands::classify::TargetArgs),

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.log_level.as_deref() {
        Some(filter) => init_tracing_with_filter(filter),
        None => init_tracing(),
    }

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", surface(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let overrides = CliOverrides {
        neutral_prior: cli.neutral_prior,
        max_top_signals: cli.max_top_signals,
        producers_parallel: cli.sequential.then_some(false),
    };
    let config = LavsConfig::load(&cli.config, Some(&overrides))?;
    tracing::debug!(root = %cli.config.display(), "configuration loaded");
    let ctx = CommandContext::new(config, cli.pretty);

    match cli.command {
        Commands::Fuse(args) => commands::fuse::fuse(&ctx, &args),
        Commands::Aggregate(args) => commands::fuse::aggregate(&ctx, &args),
        Commands::Behavioral(args) => commands::behavioral::run(&ctx, &args),
        Commands::Verify(args) => commands::verify::run(&ctx, &args),
        Commands::Classify(args) => commands::classify::run(&ctx, &args),
        Commands::Config => commands::config::run(&ctx),
    }
}

/// `[CODE] message` for typed errors, the full context chain otherwise.
fn surface(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<InputError>() {
        return e.surface_string();
    }
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return e.surface_string();
    }
    format!("{err:#}")
}
