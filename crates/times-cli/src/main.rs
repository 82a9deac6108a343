mod cmd;
mod config_path;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;
use times_core::Width;

#[derive(Parser)]
#[command(
    name = "times",
    about = "Repeat an action N times for signed integer counts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: nearest times.yaml at or above the current directory)
    #[arg(long, global = true, env = "TIMES_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repeat for COUNT and print every index handed to the action
    Run {
        /// Integer width: i8, i16, i32 or i64
        width: Width,

        /// Repeat count; zero and negative counts run nothing
        #[arg(allow_negative_numbers = true)]
        count: String,

        /// Print only the number of runs
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Check the run-count and index-sequence properties per width
    Verify {
        /// Restrict to these widths (repeatable; default: from config)
        #[arg(long = "width", short = 'w')]
        widths: Vec<Width>,
    },

    /// List the supported widths and their boundaries
    Widths,

    /// Create, show, and validate times.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Verify { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config_path::resolve_config(cli.config.as_deref());

    let result = match cli.command {
        Commands::Run {
            width,
            count,
            quiet,
        } => cmd::run::run(width, &count, quiet, cli.json),
        Commands::Verify { widths } => cmd::verify::run(config.as_deref(), widths, cli.json),
        Commands::Widths => cmd::widths::run(cli.json),
        Commands::Config { subcommand } => {
            cmd::config::run(cli.config.as_deref(), config.as_deref(), subcommand, cli.json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
