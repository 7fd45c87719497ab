//! Planboard CLI
//!
//! Preview the built-in care scheduling datasets in a terminal, using the
//! same sort, filter and pagination rules as the admin UI.

mod commands;
mod config;
mod utils;

use clap::{Parser, Subcommand};
use commands::CommandContext;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "planboard")]
#[command(author = "Planboard Team")]
#[command(version = planboard_core::VERSION)]
#[command(about = "Preview Planboard scheduling tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PLANBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in datasets
    Datasets,

    /// Print one page of a dataset
    List(commands::list::ListArgs),

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let loaded = config::load(cli.config.as_deref())?;

    // Initialize logging, then report what happened while loading config
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&loaded.config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    loaded.report();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = CommandContext {
        config: loaded.config,
        color: !cli.no_color,
    };

    match cli.command {
        Commands::Datasets => commands::datasets::execute(&ctx),
        Commands::List(args) => commands::list::execute(&ctx, &args),
        Commands::Config => commands::config::execute(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from([
            "planboard", "list", "tasks", "--sort", "client", "--desc", "--page", "2", "--no-color",
        ])
        .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.dataset, "tasks");
                assert_eq!(args.sort.as_deref(), Some("client"));
                assert!(args.desc);
                assert_eq!(args.page, 2);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["planboard"]).is_err());
    }
}
