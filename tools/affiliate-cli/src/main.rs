//! Affiliate CLI - Terminal front-end for the affiliate product catalog.
//!
//! Commands:
//! - `affiliate list` - List products with commission and stock
//! - `affiliate show` - Show the full detail of one product
//! - `affiliate link` - Generate (and optionally copy) an affiliate link
//! - `affiliate browse` - Interactive session over the catalog

mod clipboard;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LinkArgs, ShowArgs};

/// Affiliate CLI - Browse products and generate affiliate links
#[derive(Parser)]
#[command(name = "affiliate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in catalog order
    List,

    /// Show the full detail of a product
    Show(ShowArgs),

    /// Generate an affiliate link for a product
    Link(LinkArgs),

    /// Browse the catalog interactively
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List => commands::list::run(&ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Link(args) => commands::link::run(args, &ctx),
        Commands::Browse => commands::browse::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
