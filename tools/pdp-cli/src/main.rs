//! PDP CLI - Command line tool for the product detail page core.
//!
//! Commands:
//! - `pdp reconcile` - Reconcile query attributes against a product's variants
//! - `pdp render` - Render a product page from a catalog fixture
//! - `pdp config` - Show the effective page configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ReconcileArgs, RenderArgs};

/// PDP CLI - Run the product detail page core locally
#[derive(Parser)]
#[command(name = "pdp")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile query attributes against a product's variants
    Reconcile(ReconcileArgs),

    /// Render a product page
    Render(RenderArgs),

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and install logging
    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    ctx.init_telemetry();

    let result = match cli.command {
        Commands::Reconcile(args) => commands::reconcile::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config => commands::config::run(&ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
