//! Shop CLI - terminal storefront for a static product catalog.
//!
//! Commands:
//! - `shop browse` - Browse the catalog, fill a cart and check out
//! - `shop list` - Print a category listing
//! - `shop render` - Write the storefront as an HTML page
//! - `shop order` - Build an order message from `id=qty` pairs
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod handoff;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, ListArgs, OrderArgs, RenderArgs};

/// Shop CLI - browse a product catalog and hand orders off to chat
#[derive(Parser)]
#[command(name = "shop")]
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
    /// Browse the catalog interactively
    Browse(BrowseArgs),

    /// Print the product listing of a category
    List(ListArgs),

    /// Render the storefront page as HTML
    Render(RenderArgs),

    /// Build an order message and checkout link
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.logger.error_builder("command failed").field("error", format!("{:#}", e)).emit();
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
