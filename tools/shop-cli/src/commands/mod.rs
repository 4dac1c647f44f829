//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod list;
pub mod order;
pub mod render;

use clap::{Args, Subcommand};

pub use order::OrderItem;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to start in (default: all).
    #[arg(long)]
    pub category: Option<String>,

    /// Print the checkout link instead of opening the browser.
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category to list (default: all).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Category to render (default: all).
    #[arg(long)]
    pub category: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub out: Option<String>,

    /// Page title.
    #[arg(long, default_value = "Storefront")]
    pub title: String,

    /// Pre-fill the cart with `id=qty` entries.
    #[arg(long = "add", value_name = "ID=QTY")]
    pub add: Vec<OrderItem>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Cart entries as `id=qty` (or `id` for one unit).
    #[arg(required = true, value_name = "ID=QTY")]
    pub items: Vec<OrderItem>,

    /// Print the checkout link instead of opening the browser.
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
