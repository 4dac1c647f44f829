//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output.kv("source", &catalog.source);
    ctx.output.kv("resolved", &ctx.catalog_location());
    ctx.output.kv("currency", &catalog.currency);
    ctx.output.kv("rewrite_drive_links", &catalog.rewrite_drive_links.to_string());
    if let Some(secs) = catalog.timeout_secs {
        ctx.output.kv("timeout_secs", &secs.to_string());
    }

    let checkout = &ctx.config.checkout;
    ctx.output.info("[checkout]");
    ctx.output.kv("base_url", &checkout.base_url);
    if checkout.recipient.is_empty() {
        ctx.output.kv("recipient", "(chosen in the messaging app)");
    } else {
        ctx.output.kv("recipient", &checkout.recipient);
    }
    ctx.output.kv("open_browser", &checkout.open_browser.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shop.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}
