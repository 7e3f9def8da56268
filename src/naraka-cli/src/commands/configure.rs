//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up naraka CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `proxy` - URL prefix for fetching share links
/// * `no_proxy` - Fetch share links directly
/// * `presets_dir` - Preset store location
/// * `show` - If true, show current configuration
pub fn handle(
    proxy: Option<String>,
    no_proxy: bool,
    presets_dir: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    let mut changed = false;

    if let Some(prefix) = proxy {
        config.set_proxy(Some(prefix));
        changed = true;
    } else if no_proxy {
        config.set_proxy(None);
        changed = true;
    }

    if let Some(dir) = presets_dir {
        config.set_presets_dir(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        show_config(&config)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match config.get_proxy() {
        Some(prefix) => println!("Proxy: {}", prefix),
        None => println!("Proxy: disabled"),
    }

    println!("Presets: {}", config.presets_dir()?.display());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: naraka configure [--proxy PREFIX | --no-proxy] [--presets-dir DIR]");
    println!("       naraka configure --show");
}
