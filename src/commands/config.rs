use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::Config;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => show(sub_matches),
        Some(("path", _)) => path(),
        Some(("init", sub_matches)) => init(sub_matches),
        _ => {
            println!("Use 'memvitals config --help' for more information.");
            Ok(())
        }
    }
}

fn resolve_path(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(path.clone()),
        None => Config::get_config_path().context("Could not resolve config path"),
    }
}

fn show(matches: &ArgMatches) -> Result<()> {
    let path = resolve_path(matches)?;
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {:?}", path))?;

    if !path.exists() {
        println!(
            "{}",
            format!("No config file at {}, showing defaults", path.display()).dimmed()
        );
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn path() -> Result<()> {
    let path = Config::get_config_path().context("Could not resolve config path")?;
    println!("{}", path.display());
    Ok(())
}

fn init(matches: &ArgMatches) -> Result<()> {
    let path = resolve_path(matches)?;
    let force = matches.get_flag("force");

    if path.exists() && !force {
        println!(
            "{}",
            format!("Config already exists at {}", path.display()).yellow()
        );
        println!("{}", "Use --force to overwrite it with defaults.".dimmed());
        return Ok(());
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write config to {:?}", path))?;

    println!(
        "{} {}",
        "✓ Wrote default config to".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
