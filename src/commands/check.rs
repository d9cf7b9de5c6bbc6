//! Runs the configured health checks once.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::health::{all_healthy, ComponentReport, HealthCheckResult, HealthRegistry};
use crate::core::Config;
use crate::platform::SystemMemorySource;
use crate::ui::{print_report, print_summary};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load().context("Failed to load config")?,
    };

    let registry = config
        .build_registry(Arc::new(SystemMemorySource::new()))
        .context("Invalid health check configuration")?;

    let titles: Vec<String> = match matches.get_one::<String>("only") {
        Some(title) => {
            if registry.get(title).is_none() {
                bail!(
                    "No health check titled '{}' (available: {})",
                    title,
                    registry.titles().join(", ")
                );
            }
            vec![title.clone()]
        }
        None => registry.titles().into_iter().map(String::from).collect(),
    };

    if matches.get_flag("json") {
        let results = run(&registry, &titles)?;
        println!("{}", serde_json::to_string_pretty(&results)?);

        if !all_healthy(results.values()) {
            let failing = results.values().filter(|r| !r.healthy).count();
            bail!("{} health check(s) unhealthy", failing);
        }
        return Ok(());
    }

    let reports = evaluate(&registry, &titles);
    if reports.is_empty() {
        println!("{}", "No health checks configured.".yellow());
    }
    for report in &reports {
        print_report(report);
    }
    print_summary(&reports);

    let failing = reports.iter().filter(|r| !r.healthy()).count();
    if failing > 0 {
        bail!("{} health check(s) unhealthy", failing);
    }

    Ok(())
}

fn evaluate(registry: &HealthRegistry, titles: &[String]) -> Vec<ComponentReport> {
    titles
        .iter()
        .filter_map(|title| registry.get(title))
        .map(|check| check.evaluate())
        .collect()
}

/// Registry-style output: title -> { healthy, ...details }
fn run(
    registry: &HealthRegistry,
    titles: &[String],
) -> Result<BTreeMap<String, HealthCheckResult>> {
    if titles.len() == registry.len() {
        return Ok(registry.run_all()?);
    }

    let mut results = BTreeMap::new();
    for title in titles {
        if let Some(result) = registry.run(title) {
            results.insert(title.clone(), result?);
        }
    }
    Ok(results)
}
