//! Minimal registry keyed by check title.

use std::collections::BTreeMap;
use std::fmt;

use super::check::HealthCheck;
use super::report::HealthCheckResult;
use crate::error::{HealthError, Result};

#[derive(Default)]
pub struct HealthRegistry {
    checks: BTreeMap<String, Box<dyn HealthCheck>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, check: Box<dyn HealthCheck>) -> Result<()> {
        let title = check.title();
        if self.checks.contains_key(&title) {
            return Err(HealthError::invalid_configuration(format!(
                "a health check titled '{}' is already registered",
                title
            )));
        }

        log::info!("Registered health check '{}'", title);
        self.checks.insert(title, check);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.checks.keys().map(String::as_str).collect()
    }

    pub fn get(&self, title: &str) -> Option<&dyn HealthCheck> {
        self.checks.get(title).map(|check| check.as_ref())
    }

    /// Run a single check by title
    pub fn run(&self, title: &str) -> Option<Result<HealthCheckResult>> {
        self.get(title).map(|check| check.check())
    }

    /// Run every check once, in title order
    pub fn run_all(&self) -> Result<BTreeMap<String, HealthCheckResult>> {
        self.checks
            .iter()
            .map(|(title, check)| Ok((title.clone(), check.check()?)))
            .collect()
    }
}

impl fmt::Debug for HealthRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthRegistry")
            .field("checks", &self.titles())
            .finish()
    }
}

/// True when every result is healthy (vacuously true for none)
pub fn all_healthy<'a, I>(results: I) -> bool
where
    I: IntoIterator<Item = &'a HealthCheckResult>,
{
    results.into_iter().all(|result| result.healthy)
}
