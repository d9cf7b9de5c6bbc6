//! Turns one memory snapshot into classified readings.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::component::ComponentIdentity;
use super::derived::{derive, Quantity};
use super::report::Reading;
use super::source::{MetricSource, Snapshot};
use super::tolerance::{Status, UnitTolerance};
use crate::error::{HealthError, Result};

/// Evaluates every (quantity, unit tolerance) pair against a metric source
pub struct MetricEvaluator<S> {
    identity: Arc<ComponentIdentity>,
    quantities: Vec<Quantity>,
    tolerances: Vec<UnitTolerance>,
    source: S,
}

impl<S: MetricSource> MetricEvaluator<S> {
    pub fn new(
        identity: Arc<ComponentIdentity>,
        quantities: Vec<Quantity>,
        tolerances: Vec<UnitTolerance>,
        source: S,
    ) -> Result<Self> {
        if quantities.is_empty() {
            return Err(HealthError::invalid_configuration(
                "at least one memory quantity must be evaluated",
            ));
        }
        if tolerances.is_empty() {
            return Err(HealthError::invalid_configuration(
                "at least one unit tolerance must be configured",
            ));
        }

        Ok(Self {
            identity,
            quantities,
            tolerances,
            source,
        })
    }

    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    pub fn tolerances(&self) -> &[UnitTolerance] {
        &self.tolerances
    }

    /// Name of the single evaluated quantity, empty when there are several
    pub fn metric_label(&self) -> &'static str {
        match self.quantities.as_slice() {
            [only] => only.name(),
            _ => "",
        }
    }

    /// Take one snapshot and classify every pair against it
    pub fn evaluate(&self) -> Vec<Reading> {
        let snapshot = self.source.snapshot();
        if let Some(error) = &snapshot.error {
            log::warn!(
                "Memory snapshot for '{}' unavailable: {}",
                self.identity.name(),
                error
            );
        }
        self.evaluate_snapshot(&snapshot, Utc::now())
    }

    /// Readings come out quantities-outer, tolerances-inner, in caller order.
    pub fn evaluate_snapshot(&self, snapshot: &Snapshot, time: DateTime<Utc>) -> Vec<Reading> {
        let mut readings = Vec::with_capacity(self.quantities.len() * self.tolerances.len());

        for quantity in &self.quantities {
            for tolerance in &self.tolerances {
                readings.push(self.read(snapshot, *quantity, tolerance, time));
            }
        }

        log::debug!(
            "Evaluated {} reading(s) for '{}' (total={}, free={})",
            readings.len(),
            self.identity.name(),
            snapshot.measurement.total_bytes,
            snapshot.measurement.free_bytes
        );

        readings
    }

    fn read(
        &self,
        snapshot: &Snapshot,
        quantity: Quantity,
        tolerance: &UnitTolerance,
        time: DateTime<Utc>,
    ) -> Reading {
        let unit = tolerance.unit();
        let (metric_value, status, output) = match derive(&snapshot.measurement, quantity, unit) {
            // a failed read still reports the raw sentinel, but never as healthy
            Ok(value) => match &snapshot.error {
                Some(error) => (Some(value), Status::Fail, Some(error.clone())),
                None => (Some(value), tolerance.classify(value), None),
            },
            Err(e) => {
                log::warn!(
                    "Cannot derive {} in {} for '{}': {}",
                    quantity.name(),
                    unit.as_str(),
                    self.identity.name(),
                    e
                );
                let output = snapshot.error.clone().unwrap_or_else(|| e.to_string());
                (None, Status::Fail, Some(output))
            }
        };

        Reading {
            component_id: self.identity.id().to_string(),
            component_type: self.identity.component_type().to_string(),
            metric_value,
            metric_unit: unit,
            status,
            time,
            output,
            link: self.identity.link().map(str::to_string),
        }
    }
}
