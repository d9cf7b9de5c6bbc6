use std::sync::Arc;

use super::component::ComponentIdentity;
use super::derived::Quantity;
use super::evaluator::MetricEvaluator;
use super::report::{ComponentReport, HealthCheckResult, ReportBuilder};
use super::source::MetricSource;
use super::tolerance::UnitTolerance;
use crate::error::Result;

pub const MEMORY_CHECK_VERSION: &str = "1.0";
pub const MEMORY_CHECK_DESCRIPTION: &str = "This is a metric that is used to track memory";

/// A check the registry can poll
pub trait HealthCheck: Send + Sync {
    /// Registry lookup key: `component` or `component:metric`
    fn title(&self) -> String;

    /// Run one evaluation. Never fails; degraded measurements show up as
    /// failing readings.
    fn evaluate(&self) -> ComponentReport;

    fn check(&self) -> Result<HealthCheckResult> {
        self.evaluate().to_result()
    }
}

/// Memory health check over any [`MetricSource`]
pub struct MemoryHealthCheck<S> {
    evaluator: MetricEvaluator<S>,
    report: ReportBuilder,
}

impl<S: MetricSource> MemoryHealthCheck<S> {
    pub fn new(
        identity: ComponentIdentity,
        quantities: Vec<Quantity>,
        tolerances: Vec<UnitTolerance>,
        source: S,
    ) -> Result<Self> {
        let identity = Arc::new(identity);
        let evaluator = MetricEvaluator::new(identity.clone(), quantities, tolerances, source)?;
        let report = ReportBuilder::new(identity, MEMORY_CHECK_VERSION, MEMORY_CHECK_DESCRIPTION);

        Ok(Self { evaluator, report })
    }

    pub fn evaluator(&self) -> &MetricEvaluator<S> {
        &self.evaluator
    }
}

impl<S: MetricSource> HealthCheck for MemoryHealthCheck<S> {
    fn title(&self) -> String {
        self.report.identity().title(self.evaluator.metric_label())
    }

    fn evaluate(&self) -> ComponentReport {
        let readings = self.evaluator.evaluate();
        self.report.build(self.evaluator.metric_label(), readings)
    }
}
