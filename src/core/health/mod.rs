//! Memory health checks.
//!
//! A [`MetricSource`] supplies raw memory figures, the [`MetricEvaluator`]
//! derives and classifies them against [`UnitTolerance`]s, and the
//! [`ReportBuilder`] aggregates the readings into a [`ComponentReport`].

pub mod aggregate;
mod check;
mod component;
pub mod derived;
mod evaluator;
pub mod registry;
mod report;
mod source;
pub mod tolerance;

pub use aggregate::aggregate;
pub use check::{HealthCheck, MemoryHealthCheck, MEMORY_CHECK_DESCRIPTION, MEMORY_CHECK_VERSION};
pub use component::{check_title, ComponentIdentity, TITLE_SEPARATOR};
pub use derived::{derive, Quantity, RawMeasurement, Unit};
pub use evaluator::MetricEvaluator;
pub use registry::{all_healthy, HealthRegistry};
pub use report::{ComponentReport, HealthCheckResult, Reading, ReportBuilder, TIME_FORMAT};
pub use source::{MetricSource, Snapshot};
pub use tolerance::{Direction, Status, Tolerance, UnitRequest, UnitTolerance};
