//! Capability that supplies raw memory figures.

use super::derived::RawMeasurement;

/// Result of a single measurement call.
///
/// The error travels with the measurement it belongs to, so two callers
/// sharing a source never see each other's failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub measurement: RawMeasurement,
    pub error: Option<String>,
}

impl Snapshot {
    pub fn ok(measurement: RawMeasurement) -> Self {
        Self {
            measurement,
            error: None,
        }
    }

    /// Sentinel measurement carrying the reason it could not be taken
    pub fn unavailable<S: Into<String>>(error: S) -> Self {
        Self {
            measurement: RawMeasurement::unavailable(),
            error: Some(error.into()),
        }
    }

    /// Error message of this call, empty when the measurement succeeded
    pub fn last_error(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

/// Source of raw memory measurements.
///
/// Implementations must not panic or return errors: failures are reported
/// through [`Snapshot::unavailable`].
pub trait MetricSource: Send + Sync {
    fn snapshot(&self) -> Snapshot;
}

impl<T: MetricSource + ?Sized> MetricSource for Box<T> {
    fn snapshot(&self) -> Snapshot {
        (**self).snapshot()
    }
}

impl<T: MetricSource + ?Sized> MetricSource for std::sync::Arc<T> {
    fn snapshot(&self) -> Snapshot {
        (**self).snapshot()
    }
}
