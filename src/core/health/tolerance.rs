//! Pass/warn/fail thresholds and the classification of a single value.

use serde::{Deserialize, Serialize};

use super::derived::Unit;
use crate::error::{HealthError, Result};

/// Outcome of classifying one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }

    /// Only `Fail` is reported as unhealthy to the registry.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Pass | Status::Warn)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the thresholds is favorable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Lower values are better (`pass <= warn <= fail`)
    #[default]
    LessThan,
    /// Higher values are better (`pass >= warn >= fail`)
    GreaterThan,
}

/// Validated threshold triple.
///
/// The ordering invariant is checked once in [`Tolerance::new`]; every
/// `Tolerance` in existence satisfies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pass: f64,
    warn: f64,
    fail: f64,
    direction: Direction,
}

impl Tolerance {
    pub fn new(pass: f64, warn: f64, fail: f64, direction: Direction) -> Result<Self> {
        let ordered = match direction {
            Direction::LessThan => pass <= warn && warn <= fail,
            Direction::GreaterThan => pass >= warn && warn >= fail,
        };

        // NaN thresholds fall through here since every comparison is false
        if !ordered {
            return Err(HealthError::invalid_tolerance(format!(
                "thresholds pass={}, warn={}, fail={} are not ordered for {:?}",
                pass, warn, fail, direction
            )));
        }

        Ok(Self {
            pass,
            warn,
            fail,
            direction,
        })
    }

    pub fn pass_value(&self) -> f64 {
        self.pass
    }

    pub fn warn_value(&self) -> f64 {
        self.warn
    }

    pub fn fail_value(&self) -> f64 {
        self.fail
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Classify a value. Boundaries resolve to the more favorable status.
    pub fn classify(&self, value: f64) -> Status {
        match self.direction {
            Direction::LessThan => {
                if value <= self.pass {
                    Status::Pass
                } else if value <= self.warn {
                    Status::Warn
                } else {
                    Status::Fail
                }
            }
            Direction::GreaterThan => {
                if value >= self.pass {
                    Status::Pass
                } else if value >= self.warn {
                    Status::Warn
                } else {
                    Status::Fail
                }
            }
        }
    }
}

/// A tolerance bound to the unit it is applied to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTolerance {
    unit: Unit,
    tolerance: Tolerance,
}

/// Units requested for a tolerance, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitRequest {
    Bytes,
    Percentage,
    PercentageAndBytes,
}

impl UnitRequest {
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitRequest::Bytes => &[Unit::Bytes],
            UnitRequest::Percentage => &[Unit::Percentage],
            UnitRequest::PercentageAndBytes => &[Unit::Percentage, Unit::Bytes],
        }
    }
}

impl UnitTolerance {
    /// Thresholds must be non-negative, and within 0-100 for percentages.
    pub fn new(unit: Unit, tolerance: Tolerance) -> Result<Self> {
        let values = [
            tolerance.pass_value(),
            tolerance.warn_value(),
            tolerance.fail_value(),
        ];

        if values.iter().any(|v| *v < 0.0) {
            return Err(HealthError::invalid_tolerance(
                "minimum threshold value must be >= 0",
            ));
        }

        if unit == Unit::Percentage && values.iter().any(|v| *v > 100.0) {
            return Err(HealthError::invalid_tolerance(
                "percentage thresholds must be within 0-100 %",
            ));
        }

        Ok(Self { unit, tolerance })
    }

    /// Expand a unit request into one tolerance per unit, in evaluation order.
    pub fn expand(request: UnitRequest, tolerance: Tolerance) -> Result<Vec<Self>> {
        request
            .units()
            .iter()
            .map(|unit| Self::new(*unit, tolerance))
            .collect()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    pub fn classify(&self, value: f64) -> Status {
        self.tolerance.classify(value)
    }
}
