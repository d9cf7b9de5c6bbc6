//! Raw memory figures and the quantities derived from them.

use serde::{Deserialize, Serialize};

use crate::error::{HealthError, Result};

/// Kind of memory figure being measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    #[serde(rename = "freeMemory")]
    Free,
    #[serde(rename = "totalMemory")]
    Total,
    #[serde(rename = "utilizedMemory")]
    Utilized,
}

impl Quantity {
    /// Metric name used in report titles
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Free => "freeMemory",
            Quantity::Total => "totalMemory",
            Quantity::Utilized => "utilizedMemory",
        }
    }
}

/// Representation of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Bytes,
    Percentage,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Bytes => "bytes",
            Unit::Percentage => "percentage",
        }
    }
}

/// Total and free memory in bytes.
///
/// `{-1, -1}` stands for "could not be measured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub total_bytes: i64,
    pub free_bytes: i64,
}

impl RawMeasurement {
    pub fn new(total_bytes: i64, free_bytes: i64) -> Self {
        Self {
            total_bytes,
            free_bytes,
        }
    }

    pub fn unavailable() -> Self {
        Self::new(-1, -1)
    }

    pub fn is_valid(&self) -> bool {
        self.total_bytes > 0 && self.free_bytes >= 0
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(HealthError::InvalidMeasurement {
                total_bytes: self.total_bytes,
                free_bytes: self.free_bytes,
            })
        }
    }

    pub fn utilized_bytes(&self) -> Result<i64> {
        self.ensure_valid()?;
        Ok(self.total_bytes - self.free_bytes)
    }

    pub fn free_percentage(&self) -> Result<f64> {
        self.ensure_valid()?;
        Ok(self.free_bytes as f64 / self.total_bytes as f64 * 100.0)
    }

    pub fn utilized_percentage(&self) -> Result<f64> {
        let utilized = self.utilized_bytes()?;
        Ok(utilized as f64 / self.total_bytes as f64 * 100.0)
    }
}

/// Compute `quantity` in `unit` from a raw measurement.
///
/// Raw free/total bytes are returned as-is, so the unavailable sentinel
/// surfaces as `-1`. Everything else requires a valid measurement.
pub fn derive(measurement: &RawMeasurement, quantity: Quantity, unit: Unit) -> Result<f64> {
    match (quantity, unit) {
        (Quantity::Free, Unit::Bytes) => Ok(measurement.free_bytes as f64),
        (Quantity::Total, Unit::Bytes) => Ok(measurement.total_bytes as f64),
        (Quantity::Utilized, Unit::Bytes) => Ok(measurement.utilized_bytes()? as f64),
        (Quantity::Free, Unit::Percentage) => measurement.free_percentage(),
        (Quantity::Utilized, Unit::Percentage) => measurement.utilized_percentage(),
        (Quantity::Total, Unit::Percentage) => {
            measurement.ensure_valid()?;
            Ok(100.0)
        }
    }
}
