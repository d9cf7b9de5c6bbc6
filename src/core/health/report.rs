//! Report model handed to the registry, and its flattened detail form.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::aggregate::aggregate;
use super::component::{check_title, ComponentIdentity};
use super::derived::Unit;
use super::tolerance::Status;
use crate::error::{HealthError, Result};

/// Timestamp layout of `time` fields, always UTC with millisecond precision
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

fn serialize_time<S>(time: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

/// One classified (quantity, unit) measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub component_id: String,
    pub component_type: String,
    /// `None` when the quantity could not be derived from the measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<f64>,
    pub metric_unit: Unit,
    pub status: Status,
    #[serde(serialize_with = "serialize_time")]
    pub time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Health report for one component, built once per evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
    pub component_name: String,
    pub metric_name: String,
    pub version: String,
    pub description: String,
    pub status: Status,
    pub component_value: Vec<Reading>,
}

impl ComponentReport {
    pub fn title(&self) -> String {
        check_title(&self.component_name, &self.metric_name)
    }

    pub fn healthy(&self) -> bool {
        self.status.is_healthy()
    }

    /// Flatten into the registry's result shape
    pub fn to_result(&self) -> Result<HealthCheckResult> {
        let details = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                return Err(HealthError::Serialization(serde_json::Error::custom(format!(
                    "report serialized to a non-object value: {}",
                    other
                ))))
            }
        };

        Ok(HealthCheckResult {
            healthy: self.healthy(),
            details,
        })
    }
}

/// What the registry renders for one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheckResult {
    pub healthy: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Static report fields plus the component the readings belong to
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    identity: Arc<ComponentIdentity>,
    version: String,
    description: String,
}

impl ReportBuilder {
    pub fn new<V: Into<String>, D: Into<String>>(
        identity: Arc<ComponentIdentity>,
        version: V,
        description: D,
    ) -> Self {
        Self {
            identity,
            version: version.into(),
            description: description.into(),
        }
    }

    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn build(&self, metric_label: &str, readings: Vec<Reading>) -> ComponentReport {
        let status = aggregate(readings.iter().map(|r| r.status));

        ComponentReport {
            component_name: self.identity.name().to_string(),
            metric_name: metric_label.to_string(),
            version: self.version.clone(),
            description: self.description.clone(),
            status,
            component_value: readings,
        }
    }
}
