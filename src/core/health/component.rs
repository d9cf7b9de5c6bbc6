use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{HealthError, Result};

/// Separator between component name and metric name in check titles
pub const TITLE_SEPARATOR: char = ':';

/// Identity of the component a report describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentIdentity {
    id: String,
    name: String,
    #[serde(rename = "type")]
    component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl ComponentIdentity {
    pub fn new<I, N, T>(id: I, name: N, component_type: T) -> Result<Self>
    where
        I: Into<String>,
        N: Into<String>,
        T: Into<String>,
    {
        let name = name.into();
        if name.contains(TITLE_SEPARATOR) {
            return Err(HealthError::InvalidComponentName(name));
        }

        Ok(Self {
            id: id.into(),
            name,
            component_type: component_type.into(),
            link: None,
        })
    }

    /// Attach a link shown with every reading (e.g. a runbook or dashboard)
    pub fn with_link(mut self, link: &str) -> Result<Self> {
        let parsed = Url::parse(link).map_err(|e| {
            HealthError::invalid_configuration(format!("invalid component link '{}': {}", link, e))
        })?;
        self.link = Some(parsed.to_string());
        Ok(self)
    }

    /// Re-run construction checks on a deserialized identity
    pub fn validated(self) -> Result<Self> {
        let link = self.link.clone();
        let identity = Self::new(self.id, self.name, self.component_type)?;
        match link {
            Some(link) => identity.with_link(&link),
            None => Ok(identity),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn title(&self, metric_label: &str) -> String {
        check_title(&self.name, metric_label)
    }
}

/// `name` alone, or `name:metric` when a metric label is set
pub fn check_title(name: &str, metric_label: &str) -> String {
    if metric_label.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", name, TITLE_SEPARATOR, metric_label)
    }
}
