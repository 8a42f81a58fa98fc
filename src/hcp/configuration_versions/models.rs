//! Configuration version data models

use serde::Deserialize;

use crate::hcp::models::Resource;
use crate::hcp::query::IncludeTable;
use crate::hcp::traits::TfeResource;

/// Related resources a configuration version listing can embed
pub const CONFIGURATION_VERSION_INCLUDES: IncludeTable = IncludeTable::new(
    "configuration versions",
    &[("ingress_attributes", "ingress_attributes"), ("run", "run")],
);

/// Configuration version attributes
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigurationVersionAttributes {
    /// Status: pending, fetching, uploaded, archived, errored
    #[serde(default)]
    pub status: String,

    /// Source of the configuration (e.g., "tfe-api", "gitlab", "github")
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub speculative: Option<bool>,

    #[serde(rename = "error-message", default)]
    pub error_message: Option<String>,
}

/// Configuration version resource
pub type ConfigurationVersion = Resource<ConfigurationVersionAttributes>;

impl TfeResource for ConfigurationVersion {
    fn id(&self) -> &str {
        &self.id
    }

    // no name attribute
    fn name(&self) -> &str {
        &self.id
    }
}

impl ConfigurationVersion {
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    pub fn source(&self) -> &str {
        self.attributes.source.as_deref().unwrap_or("")
    }

    pub fn is_speculative(&self) -> bool {
        self.attributes.speculative.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_version_deserialization() {
        let cv: ConfigurationVersion = serde_json::from_value(serde_json::json!({
            "id": "cv-1",
            "type": "configuration-versions",
            "attributes": {
                "status": "uploaded",
                "source": "github",
                "speculative": false,
                "auto-queue-runs": true
            },
            "links": {"download": "/api/v2/configuration-versions/cv-1/download"}
        }))
        .unwrap();

        assert_eq!(cv.name(), "cv-1");
        assert_eq!(cv.status(), "uploaded");
        assert_eq!(cv.source(), "github");
        assert!(!cv.is_speculative());
        assert_eq!(cv.raw()["attributes"]["auto-queue-runs"], true);
    }

    #[test]
    fn test_includes() {
        assert_eq!(
            CONFIGURATION_VERSION_INCLUDES.lookup("ingress_attributes"),
            Some("ingress_attributes")
        );
        assert_eq!(CONFIGURATION_VERSION_INCLUDES.lookup("workspace"), None);
    }
}
