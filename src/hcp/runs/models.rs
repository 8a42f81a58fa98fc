//! Run data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfcError};
use crate::hcp::models::{RelationshipRef, Resource};
use crate::hcp::query::IncludeTable;
use crate::hcp::traits::TfeResource;

/// Related resources a run listing can embed
pub const RUN_INCLUDES: IncludeTable = IncludeTable::new(
    "runs",
    &[
        ("plan", "plan"),
        ("apply", "apply"),
        ("created_by", "created_by"),
        ("cost_estimate", "cost_estimate"),
        ("configuration_version", "configuration_version"),
        (
            "configuration_version.ingress_attributes",
            "configuration_version.ingress_attributes",
        ),
        ("workspace", "workspace"),
        ("task_stages", "task_stages"),
    ],
);

/// Run attributes from the API
#[derive(Deserialize, Debug, Clone)]
pub struct RunAttributes {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "created-at", default)]
    pub created_at: Option<String>,

    #[serde(rename = "auto-apply", default)]
    pub auto_apply: Option<bool>,

    #[serde(rename = "has-changes", default)]
    pub has_changes: Option<bool>,

    #[serde(rename = "position-in-queue", default)]
    pub position_in_queue: Option<u32>,
}

/// Run resource
pub type Run = Resource<RunAttributes>;

impl TfeResource for Run {
    fn id(&self) -> &str {
        &self.id
    }

    /// Runs are matched by message
    fn name(&self) -> &str {
        self.attributes.message.as_deref().unwrap_or("")
    }
}

impl Run {
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }

    pub fn auto_apply(&self) -> bool {
        self.attributes.auto_apply.unwrap_or(false)
    }

    pub fn has_changes(&self) -> bool {
        self.attributes.has_changes.unwrap_or(false)
    }

    pub fn position_in_queue(&self) -> u32 {
        self.attributes.position_in_queue.unwrap_or(0)
    }
}

/// Variable passed to a single run
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunVariable {
    pub key: String,
    pub value: String,
}

/// Parse `key=value` pairs; empty entries are skipped
pub fn parse_run_variables<S: AsRef<str>>(pairs: &[S]) -> Result<Vec<RunVariable>> {
    let mut variables = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let pair = pair.as_ref().trim();
        if pair.is_empty() {
            continue;
        }

        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => variables.push(RunVariable {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            _ => {
                return Err(TfcError::InvalidArgument(format!(
                    "invalid run variable '{}': expected key=value",
                    pair
                )))
            }
        }
    }

    Ok(variables)
}

/// Attributes of a new run; unset options use the workspace defaults
#[derive(Serialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RunCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<RunVariable>,
    #[serde(skip)]
    pub configuration_version: Option<String>,
}

impl RunCreateOptions {
    /// JSON:API document for `POST /runs`
    pub fn to_document(&self, workspace_id: &str) -> serde_json::Value {
        let mut relationships = serde_json::json!({
            "workspace": RelationshipRef::new("workspaces", workspace_id),
        });
        if let Some(cv) = &self.configuration_version {
            relationships["configuration-version"] =
                serde_json::json!(RelationshipRef::new("configuration-versions", cv));
        }

        serde_json::json!({
            "data": {
                "type": "runs",
                "attributes": self,
                "relationships": relationships,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_deserialization() {
        let run: Run = serde_json::from_value(serde_json::json!({
            "id": "run-1",
            "type": "runs",
            "attributes": {
                "status": "planning",
                "message": "Queued manually",
                "created-at": "2024-05-01T10:00:00.000Z",
                "auto-apply": true,
                "has-changes": false,
                "position-in-queue": 2,
                "source": "tfe-api"
            },
            "relationships": {
                "workspace": {"data": {"id": "ws-1", "type": "workspaces"}}
            }
        }))
        .unwrap();

        assert_eq!(run.status(), "planning");
        assert_eq!(run.name(), "Queued manually");
        assert!(run.auto_apply());
        assert!(!run.has_changes());
        assert_eq!(run.position_in_queue(), 2);
        assert_eq!(run.raw()["attributes"]["source"], "tfe-api");
    }

    #[test]
    fn test_parse_run_variables() {
        let vars = parse_run_variables(&["region=eu-west-1", "count=3", "", "expr=a=b"]).unwrap();
        assert_eq!(
            vars,
            vec![
                RunVariable {
                    key: "region".to_string(),
                    value: "eu-west-1".to_string()
                },
                RunVariable {
                    key: "count".to_string(),
                    value: "3".to_string()
                },
                RunVariable {
                    key: "expr".to_string(),
                    value: "a=b".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_run_variables_malformed() {
        let err = parse_run_variables(&["ok=1", "broken"]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "invalid run variable 'broken': expected key=value"
        );
        assert!(parse_run_variables(&["=value"]).is_err());
    }

    #[test]
    fn test_create_document() {
        let options = RunCreateOptions {
            message: Some("deploy".to_string()),
            auto_apply: Some(false),
            variables: vec![RunVariable {
                key: "a".to_string(),
                value: "1".to_string(),
            }],
            configuration_version: Some("cv-9".to_string()),
            ..Default::default()
        };

        assert_eq!(
            options.to_document("ws-1"),
            serde_json::json!({
                "data": {
                    "type": "runs",
                    "attributes": {
                        "message": "deploy",
                        "auto-apply": false,
                        "variables": [{"key": "a", "value": "1"}]
                    },
                    "relationships": {
                        "workspace": {"data": {"type": "workspaces", "id": "ws-1"}},
                        "configuration-version": {"data": {"type": "configuration-versions", "id": "cv-9"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_create_document_minimal() {
        let doc = RunCreateOptions::default().to_document("ws-1");
        assert_eq!(doc["data"]["attributes"], serde_json::json!({}));
        assert!(doc["data"]["relationships"]
            .get("configuration-version")
            .is_none());
    }
}
