//! Workspace data models

use serde::Deserialize;

use crate::hcp::models::Resource;
use crate::hcp::query::IncludeTable;
use crate::hcp::traits::TfeResource;

/// Related resources a workspace listing can embed
pub const WORKSPACE_INCLUDES: IncludeTable = IncludeTable::new(
    "workspaces",
    &[
        ("organization", "organization"),
        (
            "current_configuration_version",
            "current_configuration_version",
        ),
        (
            "current_configuration_version.ingress_attributes",
            "current_configuration_version.ingress_attributes",
        ),
        ("current_run", "current_run"),
        ("current_run.plan", "current_run.plan"),
        (
            "current_run.configuration_version",
            "current_run.configuration_version",
        ),
        (
            "current_run.configuration_version.ingress_attributes",
            "current_run.configuration_version.ingress_attributes",
        ),
        ("locked_by", "locked_by"),
        ("readme", "readme"),
        ("outputs", "outputs"),
        ("current-state-version", "current_state_version"),
    ],
);

/// Server-side filters for listing workspaces
#[derive(Default, Debug)]
pub struct WorkspaceQuery<'a> {
    /// Fuzzy name search (`search[name]`)
    pub search: Option<&'a str>,
    /// Comma-separated tag names that must be present (`search[tags]`)
    pub tags: Option<&'a str>,
    /// Comma-separated tag names that must be absent (`search[exclude-tags]`)
    pub exclude_tags: Option<&'a str>,
    /// Wildcard name match, e.g. `*-prod` (`search[wildcard-name]`)
    pub wildcard_name: Option<&'a str>,
}

/// Workspace attributes from the API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "tag-names", default)]
    pub tag_names: Option<Vec<String>>,

    #[serde(rename = "execution-mode", default)]
    pub execution_mode: Option<String>,

    #[serde(default)]
    pub locked: Option<bool>,

    #[serde(rename = "terraform-version", default)]
    pub terraform_version: Option<String>,
}

/// Workspace resource
pub type Workspace = Resource<WorkspaceAttributes>;

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Tag names, empty when the server sent none
    pub fn tag_names(&self) -> &[String] {
        self.attributes.tag_names.as_deref().unwrap_or_default()
    }

    /// Get execution mode, defaulting to "unknown" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .execution_mode
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Check if workspace is locked
    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }
}
