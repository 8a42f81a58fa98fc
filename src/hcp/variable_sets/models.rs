//! Variable set data models

use serde::Deserialize;

use crate::hcp::models::Resource;
use crate::hcp::query::IncludeTable;
use crate::hcp::traits::TfeResource;

/// Related resources a variable set listing can embed
pub const VARIABLE_SET_INCLUDES: IncludeTable =
    IncludeTable::new("variable sets", &[("workspaces", "workspaces"), ("vars", "vars")]);

/// Variable set attributes from the API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableSetAttributes {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub global: Option<bool>,
}

/// Variable set resource
pub type VariableSet = Resource<VariableSetAttributes>;

impl TfeResource for VariableSet {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl VariableSet {
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    /// Applied to every workspace in the organization
    pub fn is_global(&self) -> bool {
        self.attributes.global.unwrap_or(false)
    }
}
