//! Variable set variable data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::Resource;
use crate::hcp::traits::TfeResource;

/// Variable attributes from the API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,

    /// `null` for sensitive variables
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// "terraform" or "env"
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub hcl: Option<bool>,

    #[serde(default)]
    pub sensitive: Option<bool>,
}

/// Variable belonging to a variable set
pub type Variable = Resource<VariableAttributes>;

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    /// Variables are named by their key
    fn name(&self) -> &str {
        &self.attributes.key
    }
}

impl Variable {
    pub fn is_sensitive(&self) -> bool {
        self.attributes.sensitive.unwrap_or(false)
    }

    pub fn is_hcl(&self) -> bool {
        self.attributes.hcl.unwrap_or(false)
    }

    pub fn category(&self) -> &str {
        self.attributes.category.as_deref().unwrap_or("")
    }

    /// Value for display; sensitive values are masked
    pub fn display_value(&self) -> &str {
        if self.is_sensitive() {
            "(sensitive)"
        } else {
            self.attributes.value.as_deref().unwrap_or("")
        }
    }
}

/// Fields to change on a variable; unset fields are left alone
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

impl VariableUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// JSON:API document for the PATCH request
    pub fn to_document(&self, variable_id: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "id": variable_id,
                "type": "vars",
                "attributes": self,
            }
        })
    }
}
