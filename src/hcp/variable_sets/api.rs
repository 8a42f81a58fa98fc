//! Variable set API endpoints

use crate::config::api;
use crate::error::Result;
use crate::hcp::query::{Collection, IncludeSet};
use crate::hcp::TfeClient;

use super::models::VariableSet;

impl TfeClient {
    /// Variable sets of an organization
    pub fn variable_sets<'a>(
        &'a self,
        org: &str,
        includes: IncludeSet,
    ) -> Collection<'a, VariableSet> {
        Collection::new(
            self,
            format!("/{}/{}/{}", api::ORGANIZATIONS, org, api::VARIABLE_SETS),
            format!("variable sets in organization '{}'", org),
        )
        .includes(includes)
    }

    /// Get a variable set by ID; `None` when it does not exist
    pub async fn get_variable_set_by_id(
        &self,
        varset_id: &str,
    ) -> Result<Option<(VariableSet, serde_json::Value)>> {
        self.fetch_resource_by_path(
            &format!("/{}/{}", api::VARIABLE_SETS, varset_id),
            "variable set",
        )
        .await
    }
}
