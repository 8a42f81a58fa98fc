//! Variable set variable API endpoints

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::query::Collection;
use crate::hcp::TfeClient;

use super::models::{Variable, VariableUpdate};

impl TfeClient {
    /// Variables of a variable set
    pub fn variable_set_variables<'a>(&'a self, varset_id: &str) -> Collection<'a, Variable> {
        Collection::new(
            self,
            format!(
                "/{}/{}/{}",
                api::VARIABLE_SETS,
                varset_id,
                api::RELATIONSHIP_VARS
            ),
            format!("variables of variable set '{}'", varset_id),
        )
    }

    /// Change the given fields of one variable
    pub async fn update_variable_set_variable(
        &self,
        varset_id: &str,
        variable_id: &str,
        update: &VariableUpdate,
    ) -> Result<(Variable, serde_json::Value)> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            api::VARIABLE_SETS,
            varset_id,
            api::RELATIONSHIP_VARS,
            variable_id
        );
        debug!("PATCH {}", url);

        self.send_document(self.patch(&url), &update.to_document(variable_id), "variable")
            .await
    }
}
