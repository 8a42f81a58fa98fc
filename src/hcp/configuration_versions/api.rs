//! Configuration version API endpoints

use crate::config::api;
use crate::hcp::query::{Collection, IncludeSet};
use crate::hcp::TfeClient;

use super::models::ConfigurationVersion;

impl TfeClient {
    /// Configuration versions of a workspace
    pub fn configuration_versions<'a>(
        &'a self,
        workspace_id: &str,
        includes: IncludeSet,
    ) -> Collection<'a, ConfigurationVersion> {
        Collection::new(
            self,
            format!(
                "/{}/{}/{}",
                api::WORKSPACES,
                workspace_id,
                api::CONFIGURATION_VERSIONS
            ),
            format!("configuration versions of workspace '{}'", workspace_id),
        )
        .includes(includes)
    }
}
