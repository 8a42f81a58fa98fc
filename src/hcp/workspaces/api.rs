//! Workspace API endpoints

use crate::config::api;
use crate::hcp::query::{Collection, IncludeSet};
use crate::hcp::TfeClient;

use super::models::{Workspace, WorkspaceQuery};

impl TfeClient {
    /// Workspaces of an organization, with server-side filters applied
    pub fn workspaces<'a>(
        &'a self,
        org: &str,
        query: &WorkspaceQuery<'_>,
        includes: IncludeSet,
    ) -> Collection<'a, Workspace> {
        Collection::new(
            self,
            format!("/{}/{}/{}", api::ORGANIZATIONS, org, api::WORKSPACES),
            format!("workspaces in organization '{}'", org),
        )
        .param("search[name]", query.search)
        .param("search[tags]", query.tags)
        .param("search[exclude-tags]", query.exclude_tags)
        .param("search[wildcard-name]", query.wildcard_name)
        .includes(includes)
    }
}
