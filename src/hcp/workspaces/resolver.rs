//! Workspace resolution by ID or name

use log::debug;

use super::models::{Workspace, WorkspaceQuery};
use crate::error::{Result, TfcError};
use crate::hcp::query::{IncludeSet, PageRequest, PagedQuery};
use crate::hcp::{TfeClient, TfeResource};

/// Target type for workspace resolution
#[derive(Debug, PartialEq, Eq)]
pub enum WorkspaceTarget {
    /// Workspace ID (ws-xxx)
    Id(String),
    /// Workspace name
    Name(String),
}

/// Parse target string to determine workspace type
pub fn parse_workspace_target(target: &str) -> WorkspaceTarget {
    if target.starts_with("ws-") {
        WorkspaceTarget::Id(target.to_string())
    } else {
        WorkspaceTarget::Name(target.to_string())
    }
}

/// Workspace ID for a `ws-` ID or a workspace name in the organization
///
/// IDs are used as given. Names are looked up page by page and the walk stops
/// at the first page holding an exact match.
pub async fn resolve_workspace_id(
    client: &TfeClient,
    target: &str,
    page_size: u32,
) -> Result<String> {
    match parse_workspace_target(target) {
        WorkspaceTarget::Id(id) => Ok(id),
        WorkspaceTarget::Name(name) => find_workspace_by_name(client, &name, page_size)
            .await?
            .map(|ws| ws.id)
            .ok_or_else(|| TfcError::NotFound {
                kind: "workspace".to_string(),
                target: name,
            }),
    }
}

/// Find a workspace by exact name in the client's organization
pub async fn find_workspace_by_name(
    client: &TfeClient,
    name: &str,
    page_size: u32,
) -> Result<Option<Workspace>> {
    let org = client.require_org()?;
    debug!("Resolving workspace '{}' in organization '{}'", name, org);

    let query = WorkspaceQuery {
        search: Some(name),
        ..Default::default()
    };
    let collection = client.workspaces(org, &query, IncludeSet::default());

    PagedQuery::new(&collection, PageRequest::new(1, page_size))
        .fetch_until_match(|ws: &Workspace| ws.name() == name)
        .await
}
