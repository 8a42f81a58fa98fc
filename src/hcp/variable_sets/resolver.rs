//! Variable set resolution by ID or name

use log::debug;

use super::models::VariableSet;
use crate::error::{Result, TfcError};
use crate::hcp::query::{IncludeSet, PageRequest, PagedQuery};
use crate::hcp::{TfeClient, TfeResource};

const ID_PREFIX: &str = "varset-";

fn not_found(target: &str) -> TfcError {
    TfcError::NotFound {
        kind: "variable set".to_string(),
        target: target.to_string(),
    }
}

/// Variable set plus the document structured output prints
///
/// IDs are read directly. Names are searched in the organization and the
/// walk stops at the first page holding an exact match.
pub async fn resolve_variable_set(
    client: &TfeClient,
    target: &str,
    page_size: u32,
) -> Result<(VariableSet, serde_json::Value)> {
    if target.starts_with(ID_PREFIX) {
        let (vs, raw) = client
            .get_variable_set_by_id(target)
            .await?
            .ok_or_else(|| not_found(target))?;
        return Ok((vs, raw["data"].clone()));
    }

    let vs = find_variable_set_by_name(client, target, page_size)
        .await?
        .ok_or_else(|| not_found(target))?;
    let data = vs.raw().clone();
    Ok((vs, data))
}

/// Variable set ID for a `varset-` ID or a name in the organization
pub async fn resolve_variable_set_id(
    client: &TfeClient,
    target: &str,
    page_size: u32,
) -> Result<String> {
    if target.starts_with(ID_PREFIX) {
        return Ok(target.to_string());
    }

    find_variable_set_by_name(client, target, page_size)
        .await?
        .map(|vs| vs.id)
        .ok_or_else(|| not_found(target))
}

/// Find a variable set by exact name in the client's organization
pub async fn find_variable_set_by_name(
    client: &TfeClient,
    name: &str,
    page_size: u32,
) -> Result<Option<VariableSet>> {
    let org = client.require_org()?;
    debug!("Resolving variable set '{}' in organization '{}'", name, org);

    let collection = client.variable_sets(org, IncludeSet::default());
    PagedQuery::new(&collection, PageRequest::new(1, page_size))
        .fetch_until_match(|vs: &VariableSet| vs.name() == name)
        .await
}
