//! Workspace command handlers

use log::info;

use super::models::{Workspace, WorkspaceQuery, WORKSPACE_INCLUDES};
use crate::cli::{Cli, WorkspacesAction, WsListArgs};
use crate::error::Result;
use crate::hcp::query::{PagedQuery, QueryResult};
use crate::hcp::TfeClient;
use crate::output::print_list;
use crate::ui::{create_spinner, finish_spinner};

/// Run a workspaces subcommand
pub async fn run_ws_command(
    client: &TfeClient,
    cli: &Cli,
    action: &WorkspacesAction,
) -> Result<()> {
    match action {
        WorkspacesAction::List(args) => {
            let result = list_workspaces(client, args, cli.batch).await?;
            print_list(&result, cli.output)
        }
    }
}

/// Validate the flags, then walk every page of matching workspaces
pub(crate) async fn list_workspaces(
    client: &TfeClient,
    args: &WsListArgs,
    batch: bool,
) -> Result<QueryResult<Workspace>> {
    let includes = WORKSPACE_INCLUDES.apply(&args.include.include)?;
    let filter = args.filter.to_item_filter()?;
    let org = client.require_org()?;

    let query = WorkspaceQuery {
        search: args.search.as_deref(),
        tags: args.tags.as_deref(),
        exclude_tags: args.exclude_tags.as_deref(),
        wildcard_name: args.wildcard_name.as_deref(),
    };
    let collection = client.workspaces(org, &query, includes);

    let spinner = create_spinner(&format!("Fetching workspaces from '{}'...", org), batch);
    let result = PagedQuery::new(&collection, args.page.to_request())
        .fetch_filtered::<Workspace>(filter.as_ref())
        .await;
    finish_spinner(spinner);

    let result = result?;
    info!(
        "Found {} workspaces in organization '{}'",
        result.len(),
        org
    );
    Ok(result)
}
