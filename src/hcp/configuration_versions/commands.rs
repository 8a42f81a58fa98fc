//! Configuration version command handlers

use log::info;

use super::models::{ConfigurationVersion, CONFIGURATION_VERSION_INCLUDES};
use crate::cli::{Cli, ConfigVersionsAction, CvListArgs};
use crate::error::Result;
use crate::hcp::query::{PagedQuery, QueryResult};
use crate::hcp::workspaces::resolve_workspace_id;
use crate::hcp::TfeClient;
use crate::output::print_list;
use crate::ui::{create_spinner, finish_spinner};

/// Run a config-versions subcommand
pub async fn run_cv_command(
    client: &TfeClient,
    cli: &Cli,
    action: &ConfigVersionsAction,
) -> Result<()> {
    match action {
        ConfigVersionsAction::List(args) => {
            let result = list_configuration_versions(client, args, cli.batch).await?;
            print_list(&result, cli.output)
        }
    }
}

pub(crate) async fn list_configuration_versions(
    client: &TfeClient,
    args: &CvListArgs,
    batch: bool,
) -> Result<QueryResult<ConfigurationVersion>> {
    let includes = CONFIGURATION_VERSION_INCLUDES.apply(&args.include.include)?;

    let spinner = create_spinner(
        &format!("Fetching configuration versions of '{}'...", args.workspace),
        batch,
    );
    let result: Result<QueryResult<ConfigurationVersion>> = async {
        let workspace_id =
            resolve_workspace_id(client, &args.workspace, args.page.page_size).await?;
        let collection = client.configuration_versions(&workspace_id, includes);
        PagedQuery::new(&collection, args.page.to_request())
            .fetch_all::<ConfigurationVersion>()
            .await
    }
    .await;
    finish_spinner(spinner);

    let result = result?;
    info!(
        "Found {} configuration versions in '{}'",
        result.len(),
        args.workspace
    );
    Ok(result)
}
