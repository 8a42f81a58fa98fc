//! Variable set command handlers

use log::info;

use super::models::{VariableSet, VARIABLE_SET_INCLUDES};
use super::resolver::resolve_variable_set;
use crate::cli::{Cli, VarSetListArgs, VarSetsAction};
use crate::error::Result;
use crate::hcp::query::{PagedQuery, QueryResult};
use crate::hcp::TfeClient;
use crate::output::{print_item, print_list};
use crate::ui::{create_spinner, finish_spinner};

/// Run a var-sets subcommand
pub async fn run_varset_command(
    client: &TfeClient,
    cli: &Cli,
    action: &VarSetsAction,
) -> Result<()> {
    match action {
        VarSetsAction::List(args) => {
            let result = list_variable_sets(client, args, cli.batch).await?;
            print_list(&result, cli.output)
        }
        VarSetsAction::Get(args) => {
            let spinner = create_spinner(&format!("Looking up '{}'...", args.target), cli.batch);
            let resolved = resolve_variable_set(client, &args.target, args.page_size).await;
            finish_spinner(spinner);

            let (vs, data) = resolved?;
            print_item(&vs, &data, cli.output)
        }
    }
}

pub(crate) async fn list_variable_sets(
    client: &TfeClient,
    args: &VarSetListArgs,
    batch: bool,
) -> Result<QueryResult<VariableSet>> {
    let includes = VARIABLE_SET_INCLUDES.apply(&args.include.include)?;
    let filter = args.filter.to_item_filter()?;
    let org = client.require_org()?;

    let collection = client.variable_sets(org, includes);

    let spinner = create_spinner(&format!("Fetching variable sets from '{}'...", org), batch);
    let result = PagedQuery::new(&collection, args.page.to_request())
        .fetch_filtered::<VariableSet>(filter.as_ref())
        .await;
    finish_spinner(spinner);

    let result = result?;
    info!(
        "Found {} variable sets in organization '{}'",
        result.len(),
        org
    );
    Ok(result)
}
