//! Variable set variable command handlers

use log::info;

use super::models::{Variable, VariableUpdate};
use crate::cli::{Cli, VarSetVarListArgs, VarSetVarUpdateArgs, VarSetVarsAction};
use crate::config::api;
use crate::error::{Result, TfcError};
use crate::hcp::query::{PagedQuery, QueryResult};
use crate::hcp::variable_sets::resolve_variable_set_id;
use crate::hcp::TfeClient;
use crate::output::{print_item, print_list};
use crate::ui::{create_spinner, finish_spinner};

/// Run a var-set-vars subcommand
pub async fn run_varset_vars_command(
    client: &TfeClient,
    cli: &Cli,
    action: &VarSetVarsAction,
) -> Result<()> {
    match action {
        VarSetVarsAction::List(args) => {
            let result = list_variables(client, args, cli.batch).await?;
            print_list(&result, cli.output)
        }
        VarSetVarsAction::Update(args) => {
            let (var, raw) = update_variable(client, args, cli.batch).await?;
            print_item(&var, &raw["data"], cli.output)
        }
    }
}

pub(crate) async fn list_variables(
    client: &TfeClient,
    args: &VarSetVarListArgs,
    batch: bool,
) -> Result<QueryResult<Variable>> {
    let filter = args.filter.to_item_filter()?;

    let spinner = create_spinner(&format!("Fetching variables of '{}'...", args.var_set), batch);
    let result: Result<QueryResult<Variable>> = async {
        let varset_id = resolve_variable_set_id(client, &args.var_set, args.page.page_size).await?;
        let collection = client.variable_set_variables(&varset_id);
        PagedQuery::new(&collection, args.page.to_request())
            .fetch_filtered::<Variable>(filter.as_ref())
            .await
    }
    .await;
    finish_spinner(spinner);

    let result = result?;
    info!("Found {} variables in '{}'", result.len(), args.var_set);
    Ok(result)
}

pub(crate) async fn update_variable(
    client: &TfeClient,
    args: &VarSetVarUpdateArgs,
    batch: bool,
) -> Result<(Variable, serde_json::Value)> {
    let update = VariableUpdate {
        key: args.key.clone(),
        value: args.value.clone(),
        description: args.description.clone(),
        hcl: args.hcl,
        sensitive: args.sensitive,
    };
    if update.is_empty() {
        return Err(TfcError::InvalidArgument(
            "nothing to update: pass at least one of --key, --value, --description, --hcl, --sensitive"
                .to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating variable '{}'...", args.var_id), batch);
    let result: Result<(Variable, serde_json::Value)> = async {
        let varset_id =
            resolve_variable_set_id(client, &args.var_set, api::DEFAULT_PAGE_SIZE).await?;
        client
            .update_variable_set_variable(&varset_id, &args.var_id, &update)
            .await
    }
    .await;
    finish_spinner(spinner);

    let updated = result?;
    info!("Updated variable '{}'", args.var_id);
    Ok(updated)
}
