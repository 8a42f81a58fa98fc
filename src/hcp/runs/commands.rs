//! Run command handlers

use log::info;

use super::models::{parse_run_variables, Run, RunCreateOptions, RUN_INCLUDES};
use crate::cli::{Cli, RunCreateArgs, RunListArgs, RunsAction};
use crate::config::api;
use crate::error::Result;
use crate::hcp::query::{PagedQuery, QueryResult};
use crate::hcp::workspaces::resolve_workspace_id;
use crate::hcp::TfeClient;
use crate::output::{print_item, print_list};
use crate::ui::{create_spinner, finish_spinner};

/// Run a runs subcommand
pub async fn run_runs_command(client: &TfeClient, cli: &Cli, action: &RunsAction) -> Result<()> {
    match action {
        RunsAction::Create(args) => {
            let (run, raw) = create_run(client, args, cli.batch).await?;
            print_item(&run, &raw["data"], cli.output)
        }
        RunsAction::List(args) => {
            let result = list_runs(client, args, cli.batch).await?;
            print_list(&result, cli.output)
        }
    }
}

fn create_options(args: &RunCreateArgs) -> Result<RunCreateOptions> {
    Ok(RunCreateOptions {
        message: args.message.clone(),
        plan_only: args.plan_only,
        is_destroy: args.is_destroy,
        refresh: args.refresh,
        refresh_only: args.refresh_only,
        allow_empty_apply: args.allow_empty_apply,
        auto_apply: args.auto_apply,
        terraform_version: args.terraform_version.clone(),
        variables: parse_run_variables(&args.vars)?,
        configuration_version: args.configuration_version.clone(),
    })
}

pub(crate) async fn create_run(
    client: &TfeClient,
    args: &RunCreateArgs,
    batch: bool,
) -> Result<(Run, serde_json::Value)> {
    let options = create_options(args)?;

    let spinner = create_spinner(&format!("Creating run on '{}'...", args.workspace), batch);
    let result: Result<(Run, serde_json::Value)> = async {
        let workspace_id =
            resolve_workspace_id(client, &args.workspace, api::DEFAULT_PAGE_SIZE).await?;
        client.create_run(&workspace_id, &options).await
    }
    .await;
    finish_spinner(spinner);

    let created = result?;
    info!("Created run {} on '{}'", created.0.id, args.workspace);
    Ok(created)
}

pub(crate) async fn list_runs(
    client: &TfeClient,
    args: &RunListArgs,
    batch: bool,
) -> Result<QueryResult<Run>> {
    let includes = RUN_INCLUDES.apply(&args.include.include)?;

    let spinner = create_spinner(&format!("Fetching runs of '{}'...", args.workspace), batch);
    let result: Result<QueryResult<Run>> = async {
        let workspace_id =
            resolve_workspace_id(client, &args.workspace, args.page.page_size).await?;
        let collection = client.workspace_runs(&workspace_id, includes);
        PagedQuery::new(&collection, args.page.to_request())
            .fetch_all::<Run>()
            .await
    }
    .await;
    finish_spinner(spinner);

    let result = result?;
    info!("Found {} runs in '{}'", result.len(), args.workspace);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{IncludeArgs, PageArgs};
    use crate::error::TfcError;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_args(workspace: &str, vars: &[&str]) -> RunCreateArgs {
        RunCreateArgs {
            workspace: workspace.to_string(),
            message: None,
            plan_only: None,
            is_destroy: None,
            refresh: None,
            refresh_only: None,
            allow_empty_apply: None,
            auto_apply: Some(true),
            terraform_version: None,
            configuration_version: None,
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_malformed_var_rejected_before_request() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = create_run(&client, &create_args("ws-1", &["novalue"]), true)
            .await
            .unwrap_err();
        assert!(matches!(err, TfcError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_run_sends_variables() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "attributes": {
                        "auto-apply": true,
                        "variables": [{"key": "env", "value": "prod"}]
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {"id": "run-1", "type": "runs", "attributes": {"status": "pending", "auto-apply": true}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (run, _) = create_run(&client, &create_args("ws-1", &["env=prod"]), true)
            .await
            .unwrap();
        assert!(run.auto_apply());
    }

    #[tokio::test]
    async fn test_list_runs_with_includes() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-1/runs"))
            .and(query_param("include", "plan,created_by"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "run-1", "type": "runs", "attributes": {"status": "applied"}}],
                "included": [{"id": "plan-1", "type": "plans"}],
                "meta": {"pagination": {"current-page": 1, "total-pages": 1}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let args = RunListArgs {
            workspace: "ws-1".to_string(),
            include: IncludeArgs {
                include: vec!["plan".to_string(), "created_by".to_string()],
            },
            page: PageArgs {
                page_num: 1,
                page_size: 100,
            },
        };

        let result = list_runs(&client, &args, true).await.unwrap();
        assert_eq!(result.items[0].status(), "applied");
        assert_eq!(result.included.len(), 1);
    }
}
