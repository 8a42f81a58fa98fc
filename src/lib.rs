//! tfc-cli - Query and drive HCP Terraform from the command line
//!
//! Lists workspaces, configuration versions, variable sets and their
//! variables, lists and queues runs. Every list command walks the API's
//! pages one at a time from the requested start page to the last page.
//!
//! # Example
//!
//! ```bash
//! # List workspaces tagged "prod"
//! tfc-cli --org my-org ws list --tags prod
//!
//! # Embed the current run of each workspace
//! tfc-cli --org my-org ws list --include current_run -o json
//!
//! # Show a variable set by name
//! tfc-cli --org my-org var-sets get shared-vars -o table
//!
//! # Queue a run with variables
//! tfc-cli --org my-org runs create -w app-prod --var region=eu-west-1
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

use log::debug;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Result, TfcError};
pub use hcp::{
    run_cv_command, run_runs_command, run_varset_command, run_varset_vars_command,
    run_ws_command, ConfigurationVersion, HostResolver, Run, TfeClient, TfeResource,
    TokenResolver, Variable, VariableSet, Workspace,
};

/// Resolve host, token and organization, then run the selected command
pub async fn run(cli: &Cli) -> Result<()> {
    let host = HostResolver::new(cli.batch).resolve(cli.host.as_deref())?;
    let token = TokenResolver::new(&host).resolve(cli.token.as_deref())?;

    let mut client = TfeClient::new(token, host);
    client.set_org(cli.org.clone());
    debug!("Organization: {:?}", cli.org);

    match &cli.command {
        Command::Workspaces { action } => run_ws_command(&client, cli, action).await,
        Command::ConfigVersions { action } => run_cv_command(&client, cli, action).await,
        Command::VarSets { action } => run_varset_command(&client, cli, action).await,
        Command::VarSetVars { action } => run_varset_vars_command(&client, cli, action).await,
        Command::Runs { action } => run_runs_command(&client, cli, action).await,
    }
}
