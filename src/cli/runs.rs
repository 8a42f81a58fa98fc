//! Run subcommand arguments

use clap::{Args, Subcommand};

use super::common::{IncludeArgs, PageArgs};

#[derive(Subcommand, Debug)]
pub enum RunsAction {
    /// Queue a new run on a workspace
    Create(RunCreateArgs),
    /// List runs of a workspace
    #[command(visible_alias = "ls")]
    List(RunListArgs),
}

#[derive(Args, Debug)]
pub struct RunCreateArgs {
    /// Workspace ID (ws-...) or name
    #[arg(short = 'w', long)]
    pub workspace: String,

    /// Run message
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Speculative plan that cannot be applied
    #[arg(long)]
    pub plan_only: Option<bool>,

    /// Plan a destroy
    #[arg(long)]
    pub is_destroy: Option<bool>,

    /// Refresh state before planning
    #[arg(long)]
    pub refresh: Option<bool>,

    /// Only refresh state
    #[arg(long)]
    pub refresh_only: Option<bool>,

    /// Allow applying a plan without changes
    #[arg(long)]
    pub allow_empty_apply: Option<bool>,

    /// Apply automatically once the plan succeeds
    #[arg(long)]
    pub auto_apply: Option<bool>,

    /// Terraform version for a plan-only run
    #[arg(long)]
    pub terraform_version: Option<String>,

    /// Configuration version ID (cv-...), defaults to the latest
    #[arg(long)]
    pub configuration_version: Option<String>,

    /// Run variables as key=value (repeatable or comma-separated)
    #[arg(long = "var", value_delimiter = ',')]
    pub vars: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RunListArgs {
    /// Workspace ID (ws-...) or name
    #[arg(short = 'w', long)]
    pub workspace: String,

    #[command(flatten)]
    pub include: IncludeArgs,

    #[command(flatten)]
    pub page: PageArgs,
}
