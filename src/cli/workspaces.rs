//! Workspace subcommand arguments

use clap::{Args, Subcommand};

use super::common::{FilterArgs, IncludeArgs, PageArgs};

#[derive(Subcommand, Debug)]
pub enum WorkspacesAction {
    /// List workspaces in the organization
    #[command(visible_alias = "ls")]
    List(WsListArgs),
}

#[derive(Args, Debug)]
pub struct WsListArgs {
    /// Fuzzy search on workspace name (server side)
    #[arg(long)]
    pub search: Option<String>,

    /// Only workspaces carrying these tags (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,

    /// Skip workspaces carrying these tags (comma-separated)
    #[arg(long)]
    pub exclude_tags: Option<String>,

    /// Wildcard name match, e.g. "*-prod"
    #[arg(long)]
    pub wildcard_name: Option<String>,

    #[command(flatten)]
    pub include: IncludeArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}
