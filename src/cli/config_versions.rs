//! Configuration version subcommand arguments

use clap::{Args, Subcommand};

use super::common::{IncludeArgs, PageArgs};

#[derive(Subcommand, Debug)]
pub enum ConfigVersionsAction {
    /// List configuration versions of a workspace
    #[command(visible_alias = "ls")]
    List(CvListArgs),
}

#[derive(Args, Debug)]
pub struct CvListArgs {
    /// Workspace ID (ws-...) or name
    #[arg(short = 'w', long)]
    pub workspace: String,

    #[command(flatten)]
    pub include: IncludeArgs,

    #[command(flatten)]
    pub page: PageArgs,
}
