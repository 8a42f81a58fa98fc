//! Variable set and variable set variable subcommand arguments

use clap::{Args, Subcommand};

use super::common::{FilterArgs, IncludeArgs, PageArgs};
use crate::config::api;

#[derive(Subcommand, Debug)]
pub enum VarSetsAction {
    /// List variable sets in the organization
    #[command(visible_alias = "ls")]
    List(VarSetListArgs),
    /// Show one variable set by ID (varset-...) or name
    Get(VarSetGetArgs),
}

#[derive(Args, Debug)]
pub struct VarSetListArgs {
    #[command(flatten)]
    pub include: IncludeArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct VarSetGetArgs {
    /// Variable set ID (varset-...) or name
    pub target: String,

    /// Items per page while searching by name
    #[arg(
        long,
        default_value_t = api::DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(0..=api::MAX_PAGE_SIZE as i64)
    )]
    pub page_size: u32,
}

#[derive(Subcommand, Debug)]
pub enum VarSetVarsAction {
    /// List the variables of a variable set
    #[command(visible_alias = "ls")]
    List(VarSetVarListArgs),
    /// Update one variable of a variable set
    Update(VarSetVarUpdateArgs),
}

#[derive(Args, Debug)]
pub struct VarSetVarListArgs {
    /// Variable set ID (varset-...) or name
    #[arg(long)]
    pub var_set: String,

    // --name and --contains compare against the variable key
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct VarSetVarUpdateArgs {
    /// Variable set ID (varset-...) or name
    #[arg(long)]
    pub var_set: String,

    /// Variable ID (var-...)
    #[arg(long)]
    pub var_id: String,

    /// New variable key
    #[arg(long)]
    pub key: Option<String>,

    /// New variable value
    #[arg(long)]
    pub value: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Parse the value as HCL
    #[arg(long)]
    pub hcl: Option<bool>,

    /// Mark the variable as sensitive
    #[arg(long)]
    pub sensitive: Option<bool>,
}

impl VarSetVarUpdateArgs {
    /// True when no field to change was given
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
            && self.value.is_none()
            && self.description.is_none()
            && self.hcl.is_none()
            && self.sensitive.is_none()
    }
}
