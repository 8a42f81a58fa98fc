//! CLI argument parsing

mod common;
mod config_versions;
mod runs;
mod variable_sets;
mod workspaces;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{FilterArgs, IncludeArgs, OutputFormat, PageArgs};
pub use config_versions::{ConfigVersionsAction, CvListArgs};
pub use runs::{RunCreateArgs, RunListArgs, RunsAction};
pub use variable_sets::{
    VarSetGetArgs, VarSetListArgs, VarSetVarListArgs, VarSetVarUpdateArgs, VarSetVarsAction,
    VarSetsAction,
};
pub use workspaces::{WorkspacesAction, WsListArgs};

/// HCP Terraform / Terraform Cloud CLI
#[derive(Parser, Debug)]
#[command(name = "tfc-cli")]
#[command(version)]
#[command(about = "Query and drive HCP Terraform from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Organization name
    #[arg(long, global = true, env = "TFC_ORG")]
    pub org: Option<String>,

    /// API host (default: TFE_HOSTNAME, credentials file, app.terraform.io)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners or interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Workspaces
    #[command(visible_alias = "ws")]
    Workspaces {
        #[command(subcommand)]
        action: WorkspacesAction,
    },
    /// Configuration versions
    #[command(name = "config-versions", visible_alias = "cv")]
    ConfigVersions {
        #[command(subcommand)]
        action: ConfigVersionsAction,
    },
    /// Variable sets
    #[command(name = "var-sets", visible_alias = "vs")]
    VarSets {
        #[command(subcommand)]
        action: VarSetsAction,
    },
    /// Variables of a variable set
    #[command(name = "var-set-vars", visible_alias = "vsv")]
    VarSetVars {
        #[command(subcommand)]
        action: VarSetVarsAction,
    },
    /// Runs
    Runs {
        #[command(subcommand)]
        action: RunsAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::api;

    #[test]
    fn test_cli_global_defaults() {
        let cli = Cli::parse_from(["tfc-cli", "workspaces", "list"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(!cli.batch);
        assert!(cli.token.is_none());
        assert!(cli.host.is_none());
    }

    #[test]
    fn test_ws_list_args() {
        let cli = Cli::parse_from([
            "tfc-cli",
            "ws",
            "list",
            "--search",
            "app",
            "--tags",
            "prod,eu",
            "--include",
            "organization,current_run",
            "--page-num",
            "2",
            "--page-size",
            "25",
        ]);

        let Command::Workspaces {
            action: WorkspacesAction::List(args),
        } = cli.command
        else {
            panic!("Expected workspaces list");
        };
        assert_eq!(args.search.as_deref(), Some("app"));
        assert_eq!(args.tags.as_deref(), Some("prod,eu"));
        assert_eq!(args.include.include, vec!["organization", "current_run"]);
        assert_eq!(args.page.page_num, 2);
        assert_eq!(args.page.page_size, 25);
    }

    #[test]
    fn test_paging_defaults() {
        let cli = Cli::parse_from(["tfc-cli", "vs", "list"]);
        let Command::VarSets {
            action: VarSetsAction::List(args),
        } = cli.command
        else {
            panic!("Expected var-sets list");
        };
        assert_eq!(args.page.page_num, 1);
        assert_eq!(args.page.page_size, api::DEFAULT_PAGE_SIZE);
        assert!(args.include.include.is_empty());
    }

    #[test]
    fn test_page_size_above_limit_rejected() {
        let result = Cli::try_parse_from(["tfc-cli", "ws", "list", "--page-size", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tfc-cli", "cv", "list", "-w", "app", "--org", "acme", "-o", "table", "--batch",
        ]);
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(cli.batch);
    }

    #[test]
    fn test_runs_create_vars() {
        let cli = Cli::parse_from([
            "tfc-cli",
            "runs",
            "create",
            "--workspace",
            "ws-1",
            "--var",
            "a=1,b=2",
            "--var",
            "c=3",
            "--auto-apply",
            "true",
        ]);
        let Command::Runs {
            action: RunsAction::Create(args),
        } = cli.command
        else {
            panic!("Expected runs create");
        };
        assert_eq!(args.vars, vec!["a=1", "b=2", "c=3"]);
        assert_eq!(args.auto_apply, Some(true));
        assert!(args.plan_only.is_none());
    }

    #[test]
    fn test_var_set_vars_update_args() {
        let cli = Cli::parse_from([
            "tfc-cli",
            "vsv",
            "update",
            "--var-set",
            "shared",
            "--var-id",
            "var-1",
            "--value",
            "new",
        ]);
        let Command::VarSetVars {
            action: VarSetVarsAction::Update(args),
        } = cli.command
        else {
            panic!("Expected var-set-vars update");
        };
        assert_eq!(args.var_id, "var-1");
        assert_eq!(args.value.as_deref(), Some("new"));
        assert!(!args.is_empty());
    }

    #[test]
    fn test_var_sets_get_positional() {
        let cli = Cli::parse_from(["tfc-cli", "var-sets", "get", "shared-vars"]);
        let Command::VarSets {
            action: VarSetsAction::Get(args),
        } = cli.command
        else {
            panic!("Expected var-sets get");
        };
        assert_eq!(args.target, "shared-vars");
    }

    #[test]
    fn test_var_sets_get_page_size_limit() {
        let result =
            Cli::try_parse_from(["tfc-cli", "var-sets", "get", "shared", "--page-size", "500"]);
        assert!(result.is_err());

        let cli =
            Cli::parse_from(["tfc-cli", "var-sets", "get", "shared", "--page-size", "100"]);
        let Command::VarSets {
            action: VarSetsAction::Get(args),
        } = cli.command
        else {
            panic!("Expected var-sets get");
        };
        assert_eq!(args.page_size, 100);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["tfc-cli"]).is_err());
    }
}
