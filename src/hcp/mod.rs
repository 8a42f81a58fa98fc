//! HCP Terraform API client module
//!
//! The client, credential and host resolution, the paginated query core and
//! one submodule per resource type.

mod client;
pub mod configuration_versions;
mod credentials;
mod host;
pub mod models;
pub mod query;
pub mod runs;
pub mod traits;
pub mod variable_set_variables;
pub mod variable_sets;
pub mod workspaces;

pub use client::TfeClient;
pub use configuration_versions::{run_cv_command, ConfigurationVersion};
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use runs::{run_runs_command, Run};
pub use traits::{PaginatedResponse, TfeResource};
pub use variable_set_variables::{run_varset_vars_command, Variable};
pub use variable_sets::{run_varset_command, VariableSet};
pub use workspaces::{run_ws_command, Workspace};
