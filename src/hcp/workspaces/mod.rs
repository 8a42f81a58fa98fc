//! Workspace module

mod api;
mod commands;
mod models;
mod resolver;

pub use commands::run_ws_command;
pub use models::{Workspace, WorkspaceAttributes, WorkspaceQuery, WORKSPACE_INCLUDES};
pub use resolver::{
    find_workspace_by_name, parse_workspace_target, resolve_workspace_id, WorkspaceTarget,
};
