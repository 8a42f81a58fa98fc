//! Variable set module

mod api;
mod commands;
mod models;
mod resolver;

pub use commands::run_varset_command;
pub use models::{VariableSet, VariableSetAttributes, VARIABLE_SET_INCLUDES};
pub use resolver::{find_variable_set_by_name, resolve_variable_set, resolve_variable_set_id};
