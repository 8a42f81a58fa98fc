//! Variables of a variable set

mod api;
mod commands;
mod models;

pub use commands::run_varset_vars_command;
pub use models::{Variable, VariableAttributes, VariableUpdate};
