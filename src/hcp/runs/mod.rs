//! Run module

mod api;
mod commands;
mod models;

pub use commands::run_runs_command;
pub use models::{
    parse_run_variables, Run, RunAttributes, RunCreateOptions, RunVariable, RUN_INCLUDES,
};
