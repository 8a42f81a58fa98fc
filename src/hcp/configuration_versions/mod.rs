//! Configuration version module

mod api;
mod commands;
mod models;

pub use commands::run_cv_command;
pub use models::{
    ConfigurationVersion, ConfigurationVersionAttributes, CONFIGURATION_VERSION_INCLUDES,
};
