//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use std::path::{Path, PathBuf};

use super::credentials::CredentialsFile;
use crate::config::{defaults, host as host_config};
use crate::error::{Result, TfcError};

/// Host resolution with fallback logic
pub struct HostResolver {
    credentials_path: Option<PathBuf>,
    batch_mode: bool,
}

impl HostResolver {
    /// `batch_mode` turns the multi-host prompt into an error
    pub fn new(batch_mode: bool) -> Self {
        Self {
            credentials_path: CredentialsFile::default_path(),
            batch_mode,
        }
    }

    /// Use a specific credentials file instead of the platform default
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (TFE_HOSTNAME)
    /// 3. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    /// 4. app.terraform.io
    pub fn resolve(&self, cli_host: Option<&str>) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return Ok(host);
            }
        }

        debug!(
            "No host in CLI or {}, trying credentials file",
            host_config::ENV_VAR
        );
        self.resolve_from_file()
    }

    fn resolve_from_file(&self) -> Result<String> {
        let Some(path) = self.credentials_path.as_deref() else {
            return Ok(Self::default_host());
        };

        let hosts = CredentialsFile::load(path)?
            .map(|file| file.hosts())
            .unwrap_or_default();

        match hosts.as_slice() {
            [] => Ok(Self::default_host()),
            [host] => {
                debug!(
                    "Using single host from credentials file {}: {}",
                    path.display(),
                    host
                );
                Ok(host.clone())
            }
            _ if self.batch_mode => Err(TfcError::HostNotFound(Self::ambiguous_host_message(
                path, &hosts,
            ))),
            _ => Self::interactive_host_selection(&hosts, path),
        }
    }

    fn default_host() -> String {
        debug!("No host configured, using {}", defaults::HOST);
        defaults::HOST.to_string()
    }

    /// Prompt user to select a host interactively
    fn interactive_host_selection(hosts: &[String], credentials_path: &Path) -> Result<String> {
        eprintln!("\nMultiple hosts found in {}:", credentials_path.display());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a host")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| TfcError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    fn ambiguous_host_message(credentials_path: &Path, hosts: &[String]) -> String {
        format!(
            "Several hosts found in {} ({}) and --batch prevents choosing one.\n\
             Pick a host with:\n\
             \n\
             1. CLI argument:      tfc-cli --host <HOST>\n\
             2. Environment var:   export {}=<HOST>\n",
            credentials_path.display(),
            hosts.join(", "),
            host_config::ENV_VAR
        )
    }
}
