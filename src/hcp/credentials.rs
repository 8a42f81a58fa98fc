//! API token resolution and the Terraform credentials file

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfcError};

/// `credentials.tfrc.json` as written by `terraform login`
#[derive(Deserialize, Debug, Default)]
pub(crate) struct CredentialsFile {
    #[serde(default)]
    credentials: HashMap<String, CredentialEntry>,
}

#[derive(Deserialize, Debug)]
struct CredentialEntry {
    #[serde(default)]
    token: Option<String>,
}

impl CredentialsFile {
    /// Load the file; a missing file is `Ok(None)`, a malformed one an error
    pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            TfcError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub(crate) fn token_for(&self, host: &str) -> Option<&str> {
        self.credentials.get(host)?.token.as_deref()
    }

    /// Hosts with an entry, sorted
    pub(crate) fn hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self.credentials.keys().cloned().collect();
        hosts.sort();
        hosts
    }

    /// Platform-specific location of the credentials file
    /// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
    /// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
    pub(crate) fn default_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: CredentialsFile::default_path(),
        }
    }

    /// Use a specific credentials file instead of the platform default
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TFC_TOKEN, TFE_TOKEN, HCP_TOKEN - in order)
    /// 3. Credentials file entry for the host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.resolve_from_file()
    }

    fn resolve_from_file(&self) -> Result<String> {
        let Some(path) = self.credentials_path.as_deref() else {
            return Err(TfcError::TokenNotFound(self.token_not_found_message(None)));
        };

        let file = CredentialsFile::load(path)?.unwrap_or_default();
        match file.token_for(&self.host) {
            Some(token) => {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    path.display(),
                    self.host
                );
                Ok(token.to_string())
            }
            None => Err(TfcError::TokenNotFound(
                self.token_not_found_message(Some(path)),
            )),
        }
    }

    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Provide one with:\n\
             \n\
             1. CLI argument:      tfc-cli --token <TOKEN>\n\
             2. Environment var:   export TFC_TOKEN=<TOKEN>  (also: TFE_TOKEN, HCP_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            self.host,
            credentials::TOKEN_ENV_VARS.join(", "),
            creds_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::new("test.example.com");
        assert_eq!(resolver.resolve(Some("cli-token-123")).unwrap(), "cli-token-123");
    }

    #[test]
    fn test_token_for_host_in_file() {
        let file = credentials_file(
            r#"{
                "credentials": {
                    "app.terraform.io": {"token": "test-token-123"},
                    "tfe.example.com": {"token": "custom-token-456"}
                }
            }"#,
        );

        let resolver = TokenResolver::new("tfe.example.com").with_credentials_path(file.path());
        assert_eq!(resolver.resolve_from_file().unwrap(), "custom-token-456");
    }

    #[test]
    fn test_host_missing_from_file() {
        let file = credentials_file(r#"{"credentials": {"other.host": {"token": "x"}}}"#);
        let resolver = TokenResolver::new("app.terraform.io").with_credentials_path(file.path());

        match resolver.resolve_from_file().unwrap_err() {
            TfcError::TokenNotFound(msg) => {
                assert!(msg.contains("app.terraform.io"));
                assert!(msg.contains("tfc-cli --token"));
                assert!(msg.contains(&file.path().display().to_string()));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_token_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = TokenResolver::new("app.terraform.io")
            .with_credentials_path(dir.path().join("credentials.tfrc.json"));

        assert!(matches!(
            resolver.resolve_from_file(),
            Err(TfcError::TokenNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_credentials_error() {
        let file = credentials_file("{not json");
        let resolver = TokenResolver::new("app.terraform.io").with_credentials_path(file.path());

        assert!(matches!(
            resolver.resolve_from_file(),
            Err(TfcError::Credentials(_))
        ));
    }

    #[test]
    fn test_credentials_file_hosts_sorted() {
        let file = credentials_file(
            r#"{"credentials": {"b.example.com": {"token": "1"}, "a.example.com": {"token": "2"}}}"#,
        );
        let creds = CredentialsFile::load(file.path()).unwrap().unwrap();
        assert_eq!(creds.hosts(), vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_default_path() {
        let path = CredentialsFile::default_path().unwrap();
        assert!(path.to_string_lossy().contains("credentials.tfrc.json"));
    }
}
