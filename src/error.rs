use std::fmt;

/// Error type for every tfc-cli operation
#[derive(Debug)]
pub enum TfcError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A page of a paginated walk failed; carries the page that was requested
    Page { page: u32, source: Box<TfcError> },
    /// Include token is not in the resource's allow-list
    UnrecognizedInclude {
        resource: String,
        token: String,
        accepted: Vec<String>,
    },
    /// Two mutually exclusive filter flags were set
    ConflictingFilters { first: String, second: String },
    /// Invalid command-line input detected before any request was sent
    InvalidArgument(String),
    /// Name or ID resolution found nothing
    NotFound { kind: String, target: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Organization not given on the command line or in the environment
    OrgNotSet(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// YAML serialization error
    Yaml(String),
    /// Configuration error
    Config(String),
}

impl TfcError {
    /// True for errors raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TfcError::UnrecognizedInclude { .. }
                | TfcError::ConflictingFilters { .. }
                | TfcError::InvalidArgument(_)
                | TfcError::OrgNotSet(_)
        )
    }

    /// True when a lookup completed normally without a match
    pub fn is_not_found(&self) -> bool {
        matches!(self, TfcError::NotFound { .. })
    }

    /// Page number of a failed page walk, if any
    pub fn failed_page(&self) -> Option<u32> {
        match self {
            TfcError::Page { page, .. } => Some(*page),
            _ => None,
        }
    }
}

impl fmt::Display for TfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfcError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfcError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfcError::Page { page, source } => write!(f, "page {}: {}", page, source),
            TfcError::UnrecognizedInclude {
                resource,
                token,
                accepted,
            } => write!(
                f,
                "include opt not recognized for {}: {} (accepted: {})",
                resource,
                token,
                accepted.join(", ")
            ),
            TfcError::ConflictingFilters { first, second } => write!(
                f,
                "filters --{} and --{} cannot be used together",
                first, second
            ),
            TfcError::InvalidArgument(msg) => write!(f, "{}", msg),
            TfcError::NotFound { kind, target } => write!(f, "no such {}: {}", kind, target),
            TfcError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfcError::HostNotFound(msg) => write!(f, "{}", msg),
            TfcError::OrgNotSet(msg) => write!(f, "{}", msg),
            TfcError::Credentials(msg) => write!(f, "{}", msg),
            TfcError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfcError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            TfcError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfcError::Http(e) => Some(e),
            TfcError::Page { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfcError {
    fn from(err: reqwest::Error) -> Self {
        TfcError::Http(err)
    }
}

impl From<serde_json::Error> for TfcError {
    fn from(err: serde_json::Error) -> Self {
        TfcError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for TfcError {
    fn from(err: serde_yml::Error) -> Self {
        TfcError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for TfcError {
    fn from(err: std::io::Error) -> Self {
        TfcError::Credentials(err.to_string())
    }
}

/// Result type alias for tfc-cli operations
pub type Result<T> = std::result::Result<T, TfcError>;
