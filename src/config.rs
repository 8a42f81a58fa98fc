/// Configuration constants for the HCP Terraform API
pub mod api {
    /// Base path for API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Variable sets endpoint
    pub const VARIABLE_SETS: &str = "varsets";

    /// Variable set variables relationship
    pub const RELATIONSHIP_VARS: &str = "relationships/vars";

    /// Configuration versions endpoint
    pub const CONFIGURATION_VERSIONS: &str = "configuration-versions";

    /// Runs endpoint
    pub const RUNS: &str = "runs";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Largest page size the API accepts
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFC_TOKEN", "TFE_TOKEN", "HCP_TOKEN"];
}

/// Host configuration
pub mod host {
    /// Environment variable for the API host
    pub const ENV_VAR: &str = "TFE_HOSTNAME";
}

/// Organization configuration
pub mod org {
    /// Environment variable for the organization name
    pub const ENV_VAR: &str = "TFC_ORG";
}

/// Default values for CLI
pub mod defaults {
    /// Default API host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
