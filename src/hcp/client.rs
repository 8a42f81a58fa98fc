//! HTTP client for HCP Terraform API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfcError};

/// HCP Terraform / Terraform Enterprise API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Organization from --org or TFC_ORG
    org: Option<String>,
}

impl TfeClient {
    /// Create a new client with connection reuse and request timeouts
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
            org: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
            org: None,
        }
    }

    /// Set the organization used by organization-scoped commands
    pub fn set_org(&mut self, org: Option<String>) {
        self.org = org;
    }

    /// Organization name, or an error explaining how to set it
    pub fn require_org(&self) -> Result<&str> {
        self.org.as_deref().ok_or_else(|| {
            TfcError::OrgNotSet(format!(
                "missing terraform cloud organization. Set {} in the environment or pass --org",
                crate::config::org::ENV_VAR
            ))
        })
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// The response body is kept in the error message since the API explains
    /// validation failures there.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("Failed to fetch {}", error_context)
            } else {
                format!("Failed to fetch {}: {}", error_context, body)
            };
            return Err(TfcError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and the typed `data` member plus the raw
    /// document otherwise.
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item = data_member(&raw, resource_label)?;
                Ok(Some((item, raw)))
            }
            404 => Ok(None),
            status => Err(TfcError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// Send a JSON:API document and parse the `data` member of the reply
    pub(crate) async fn send_document<T>(
        &self,
        request: reqwest::RequestBuilder,
        body: &serde_json::Value,
        resource_label: &str,
    ) -> Result<(T, serde_json::Value)>
    where
        T: DeserializeOwned,
    {
        let response = request.json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TfcError::Api {
                status: status.as_u16(),
                message: format!("Failed to write {}: {}", resource_label, body),
            });
        }

        let raw: serde_json::Value = response.json().await?;
        let item = data_member(&raw, resource_label)?;
        Ok((item, raw))
    }
}

fn data_member<T: DeserializeOwned>(raw: &serde_json::Value, resource_label: &str) -> Result<T> {
    serde_json::from_value(raw["data"].clone()).map_err(|e| TfcError::Api {
        status: 200,
        message: format!("Failed to parse {}: {}", resource_label, e),
    })
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        let mut client = Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        );
        client.set_org(Some("test-org".to_string()));
        client
    }
}
