//! Common traits for API resources

use serde::Deserialize;

use crate::hcp::query::{Page, PaginationMeta};

/// Common trait for listed resources (workspaces, variable sets, runs, ...)
///
/// Provides the identity fields client-side filters and name resolution
/// compare against.
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name (variable key for variables)
    fn name(&self) -> &str;
}

/// Trait for API responses that contain paginated data
pub trait PaginatedResponse<T> {
    /// Consume self into a page for the page walk
    fn into_page(self) -> Page<T>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub included: Vec<serde_json::Value>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_page(self) -> Page<T> {
        let info = self.meta.as_ref().and_then(|m| m.pagination);
        Page {
            items: self.data,
            included: self.included,
            info,
        }
    }
}
