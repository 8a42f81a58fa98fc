//! HTTP-backed page source for JSON:API list endpoints

use std::marker::PhantomData;

use log::debug;
use serde::de::DeserializeOwned;

use super::include::IncludeSet;
use super::page::{Page, PageRequest};
use super::paged::PageSource;
use crate::error::Result;
use crate::hcp::traits::{ApiListResponse, PaginatedResponse};
use crate::hcp::TfeClient;

/// A list endpoint plus its fixed query parameters
///
/// Server-side filters and validated includes are set once; the page walk
/// only varies `page[number]`.
pub struct Collection<'a, T> {
    client: &'a TfeClient,
    path: String,
    label: String,
    params: Vec<(String, String)>,
    includes: IncludeSet,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T> Collection<'a, T> {
    pub fn new(client: &'a TfeClient, path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            label: label.into(),
            params: Vec::new(),
            includes: IncludeSet::default(),
            _item: PhantomData,
        }
    }

    /// Add a query parameter; `None` and empty values are skipped
    pub fn param(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.params.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Embed related resources (already validated against the include table)
    pub fn includes(mut self, includes: IncludeSet) -> Self {
        self.includes = includes;
        self
    }

    /// Full URL for one page of this collection
    pub fn url_for(&self, request: PageRequest) -> String {
        let mut query: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();

        if let Some(include) = self.includes.to_query_value() {
            query.push(format!("include={}", urlencoding::encode(&include)));
        }

        for (k, v) in request.query_params() {
            query.push(format!("{}={}", k, v));
        }

        format!("{}{}?{}", self.client.base_url(), self.path, query.join("&"))
    }
}

impl<T> PageSource<T> for Collection<'_, T>
where
    T: DeserializeOwned,
{
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch_page(&self, request: PageRequest) -> Result<Page<T>> {
        let url = self.url_for(request);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let body: ApiListResponse<T> = self
            .client
            .parse_api_response(response, &self.label)
            .await?;

        Ok(body.into_page())
    }
}
