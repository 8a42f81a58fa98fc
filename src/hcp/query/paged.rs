//! Sequential page walk over a paginated collection
//!
//! A walk starts at the requested page and keeps asking for the next one
//! until the server reports the last page. Pages are fetched one at a time,
//! lazily: the next request is only sent once every item of the previous
//! page has been consumed. The first failed page ends the walk with an error
//! carrying that page number.

use std::future::Future;
use std::pin::pin;

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use log::debug;

use super::filter::{apply_filter, ItemFilter};
use super::page::{Page, PageInfo, PageRequest};
use crate::error::{Result, TfcError};
use crate::hcp::traits::TfeResource;

/// A remote collection that can be listed one page at a time
pub trait PageSource<T> {
    /// Label for logs and error messages (e.g. "variable sets in organization 'acme'")
    fn label(&self) -> &str;

    /// Fetch a single page
    fn fetch_page(&self, request: PageRequest) -> impl Future<Output = Result<Page<T>>>;
}

/// Items of a full walk plus any related resources the server embedded
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub included: Vec<serde_json::Value>,
}

impl<T> QueryResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Page walk over one collection, starting at `base`
pub struct PagedQuery<'a, S> {
    source: &'a S,
    base: PageRequest,
}

impl<'a, S> PagedQuery<'a, S> {
    pub fn new(source: &'a S, base: PageRequest) -> Self {
        Self { source, base }
    }

    /// Lazy stream of pages; each call starts a fresh walk
    pub fn pages<T>(&self) -> impl Stream<Item = Result<Page<T>>> + 'a
    where
        S: PageSource<T>,
        T: 'a,
    {
        let state = WalkState {
            source: self.source,
            base: self.base,
            next: Some(self.base.first_page()),
        };

        stream::unfold(state, |mut state| async move {
            let page = state.next.take()?;
            let source = state.source;

            debug!("Fetching page {} of {}", page, source.label());

            match source.fetch_page(state.base.at(page)).await {
                Ok(fetched) => {
                    state.next = next_page_after(page, fetched.info.as_ref());
                    debug!(
                        "Page {} of {} returned {} items",
                        page,
                        source.label(),
                        fetched.items.len()
                    );
                    Some((Ok(fetched), state))
                }
                Err(e) => Some((
                    Err(TfcError::Page {
                        page,
                        source: Box::new(e),
                    }),
                    state,
                )),
            }
        })
    }

    /// Lazy stream of items across all pages, in server order
    pub fn items<T>(&self) -> impl Stream<Item = Result<T>> + 'a
    where
        S: PageSource<T>,
        T: 'a,
    {
        self.pages::<T>()
            .map_ok(|page: Page<T>| stream::iter(page.items.into_iter().map(Ok)))
            .try_flatten()
    }

    /// Walk every page and collect the items
    pub async fn fetch_all<T>(&self) -> Result<QueryResult<T>>
    where
        S: PageSource<T>,
        T: 'a,
    {
        let mut pages = pin!(self.pages::<T>());
        let mut result = QueryResult {
            items: Vec::new(),
            included: Vec::new(),
        };

        while let Some(page) = pages.try_next().await? {
            result.items.extend(page.items);
            result.included.extend(page.included);
        }

        Ok(result)
    }

    /// Walk every page, keeping only items the filter accepts
    pub async fn fetch_filtered<T>(&self, filter: Option<&ItemFilter>) -> Result<QueryResult<T>>
    where
        S: PageSource<T>,
        T: TfeResource + 'a,
    {
        let mut result = self.fetch_all::<T>().await?;
        result.items = apply_filter(result.items, filter);
        Ok(result)
    }

    /// Walk pages in order until an item satisfies `predicate`
    ///
    /// Returns `Ok(None)` when every page was scanned without a match. Pages
    /// after the one holding the first match are never requested.
    pub async fn fetch_until_match<T, P>(&self, mut predicate: P) -> Result<Option<T>>
    where
        S: PageSource<T>,
        T: 'a,
        P: FnMut(&T) -> bool,
    {
        let mut items = pin!(self.items::<T>());

        while let Some(item) = items.try_next().await? {
            if predicate(&item) {
                return Ok(Some(item));
            }
        }

        debug!("No match in {}", self.source.label());
        Ok(None)
    }
}

struct WalkState<'a, S> {
    source: &'a S,
    base: PageRequest,
    next: Option<u32>,
}

/// Decide which page follows `requested`
///
/// Missing metadata means a single page. The result is always greater than
/// `requested`, so a server that does not advance cannot loop the walk.
fn next_page_after(requested: u32, info: Option<&PageInfo>) -> Option<u32> {
    let info = info?;
    if info.is_last() {
        return None;
    }

    let next = info.next_page.unwrap_or(info.current_page + 1);
    if next <= requested {
        debug!(
            "Server reported next page {} after page {}, stopping",
            next, requested
        );
        return None;
    }
    Some(next)
}
