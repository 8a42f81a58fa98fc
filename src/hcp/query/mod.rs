//! Paginated list-and-filter queries
//!
//! Every list command goes through the same pieces:
//! - [`Collection`]: a list endpoint with its server-side filters and includes
//! - [`PagedQuery`]: the sequential page walk (`fetch_all`, `fetch_until_match`)
//! - [`IncludeTable`]: per-resource include-token validation
//! - [`ItemFilter`]: optional client-side predicate

mod collection;
mod filter;
mod include;
mod page;
mod paged;

pub use collection::Collection;
pub use filter::{apply_filter, ItemFilter, MatchField};
pub use include::{apply_include_set, IncludeSet, IncludeTable};
pub use page::{Page, PageInfo, PageRequest, PaginationMeta};
pub use paged::{PageSource, PagedQuery, QueryResult};
