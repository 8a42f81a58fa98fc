//! Page request and pagination metadata types

use serde::Deserialize;

/// One page request against a list endpoint
///
/// `number == 0` asks for the first page and `size == 0` leaves the page
/// size to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Page number the walk starts at (the API is 1-based)
    pub fn first_page(&self) -> u32 {
        self.number.max(1)
    }

    /// Same page size, different page number
    pub fn at(&self, number: u32) -> Self {
        Self {
            number,
            size: self.size,
        }
    }

    /// Query parameters for this request
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page[number]", self.first_page().to_string())];
        if self.size > 0 {
            params.push(("page[size]", self.size.to_string()));
        }
        params
    }
}

/// Pagination metadata wrapper (`meta` in JSON:API responses)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<PageInfo>,
}

/// Pagination details for the page just fetched
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "next-page", default)]
    pub next_page: Option<u32>,
    #[serde(rename = "total-count", default)]
    pub total_count: Option<u32>,
}

impl PageInfo {
    /// True when no page follows this one
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.current_page >= self.total_pages
    }
}

/// Items of one fetched page plus its metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Related resources embedded through `include`
    pub included: Vec<serde_json::Value>,
    pub info: Option<PageInfo>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, info: Option<PageInfo>) -> Self {
        Self {
            items,
            included: Vec::new(),
            info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_treats_zero_as_one() {
        assert_eq!(PageRequest::new(0, 20).first_page(), 1);
        assert_eq!(PageRequest::new(4, 20).first_page(), 4);
    }

    #[test]
    fn test_query_params_omit_server_default_size() {
        let params = PageRequest::new(2, 0).query_params();
        assert_eq!(params, vec![("page[number]", "2".to_string())]);
    }

    #[test]
    fn test_query_params_with_size() {
        let params = PageRequest::new(0, 50).query_params();
        assert_eq!(
            params,
            vec![
                ("page[number]", "1".to_string()),
                ("page[size]", "50".to_string())
            ]
        );
    }

    #[test]
    fn test_at_keeps_size() {
        let request = PageRequest::new(1, 25).at(7);
        assert_eq!(request, PageRequest::new(7, 25));
    }

    #[test]
    fn test_page_info_deserialize() {
        let info: PageInfo = serde_json::from_value(serde_json::json!({
            "current-page": 1,
            "total-pages": 3,
            "next-page": 2,
            "prev-page": null,
            "total-count": 250
        }))
        .unwrap();
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.next_page, Some(2));
        assert_eq!(info.total_count, Some(250));
        assert!(!info.is_last());
    }

    #[test]
    fn test_page_info_without_next_page() {
        let info: PageInfo = serde_json::from_value(serde_json::json!({
            "current-page": 2,
            "total-pages": 2
        }))
        .unwrap();
        assert_eq!(info.next_page, None);
        assert!(info.is_last());
    }

    #[test]
    fn test_zero_total_pages_is_last() {
        let info = PageInfo {
            current_page: 1,
            total_pages: 0,
            ..Default::default()
        };
        assert!(info.is_last());
    }
}
