//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::config::api;
use crate::error::Result;
use crate::hcp::query::{ItemFilter, PageRequest};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON with every attribute (default)
    Json,
    /// YAML with every attribute
    Yaml,
    /// ASCII table summary
    Table,
    /// Comma-separated summary
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Paging flags for list commands
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to start listing from
    #[arg(long, default_value_t = 1)]
    pub page_num: u32,

    /// Items per page, 0 lets the server decide
    #[arg(
        long,
        default_value_t = api::DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(0..=api::MAX_PAGE_SIZE as i64)
    )]
    pub page_size: u32,
}

impl PageArgs {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page_num, self.page_size)
    }
}

/// `--include` flag; accepted tokens depend on the resource
#[derive(Args, Debug, Clone, Default)]
pub struct IncludeArgs {
    /// Related resources to embed (comma-separated)
    #[arg(short = 'i', long, value_delimiter = ',')]
    pub include: Vec<String>,
}

/// Client-side filters applied to listed items
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only the item with this exact name
    #[arg(long)]
    pub name: Option<String>,

    /// Keep only the item with this exact ID
    #[arg(long)]
    pub id: Option<String>,

    /// Keep items whose name contains this text
    #[arg(long)]
    pub contains: Option<String>,
}

impl FilterArgs {
    /// The single active filter; combining flags is an error
    pub fn to_item_filter(&self) -> Result<Option<ItemFilter>> {
        ItemFilter::exclusive(vec![
            ("name", self.name.clone().map(ItemFilter::name_equals)),
            ("id", self.id.clone().map(ItemFilter::id_equals)),
            ("contains", self.contains.clone().map(ItemFilter::name_contains)),
        ])
    }
}
