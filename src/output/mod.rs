//! Output formatting module
//!
//! JSON and YAML print every attribute of the listed items; table and CSV
//! print a per-resource summary row.

mod common;
mod config_versions;
mod runs;
mod structured;
mod tabular;
mod variable_sets;
mod workspaces;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hcp::query::QueryResult;

pub use common::{escape_csv, format_timestamp};
pub use structured::render_structured;
pub use tabular::{render_csv, render_table};

/// Summary row for table and CSV output
pub trait TableRow {
    /// Column headers, in row order
    fn headers() -> &'static [&'static str];

    /// Cells for one item
    fn row(&self) -> Vec<String>;
}

/// Render the result of a list command
///
/// Structured output is an array of items, or a `{data, included}` document
/// when the server embedded related resources.
pub fn render_list<T>(result: &QueryResult<T>, format: OutputFormat) -> Result<String>
where
    T: Serialize + TableRow,
{
    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let items = serde_json::to_value(&result.items)?;
            let document = if result.included.is_empty() {
                items
            } else {
                serde_json::json!({
                    "data": items,
                    "included": result.included,
                })
            };
            render_structured(&document, format)
        }
        OutputFormat::Table => Ok(render_table(T::headers(), &rows(&result.items))),
        OutputFormat::Csv => Ok(render_csv(T::headers(), &rows(&result.items))),
    }
}

/// Render a single resource; `data` is what structured output prints
pub fn render_item<T: TableRow>(
    item: &T,
    data: &serde_json::Value,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => render_structured(data, format),
        OutputFormat::Table => Ok(render_table(T::headers(), &[item.row()])),
        OutputFormat::Csv => Ok(render_csv(T::headers(), &[item.row()])),
    }
}

pub fn print_list<T>(result: &QueryResult<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize + TableRow,
{
    println!("{}", render_list(result, format)?);
    Ok(())
}

pub fn print_item<T: TableRow>(
    item: &T,
    data: &serde_json::Value,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render_item(item, data, format)?);
    Ok(())
}

fn rows<T: TableRow>(items: &[T]) -> Vec<Vec<String>> {
    items.iter().map(T::row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: &'static str,
        name: &'static str,
    }

    impl TableRow for Item {
        fn headers() -> &'static [&'static str] {
            &["ID", "Name"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.to_string()]
        }
    }

    fn result(included: Vec<serde_json::Value>) -> QueryResult<Item> {
        QueryResult {
            items: vec![
                Item { id: "a-1", name: "alpha" },
                Item { id: "b-2", name: "beta" },
            ],
            included,
        }
    }

    #[test]
    fn test_render_list_json_array() {
        let out = render_list(&result(vec![]), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"id": "a-1", "name": "alpha"},
                {"id": "b-2", "name": "beta"}
            ])
        );
    }

    #[test]
    fn test_render_list_json_with_included() {
        let included = vec![serde_json::json!({"id": "org-1", "type": "organizations"})];
        let out = render_list(&result(included), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["data"][1]["id"], "b-2");
        assert_eq!(parsed["included"][0]["type"], "organizations");
    }

    #[test]
    fn test_render_list_csv() {
        let out = render_list(&result(vec![]), OutputFormat::Csv).unwrap();
        assert_eq!(out, "ID,Name\na-1,alpha\nb-2,beta");
    }

    #[test]
    fn test_render_item_structured_uses_data() {
        let item = Item { id: "a-1", name: "alpha" };
        let data = serde_json::json!({"id": "a-1", "attributes": {"extra": true}});
        let out = render_item(&item, &data, OutputFormat::Json).unwrap();
        assert!(out.contains("\"extra\": true"));
    }

    #[test]
    fn test_render_item_table() {
        let item = Item { id: "a-1", name: "alpha" };
        let out = render_item(&item, &serde_json::Value::Null, OutputFormat::Table).unwrap();
        assert!(out.contains("alpha"));
        assert!(out.contains("Name"));
    }
}
