//! Table and CSV output

use comfy_table::{presets::NOTHING, Table};

use super::common::escape_csv;

/// Borderless table with a header row
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(headers.to_vec());

    for row in rows {
        table.add_row(row.clone());
    }

    table.to_string()
}

/// CSV with a header line; fields are escaped per RFC 4180
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_csv(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        lines.push(
            row.iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["ws-1".to_string(), "app".to_string(), "prod,eu".to_string()],
            vec!["ws-2".to_string(), "db".to_string(), String::new()],
        ]
    }

    #[test]
    fn test_render_csv() {
        let out = render_csv(&["ID", "Name", "Tags"], &rows());
        assert_eq!(out, "ID,Name,Tags\nws-1,app,\"prod,eu\"\nws-2,db,");
    }

    #[test]
    fn test_render_csv_empty() {
        assert_eq!(render_csv(&["ID"], &[]), "ID");
    }

    #[test]
    fn test_render_table_contains_cells() {
        let out = render_table(&["ID", "Name", "Tags"], &rows());
        assert!(out.contains("ID"));
        assert!(out.contains("ws-1"));
        assert!(out.contains("prod,eu"));
        assert!(out.contains("db"));
    }
}
