//! Workspace summary rows

use super::TableRow;
use crate::hcp::{TfeResource, Workspace};

impl TableRow for Workspace {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Tags", "Execution Mode", "Locked", "TF Version"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.tag_names().join(","),
            self.execution_mode().to_string(),
            super::common::yes_no(self.is_locked()),
            self.terraform_version().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_row() {
        let ws: Workspace = serde_json::from_value(serde_json::json!({
            "id": "ws-1",
            "type": "workspaces",
            "attributes": {
                "name": "app",
                "tag-names": ["prod", "eu"],
                "execution-mode": "agent",
                "locked": false,
                "terraform-version": "1.8.0"
            }
        }))
        .unwrap();

        assert_eq!(
            ws.row(),
            vec!["ws-1", "app", "prod,eu", "agent", "No", "1.8.0"]
        );
        assert_eq!(Workspace::headers().len(), ws.row().len());
    }
}
