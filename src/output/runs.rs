//! Run summary rows

use super::common::{format_timestamp, yes_no};
use super::TableRow;
use crate::hcp::Run;

impl TableRow for Run {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Created At",
            "Auto Apply",
            "Has Changes",
            "Status",
            "Position In Queue",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            format_timestamp(self.created_at()),
            yes_no(self.auto_apply()),
            yes_no(self.has_changes()),
            self.status().to_string(),
            self.position_in_queue().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_row() {
        let run: Run = serde_json::from_value(serde_json::json!({
            "id": "run-1",
            "type": "runs",
            "attributes": {
                "status": "planned",
                "created-at": "2024-05-01T10:00:00.000Z",
                "auto-apply": false,
                "has-changes": true,
                "position-in-queue": 0
            }
        }))
        .unwrap();

        assert_eq!(
            run.row(),
            vec!["run-1", "2024-05-01 10:00:00", "No", "Yes", "planned", "0"]
        );
    }
}
