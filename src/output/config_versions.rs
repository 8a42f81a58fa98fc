//! Configuration version summary rows

use super::common::yes_no;
use super::TableRow;
use crate::hcp::ConfigurationVersion;

impl TableRow for ConfigurationVersion {
    fn headers() -> &'static [&'static str] {
        &["ID", "Status", "Source", "Speculative"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.status().to_string(),
            self.source().to_string(),
            yes_no(self.is_speculative()),
        ]
    }
}
