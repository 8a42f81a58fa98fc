//! Variable set and variable summary rows

use super::common::yes_no;
use super::TableRow;
use crate::hcp::{TfeResource, Variable, VariableSet};

impl TableRow for VariableSet {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Global", "Description"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            yes_no(self.is_global()),
            self.description().to_string(),
        ]
    }
}

impl TableRow for Variable {
    fn headers() -> &'static [&'static str] {
        &["ID", "Key", "Value", "Category", "HCL", "Sensitive"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.display_value().to_string(),
            self.category().to_string(),
            yes_no(self.is_hcl()),
            yes_no(self.is_sensitive()),
        ]
    }
}
