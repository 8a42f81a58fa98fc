//! Client-side result filters

use crate::error::{Result, TfcError};
use crate::hcp::traits::TfeResource;

/// Resource field a filter compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Name,
}

/// Predicate applied to each listed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFilter {
    /// Field equals the value
    Exact { field: MatchField, value: String },
    /// Field contains the value
    Substring { field: MatchField, value: String },
}

impl ItemFilter {
    pub fn id_equals(value: impl Into<String>) -> Self {
        ItemFilter::Exact {
            field: MatchField::Id,
            value: value.into(),
        }
    }

    pub fn name_equals(value: impl Into<String>) -> Self {
        ItemFilter::Exact {
            field: MatchField::Name,
            value: value.into(),
        }
    }

    pub fn name_contains(value: impl Into<String>) -> Self {
        ItemFilter::Substring {
            field: MatchField::Name,
            value: value.into(),
        }
    }

    /// Check a single item
    pub fn matches<R: TfeResource + ?Sized>(&self, item: &R) -> bool {
        match self {
            ItemFilter::Exact { field, value } => field_of(item, *field) == value.as_str(),
            ItemFilter::Substring { field, value } => field_of(item, *field).contains(value.as_str()),
        }
    }

    /// Pick the single filter among competing flags
    ///
    /// Each candidate is `(flag name, filter if the flag was set)`. More than
    /// one set flag is a validation error naming the first two.
    pub fn exclusive(candidates: Vec<(&str, Option<ItemFilter>)>) -> Result<Option<ItemFilter>> {
        let mut chosen: Option<(&str, ItemFilter)> = None;

        for (flag, rule) in candidates {
            let Some(rule) = rule else { continue };
            if let Some((first, _)) = &chosen {
                return Err(TfcError::ConflictingFilters {
                    first: first.to_string(),
                    second: flag.to_string(),
                });
            }
            chosen = Some((flag, rule));
        }

        Ok(chosen.map(|(_, rule)| rule))
    }
}

fn field_of<R: TfeResource + ?Sized>(item: &R, field: MatchField) -> &str {
    match field {
        MatchField::Id => item.id(),
        MatchField::Name => item.name(),
    }
}

/// Keep the items a filter accepts; no filter keeps everything
pub fn apply_filter<T: TfeResource>(items: Vec<T>, filter: Option<&ItemFilter>) -> Vec<T> {
    match filter {
        Some(rule) => items.into_iter().filter(|item| rule.matches(item)).collect(),
        None => items,
    }
}
