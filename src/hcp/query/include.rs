//! Include-token validation
//!
//! Every resource type owns a fixed table mapping user-facing include tokens
//! to the values the API expects in its `include` query parameter. Tokens are
//! validated as a whole before a query is built, so an unknown token never
//! results in a partial request.

use crate::error::{Result, TfcError};

/// Immutable token -> server value table for one resource type
#[derive(Debug, Clone, Copy)]
pub struct IncludeTable {
    resource: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl IncludeTable {
    pub const fn new(
        resource: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { resource, entries }
    }

    /// Resource label used in error messages
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Accepted user tokens, in table order
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    /// Server value for a token
    pub fn lookup(&self, token: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| *value)
    }

    /// Validate and map user tokens; see [`apply_include_set`]
    pub fn apply<S: AsRef<str>>(&self, tokens: &[S]) -> Result<IncludeSet> {
        apply_include_set(self, tokens)
    }
}

/// Validated server include values, in the order the user gave them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet(Vec<&'static str>);

impl IncludeSet {
    pub fn values(&self) -> &[&'static str] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `include` query parameter, `None` when empty
    pub fn to_query_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

/// Map user include tokens through a resource's table
///
/// Blank tokens are skipped and repeated tokens collapse to their first
/// occurrence. The first unknown token fails the whole set.
pub fn apply_include_set<S: AsRef<str>>(table: &IncludeTable, tokens: &[S]) -> Result<IncludeSet> {
    let mut values: Vec<&'static str> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let value = table
            .lookup(token)
            .ok_or_else(|| TfcError::UnrecognizedInclude {
                resource: table.resource().to_string(),
                token: token.to_string(),
                accepted: table.tokens().map(str::to_string).collect(),
            })?;
        if !values.contains(&value) {
            values.push(value);
        }
    }

    Ok(IncludeSet(values))
}
