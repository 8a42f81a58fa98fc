//! Shared JSON:API data models

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One JSON:API resource object
///
/// `A` holds the attributes a command reads. The object exactly as the server
/// sent it is kept alongside and is what serializing a `Resource` produces,
/// so structured output never adds, drops or reorders attributes.
#[derive(Debug, Clone)]
pub struct Resource<A> {
    pub id: String,
    pub attributes: A,
    raw: serde_json::Value,
}

#[derive(Deserialize)]
struct TypedFields<A> {
    id: String,
    attributes: A,
}

impl<A> Resource<A> {
    /// The resource object as received
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }
}

impl<'de, A: DeserializeOwned> Deserialize<'de> for Resource<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let typed: TypedFields<A> = serde_json::from_value(raw.clone()).map_err(D::Error::custom)?;
        Ok(Self {
            id: typed.id,
            attributes: typed.attributes,
            raw,
        })
    }
}

impl<A> Serialize for Resource<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Reference to another resource in a request body
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRef {
    pub data: ResourceIdentifier,
}

/// `{ "type": ..., "id": ... }` pair
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl RelationshipRef {
    pub fn new(resource_type: &str, id: &str) -> Self {
        Self {
            data: ResourceIdentifier {
                resource_type: resource_type.to_string(),
                id: id.to_string(),
            },
        }
    }
}
