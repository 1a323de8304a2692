//! Frontend Models
//!
//! Data structures matching the `/items` resource.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reserved category value meaning "no filter"
pub const ALL_CATEGORIES: &str = "All";

/// Category options offered by the form and the filter selector
pub const CATEGORIES: &[&str] = &["Produce", "Dairy", "Dessert", "Bakery"];

/// Pass-through flag toggled by the item row
const IN_CART_FIELD: &str = "isInCart";

/// Everything except RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Server-assigned identifier. Backends emit numbers or strings;
/// anything else (floats, huge integers) is carried through as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl ItemId {
    /// Encoded form for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        match self {
            ItemId::Number(n) => n.to_string(),
            ItemId::Text(s) => utf8_percent_encode(s, PATH_SEGMENT).to_string(),
            ItemId::Other(raw) => utf8_percent_encode(&raw.to_string(), PATH_SEGMENT).to_string(),
        }
    }
}

/// Missing, null or non-string values become a string rather than rejecting the record
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    /// Fields the list does not interpret, kept as-is for the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Item not yet persisted (no id)
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            extra: Map::new(),
        }
    }

    /// Item carrying a client-generated UUID so it stays addressable before a reload
    pub fn with_client_id(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Some(ItemId::Text(uuid::Uuid::new_v4().to_string())),
            ..Self::new(name, category)
        }
    }

    pub fn in_cart(&self) -> bool {
        self.extra
            .get(IN_CART_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Copy of this item with the cart flag flipped
    pub fn toggle_cart(&self) -> Self {
        let mut next = self.clone();
        next.extra
            .insert(IN_CART_FIELD.to_string(), Value::Bool(!self.in_cart()));
        next
    }
}
