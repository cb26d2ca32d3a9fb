//! Hotel entity as returned by the hotels API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hotel record.
///
/// The API owns the shape. `id`, `name` and `city` are taken as whatever JSON
/// value the API sends (`null` when absent) and every other field is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub city: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hotel {
    /// Creates a hotel with no extra fields.
    pub fn new(id: impl Into<Value>, name: impl Into<Value>, city: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            extra: Map::new(),
        }
    }

    /// The line shown for this hotel in the list, `"{name} - {city}"`.
    ///
    /// Strings are printed as-is, `null` as nothing, anything else as JSON.
    pub fn display_line(&self) -> String {
        format!("{} - {}", display_text(&self.name), display_text(&self.city))
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
