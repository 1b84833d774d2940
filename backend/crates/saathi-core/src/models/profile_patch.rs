use crate::{ProfileUpdate, Result as CoreResult};

use serde_json::{Map, Value};

pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Top-level document fields written by a merge.
///
/// Built only from a [`ProfileUpdate`], so identity keys (`uid`, `email`)
/// and `createdAt` can never appear in a patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePatch {
    fields: Map<String, Value>,
}

impl ProfilePatch {
    pub fn from_update(update: &ProfileUpdate) -> CoreResult<Self> {
        let fields = match serde_json::to_value(update)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Shallow merge into a stored document and stamp `updatedAt`
    pub fn apply_to(&self, document: &mut Map<String, Value>, updated_at: Value) {
        for (key, value) in &self.fields {
            document.insert(key.clone(), value.clone());
        }
        document.insert(UPDATED_AT_FIELD.to_string(), updated_at);
    }
}
