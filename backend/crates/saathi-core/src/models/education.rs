use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Education {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub field: String,
    /// Omitted from storage until the student provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
}
