use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic success body shared by every JSON endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseModel {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub router: String,
    /// Request parameters as the server echoed them back.
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}
