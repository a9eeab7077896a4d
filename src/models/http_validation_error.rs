use serde::{Deserialize, Serialize};

/// Body of a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

impl HttpValidationError {
    /// True when any entry points at `field`, wherever it sits in `loc`.
    pub fn references_field(&self, field: &str) -> bool {
        self.detail.iter().any(|error| error.field() == Some(field))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<Location>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ValidationError {
    /// Last named segment of `loc`, e.g. `x` for `["query", "x"]`.
    pub fn field(&self) -> Option<&str> {
        self.loc.iter().rev().find_map(|location| match location {
            Location::Name(name) => Some(name.as_str()),
            Location::Index(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Name(String),
    Index(i64),
}

#[cfg(test)]
mod tests {
    use crate::models::http_validation_error::{HttpValidationError, Location};

    #[test]
    fn decodes_field_level_errors() {
        let body = r#"{
            "detail": [
                {"loc": ["query", "x"], "msg": "value is not a valid integer", "type": "type_error.integer"},
                {"loc": ["query", "ids", 2], "msg": "field required", "type": "value_error.missing"}
            ]
        }"#;

        let error: HttpValidationError = serde_json::from_str(body).unwrap();

        assert_eq!(error.detail.len(), 2);
        assert_eq!(
            error.detail[0].loc,
            vec![Location::Name("query".to_string()), Location::Name("x".to_string())]
        );
        assert_eq!(error.detail[0].error_type, "type_error.integer");
        assert_eq!(error.detail[1].loc[2], Location::Index(2));
        assert_eq!(error.detail[1].field(), Some("ids"));
        assert!(error.references_field("x"));
        assert!(!error.references_field("y"));
    }

    #[test]
    fn tolerates_a_missing_detail() {
        let error: HttpValidationError = serde_json::from_str("{}").unwrap();

        assert!(error.detail.is_empty());
    }
}
