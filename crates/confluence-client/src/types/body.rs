//! Content body values and their representations.

use serde_json::Value;

use crate::error::HydrationError;
use crate::hydrate;

/// Representations the conversion endpoint supports.
pub const SUPPORTED_REPRESENTATIONS: [&str; 5] =
    ["storage", "view", "export_view", "styled_view", "editor"];

/// A piece of content markup in one named representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBody {
    /// Representation tag, e.g. `storage` or `view`.
    pub representation: String,
    /// Raw markup value.
    pub value: String,
}

impl ContentBody {
    /// Body with an explicit representation.
    pub fn new(representation: &str, value: &str) -> Self {
        Self {
            representation: representation.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Body in storage format, the write format for create/update.
    pub fn storage(value: &str) -> Self {
        Self::new("storage", value)
    }

    /// Whether a representation is a valid conversion target.
    pub fn is_supported(representation: &str) -> bool {
        SUPPORTED_REPRESENTATIONS.contains(&representation)
    }

    /// Hydrate from a decoded conversion response.
    pub fn from_value(data: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            representation: hydrate::str_field(data, "representation")?.to_owned(),
            value: hydrate::str_field(data, "value")?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_supported_representations() {
        for repr in SUPPORTED_REPRESENTATIONS {
            assert!(ContentBody::is_supported(repr));
        }
        assert!(!ContentBody::is_supported("wiki"));
        assert!(!ContentBody::is_supported(""));
    }

    #[test]
    fn test_hydrates_conversion_response() {
        let body =
            ContentBody::from_value(&json!({"representation": "view", "value": "<p>x</p>"}))
                .unwrap();
        assert_eq!(body, ContentBody::new("view", "<p>x</p>"));
    }

    #[test]
    fn test_missing_value_is_named() {
        let err = ContentBody::from_value(&json!({"representation": "view"})).unwrap_err();
        assert_eq!(err, HydrationError::MissingField("value"));
    }
}
