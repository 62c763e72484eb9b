//! Paginated content search results.

use serde_json::Value;

use crate::error::HydrationError;
use crate::hydrate;
use crate::types::Content;

/// One page of content search results.
///
/// A read-only projection: `size` is the count the server reported for
/// this page, `limit` the page size it applied, and `next_link` the
/// relative URL of the following page when there is one. The client never
/// follows `next_link` on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSearchResult {
    /// Hydrated content entities, in server order.
    pub results: Vec<Content>,
    /// Number of results in this page.
    pub size: u64,
    /// Page size limit the server applied, when reported.
    pub limit: Option<u64>,
    /// Link to the next page, when more results are available.
    pub next_link: Option<String>,
}

impl ContentSearchResult {
    /// Hydrate from a decoded search response.
    ///
    /// The `results` array is required but may be empty.
    pub fn from_value(data: &Value) -> Result<Self, HydrationError> {
        let raw = match data.get("results") {
            None | Some(Value::Null) => return Err(HydrationError::MissingField("results")),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(HydrationError::InvalidField("results")),
        };

        let results = raw
            .iter()
            .map(Content::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        let size = data
            .get("size")
            .and_then(Value::as_u64)
            .unwrap_or(results.len() as u64);
        let limit = data.get("limit").and_then(Value::as_u64);
        let next_link = hydrate::opt_str(data, &["_links", "next"]);

        Ok(Self {
            results,
            size,
            limit,
            next_link,
        })
    }

    /// Number of entities in this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page holds no entities.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the entities in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.results.iter()
    }
}

impl IntoIterator for ContentSearchResult {
    type Item = Content;
    type IntoIter = std::vec::IntoIter<Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContentSearchResult {
    type Item = &'a Content;
    type IntoIter = std::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::ContentType;

    #[test]
    fn test_empty_results_is_a_valid_empty_page() {
        let result =
            ContentSearchResult::from_value(&json!({"results": [], "size": 0, "limit": 25}))
                .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.size, 0);
        assert_eq!(result.limit, Some(25));
        assert_eq!(result.next_link, None);
    }

    #[test]
    fn test_hydrates_elements_and_pagination() {
        let result = ContentSearchResult::from_value(&json!({
            "results": [
                {"id": "1", "type": "page", "title": "A"},
                {"id": "2", "type": "comment", "title": "B"},
            ],
            "size": 2,
            "limit": 25,
            "_links": {"next": "/rest/api/content?start=25"},
        }))
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.results[0].content_type, ContentType::Page);
        assert_eq!(result.results[1].title, "B");
        assert_eq!(
            result.next_link.as_deref(),
            Some("/rest/api/content?start=25")
        );
    }

    #[test]
    fn test_missing_results_field_fails() {
        let err = ContentSearchResult::from_value(&json!({"size": 0})).unwrap_err();
        assert_eq!(err, HydrationError::MissingField("results"));
    }

    #[test]
    fn test_size_defaults_to_element_count() {
        let result = ContentSearchResult::from_value(&json!({
            "results": [{"id": 1, "type": "page", "title": "A"}],
        }))
        .unwrap();
        assert_eq!(result.size, 1);
    }

    #[test]
    fn test_bad_element_propagates_hydration_error() {
        let err = ContentSearchResult::from_value(&json!({
            "results": [{"id": 1, "type": "mystery", "title": "A"}],
        }))
        .unwrap_err();
        assert_eq!(err, HydrationError::UnknownContentType("mystery".to_owned()));
    }
}
