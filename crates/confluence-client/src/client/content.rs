//! Content operations for the Confluence API.
//!
//! Operation-per-method surface over the `content` REST resources:
//! CRUD, child/descendant traversal and body format conversion.

use serde_json::json;
use tracing::{debug, info};

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Content, ContentBody, ContentSearchResult, ContentType};
use crate::uri::restful_uri;

/// Default value for the `expand` query parameter.
const DEFAULT_EXPAND: &str = "space,version,body.storage,container";

/// Search keys `find` passes through; anything else is dropped.
const ALLOWED_SEARCH_KEYS: [&str; 4] = ["title", "spaceKey", "type", "id"];

/// Keep only the allow-listed search parameters, preserving order.
fn filter_search_params<'a>(params: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    params
        .iter()
        .copied()
        .filter(|(key, _)| ALLOWED_SEARCH_KEYS.contains(key))
        .collect()
}

impl ConfluenceClient {
    /// Get a single content item by id, with the default expansion.
    ///
    /// Returns `Ok(None)` when the server reports the content as not
    /// found; any other failure is an error.
    pub fn get(&self, content_id: u64) -> Result<Option<Content>, ConfluenceError> {
        let id = content_id.to_string();
        let path = restful_uri(&[Some("content"), Some(&id)]);

        info!("Getting content {}", content_id);

        match self.http_get(&path, &[("expand", DEFAULT_EXPAND)]) {
            Ok(data) => Ok(Some(Content::from_value(&data)?)),
            Err(ConfluenceError::Response { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Search content by the allow-listed parameters (`title`, `spaceKey`,
    /// `type`, `id`). Unrecognized keys are silently dropped.
    pub fn find(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ContentSearchResult, ConfluenceError> {
        let mut query = filter_search_params(params);
        query.push(("expand", DEFAULT_EXPAND));

        info!("Searching content");

        let data = self.http_get("content", &query)?;
        let result = ContentSearchResult::from_value(&data)?;
        debug!("Search returned {} results", result.len());
        Ok(result)
    }

    /// Create new content. The entity must not carry an id yet; the
    /// server assigns one.
    pub fn create(&self, content: &Content) -> Result<Content, ConfluenceError> {
        if content.id.is_some() {
            return Err(ConfluenceError::Validation(
                "content id must be absent; already-created content can only be updated"
                    .to_owned(),
            ));
        }

        info!(
            "Creating {} '{}'",
            content.content_type.as_str(),
            content.title
        );

        let data = self.http_post("content", &[], &content.create_payload())?;
        Ok(Content::from_value(&data)?)
    }

    /// Update existing content, advancing its version by one.
    ///
    /// A concurrent update of the same version is rejected by the server
    /// and surfaces as [`ConfluenceError::Response`]; the client does not
    /// retry or reconcile.
    pub fn update(&self, content: &Content) -> Result<Content, ConfluenceError> {
        let Some(content_id) = content.id else {
            return Err(ConfluenceError::Validation(
                "content id must be present; use create for new content".to_owned(),
            ));
        };
        let id = content_id.to_string();
        let path = restful_uri(&[Some("content"), Some(&id)]);

        info!(
            "Updating content {} from version {} to {}",
            content_id,
            content.version,
            content.version + 1
        );

        let data = self.http_put(&path, &content.update_payload())?;
        Ok(Content::from_value(&data)?)
    }

    /// Delete content. Returns the raw transport response; there is no
    /// body to hydrate.
    pub fn delete(
        &self,
        content: &Content,
    ) -> Result<ureq::http::Response<ureq::Body>, ConfluenceError> {
        let Some(content_id) = content.id else {
            return Err(ConfluenceError::Validation(
                "content id must be present; only saved content can be deleted".to_owned(),
            ));
        };
        let id = content_id.to_string();

        info!("Deleting content {}", content_id);

        self.http_delete(&restful_uri(&[Some("content"), Some(&id)]))
    }

    /// List direct children, optionally scoped to one content type, with
    /// the default expansion.
    pub fn children(
        &self,
        content: &Content,
        content_type: Option<ContentType>,
    ) -> Result<ContentSearchResult, ConfluenceError> {
        self.related(content, "child", content_type, &[("expand", DEFAULT_EXPAND)])
    }

    /// List all descendants, optionally scoped to one content type.
    ///
    /// Unlike [`Self::children`], no expansion is applied, so the
    /// hydrated entities carry defaults for space, body and version.
    pub fn descendants(
        &self,
        content: &Content,
        content_type: Option<ContentType>,
    ) -> Result<ContentSearchResult, ConfluenceError> {
        self.related(content, "descendant", content_type, &[])
    }

    fn related(
        &self,
        content: &Content,
        relation: &str,
        content_type: Option<ContentType>,
        query: &[(&str, &str)],
    ) -> Result<ContentSearchResult, ConfluenceError> {
        let Some(content_id) = content.id else {
            return Err(ConfluenceError::Validation(format!(
                "content id must be present to list {relation} content"
            )));
        };
        let id = content_id.to_string();
        let path = restful_uri(&[
            Some("content"),
            Some(&id),
            Some(relation),
            content_type.map(ContentType::as_str),
        ]);

        info!("Listing {} content of {}", relation, content_id);

        let data = self.http_get(&path, query)?;
        Ok(ContentSearchResult::from_value(&data)?)
    }

    /// Convert a content body to another representation.
    ///
    /// When a context entity is given, its id and space key are passed as
    /// `pageIdContext` / `spaceKeyContext` so relative links resolve.
    pub fn convert(
        &self,
        body: &ContentBody,
        to: &str,
        context: Option<&Content>,
    ) -> Result<ContentBody, ConfluenceError> {
        if !ContentBody::is_supported(to) {
            return Err(ConfluenceError::Validation(format!(
                "conversion target `{to}` is not supported"
            )));
        }

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(context) = context {
            if let Some(id) = context.id {
                query.push(("pageIdContext", id.to_string()));
            }
            if let Some(space) = &context.space {
                query.push(("spaceKeyContext", space.clone()));
            }
        }
        let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let payload = json!({
            "representation": body.representation,
            "value": body.value,
        });

        info!(
            "Converting content body from {} to {}",
            body.representation, to
        );

        let path = restful_uri(&[Some("contentbody"), Some("convert"), Some(to)]);
        let data = self.http_post(&path, &query, &payload)?;
        Ok(ContentBody::from_value(&data)?)
    }
}
