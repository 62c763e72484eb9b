//! The content entity: pages, comments, attachments and global items.

use serde_json::{Value, json};

use crate::error::HydrationError;
use crate::hydrate;

/// Content type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A wiki page.
    Page,
    /// A comment attached to other content.
    Comment,
    /// A file attachment.
    Attachment,
    /// Global (space-independent) content.
    Global,
}

impl ContentType {
    /// The API tag for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Comment => "comment",
            Self::Attachment => "attachment",
            Self::Global => "global",
        }
    }

    /// Map an API `type` tag to a variant. `None` for unrecognized tags.
    pub fn from_api(tag: &str) -> Option<Self> {
        match tag {
            "page" => Some(Self::Page),
            "comment" => Some(Self::Comment),
            "attachment" => Some(Self::Attachment),
            "global" => Some(Self::Global),
            _ => None,
        }
    }
}

/// Reference attaching content to other content (e.g. a comment to a page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Id of the containing content.
    pub id: u64,
    /// Type of the containing content.
    pub container_type: ContentType,
}

/// A Confluence content item.
///
/// `id` is `None` until the server assigns one on create; update and
/// delete require it. `body` is storage-format markup. `version` follows
/// the optimistic-concurrency scheme: [`Content::update_payload`] sends
/// `version + 1` and a stale version is rejected by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Content id, assigned by the server.
    pub id: Option<u64>,
    /// Content type tag.
    pub content_type: ContentType,
    /// Title.
    pub title: String,
    /// Key of the space the content lives in.
    pub space: Option<String>,
    /// Body markup in storage format.
    pub body: String,
    /// Current version number.
    pub version: u64,
    /// Ids of ancestor content, root first.
    pub ancestors: Vec<u64>,
    /// Containing content, when attached to other content.
    pub container: Option<Container>,
}

impl Content {
    /// Fresh, unsaved content of the given type.
    pub fn new(content_type: ContentType) -> Self {
        Self {
            id: None,
            content_type,
            title: String::new(),
            space: None,
            body: String::new(),
            version: 0,
            ancestors: Vec::new(),
            container: None,
        }
    }

    /// Fresh, unsaved page.
    pub fn page() -> Self {
        Self::new(ContentType::Page)
    }

    /// Fresh, unsaved comment.
    pub fn comment() -> Self {
        Self::new(ContentType::Comment)
    }

    /// Fresh, unsaved attachment.
    pub fn attachment() -> Self {
        Self::new(ContentType::Attachment)
    }

    /// Fresh, unsaved global content.
    pub fn global() -> Self {
        Self::new(ContentType::Global)
    }

    /// Hydrate from a decoded API payload.
    ///
    /// `id`, `type` and `title` are required; space, body, version,
    /// ancestors and container are filled in when the response expansion
    /// carries them and defaulted otherwise.
    pub fn from_value(data: &Value) -> Result<Self, HydrationError> {
        let tag = hydrate::str_field(data, "type")?;
        let content_type = ContentType::from_api(tag)
            .ok_or_else(|| HydrationError::UnknownContentType(tag.to_owned()))?;

        let id = hydrate::id_field(data, "id")?;
        let title = hydrate::str_field(data, "title")?.to_owned();
        let space = hydrate::opt_str(data, &["space", "key"]);
        let body = hydrate::opt_str(data, &["body", "storage", "value"]).unwrap_or_default();
        let version = hydrate::opt_u64(data, &["version", "number"]).unwrap_or(0);

        let ancestors = match data.get("ancestors") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.get("id")
                        .and_then(hydrate::parse_id)
                        .ok_or(HydrationError::InvalidField("ancestors"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(HydrationError::InvalidField("ancestors")),
        };

        let container = match data.get("container") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(Self::container_from_value(raw)?),
        };

        Ok(Self {
            id: Some(id),
            content_type,
            title,
            space,
            body,
            version,
            ancestors,
            container,
        })
    }

    fn container_from_value(raw: &Value) -> Result<Container, HydrationError> {
        let id = raw
            .get("id")
            .ok_or(HydrationError::MissingField("container.id"))
            .and_then(|v| {
                hydrate::parse_id(v).ok_or(HydrationError::InvalidField("container.id"))
            })?;
        let tag = raw
            .get("type")
            .and_then(Value::as_str)
            .ok_or(HydrationError::MissingField("container.type"))?;
        let container_type = ContentType::from_api(tag)
            .ok_or_else(|| HydrationError::UnknownContentType(tag.to_owned()))?;
        Ok(Container { id, container_type })
    }

    /// Request payload for `create`.
    ///
    /// `ancestors` and `container` are included only when set.
    pub fn create_payload(&self) -> Value {
        let mut payload = json!({
            "type": self.content_type.as_str(),
            "title": self.title,
            "space": {"key": self.space},
            "body": {
                "storage": {
                    "value": self.body,
                    "representation": "storage",
                },
            },
        });

        if !self.ancestors.is_empty() {
            payload["ancestors"] = self.ancestors.iter().map(|id| json!({"id": id})).collect();
        }

        // attach content to content
        if let Some(container) = &self.container {
            payload["container"] = json!({
                "id": container.id,
                "type": container.container_type.as_str(),
            });
        }

        payload
    }

    /// Request payload for `update`: the base create fields plus the id
    /// and the incremented version number.
    pub fn update_payload(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.content_type.as_str(),
            "title": self.title,
            "space": {"key": self.space},
            "body": {
                "storage": {
                    "value": self.body,
                    "representation": "storage",
                },
            },
            "version": {"number": self.version + 1},
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn page_payload() -> Value {
        json!({
            "id": "123",
            "type": "page",
            "title": "Release notes",
            "space": {"key": "DOC"},
            "body": {"storage": {"value": "<p>Shipped.</p>", "representation": "storage"}},
            "version": {"number": 3},
        })
    }

    #[test]
    fn test_hydrates_page_payload() {
        let content = Content::from_value(&page_payload()).unwrap();
        assert_eq!(content.id, Some(123));
        assert_eq!(content.content_type, ContentType::Page);
        assert_eq!(content.title, "Release notes");
        assert_eq!(content.space.as_deref(), Some("DOC"));
        assert_eq!(content.body, "<p>Shipped.</p>");
        assert_eq!(content.version, 3);
        assert!(content.ancestors.is_empty());
        assert!(content.container.is_none());
    }

    #[test]
    fn test_hydrates_sparse_payload_with_defaults() {
        // Descendant listings come back without any expansion.
        let content =
            Content::from_value(&json!({"id": 7, "type": "comment", "title": "Re: notes"}))
                .unwrap();
        assert_eq!(content.content_type, ContentType::Comment);
        assert_eq!(content.space, None);
        assert_eq!(content.body, "");
        assert_eq!(content.version, 0);
    }

    #[test]
    fn test_hydrates_ancestors_and_container() {
        let content = Content::from_value(&json!({
            "id": 9,
            "type": "comment",
            "title": "Re: notes",
            "ancestors": [{"id": 1}, {"id": "5"}],
            "container": {"id": "123", "type": "page"},
        }))
        .unwrap();
        assert_eq!(content.ancestors, vec![1, 5]);
        assert_eq!(
            content.container,
            Some(Container {
                id: 123,
                container_type: ContentType::Page
            })
        );
    }

    #[test]
    fn test_unknown_discriminator_fails() {
        let err = Content::from_value(&json!({"id": 1, "type": "blogpost", "title": "x"}))
            .unwrap_err();
        assert_eq!(err, HydrationError::UnknownContentType("blogpost".to_owned()));
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let err = Content::from_value(&json!({"id": 1, "type": "page"})).unwrap_err();
        assert_eq!(err, HydrationError::MissingField("title"));

        let err = Content::from_value(&json!({"type": "page", "title": "x"})).unwrap_err();
        assert_eq!(err, HydrationError::MissingField("id"));
    }

    #[test]
    fn test_create_payload_shape() {
        let mut content = Content::page();
        content.title = "Release notes".to_owned();
        content.space = Some("DOC".to_owned());
        content.body = "<p>Shipped.</p>".to_owned();

        assert_eq!(
            content.create_payload(),
            json!({
                "type": "page",
                "title": "Release notes",
                "space": {"key": "DOC"},
                "body": {"storage": {"value": "<p>Shipped.</p>", "representation": "storage"}},
            })
        );
    }

    #[test]
    fn test_create_payload_includes_ancestors_only_when_present() {
        let mut content = Content::page();
        assert!(content.create_payload().get("ancestors").is_none());

        content.ancestors = vec![11, 22];
        assert_eq!(
            content.create_payload()["ancestors"],
            json!([{"id": 11}, {"id": 22}])
        );
    }

    #[test]
    fn test_create_payload_includes_container_only_when_set() {
        let mut content = Content::comment();
        assert!(content.create_payload().get("container").is_none());

        content.container = Some(Container {
            id: 123,
            container_type: ContentType::Page,
        });
        assert_eq!(
            content.create_payload()["container"],
            json!({"id": 123, "type": "page"})
        );
    }

    #[test]
    fn test_update_payload_increments_version() {
        let mut content = Content::from_value(&page_payload()).unwrap();
        content.body = "<p>Edited.</p>".to_owned();

        let payload = content.update_payload();
        assert_eq!(payload["id"], json!(123));
        assert_eq!(payload["version"], json!({"number": 4}));

        let zero = Content::from_value(
            &json!({"id": 1, "type": "page", "title": "x", "version": {"number": 0}}),
        )
        .unwrap();
        assert_eq!(zero.update_payload()["version"]["number"], json!(1));
    }

    #[test]
    fn test_hydrate_then_payload_round_trip() {
        let content = Content::from_value(&page_payload()).unwrap();
        let payload = content.create_payload();
        assert_eq!(payload["title"], json!("Release notes"));
        assert_eq!(payload["space"]["key"], json!("DOC"));
        assert_eq!(payload["body"]["storage"]["value"], json!("<p>Shipped.</p>"));
        assert_eq!(payload["type"], json!("page"));
    }
}
