//! Confluence content API types.

mod body;
mod content;
mod search;

pub use body::{ContentBody, SUPPORTED_REPRESENTATIONS};
pub use content::{Container, Content, ContentType};
pub use search::ContentSearchResult;
