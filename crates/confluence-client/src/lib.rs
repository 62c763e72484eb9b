//! Typed client for the Confluence content REST API.
//!
//! Maps content entities (pages, comments, attachments, global items) to
//! the `content` REST resources: CRUD, hierarchy traversal and body format
//! conversion. Every operation is a single synchronous round trip — no
//! retries, no pagination auto-fetch, no caching. Credential acquisition
//! is the caller's concern; the client only attaches a precomputed
//! `Authorization` header.
//!
//! # Example
//!
//! ```ignore
//! use confluence_client::{ConfluenceClient, Content};
//!
//! let client = ConfluenceClient::with_basic_auth(
//!     "https://confluence.example.com",
//!     "user",
//!     "api-token",
//! );
//!
//! let mut page = Content::page();
//! page.title = "Release notes".to_owned();
//! page.space = Some("DOC".to_owned());
//! page.body = "<p>Shipped.</p>".to_owned();
//!
//! let created = client.create(&page)?;
//! println!("created page {:?}", created.id);
//! ```

// API client
mod client;
pub use client::ConfluenceClient;

// Configuration
mod config;
pub use config::{ClientConfig, ConfigError};

// Errors
pub mod error;
pub use error::{ConfluenceError, HydrationError};

// JSON hydration helpers (internal)
mod hydrate;

// Entity types
mod types;
pub use types::{
    Container, Content, ContentBody, ContentSearchResult, ContentType, SUPPORTED_REPRESENTATIONS,
};

// REST path construction
mod uri;
pub use uri::restful_uri;
