//! Headless CMS integration for folio.
//!
//! Provides a blocking client for a Squidex-style content API and the
//! article view model built from its items:
//!
//! - [`CmsClient`]: OAuth2 client-credentials token exchange, then content
//!   listing for one content type
//! - [`ContentItem`]: raw item with localized (`iv`) field access
//! - [`Article`]: display record with the rich-text body rendered to HTML
//!
//! The client fetches a fresh token on every listing call and keeps no state
//! between calls.

mod article;
mod client;
mod error;
mod types;

pub use article::{Article, ArticleOptions, DEFAULT_PREVIEW_CHARS};
pub use client::CmsClient;
pub use error::CmsError;
pub use types::{ContentItem, ContentsResponse, TokenResponse};
