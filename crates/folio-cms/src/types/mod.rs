//! CMS API types.

mod content;
mod token;

pub use content::{ContentItem, ContentsResponse};
pub use token::TokenResponse;
