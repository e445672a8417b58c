//! Rich-text document model and renderer for headless-CMS content.
//!
//! The CMS stores formatted text as a JSON tree of typed nodes (`doc`,
//! `paragraph`, `text` with marks, lists, tables, images...). This crate
//! converts such a value into an HTML fragment, or into plain text for word
//! counts.
//!
//! # Architecture
//!
//! - [`Node`] / [`Document`] / [`RichText`]: tolerant conversion from
//!   [`serde_json::Value`] into a closed tree type
//! - [`RichTextRenderer`]: walks the tree and delegates output to a
//!   [`RenderBackend`]
//! - [`HtmlBackend`] and [`TextBackend`]: the two backends
//!
//! Rendering is total: any input yields a string, possibly empty.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let field = json!({"iv": {
//!     "type": "doc",
//!     "content": [{
//!         "type": "paragraph",
//!         "content": [
//!             {"type": "text", "text": "Hello, "},
//!             {"type": "text", "text": "world!", "marks": [{"type": "bold"}]}
//!         ]
//!     }]
//! }});
//! assert_eq!(folio_richtext::to_html(&field), "<p>Hello, <strong>world!</strong></p>");
//! ```

mod backend;
mod html;
mod node;
mod renderer;
mod text;
mod util;

pub use backend::{Block, RenderBackend};
pub use html::HtmlBackend;
pub use node::{Align, Document, Image, Mark, Node, RichText, Text};
pub use renderer::{DEFAULT_WORDS_PER_MINUTE, RichTextRenderer, reading_time_minutes, render_with};
pub use text::TextBackend;
pub use util::{escape_html, strip_tags};

use serde_json::Value;

/// Render a CMS rich-text value to HTML with the default renderer.
///
/// Strings pass through, `doc` roots (optionally in an `iv` envelope) are
/// rendered, everything else yields an empty string.
pub fn to_html(value: &Value) -> String {
    RichTextRenderer::new().render(value)
}
