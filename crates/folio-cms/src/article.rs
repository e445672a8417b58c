//! Blog article view model.
//!
//! Maps a raw content item onto the fields the article pages display,
//! rendering the rich-text body and filling in display defaults.

use folio_richtext::{DEFAULT_WORDS_PER_MINUTE, RichTextRenderer, reading_time_minutes};
use serde::Serialize;
use serde_json::Value;

use crate::types::ContentItem;

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 300;

const UNTITLED: &str = "Untitled";
const NO_CONTENT: &str = "No content available";
const UNKNOWN_AUTHOR: &str = "Unknown";
const DEFAULT_STATUS: &str = "draft";

/// How articles are built from content items.
#[derive(Debug, Clone, Copy)]
pub struct ArticleOptions {
    /// Renderer for the `content` field.
    pub renderer: RichTextRenderer,
    /// Reading speed for the reading-time estimate.
    pub words_per_minute: u32,
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self {
            renderer: RichTextRenderer::new(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// A blog article ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Rendered HTML body.
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub publish_date: Option<String>,
    pub slug: String,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub status: String,
    /// Words in the plain-text body.
    pub word_count: usize,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub created: Option<String>,
    pub last_modified: Option<String>,
}

impl Article {
    /// Build an article from a content item.
    pub fn from_item(item: &ContentItem, options: &ArticleOptions) -> Self {
        let body = item.field("content");

        let content = body
            .map(|value| options.renderer.render(value))
            .filter(|html| !html.is_empty())
            .unwrap_or_else(|| NO_CONTENT.to_owned());

        let words = body
            .map(|value| options.renderer.render_text(value))
            .map_or(0, |text| text.split_whitespace().count());

        Self {
            id: item.id.clone(),
            title: item.field_str("title").unwrap_or(UNTITLED).to_owned(),
            content,
            excerpt: item.field_str("excerpt").unwrap_or_default().to_owned(),
            author: item.field_str("author").unwrap_or(UNKNOWN_AUTHOR).to_owned(),
            publish_date: item
                .field_str("publishDate")
                .or_else(|| non_empty(item.last_modified.as_deref()))
                .or_else(|| non_empty(item.created.as_deref()))
                .map(str::to_owned),
            slug: item.field_str("slug").unwrap_or_default().to_owned(),
            tags: item.field("tags").map(string_list).unwrap_or_default(),
            featured_image: item.field("featuredImage").and_then(first_string),
            status: item
                .field_str("status")
                .or_else(|| non_empty(item.status.as_deref()))
                .unwrap_or(DEFAULT_STATUS)
                .to_owned(),
            word_count: words,
            reading_time: reading_time_minutes(words, options.words_per_minute),
            created: item.created.clone(),
            last_modified: item.last_modified.clone(),
        }
    }

    /// First `max_chars` characters of the rendered body followed by `...`.
    ///
    /// The cut is made on a character boundary and may fall inside a tag.
    pub fn preview(&self, max_chars: usize) -> String {
        let end = self
            .content
            .char_indices()
            .nth(max_chars)
            .map_or(self.content.len(), |(idx, _)| idx);
        format!("{}...", &self.content[..end])
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// String entries of an array value; other entries are skipped.
fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// A non-empty string, or the first non-empty string of an array.
fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .find(|s| !s.is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item(value: Value) -> ContentItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_article() {
        let item = item(json!({
            "id": "a1",
            "created": "2024-01-01",
            "lastModified": "2024-01-03",
            "status": "Published",
            "data": {
                "title": {"iv": "First post"},
                "excerpt": {"iv": "Short"},
                "author": {"iv": "Sam"},
                "publishDate": {"iv": "2024-01-02"},
                "slug": {"iv": "first-post"},
                "tags": {"iv": ["rust", 3, "cms"]},
                "featuredImage": {"iv": ["img-1"]},
                "status": {"iv": "featured"},
                "content": {"iv": {
                    "type": "doc",
                    "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Hello there"}]}]
                }}
            }
        }));

        let article = Article::from_item(&item, &ArticleOptions::default());
        assert_eq!(
            article,
            Article {
                id: "a1".to_owned(),
                title: "First post".to_owned(),
                content: "<p>Hello there</p>".to_owned(),
                excerpt: "Short".to_owned(),
                author: "Sam".to_owned(),
                publish_date: Some("2024-01-02".to_owned()),
                slug: "first-post".to_owned(),
                tags: vec!["rust".to_owned(), "cms".to_owned()],
                featured_image: Some("img-1".to_owned()),
                status: "featured".to_owned(),
                word_count: 2,
                reading_time: 1,
                created: Some("2024-01-01".to_owned()),
                last_modified: Some("2024-01-03".to_owned()),
            }
        );
    }

    #[test]
    fn test_defaults_for_empty_item() {
        let article = Article::from_item(&item(json!({"id": "b2"})), &ArticleOptions::default());
        assert_eq!(article.title, "Untitled");
        assert_eq!(article.content, "No content available");
        assert_eq!(article.author, "Unknown");
        assert_eq!(article.excerpt, "");
        assert_eq!(article.slug, "");
        assert!(article.tags.is_empty());
        assert_eq!(article.featured_image, None);
        assert_eq!(article.status, "draft");
        assert_eq!(article.publish_date, None);
        assert_eq!(article.word_count, 0);
        assert_eq!(article.reading_time, 1);
    }

    #[test]
    fn test_publish_date_and_status_fallbacks() {
        let article = Article::from_item(
            &item(json!({
                "id": "c3",
                "created": "2024-01-01",
                "lastModified": "2024-02-01",
                "status": "Published"
            })),
            &ArticleOptions::default(),
        );
        assert_eq!(article.publish_date.as_deref(), Some("2024-02-01"));
        assert_eq!(article.status, "Published");

        let created_only = Article::from_item(
            &item(json!({"id": "c4", "created": "2024-01-01"})),
            &ArticleOptions::default(),
        );
        assert_eq!(created_only.publish_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_bare_node_content_needs_lenient_renderer() {
        let item = item(json!({
            "id": "d4",
            "data": {"content": {"iv": {"type": "paragraph", "content": [{"type": "text", "text": "x"}]}}}
        }));

        let strict = Article::from_item(&item, &ArticleOptions::default());
        assert_eq!(strict.content, "No content available");

        let lenient = Article::from_item(
            &item,
            &ArticleOptions {
                renderer: RichTextRenderer::new().with_lenient_root(true),
                ..ArticleOptions::default()
            },
        );
        assert_eq!(lenient.content, "<p>x</p>");
    }

    #[test]
    fn test_html_string_content_passes_through() {
        let article = Article::from_item(
            &item(json!({"id": "e5", "data": {"content": {"iv": "<p>legacy</p>"}}})),
            &ArticleOptions::default(),
        );
        assert_eq!(article.content, "<p>legacy</p>");
    }

    #[test]
    fn test_reading_time_uses_word_count() {
        let words = vec!["w"; 401].join(" ");
        let article = Article::from_item(
            &item(json!({"id": "f6", "data": {"content": {"iv": {
                "type": "doc",
                "content": [{"type": "paragraph", "content": [{"type": "text", "text": words}]}]
            }}}})),
            &ArticleOptions::default(),
        );
        assert_eq!(article.word_count, 401);
        assert_eq!(article.reading_time, 3);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let mut article = Article::from_item(&item(json!({"id": "g7"})), &ArticleOptions::default());
        article.content = "héllo wörld".to_owned();
        assert_eq!(article.preview(5), "héllo...");
        assert_eq!(article.preview(100), "héllo wörld...");
    }
}
