//! Rich-text renderer with pluggable backend.

use serde_json::Value;
use tracing::debug;

use crate::backend::{Block, RenderBackend};
use crate::html::HtmlBackend;
use crate::node::{Document, Node, RichText};
use crate::text::TextBackend;
use crate::util::{strip_tags, word_count};

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Renders CMS rich-text values.
///
/// The default renderer accepts only `doc` roots (optionally inside an `iv`
/// envelope) and inserts text verbatim. Rendering never fails: values it
/// cannot interpret produce an empty string.
///
/// # Example
///
/// ```
/// use folio_richtext::RichTextRenderer;
/// use serde_json::json;
///
/// let doc = json!({
///     "type": "doc",
///     "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Hi"}]}]
/// });
/// let html = RichTextRenderer::new().with_escaping(true).render(&doc);
/// assert_eq!(html, "<p>Hi</p>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RichTextRenderer {
    lenient_root: bool,
    escape: bool,
}

impl RichTextRenderer {
    /// Create a renderer with strict root handling and verbatim output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also render a bare node, or an array of nodes, that has no `doc` root.
    #[must_use]
    pub fn with_lenient_root(mut self, enabled: bool) -> Self {
        self.lenient_root = enabled;
        self
    }

    /// HTML-escape text and attribute values.
    #[must_use]
    pub fn with_escaping(mut self, enabled: bool) -> Self {
        self.escape = enabled;
        self
    }

    /// Classify a value according to this renderer's root handling.
    pub fn parse(&self, value: &Value) -> RichText {
        let rich_text = RichText::classify(value, self.lenient_root);
        if rich_text == RichText::Empty && !value.is_null() {
            debug!("rich-text value has no renderable root, rendering nothing");
        }
        rich_text
    }

    /// Render a value to HTML.
    pub fn render(&self, value: &Value) -> String {
        match self.parse(value) {
            RichText::Html(html) => html,
            RichText::Document(doc) => self.render_document(&doc),
            RichText::Empty => String::new(),
        }
    }

    /// Render a value to plain text.
    ///
    /// Pass-through markup has its tags stripped.
    pub fn render_text(&self, value: &Value) -> String {
        match self.parse(value) {
            RichText::Html(html) => strip_tags(&html),
            RichText::Document(doc) => doc.plain_text(),
            RichText::Empty => String::new(),
        }
    }

    /// Render a parsed document to HTML.
    pub fn render_document(&self, doc: &Document) -> String {
        let backend = if self.escape {
            HtmlBackend::escaping()
        } else {
            HtmlBackend::new()
        };
        render_with(&backend, doc)
    }
}

/// Render a document through any backend.
pub fn render_with<B: RenderBackend>(backend: &B, doc: &Document) -> String {
    let mut out = String::with_capacity(1024);
    render_nodes(backend, &doc.content, &mut out);
    out
}

fn render_nodes<B: RenderBackend>(backend: &B, nodes: &[Node], out: &mut String) {
    for node in nodes {
        render_node(backend, node, out);
    }
}

fn render_node<B: RenderBackend>(backend: &B, node: &Node, out: &mut String) {
    let block = match node {
        Node::Text(text) => {
            backend.text(&text.text, &text.marks, out);
            return;
        }
        Node::Image(image) => {
            backend.image(image, out);
            return;
        }
        Node::HardBreak => {
            backend.hard_break(out);
            return;
        }
        Node::HorizontalRule => {
            backend.horizontal_rule(out);
            return;
        }
        Node::Unknown { content, .. } => {
            render_nodes(backend, content, out);
            return;
        }
        Node::Paragraph(_) => Block::Paragraph,
        Node::BulletList(_) => Block::BulletList,
        Node::OrderedList(_) => Block::OrderedList,
        Node::ListItem(_) => Block::ListItem,
        Node::Heading { level, .. } => Block::Heading(level),
        Node::CodeBlock { language, .. } => Block::CodeBlock(language),
        Node::Blockquote(_) => Block::Blockquote,
        Node::Table(_) => Block::Table,
        Node::TableRow(_) => Block::TableRow,
        Node::TableCell(_) => Block::TableCell,
        Node::TableHeader(_) => Block::TableHeader,
    };

    backend.block_start(block, out);
    render_nodes(backend, node.children(), out);
    backend.block_end(block, out);
}

impl Document {
    /// Plain-text form of the document, trailing whitespace trimmed.
    pub fn plain_text(&self) -> String {
        let mut text = render_with(&TextBackend, self);
        text.truncate(text.trim_end().len());
        text
    }

    /// Number of whitespace-separated words in the plain text.
    pub fn word_count(&self) -> usize {
        word_count(&self.plain_text())
    }

    /// Estimated reading time in whole minutes, at least one.
    pub fn reading_time_minutes(&self, words_per_minute: u32) -> u32 {
        reading_time_minutes(self.word_count(), words_per_minute)
    }
}

/// Minutes needed to read `words` at `words_per_minute`, rounded up, at least one.
///
/// A zero rate falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn reading_time_minutes(words: usize, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let minutes = words.div_ceil(wpm as usize).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: &Value) -> String {
        RichTextRenderer::new().render(value)
    }

    fn doc(content: Value) -> Value {
        json!({"type": "doc", "content": content})
    }

    fn text(s: &str) -> Value {
        json!({"type": "text", "text": s})
    }

    #[test]
    fn test_non_object_inputs_render_empty() {
        for value in [
            json!(null),
            json!(42),
            json!(0),
            json!(true),
            json!(false),
            json!([]),
            json!([{"type": "doc", "content": []}]),
        ] {
            assert_eq!(render(&value), "", "input: {value}");
        }
    }

    #[test]
    fn test_string_passthrough() {
        assert_eq!(render(&json!("<p>already</p>")), "<p>already</p>");
        assert_eq!(render(&json!("")), "");
    }

    #[test]
    fn test_envelope_is_transparent() {
        let inner = doc(json!([{"type": "paragraph", "content": [text("x")]}]));
        let wrapped = json!({"iv": inner.clone()});
        assert_eq!(render(&wrapped), render(&inner));
        assert_eq!(render(&wrapped), "<p>x</p>");
    }

    #[test]
    fn test_envelope_around_string() {
        assert_eq!(render(&json!({"iv": "<b>x</b>"})), "<b>x</b>");
    }

    #[test]
    fn test_unknown_tag_renders_children() {
        let value = doc(json!([{"type": "mystery", "content": [text("x")]}]));
        assert_eq!(render(&value), "x");
    }

    #[test]
    fn test_unknown_leaf_renders_nothing() {
        let value = doc(json!([{"type": "mystery"}, {"type": "paragraph", "content": [text("after")]}]));
        assert_eq!(render(&value), "<p>after</p>");
    }

    #[test]
    fn test_untyped_node_renders_nothing_even_with_children() {
        let value = doc(json!([{"content": [text("hidden")]}, text("shown")]));
        assert_eq!(render(&value), "shown");
    }

    #[test]
    fn test_mark_nesting_order() {
        let value = doc(json!([{
            "type": "text",
            "text": "hi",
            "marks": [{"type": "bold"}, {"type": "italic"}]
        }]));
        assert_eq!(render(&value), "<em><strong>hi</strong></em>");
    }

    #[test]
    fn test_heading_level_default() {
        let value = doc(json!([{"type": "heading", "content": [text("T")]}]));
        assert_eq!(render(&value), "<h1>T</h1>");
    }

    #[test]
    fn test_heading_level_given() {
        let value = doc(json!([{"type": "heading", "attrs": {"level": 3}, "content": [text("T")]}]));
        assert_eq!(render(&value), "<h3>T</h3>");
    }

    #[test]
    fn test_table_nesting() {
        let value = doc(json!([{
            "type": "table",
            "content": [
                {"type": "tableRow", "content": [
                    {"type": "tableHeader", "content": [text("Name")]}
                ]},
                {"type": "tableRow", "content": [
                    {"type": "tableCell", "content": [text("Alice")]}
                ]}
            ]
        }]));
        assert_eq!(
            render(&value),
            concat!(
                r#"<table style="width: 100%; border-collapse: collapse; margin: 1rem 0;">"#,
                r#"<tr><th style="border: 1px solid var(--border-color); padding: 0.5rem; font-weight: bold;">Name</th></tr>"#,
                r#"<tr><td style="border: 1px solid var(--border-color); padding: 0.5rem;">Alice</td></tr>"#,
                "</table>"
            )
        );
    }

    #[test]
    fn test_image_alignment() {
        let image = |align: Option<&str>| {
            let attrs = match align {
                Some(a) => json!({"src": "p.png", "align": a}),
                None => json!({"src": "p.png"}),
            };
            render(&doc(json!([{"type": "image", "attrs": attrs}])))
        };

        assert!(image(Some("left")).contains("float: left"));
        assert!(image(Some("right")).contains("float: right"));
        for centered in [image(Some("center")), image(None)] {
            assert!(!centered.contains("float"));
            assert!(centered.contains("max-width: 100%"));
            assert!(centered.contains("display: block"));
        }
    }

    #[test]
    fn test_end_to_end_paragraph() {
        let value = doc(json!([{
            "type": "paragraph",
            "content": [
                text("Hello, "),
                {"type": "text", "text": "world!", "marks": [{"type": "bold"}]}
            ]
        }]));
        assert_eq!(render(&value), "<p>Hello, <strong>world!</strong></p>");
    }

    #[test]
    fn test_lists_and_blocks() {
        let value = doc(json!([
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [text("a")]}]}
            ]},
            {"type": "orderedList", "content": [
                {"type": "listItem", "content": [text("b")]}
            ]},
            {"type": "blockquote", "content": [text("q"), {"type": "hardBreak"}, text("r")]},
            {"type": "horizontalRule"},
            {"type": "codeBlock", "attrs": {"language": "rust"}, "content": [text("fn main() {}")]}
        ]));
        assert_eq!(
            render(&value),
            concat!(
                "<ul><li><p>a</p></li></ul>",
                "<ol><li>b</li></ol>",
                "<blockquote>q<br>r</blockquote>",
                "<hr>",
                r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
            )
        );
    }

    #[test]
    fn test_strict_root_ignores_bare_nodes() {
        assert_eq!(render(&json!({"type": "paragraph", "content": [text("x")]})), "");
        assert_eq!(render(&json!({"type": "doc"})), "");
        assert_eq!(render(&json!({"type": "doc", "content": "nope"})), "");
    }

    #[test]
    fn test_lenient_root_renders_bare_nodes() {
        let renderer = RichTextRenderer::new().with_lenient_root(true);
        assert_eq!(
            renderer.render(&json!({"type": "paragraph", "content": [text("x")]})),
            "<p>x</p>"
        );
        assert_eq!(
            renderer.render(&json!([{"type": "hardBreak"}, {"type": "horizontalRule"}])),
            "<br><hr>"
        );
    }

    #[test]
    fn test_escaping() {
        let value = doc(json!([
            {"type": "paragraph", "content": [text("<script>alert(1)</script>")]},
            {"type": "image", "attrs": {"src": "x\" onerror=\"y"}}
        ]));
        let html = RichTextRenderer::new().with_escaping(true).render(&value);
        assert!(html.starts_with("<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"));
        assert!(html.contains(r#"src="x&quot; onerror=&quot;y""#));
    }

    #[test]
    fn test_escaping_leaves_passthrough_alone() {
        let html = RichTextRenderer::new()
            .with_escaping(true)
            .render(&json!("<p>trusted</p>"));
        assert_eq!(html, "<p>trusted</p>");
    }

    #[test]
    fn test_render_text() {
        let value = doc(json!([
            {"type": "heading", "content": [text("Title")]},
            {"type": "paragraph", "content": [text("one "), {"type": "text", "text": "two", "marks": [{"type": "bold"}]}]},
            {"type": "image", "attrs": {"src": "p.png", "alt": "ignored"}}
        ]));
        assert_eq!(RichTextRenderer::new().render_text(&value), "Title\none two");
    }

    #[test]
    fn test_render_text_strips_passthrough_markup() {
        let text = RichTextRenderer::new().render_text(&json!("<p>a <em>b</em></p>"));
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_word_count_and_reading_time() {
        let words = vec!["word"; 450].join(" ");
        let value = doc(json!([{"type": "paragraph", "content": [text(&words)]}]));
        let RichText::Document(document) = RichText::from_value(&value) else {
            panic!("expected document");
        };
        assert_eq!(document.word_count(), 450);
        assert_eq!(document.reading_time_minutes(200), 3);
    }

    #[test]
    fn test_reading_time_minimum_and_default_rate() {
        assert_eq!(reading_time_minutes(0, 200), 1);
        assert_eq!(reading_time_minutes(200, 200), 1);
        assert_eq!(reading_time_minutes(201, 200), 2);
        assert_eq!(reading_time_minutes(400, 0), 2);
    }
}
