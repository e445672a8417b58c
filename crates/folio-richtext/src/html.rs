//! HTML backend for rich-text rendering.
//!
//! Produces the fragment the article pages inject as inner markup.

use std::borrow::Cow;
use std::fmt::Write;

use crate::backend::{Block, RenderBackend};
use crate::node::{Align, Image, Mark};
use crate::util::escape_html;

const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin: 1rem 0;";
const CELL_STYLE: &str = "border: 1px solid var(--border-color); padding: 0.5rem;";
const HEADER_STYLE: &str =
    "border: 1px solid var(--border-color); padding: 0.5rem; font-weight: bold;";

const IMAGE_STYLE_LEFT: &str = "max-width: 50%; height: auto; margin: 0 1.5rem 1rem 0; float: left;";
const IMAGE_STYLE_RIGHT: &str =
    "max-width: 50%; height: auto; margin: 0 0 1rem 1.5rem; float: right;";
const IMAGE_STYLE_CENTER: &str = "max-width: 100%; height: auto; margin: 2rem auto; display: block;";

/// HTML render backend.
///
/// Text and attribute values are inserted verbatim unless escaping is
/// enabled. Verbatim output must only be used for trusted content.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend {
    escape: bool,
}

impl HtmlBackend {
    /// Backend that inserts text and attributes verbatim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that HTML-escapes text and attribute values.
    #[must_use]
    pub fn escaping() -> Self {
        Self { escape: true }
    }

    fn value<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Inline style for an image placement.
pub(crate) fn image_style(align: Align) -> &'static str {
    match align {
        Align::Left => IMAGE_STYLE_LEFT,
        Align::Right => IMAGE_STYLE_RIGHT,
        Align::Center => IMAGE_STYLE_CENTER,
    }
}

impl RenderBackend for HtmlBackend {
    fn text(&self, text: &str, marks: &[Mark], out: &mut String) {
        let mut html = self.value(text).into_owned();
        for mark in marks {
            html = match mark {
                Mark::Bold => format!("<strong>{html}</strong>"),
                Mark::Italic => format!("<em>{html}</em>"),
                Mark::Underline => format!("<u>{html}</u>"),
                Mark::Code => format!("<code>{html}</code>"),
                Mark::Link { href } => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{html}</a>"#,
                    self.value(href.as_deref().unwrap_or("#"))
                ),
                Mark::Unknown(_) => continue,
            };
        }
        out.push_str(&html);
    }

    fn block_start(&self, block: Block<'_>, out: &mut String) {
        match block {
            Block::Paragraph => out.push_str("<p>"),
            Block::BulletList => out.push_str("<ul>"),
            Block::OrderedList => out.push_str("<ol>"),
            Block::ListItem => out.push_str("<li>"),
            Block::Heading(level) => {
                write!(out, "<h{}>", self.value(level)).unwrap();
            }
            Block::CodeBlock(language) => {
                write!(
                    out,
                    r#"<pre><code class="language-{}">"#,
                    self.value(language)
                )
                .unwrap();
            }
            Block::Blockquote => out.push_str("<blockquote>"),
            Block::Table => {
                write!(out, r#"<table style="{TABLE_STYLE}">"#).unwrap();
            }
            Block::TableRow => out.push_str("<tr>"),
            Block::TableCell => {
                write!(out, r#"<td style="{CELL_STYLE}">"#).unwrap();
            }
            Block::TableHeader => {
                write!(out, r#"<th style="{HEADER_STYLE}">"#).unwrap();
            }
        }
    }

    fn block_end(&self, block: Block<'_>, out: &mut String) {
        match block {
            Block::Paragraph => out.push_str("</p>"),
            Block::BulletList => out.push_str("</ul>"),
            Block::OrderedList => out.push_str("</ol>"),
            Block::ListItem => out.push_str("</li>"),
            Block::Heading(level) => {
                write!(out, "</h{}>", self.value(level)).unwrap();
            }
            Block::CodeBlock(_) => out.push_str("</code></pre>"),
            Block::Blockquote => out.push_str("</blockquote>"),
            Block::Table => out.push_str("</table>"),
            Block::TableRow => out.push_str("</tr>"),
            Block::TableCell => out.push_str("</td>"),
            Block::TableHeader => out.push_str("</th>"),
        }
    }

    fn image(&self, image: &Image, out: &mut String) {
        write!(
            out,
            r#"<img src="{}" alt="{}" title="{}" style="{}" />"#,
            self.value(&image.src),
            self.value(&image.alt),
            self.value(&image.title),
            image_style(image.align)
        )
        .unwrap();
    }

    fn hard_break(&self, out: &mut String) {
        out.push_str("<br>");
    }

    fn horizontal_rule(&self, out: &mut String) {
        out.push_str("<hr>");
    }
}
