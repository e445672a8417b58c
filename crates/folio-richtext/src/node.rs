//! Rich-text document model.
//!
//! CMS documents arrive as loosely-typed JSON trees. Conversion into the
//! types here never fails: missing or malformed `content`, `attrs` and
//! `marks` become empty, and a value without a usable `type` is dropped.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::util::{attr, is_truthy, primitive_text};

/// Tag of the document root.
const DOC_TAG: &str = "doc";

/// Key of the invariant-locale envelope.
const INVARIANT_KEY: &str = "iv";

/// Inline formatting applied to a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    /// Hyperlink. `href` is `None` when the mark has no usable target.
    Link { href: Option<String> },
    /// Mark tag with no rendering rule.
    Unknown(String),
}

impl Mark {
    /// Convert a JSON mark. Values that are not objects with a `type` are skipped.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let tag = tag_of(obj)?;
        Some(match tag.as_ref() {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "code" => Self::Code,
            "link" => Self::Link {
                href: attr(obj, "href"),
            },
            other => Self::Unknown(other.to_owned()),
        })
    }
}

/// Horizontal placement of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    Right,
    #[default]
    Center,
}

impl Align {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("left") => Self::Left,
            Some("right") => Self::Right,
            _ => Self::Center,
        }
    }
}

/// Text leaf with its marks in application order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub text: String,
    pub marks: Vec<Mark>,
}

/// Image leaf. Unset attributes are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub align: Align,
}

/// A node of a rich-text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Paragraph(Vec<Node>),
    Text(Text),
    BulletList(Vec<Node>),
    OrderedList(Vec<Node>),
    ListItem(Vec<Node>),
    /// Heading. `level` is the attribute as given, `"1"` when unset.
    Heading {
        level: String,
        content: Vec<Node>,
    },
    Image(Image),
    HardBreak,
    /// Code block. `language` is empty when unset.
    CodeBlock {
        language: String,
        content: Vec<Node>,
    },
    Blockquote(Vec<Node>),
    HorizontalRule,
    Table(Vec<Node>),
    TableRow(Vec<Node>),
    TableCell(Vec<Node>),
    TableHeader(Vec<Node>),
    /// Node tag with no rendering rule of its own; its children still render.
    Unknown {
        tag: String,
        content: Vec<Node>,
    },
}

impl Node {
    /// Convert a JSON node.
    ///
    /// Returns `None` for values that are not objects or carry no `type`;
    /// such values render as nothing.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let tag = tag_of(obj)?;
        let children = || children_of(obj);

        Some(match tag.as_ref() {
            "paragraph" => Self::Paragraph(children()),
            "text" => Self::Text(Text {
                text: obj.get("text").and_then(primitive_text).unwrap_or_default(),
                marks: marks_of(obj),
            }),
            "bulletList" => Self::BulletList(children()),
            "orderedList" => Self::OrderedList(children()),
            "listItem" => Self::ListItem(children()),
            "heading" => Self::Heading {
                level: attr(obj, "level").unwrap_or_else(|| "1".to_owned()),
                content: children(),
            },
            "image" => Self::Image(Image {
                src: attr(obj, "src").unwrap_or_default(),
                alt: attr(obj, "alt").unwrap_or_default(),
                title: attr(obj, "title").unwrap_or_default(),
                align: Align::parse(attr(obj, "align").as_deref()),
            }),
            "hardBreak" => Self::HardBreak,
            "codeBlock" => Self::CodeBlock {
                language: attr(obj, "language").unwrap_or_default(),
                content: children(),
            },
            "blockquote" => Self::Blockquote(children()),
            "horizontalRule" => Self::HorizontalRule,
            "table" => Self::Table(children()),
            "tableRow" => Self::TableRow(children()),
            "tableCell" => Self::TableCell(children()),
            "tableHeader" => Self::TableHeader(children()),
            other => Self::Unknown {
                tag: other.to_owned(),
                content: children(),
            },
        })
    }

    /// Child nodes. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Paragraph(c)
            | Self::BulletList(c)
            | Self::OrderedList(c)
            | Self::ListItem(c)
            | Self::Blockquote(c)
            | Self::Table(c)
            | Self::TableRow(c)
            | Self::TableCell(c)
            | Self::TableHeader(c)
            | Self::Heading { content: c, .. }
            | Self::CodeBlock { content: c, .. }
            | Self::Unknown { content: c, .. } => c.as_slice(),
            Self::Text(_) | Self::Image(_) | Self::HardBreak | Self::HorizontalRule => &[],
        }
    }
}

/// A `doc` root and its top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub content: Vec<Node>,
}

impl Document {
    /// Build a document from top-level nodes.
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Whether the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A CMS rich-text field value after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichText {
    /// Already-rendered markup, passed through unchanged.
    Html(String),
    /// A document tree to render.
    Document(Document),
    /// Nothing renderable.
    Empty,
}

impl RichText {
    /// Classify a field value, accepting only `doc` roots as documents.
    pub fn from_value(value: &Value) -> Self {
        Self::classify(value, false)
    }

    /// Classify a field value.
    ///
    /// With `lenient_root`, a bare node or an array of nodes is accepted as
    /// the content of an implicit `doc` root.
    pub(crate) fn classify(value: &Value, lenient_root: bool) -> Self {
        match value {
            Value::String(s) => Self::Html(s.clone()),
            Value::Object(obj) => {
                if let Some(inner) = obj.get(INVARIANT_KEY).filter(|v| is_truthy(v)) {
                    return Self::classify(inner, lenient_root);
                }
                match tag_of(obj) {
                    Some(tag) if tag == DOC_TAG => {
                        Self::Document(Document::new(children_of(obj)))
                    }
                    Some(_) if lenient_root => Node::from_value(value)
                        .map_or(Self::Empty, |node| Self::Document(Document::new(vec![node]))),
                    _ => Self::Empty,
                }
            }
            Value::Array(items) if lenient_root => {
                Self::Document(Document::new(items.iter().filter_map(Node::from_value).collect()))
            }
            _ => Self::Empty,
        }
    }
}

/// Read the `type` tag. Unset tags yield `None`; non-string tags are
/// stringified so they fall through to the unknown-tag rule.
fn tag_of(obj: &Map<String, Value>) -> Option<Cow<'_, str>> {
    match obj.get("type")? {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        other if is_truthy(other) => Some(Cow::Owned(other.to_string())),
        _ => None,
    }
}

fn children_of(obj: &Map<String, Value>) -> Vec<Node> {
    obj.get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Node::from_value).collect())
        .unwrap_or_default()
}

fn marks_of(obj: &Map<String, Value>) -> Vec<Mark> {
    obj.get("marks")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Mark::from_value).collect())
        .unwrap_or_default()
}
