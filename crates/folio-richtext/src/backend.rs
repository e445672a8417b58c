//! Output backend abstraction.

use crate::node::{Image, Mark};

/// Container node kinds handed to a backend around their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Paragraph,
    BulletList,
    OrderedList,
    ListItem,
    Heading(&'a str),
    CodeBlock(&'a str),
    Blockquote,
    Table,
    TableRow,
    TableCell,
    TableHeader,
}

/// Format-specific rendering of document nodes.
///
/// The renderer walks the tree depth-first and calls `block_start`, the
/// children, then `block_end` for every container. Leaves go to the
/// dedicated methods. Unknown containers call neither block method.
pub trait RenderBackend {
    /// Render a text leaf, applying marks in order.
    fn text(&self, text: &str, marks: &[Mark], out: &mut String);

    /// Open a container.
    fn block_start(&self, block: Block<'_>, out: &mut String);

    /// Close a container.
    fn block_end(&self, block: Block<'_>, out: &mut String);

    /// Render an image leaf.
    fn image(&self, image: &Image, out: &mut String);

    /// Render a line break.
    fn hard_break(&self, out: &mut String);

    /// Render a horizontal rule.
    fn horizontal_rule(&self, out: &mut String);
}
