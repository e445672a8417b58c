//! Plain-text backend.
//!
//! Drops markup, marks and images. Block-level nodes end with a newline and
//! table cells with a space, which is enough for word counts and excerpts.

use crate::backend::{Block, RenderBackend};
use crate::node::{Image, Mark};

/// Plain-text render backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBackend;

impl RenderBackend for TextBackend {
    fn text(&self, text: &str, _marks: &[Mark], out: &mut String) {
        out.push_str(text);
    }

    fn block_start(&self, _block: Block<'_>, _out: &mut String) {}

    fn block_end(&self, block: Block<'_>, out: &mut String) {
        match block {
            Block::Paragraph
            | Block::ListItem
            | Block::Heading(_)
            | Block::CodeBlock(_)
            | Block::TableRow => out.push('\n'),
            Block::TableCell | Block::TableHeader => out.push(' '),
            Block::BulletList | Block::OrderedList | Block::Blockquote | Block::Table => {}
        }
    }

    fn image(&self, _image: &Image, _out: &mut String) {}

    fn hard_break(&self, out: &mut String) {
        out.push('\n');
    }

    fn horizontal_rule(&self, out: &mut String) {
        out.push('\n');
    }
}
