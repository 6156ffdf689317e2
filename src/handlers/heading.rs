//! Heading block handler.

use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HeadingPayload {
    text: String,
    level: u8,
}

/// Renders `heading` blocks as `<hN>` elements or `#`-prefixed lines.
#[derive(Debug, Default)]
pub struct HeadingHandler;

impl HeadingHandler {
    /// Create a new heading handler.
    pub fn new() -> Self {
        Self
    }
}

impl HtmlBlockHandler for HeadingHandler {
    fn block_type(&self) -> &'static str {
        "heading"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        let heading: HeadingPayload = block.decode()?;
        Ok(format!(
            "<h{level}>{text}</h{level}>",
            level = heading.level,
            text = heading.text
        ))
    }
}

impl MarkdownBlockHandler for HeadingHandler {
    fn block_type(&self) -> &'static str {
        "heading"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        let heading: HeadingPayload = block.decode()?;
        Ok(format!(
            "{} {}",
            "#".repeat(heading.level as usize),
            heading.text
        ))
    }
}
