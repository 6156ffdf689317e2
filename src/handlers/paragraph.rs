//! Paragraph block handler.

use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ParagraphPayload {
    text: String,
    #[serde(default = "default_alignment")]
    alignment: String,
}

fn default_alignment() -> String {
    "left".to_string()
}

/// Renders `paragraph` blocks.
///
/// Markdown has no native alignment, so any alignment other than `left`
/// falls back to the same HTML fragment in both targets.
#[derive(Debug, Default)]
pub struct ParagraphHandler;

impl ParagraphHandler {
    /// Create a new paragraph handler.
    pub fn new() -> Self {
        Self
    }
}

impl HtmlBlockHandler for ParagraphHandler {
    fn block_type(&self) -> &'static str {
        "paragraph"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        let paragraph: ParagraphPayload = block.decode()?;

        if paragraph.alignment != "left" {
            return Ok(format!(
                r#"<p style="text-align:{}">{}</p>"#,
                paragraph.alignment, paragraph.text
            ));
        }

        Ok(format!("<p>{}</p>", paragraph.text))
    }
}

impl MarkdownBlockHandler for ParagraphHandler {
    fn block_type(&self) -> &'static str {
        "paragraph"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        let paragraph: ParagraphPayload = block.decode()?;

        if paragraph.alignment != "left" {
            return Ok(format!(
                r#"<p style="text-align:{}">{}</p>"#,
                paragraph.alignment, paragraph.text
            ));
        }

        Ok(paragraph.text)
    }
}
