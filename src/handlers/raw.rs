//! Raw HTML passthrough handler.

use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawPayload {
    html: String,
}

/// Renders `raw` blocks: the payload's html field, verbatim, never escaped.
/// Both targets receive the same passthrough.
#[derive(Debug, Default)]
pub struct RawHtmlHandler;

impl RawHtmlHandler {
    /// Create a new raw handler.
    pub fn new() -> Self {
        Self
    }

    fn raw(&self, block: &Block) -> Result<String> {
        let raw: RawPayload = block.decode()?;
        Ok(raw.html)
    }
}

impl HtmlBlockHandler for RawHtmlHandler {
    fn block_type(&self) -> &'static str {
        "raw"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        self.raw(block)
    }
}

impl MarkdownBlockHandler for RawHtmlHandler {
    fn block_type(&self) -> &'static str {
        "raw"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        self.raw(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_block(data: &str) -> Block {
        serde_json::from_str(&format!(r#"{{"type": "raw", "data": {data}}}"#)).unwrap()
    }

    #[test]
    fn test_passthrough_is_verbatim() {
        let handler = RawHtmlHandler::new();
        let block = raw_block(r#"{"html": "<table><tr><td>&nbsp;</td></tr></table>"}"#);
        let expected = "<table><tr><td>&nbsp;</td></tr></table>";
        assert_eq!(handler.render_html(&block).unwrap(), expected);
        assert_eq!(handler.render_markdown(&block).unwrap(), expected);
    }

    #[test]
    fn test_missing_html_field_fails_decode() {
        let handler = RawHtmlHandler::new();
        let block = raw_block(r#"{"markup": "<hr>"}"#);
        assert!(handler.render_html(&block).is_err());
    }
}
