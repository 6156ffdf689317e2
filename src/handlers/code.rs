//! Code block handler.

use super::cleanup::TagStripper;
use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CodeBlockPayload {
    code: String,
    language: String,
}

/// Renders `codeBlock` blocks.
///
/// HTML output carries the code through unchanged. Markdown output fences
/// the code and first strips editor markup out of it, since pasted code
/// often arrives wrapped in formatting tags.
pub struct CodeBlockHandler {
    stripper: TagStripper,
}

impl CodeBlockHandler {
    /// Create a new code block handler.
    pub fn new() -> Self {
        Self {
            stripper: TagStripper::new(),
        }
    }
}

impl Default for CodeBlockHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlBlockHandler for CodeBlockHandler {
    fn block_type(&self) -> &'static str {
        "codeBlock"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        let code_block: CodeBlockPayload = block.decode()?;
        Ok(format!(
            r#"<pre><code class="{}">{}</code></pre>"#,
            code_block.language, code_block.code
        ))
    }
}

impl MarkdownBlockHandler for CodeBlockHandler {
    fn block_type(&self) -> &'static str {
        "codeBlock"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        let code_block: CodeBlockPayload = block.decode()?;
        let code = self.stripper.clean(&code_block.code);
        Ok(format!("```{}\n{}\n```", code_block.language, code))
    }
}
