//! List block handler.

use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ListPayload {
    style: String,
    items: Vec<String>,
}

/// Renders `list` blocks. Any style other than `ordered` is unordered.
#[derive(Debug, Default)]
pub struct ListHandler;

impl ListHandler {
    /// Create a new list handler.
    pub fn new() -> Self {
        Self
    }
}

impl HtmlBlockHandler for ListHandler {
    fn block_type(&self) -> &'static str {
        "list"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        let list: ListPayload = block.decode()?;

        let items: String = list
            .items
            .iter()
            .map(|item| format!("<li>{}</li>", item))
            .collect();

        if list.style == "ordered" {
            Ok(format!("<ol>{}</ol>", items))
        } else {
            Ok(format!("<ul>{}</ul>", items))
        }
    }
}

impl MarkdownBlockHandler for ListHandler {
    fn block_type(&self) -> &'static str {
        "list"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        let list: ListPayload = block.decode()?;

        let prefix = if list.style == "ordered" { "1. " } else { "- " };

        let lines: Vec<String> = list
            .items
            .iter()
            .map(|item| format!("{}{}", prefix, item))
            .collect();

        Ok(lines.join("\n"))
    }
}
