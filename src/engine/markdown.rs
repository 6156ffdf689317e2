//! Markdown conversion engine.

use crate::error::{Error, Result};
use crate::handlers::{
    CodeBlockHandler, HeadingHandler, ImageHandler, ListHandler, ParagraphHandler, RawHtmlHandler,
};
use crate::model::{parse_document, Block};
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;

/// Capability for rendering one block type to Markdown.
///
/// Implement this trait to add support for a new block type, then register
/// the handler with a [`MarkdownEngine`].
pub trait MarkdownBlockHandler: Send + Sync {
    /// The fixed type tag this handler renders.
    fn block_type(&self) -> &'static str;

    /// Render the block's payload into a Markdown fragment.
    fn render_markdown(&self, block: &Block) -> Result<String>;
}

/// Converts block documents to Markdown using a registry of block handlers.
pub struct MarkdownEngine {
    handlers: HashMap<String, Arc<dyn MarkdownBlockHandler>>,
}

impl MarkdownEngine {
    /// Create a new engine with an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create an engine with all built-in handlers registered.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register_handler(Arc::new(HeadingHandler::new()));
        engine.register_handler(Arc::new(ParagraphHandler::new()));
        engine.register_handler(Arc::new(ListHandler::new()));
        engine.register_handler(Arc::new(CodeBlockHandler::new()));
        engine.register_handler(Arc::new(RawHtmlHandler::new()));
        engine.register_handler(Arc::new(ImageHandler::new()));
        engine
    }

    /// Register a handler for the type tag it reports.
    ///
    /// Registering a second handler for the same tag replaces the first.
    /// Registration belongs to the setup phase, before `convert` calls.
    pub fn register_handler(&mut self, handler: Arc<dyn MarkdownBlockHandler>) {
        self.handlers
            .insert(handler.block_type().to_string(), handler);
    }

    /// Register several handlers at once.
    pub fn register_handlers(
        &mut self,
        handlers: impl IntoIterator<Item = Arc<dyn MarkdownBlockHandler>>,
    ) {
        for handler in handlers {
            self.register_handler(handler);
        }
    }

    /// Check if a block type has a registered handler.
    pub fn supports(&self, block_type: &str) -> bool {
        self.handlers.contains_key(block_type)
    }

    /// Get all registered block type tags.
    pub fn registered_types(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a block document to Markdown.
    ///
    /// Blocks render in document order and their fragments are concatenated
    /// without separators. The first failure aborts the whole conversion,
    /// whether it comes from parsing, handler lookup, or rendering.
    pub fn convert(&self, input: &str) -> Result<String> {
        let doc = parse_document(input)?;
        debug!("converting {} block(s) to Markdown", doc.block_count());

        let mut output = String::new();
        for (index, block) in doc.blocks.iter().enumerate() {
            let handler = self
                .handlers
                .get(&block.block_type)
                .ok_or_else(|| Error::handler_not_found(block.block_type.clone()))?;

            let fragment = handler.render_markdown(block).map_err(|e| {
                debug!("block {} ({}) failed to render: {}", index, block.block_type, e);
                e
            })?;
            trace!("block {}: {} byte Markdown fragment", index, fragment.len());
            output.push_str(&fragment);
        }

        Ok(output)
    }
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
