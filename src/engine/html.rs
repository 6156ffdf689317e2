//! HTML conversion engine.

use crate::error::{Error, Result};
use crate::handlers::{
    CodeBlockHandler, HeadingHandler, ImageHandler, ListHandler, ParagraphHandler, RawHtmlHandler,
};
use crate::model::{parse_document, Block};
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;

/// Capability for rendering one block type to HTML.
///
/// Implement this trait to add support for a new block type, then register
/// the handler with an [`HtmlEngine`].
pub trait HtmlBlockHandler: Send + Sync {
    /// The fixed type tag this handler renders.
    fn block_type(&self) -> &'static str;

    /// Render the block's payload into an HTML fragment.
    fn render_html(&self, block: &Block) -> Result<String>;
}

/// Converts block documents to HTML using a registry of block handlers.
pub struct HtmlEngine {
    handlers: HashMap<String, Arc<dyn HtmlBlockHandler>>,
}

impl HtmlEngine {
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
    pub fn register_handler(&mut self, handler: Arc<dyn HtmlBlockHandler>) {
        self.handlers
            .insert(handler.block_type().to_string(), handler);
    }

    /// Register several handlers at once.
    pub fn register_handlers(
        &mut self,
        handlers: impl IntoIterator<Item = Arc<dyn HtmlBlockHandler>>,
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

    /// Convert a block document to HTML.
    ///
    /// Blocks render in document order and their fragments are concatenated
    /// without separators. The first failure aborts the whole conversion,
    /// whether it comes from parsing, handler lookup, or rendering.
    pub fn convert(&self, input: &str) -> Result<String> {
        let doc = parse_document(input)?;
        debug!("converting {} block(s) to HTML", doc.block_count());

        let mut output = String::new();
        for (index, block) in doc.blocks.iter().enumerate() {
            let handler = self
                .handlers
                .get(&block.block_type)
                .ok_or_else(|| Error::handler_not_found(block.block_type.clone()))?;

            let fragment = handler.render_html(block).map_err(|e| {
                debug!("block {} ({}) failed to render: {}", index, block.block_type, e);
                e
            })?;
            trace!("block {}: {} byte HTML fragment", index, fragment.len());
            output.push_str(&fragment);
        }

        Ok(output)
    }
}

impl Default for HtmlEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_empty() {
        let engine = HtmlEngine::new();
        assert!(!engine.supports("heading"));
        assert!(engine.registered_types().is_empty());
    }

    #[test]
    fn test_with_defaults_registers_builtins() {
        let engine = HtmlEngine::with_defaults();
        for tag in ["heading", "paragraph", "list", "codeBlock", "raw", "image"] {
            assert!(engine.supports(tag), "missing handler for {tag}");
        }
        assert!(!engine.supports("table"));
    }

    #[test]
    fn test_convert_single_block() {
        let engine = HtmlEngine::with_defaults();
        let input = r#"{"blocks": [{"type": "heading", "data": {"text": "Hi", "level": 2}}]}"#;
        assert_eq!(engine.convert(input).unwrap(), "<h2>Hi</h2>");
    }

    #[test]
    fn test_convert_empty_document() {
        let engine = HtmlEngine::with_defaults();
        assert_eq!(engine.convert(r#"{"blocks": []}"#).unwrap(), "");
    }

    #[test]
    fn test_convert_unregistered_type_fails() {
        let engine = HtmlEngine::new();
        let input = r#"{"blocks": [{"type": "heading", "data": {"text": "Hi", "level": 1}}]}"#;
        let result = engine.convert(input);
        assert!(matches!(
            result,
            Err(Error::HandlerNotFound { ref block_type }) if block_type == "heading"
        ));
    }

    #[test]
    fn test_register_handler_overrides() {
        struct FixedHandler;

        impl HtmlBlockHandler for FixedHandler {
            fn block_type(&self) -> &'static str {
                "heading"
            }

            fn render_html(&self, _block: &Block) -> Result<String> {
                Ok("<header/>".to_string())
            }
        }

        let mut engine = HtmlEngine::with_defaults();
        engine.register_handler(Arc::new(FixedHandler));

        let input = r#"{"blocks": [{"type": "heading", "data": {"text": "Hi", "level": 1}}]}"#;
        assert_eq!(engine.convert(input).unwrap(), "<header/>");
    }
}
