//! # blockdown
//!
//! Convert block-editor documents to HTML and Markdown.
//!
//! The input is a JSON envelope holding an ordered list of typed content
//! blocks. Each block carries a type tag and a type-specific payload; a
//! registry maps tags to handlers that know how to render that payload.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> blockdown::Result<()> {
//!     let input = r#"{"blocks": [
//!         {"type": "heading", "data": {"text": "Notes", "level": 1}},
//!         {"type": "paragraph", "data": {"text": "Written in the editor."}}
//!     ]}"#;
//!
//!     let html = blockdown::to_html(input)?;
//!     assert_eq!(html, "<h1>Notes</h1><p>Written in the editor.</p>");
//!
//!     let markdown = blockdown::to_markdown(input)?;
//!     assert_eq!(markdown, "# NotesWritten in the editor.");
//!
//!     Ok(())
//! }
//! ```
//!
//! Fragments are concatenated exactly as handlers produce them; any
//! whitespace between blocks is the producing handler's responsibility.
//!
//! ## Features
//!
//! - **Two output targets**: HTML and Markdown, driven by the same model
//! - **Pluggable handlers**: register your own block types, or replace the
//!   built-in rendering for existing ones
//! - **Deferred payload decoding**: block payloads stay raw JSON until the
//!   matching handler interprets them
//! - **Markup cleanup**: code pasted from rich-text editors is stripped of
//!   embedded formatting tags before fencing
//!
//! ## Custom handlers
//!
//! ```
//! use blockdown::{Block, HtmlBlockHandler, HtmlEngine, Result};
//! use std::sync::Arc;
//!
//! struct DividerHandler;
//!
//! impl HtmlBlockHandler for DividerHandler {
//!     fn block_type(&self) -> &'static str {
//!         "divider"
//!     }
//!
//!     fn render_html(&self, _block: &Block) -> Result<String> {
//!         Ok("<hr/>".to_string())
//!     }
//! }
//!
//! let mut engine = HtmlEngine::with_defaults();
//! engine.register_handler(Arc::new(DividerHandler));
//!
//! let html = engine.convert(r#"{"blocks": [{"type": "divider", "data": {}}]}"#).unwrap();
//! assert_eq!(html, "<hr/>");
//! ```

pub mod engine;
pub mod error;
pub mod handlers;
pub mod model;

// Re-export commonly used types
pub use engine::{HtmlBlockHandler, HtmlEngine, MarkdownBlockHandler, MarkdownEngine};
pub use error::{Error, Result};
pub use handlers::{
    CodeBlockHandler, HeadingHandler, ImageHandler, ImageHandlerOptions, ListHandler,
    ParagraphHandler, RawHtmlHandler, TagStripper,
};
pub use model::{parse_document, Block, Document};

/// Convert a block document to HTML using the built-in handlers.
///
/// For custom handlers or handler configuration, build an [`HtmlEngine`]
/// directly.
///
/// # Example
///
/// ```
/// let html = blockdown::to_html(r#"{"blocks": []}"#).unwrap();
/// assert_eq!(html, "");
/// ```
pub fn to_html(input: &str) -> Result<String> {
    HtmlEngine::with_defaults().convert(input)
}

/// Convert a block document to Markdown using the built-in handlers.
///
/// For custom handlers or handler configuration, build a [`MarkdownEngine`]
/// directly.
///
/// # Example
///
/// ```
/// let input = r#"{"blocks": [{"type": "heading", "data": {"text": "Hi", "level": 2}}]}"#;
/// let markdown = blockdown::to_markdown(input).unwrap();
/// assert_eq!(markdown, "## Hi");
/// ```
pub fn to_markdown(input: &str) -> Result<String> {
    MarkdownEngine::with_defaults().convert(input)
}
