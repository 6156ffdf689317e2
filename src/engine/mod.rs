//! Conversion engines dispatching blocks to registered handlers.
//!
//! Each engine owns a registry mapping block type tags to handlers. The
//! registry has a two-phase lifecycle: register handlers during setup
//! (single-threaded), then convert. A configured engine is read-only, so
//! independent `convert` calls may run concurrently.

mod html;
mod markdown;

pub use html::{HtmlBlockHandler, HtmlEngine};
pub use markdown::{MarkdownBlockHandler, MarkdownEngine};
