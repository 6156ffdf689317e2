//! Document model types for block-editor content.
//!
//! The model keeps each block's payload as raw JSON. Only the matching
//! handler knows the payload's schema and decodes it during rendering.

mod document;

pub use document::{parse_document, Block, Document};
