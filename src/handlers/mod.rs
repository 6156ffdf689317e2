//! Built-in block handlers.
//!
//! One handler per supported block type. Each handler owns the payload
//! schema for its type, decodes it during rendering, and implements both
//! render capabilities. Handlers are stateless or carry only immutable
//! configuration, so a single instance can serve concurrent conversions.

mod cleanup;
mod code;
mod heading;
mod image;
mod list;
mod paragraph;
mod raw;

pub use cleanup::TagStripper;
pub use code::CodeBlockHandler;
pub use heading::HeadingHandler;
pub use image::{ImageHandler, ImageHandlerOptions};
pub use list::ListHandler;
pub use paragraph::ParagraphHandler;
pub use raw::RawHtmlHandler;
