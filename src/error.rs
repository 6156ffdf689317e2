//! Error types for the blockdown library.

use std::io;
use thiserror::Error;

/// Result type alias for blockdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed block document envelope.
    #[error("document parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// A block payload does not match its handler's schema.
    #[error("failed to decode \"{block_type}\" block data: {source}")]
    Decode {
        /// Type tag of the block whose payload failed to decode.
        block_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// No handler is registered for a block's type tag.
    #[error("handler not found for block type \"{block_type}\"")]
    HandlerNotFound {
        /// The offending type tag.
        block_type: String,
    },

    /// Error during fragment rendering.
    #[error("rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Construct a decode error for the given block type.
    pub fn decode(block_type: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            block_type: block_type.into(),
            source,
        }
    }

    /// Construct a handler-not-found error for the given block type.
    pub fn handler_not_found(block_type: impl Into<String>) -> Self {
        Error::HandlerNotFound {
            block_type: block_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::handler_not_found("codeBlock");
        assert_eq!(
            err.to_string(),
            "handler not found for block type \"codeBlock\""
        );

        let err = Error::Render("bad fragment".to_string());
        assert_eq!(err.to_string(), "rendering error: bad fragment");
    }

    #[test]
    fn test_decode_error_carries_block_type() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = Error::decode("heading", source);
        assert!(matches!(err, Error::Decode { ref block_type, .. } if block_type == "heading"));
        assert!(err.to_string().starts_with("failed to decode \"heading\""));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
