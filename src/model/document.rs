//! Document-level types and envelope parsing.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

/// A parsed block document.
///
/// Blocks are kept in input order; order is significant and preserved in
/// the rendered output.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// Content blocks in rendering order.
    pub blocks: Vec<Block>,

    /// Save timestamp from the editor, if present. Never consulted during
    /// rendering.
    #[serde(default)]
    pub time: Option<i64>,

    /// Editor version marker, if present. Never consulted during rendering.
    #[serde(default)]
    pub version: Option<String>,
}

impl Document {
    /// Get the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One unit of content: a type tag plus an undecoded payload.
///
/// A missing `type` key parses as an empty tag, which fails handler lookup
/// during conversion rather than failing the parse.
#[derive(Debug, Deserialize)]
pub struct Block {
    /// Type tag identifying which handler renders this block.
    #[serde(rename = "type", default)]
    pub block_type: String,

    /// Raw payload bytes. Interpreted only by the handler matching
    /// `block_type`.
    pub data: Box<RawValue>,
}

impl Block {
    /// Decode the payload into a handler's schema type.
    ///
    /// Fails with [`Error::Decode`] when the payload does not match the
    /// expected shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(self.data.get())
            .map_err(|e| Error::decode(self.block_type.clone(), e))
    }
}

/// Parse raw input text into a [`Document`].
///
/// Only the top-level envelope (`blocks: [{type, data}, ...]`) is decoded
/// here; per-block payload decoding is deferred to handlers. Unknown
/// top-level fields are ignored. Empty input fails with [`Error::Parse`].
pub fn parse_document(input: &str) -> Result<Document> {
    serde_json::from_str(input).map_err(Error::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let input = r#"{"time": 1607709186831,"blocks": [{"type": "heading","data": {"text": "Heading 1","level": 1}}],"version": "2.19.1"}"#;
        let doc = parse_document(input).unwrap();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.blocks[0].block_type, "heading");
        assert_eq!(doc.time, Some(1607709186831));
        assert_eq!(doc.version, Some("2.19.1".to_string()));
    }

    #[test]
    fn test_parse_document_empty_input_fails() {
        let result = parse_document("");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_document_empty_blocks() {
        let doc = parse_document(r#"{"blocks": []}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_document_missing_type_yields_empty_tag() {
        let doc = parse_document(r#"{"blocks": [{"data": {"text": "x"}}]}"#).unwrap();
        assert_eq!(doc.blocks[0].block_type, "");
    }

    #[test]
    fn test_parse_document_ignores_unknown_top_level_fields() {
        let doc = parse_document(r#"{"blocks": [], "editor": "custom"}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_payload_decoding_is_deferred() {
        // A payload that matches no schema still parses at the envelope level.
        let doc = parse_document(r#"{"blocks": [{"type": "heading","data": {"level": "not a number"}}]}"#)
            .unwrap();
        assert_eq!(doc.block_count(), 1);
    }

    #[test]
    fn test_block_decode_mismatch() {
        #[derive(serde::Deserialize)]
        struct Schema {
            #[allow(dead_code)]
            level: u8,
        }

        let doc = parse_document(r#"{"blocks": [{"type": "heading","data": {"level": "seven"}}]}"#)
            .unwrap();
        let result = doc.blocks[0].decode::<Schema>();
        assert!(matches!(
            result,
            Err(Error::Decode { ref block_type, .. }) if block_type == "heading"
        ));
    }
}
