//! Document <-> token codec.
//!
//! Encoding pipeline: JSON -> zlib -> URL-safe base64 without padding.
//! Decoding runs the exact reverse. The zlib container and the base64 alphabet
//! match what the Storybook web client produces, so tokens are portable in
//! both directions.

use std::borrow::Cow;
use std::io::Write;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::Result;

/// Upper bound on the inflated size of a decoded token (16 MiB).
pub const MAX_DECODED_BYTES: usize = 16 * 1024 * 1024;

/// Emits `[A-Za-z0-9_-]` only; accepts input with or without `=` padding.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be decoded. Never leaves this module.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("token is empty")]
    Empty,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("corrupt compressed stream: {0}")]
    Inflate(#[from] flate2::DecompressError),
    #[error("compressed stream is truncated")]
    Truncated,
    #[error("{0} bytes follow the end of the compressed stream")]
    TrailingData(usize),
    #[error("inflated document exceeds {MAX_DECODED_BYTES} bytes")]
    TooLarge,
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether `c` may appear in a token.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Encode a document into a URL-fragment-safe token.
///
/// The only failure is the document refusing to serialize; that error is
/// returned as-is inside [`crate::ShareError::Serialize`].
pub fn encode<T: Serialize + ?Sized>(document: &T) -> Result<String> {
    let json = serde_json::to_vec(document)?;

    let mut encoder = ZlibEncoder::new(Vec::with_capacity(json.len() / 2), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(TOKEN_ENGINE.encode(compressed))
}

/// Decode a token back into a document.
///
/// Total over all inputs: empty, truncated, foreign or crafted tokens all
/// produce `None`. The failure cause is only logged.
pub fn decode<T: DeserializeOwned>(token: &str) -> Option<T> {
    match try_decode(token) {
        Ok(document) => Some(document),
        Err(e) => {
            debug!(error = %e, token_len = token.len(), "Failed to decode shared document");
            None
        }
    }
}

fn try_decode<T: DeserializeOwned>(token: &str) -> std::result::Result<T, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    // Tokens that went through a standard-alphabet encoder are still accepted.
    let normalized: Cow<'_, str> = if token.contains(['+', '/']) {
        Cow::Owned(token.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(token)
    };

    let compressed = TOKEN_ENGINE.decode(normalized.as_bytes())?;
    let json = inflate(&compressed)?;
    parse_document(&json)
}

/// Parse JSON with no nesting limit. Deep documents recurse on a growable
/// stack, so a crafted token cannot overflow the thread's stack.
fn parse_document<T: DeserializeOwned>(json: &[u8]) -> std::result::Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(json);
    de.disable_recursion_limit();
    let document = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(document)
}

/// Inflate a complete zlib stream, rejecting truncation and trailing bytes.
fn inflate(compressed: &[u8]) -> std::result::Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(compressed.len().saturating_mul(4).min(MAX_DECODED_BYTES));

    loop {
        if out.len() > MAX_DECODED_BYTES {
            return Err(DecodeError::TooLarge);
        }
        if out.len() == out.capacity() {
            out.reserve(out.capacity().max(1024));
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let consumed = before_in as usize;

        let status = inflater.decompress_vec(&compressed[consumed..], &mut out, FlushDecompress::None)?;
        if status == Status::StreamEnd {
            break;
        }
        if inflater.total_in() == before_in && inflater.total_out() == before_out {
            return Err(DecodeError::Truncated);
        }
    }

    if out.len() > MAX_DECODED_BYTES {
        return Err(DecodeError::TooLarge);
    }

    let trailing = compressed.len() - inflater.total_in() as usize;
    if trailing > 0 {
        return Err(DecodeError::TrailingData(trailing));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_roundtrip_story_document() {
        let doc = json!({
            "title": "Test",
            "pages": [{"pageNumber": 1, "text": "Hello", "imageUrl": "x"}]
        });

        let token = encode(&doc).unwrap();
        assert!(!token.is_empty());
        assert!(!token.contains(['+', '/', '=']));

        let decoded: Value = decode(&token).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_token_alphabet() {
        // Long printable-ASCII noise so the compressed bytes cover most of the alphabet.
        let text: String = (0u32..4096)
            .map(|i| char::from_u32(0x20 + (i.wrapping_mul(2_654_435_761) >> 7) % 0x5e).unwrap())
            .collect();
        let token = encode(&json!({ "text": text, "n": [1, 2.5, -3], "ok": true })).unwrap();

        assert!(token.chars().all(is_token_char), "unexpected char in {token}");
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert_eq!(decode::<Value>(""), None);
        assert_eq!(decode::<Value>("not-valid-base64!!"), None);
        assert_eq!(decode::<Value>("####"), None);
        assert_eq!(decode::<Value>("A"), None);
        assert_eq!(decode::<Value>("AAAA"), None);
    }

    #[test]
    fn test_decode_rejects_corrupted_suffix() {
        let token = encode(&json!({"title": "Suffix", "pages": []})).unwrap();
        let corrupted = format!("{token}corrupted-suffix");

        assert_eq!(decode::<Value>(&corrupted), None);
    }

    #[test]
    fn test_decode_rejects_truncated_token() {
        let token = encode(&json!({"title": "Truncated", "pages": [1, 2, 3]})).unwrap();

        for cut in [1, 4, token.len() / 2] {
            assert_eq!(decode::<Value>(&token[..token.len() - cut]), None, "cut {cut}");
        }
    }

    #[test]
    fn test_decode_rejects_trailing_bytes_after_stream() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"a\":1}").unwrap();
        let mut compressed = encoder.finish().unwrap();
        compressed.extend_from_slice(b"junk");

        let token = TOKEN_ENGINE.encode(&compressed);
        assert_eq!(decode::<Value>(&token), None);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Titled {
            title: String,
        }

        let token = encode(&json!([1, 2, 3])).unwrap();
        assert!(decode::<Titled>(&token).is_none());
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"this is not json").unwrap();
        let token = TOKEN_ENGINE.encode(encoder.finish().unwrap());

        assert_eq!(decode::<Value>(&token), None);
    }

    #[test]
    fn test_decode_accepts_padded_and_standard_alphabet() {
        let doc = json!({"title": "Padding?", "pages": [{"text": "???>>>"}]});
        let token = encode(&doc).unwrap();

        let mut padded = token.clone();
        while padded.len() % 4 != 0 {
            padded.push('=');
        }
        assert_eq!(decode::<Value>(&padded), Some(doc.clone()));

        let standard = token.replace('-', "+").replace('_', "/");
        assert_eq!(decode::<Value>(&standard), Some(doc));
    }

    #[test]
    fn test_decode_enforces_size_limit() {
        let payload = vec![b' '; MAX_DECODED_BYTES + 16];
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&payload).unwrap();
        let token = TOKEN_ENGINE.encode(encoder.finish().unwrap());

        assert!(matches!(
            try_decode::<Value>(&token),
            Err(DecodeError::TooLarge)
        ));
    }

    #[test]
    fn test_encode_propagates_serialization_error() {
        use std::collections::HashMap;

        // Non-string map keys cannot be represented in JSON.
        let mut doc: HashMap<Vec<u8>, u8> = HashMap::new();
        doc.insert(vec![1, 2], 3);

        assert!(matches!(encode(&doc), Err(crate::ShareError::Serialize(_))));
    }
}
