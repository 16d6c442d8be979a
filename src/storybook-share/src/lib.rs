//! Story sharing for Storybook.
//!
//! A document is serialized to JSON, compressed with zlib and encoded as
//! unpadded URL-safe base64, producing a token that can sit in a URL fragment
//! (`#/story/<token>`) without percent-encoding. Decoding reverses each step
//! and never fails loudly: any malformed token simply yields `None`.

pub mod codec;
pub mod link;

pub use codec::{MAX_DECODED_BYTES, decode, encode, is_token_char};
pub use link::{
    STORY_FRAGMENT_PREFIX, decode_fragment, share_url, token_from_fragment, token_from_input,
    token_from_url,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to compress document: {0}")]
    Compress(#[from] std::io::Error),
    #[error("Invalid share base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ShareError>;
