//! Placement of share tokens in application URLs.
//!
//! A shared story lives in the fragment of the application URL, after a fixed
//! marker: `https://host/app/#/story/<token>`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::codec::{decode, encode};

/// Fragment marker preceding a share token.
pub const STORY_FRAGMENT_PREFIX: &str = "#/story/";

/// Build the share URL for `document` relative to the application location
/// `base`. The query string of `base` is kept; any existing fragment is
/// replaced.
pub fn share_url<T: Serialize + ?Sized>(base: &str, document: &T) -> Result<String> {
    let mut url = Url::parse(base)?;
    let token = encode(document)?;
    url.set_fragment(Some(&format!(
        "{}{token}",
        STORY_FRAGMENT_PREFIX.trim_start_matches('#')
    )));
    Ok(url.into())
}

/// Extract the token from a location fragment such as `#/story/<token>`.
/// The leading `#` is optional. Returns `None` when the marker is absent or
/// no token follows it.
pub fn token_from_fragment(fragment: &str) -> Option<&str> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .strip_prefix(STORY_FRAGMENT_PREFIX.trim_start_matches('#'))
        .filter(|token| !token.is_empty())
}

/// Extract the token from an absolute share URL.
pub fn token_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    token_from_fragment(url.fragment()?).map(str::to_string)
}

/// Accept whatever a user pastes: a full share URL, a bare fragment, or the
/// token itself.
pub fn token_from_input(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if Url::parse(input).is_ok() {
        return token_from_url(input);
    }
    if input.starts_with('#') || input.starts_with("/story/") {
        return token_from_fragment(input).map(str::to_string);
    }
    Some(input.to_string())
}

/// Decode the story carried by a location fragment, if any.
pub fn decode_fragment<T: DeserializeOwned>(fragment: &str) -> Option<T> {
    token_from_fragment(fragment).and_then(decode)
}
