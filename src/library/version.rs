//! Version normalization for extracted libraries.

use regex::Regex;
use std::sync::LazyLock;

/// A token of exactly 40 word characters, the shape of a full commit hash.
static COMMIT_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w{40}$").expect("Invalid commit hash regex"));

/// Normalize a raw version token captured from a manifest.
///
/// A commit-hash-shaped token (exactly 40 word characters) is truncated to
/// its first 7 characters; anything else passes through unchanged. The check
/// is purely syntactic and does not verify the token is a real commit.
pub fn normalize_version(raw: &str) -> String {
    if COMMIT_HASH.is_match(raw) {
        raw.chars().take(7).collect()
    } else {
        raw.to_string()
    }
}
