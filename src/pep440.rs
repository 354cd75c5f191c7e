//! Translating generic pre-release tails into PEP440 segments
//!
//! Works on already-rendered strings such as `3-alpha.1700000000+a1b2c3d4`,
//! where the structure has to be recovered from text.

use crate::domain::PreReleaseKind;
use regex::Regex;
use std::sync::OnceLock;

fn build_hash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\+[0-9a-f]{8}\b").unwrap())
}

fn ordinal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\W(\d+)(\W|$)").unwrap())
}

/// Convert a patch segment like `3-rc.1+a1b2c3d4` to its PEP440 form (`3rc1`).
///
/// A patch that does not start with digits is returned unchanged.
pub fn convert_patch(patch: &str) -> String {
    let digits_end = patch
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(patch.len());
    if digits_end == 0 {
        return patch.to_string();
    }

    let (number, tail) = patch.split_at(digits_end);
    format!("{}{}", number, prerelease_tail(tail))
}

/// Convert a pre-release tail like `-beta.2+dirty` to its PEP440 form (`b2+dirty`).
///
/// The `dirty` marker is removed first, then the last build-hash segment
/// (`+` and 8 lowercase hex digits), and only then is the first standalone
/// number taken as the ordinal, defaulting to `0`. A tail with no known kind
/// yields no pre-release segment; `+dirty` is still carried over.
pub fn prerelease_tail(tail: &str) -> String {
    if tail.is_empty() {
        return String::new();
    }

    let (kind, rest) = match PreReleaseKind::split_generic_prefix(tail) {
        Some((kind, rest)) => (Some(kind), rest),
        None => (None, tail),
    };

    let is_dirty = tail.contains("dirty");
    let mut remaining = rest.to_string();
    if is_dirty {
        remaining = remaining.replacen("dirty", "", 1);
    }

    let last_hash = build_hash_pattern()
        .find_iter(&remaining)
        .take(5)
        .last()
        .map(|m| m.as_str().to_string());
    if let Some(hash) = last_hash {
        remaining = remaining.replacen(&hash, "", 1);
    }

    let ordinal = ordinal_pattern()
        .captures(&remaining)
        .and_then(|caps| caps.get(1))
        .map_or("0", |m| m.as_str());

    let mut converted = kind
        .map(|kind| format!("{}{}", kind.pep440_token(), ordinal))
        .unwrap_or_default();
    if is_dirty {
        converted.push_str("+dirty");
    }
    converted
}
