//! Converting a free-standing version string, with no repository involved

use crate::domain::LanguageVersions;
use crate::error::{Result, VersError};
use crate::pep440;
use tracing::debug;

/// Render a version string such as `v1.2.3-rc.1` for every ecosystem.
///
/// A single leading `v` is dropped and the rest must split into three
/// dot-separated parts. Major and minor are passed through as text; only the
/// patch part is reinterpreted, for the PEP440 string.
pub fn calculate_from_string(version: &str) -> Result<LanguageVersions> {
    let normalised = version.strip_prefix('v').unwrap_or(version);

    let parts: Vec<&str> = normalised.splitn(3, '.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(VersError::VersionParts(version.to_string()));
    };

    let generic = format!("{}.{}.{}", major, minor, patch);
    let python = format!("{}.{}.{}", major, minor, pep440::convert_patch(patch));
    debug!(%generic, %python, "converted version string");

    Ok(LanguageVersions::from_generic(generic, python))
}
