//! Pre-release kinds and their per-ecosystem spellings
//!
//! Only four kinds are recognized: dev, alpha, beta and rc. Each has a
//! semver-style token (`-alpha`) and a PEP440 token (`a`).

use crate::error::{Result, VersError};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    /// Development snapshot
    Dev,
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseKind {
    /// All kinds, in the order prefixes are matched during back-conversion
    pub const ALL: [PreReleaseKind; 4] = [
        PreReleaseKind::Dev,
        PreReleaseKind::Alpha,
        PreReleaseKind::Beta,
        PreReleaseKind::ReleaseCandidate,
    ];

    /// Token used in semver, npm, .NET and Go strings (e.g. `-alpha`)
    pub fn generic_token(self) -> &'static str {
        match self {
            PreReleaseKind::Dev => "-dev",
            PreReleaseKind::Alpha => "-alpha",
            PreReleaseKind::Beta => "-beta",
            PreReleaseKind::ReleaseCandidate => "-rc",
        }
    }

    /// Token used in PEP440 strings (e.g. `a`)
    pub fn pep440_token(self) -> &'static str {
        match self {
            PreReleaseKind::Dev => "dev",
            PreReleaseKind::Alpha => "a",
            PreReleaseKind::Beta => "b",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }

    /// Split a generic pre-release tail such as `-beta.2+dirty` into its kind
    /// and the remainder after the token.
    pub fn split_generic_prefix(tail: &str) -> Option<(PreReleaseKind, &str)> {
        Self::ALL.iter().find_map(|kind| {
            tail.strip_prefix(kind.generic_token())
                .map(|rest| (*kind, rest))
        })
    }
}

impl FromStr for PreReleaseKind {
    type Err = VersError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(PreReleaseKind::Dev),
            "alpha" => Ok(PreReleaseKind::Alpha),
            "beta" => Ok(PreReleaseKind::Beta),
            "rc" => Ok(PreReleaseKind::ReleaseCandidate),
            other => Err(VersError::InvalidPrerelease(other.to_string())),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseKind::Dev => write!(f, "dev"),
            PreReleaseKind::Alpha => write!(f, "alpha"),
            PreReleaseKind::Beta => write!(f, "beta"),
            PreReleaseKind::ReleaseCandidate => write!(f, "rc"),
        }
    }
}

/// Pre-release marker with an optional numeric ordinal
///
/// # Examples
/// - "alpha" -> PreRelease { kind: Alpha, ordinal: None }
/// - "rc.3" -> PreRelease { kind: ReleaseCandidate, ordinal: Some(3) }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    /// Second dot-separated identifier, when it is numeric
    pub ordinal: Option<u64>,
}

impl PreRelease {
    pub fn new(kind: PreReleaseKind, ordinal: Option<u64>) -> Self {
        PreRelease { kind, ordinal }
    }

    /// Parse the identifiers of a semver pre-release (`alpha.1`).
    ///
    /// Returns `Ok(None)` for an empty string. Identifiers past the second
    /// are ignored, and a non-numeric second identifier yields no ordinal.
    pub fn parse_identifiers(pre: &str) -> Result<Option<Self>> {
        if pre.is_empty() {
            return Ok(None);
        }

        let mut identifiers = pre.split('.');
        let kind = identifiers.next().unwrap_or_default().parse()?;
        let ordinal = identifiers.next().and_then(|n| n.parse::<u64>().ok());

        Ok(Some(PreRelease { kind, ordinal }))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(n) = self.ordinal {
            write!(f, ".{}", n)?;
        }
        Ok(())
    }
}
