//! Rendering a resolved version into each ecosystem's string form

use crate::domain::{LanguageVersions, ResolvedState};
use tracing::debug;

/// Switches that change what the rendered strings carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Leave the `+<commit>` build segment off pre-release strings
    pub omit_commit_hash: bool,
    /// Pre-release build: also leaves the commit hash off
    pub mark_as_pre_release: bool,
}

impl FormatOptions {
    fn include_hash(self) -> bool {
        !self.omit_commit_hash && !self.mark_as_pre_release
    }
}

/// Render the five ecosystem strings for a resolved state.
///
/// Released versions are the bare `X.Y.Z` (plus `+dirty`). Pre-releases get
/// the kind token, an ordinal suffix, an optional `.dirty` marker and the
/// optional commit hash, in that order. The PEP440 string never carries the
/// hash.
pub fn format_versions(state: &ResolvedState, options: FormatOptions) -> LanguageVersions {
    let version = &state.version;
    let base = version.core().to_string();

    let Some(pre) = version.prerelease else {
        let (generic, python) = if state.is_dirty {
            (format!("{}+dirty", base), format!("{}+dirty", base))
        } else {
            (base.clone(), base)
        };
        return LanguageVersions::from_generic(generic, python);
    };

    let suffix = if !state.is_exact {
        format!(".{}", state.commit_timestamp.timestamp())
    } else if let Some(ordinal) = pre.ordinal {
        format!(".{}", ordinal)
    } else {
        String::new()
    };
    let pep440_suffix = match suffix.strip_prefix('.') {
        Some(digits) if !digits.is_empty() => digits,
        _ => "0",
    };

    let dirty = if state.is_dirty { ".dirty" } else { "" };
    let hash = if options.include_hash() {
        format!("+{}", state.short_commit_id)
    } else {
        String::new()
    };

    let generic = format!(
        "{}{}{}{}{}",
        base,
        pre.kind.generic_token(),
        suffix,
        dirty,
        hash
    );
    let mut python = format!("{}{}{}", base, pre.kind.pep440_token(), pep440_suffix);
    if state.is_dirty {
        python.push_str("+dirty");
    }

    debug!(%generic, %python, "formatted pre-release version");
    LanguageVersions::from_generic(generic, python)
}
