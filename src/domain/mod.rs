//! Domain types - pure values independent of repository access

pub mod language;
pub mod prerelease;
pub mod state;
pub mod tag;
pub mod version;

pub use language::{Language, LanguageVersions};
pub use prerelease::{PreRelease, PreReleaseKind};
pub use state::{short_commit_id, ResolvedState};
pub use tag::{strip_module_tag_prefixes, TagCandidate, TagFilter, TagVisibility};
pub use version::{AbstractVersion, Version, VersionBump};
