use git2::Oid;
use std::fmt;
use std::sync::Arc;

const TAG_REF_PREFIX: &str = "refs/tags/";

/// Caller-supplied predicate deciding whether a tag short name is considered
pub type TagFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A tag as listed by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCandidate {
    /// Reference name, with or without the `refs/tags/` prefix
    pub name: String,
    /// Object the reference points at: a commit, or a tag object when annotated
    pub target: Oid,
    pub is_annotated: bool,
}

impl TagCandidate {
    pub fn lightweight(name: impl Into<String>, target: Oid) -> Self {
        TagCandidate {
            name: name.into(),
            target,
            is_annotated: false,
        }
    }

    pub fn annotated(name: impl Into<String>, tag_object: Oid) -> Self {
        TagCandidate {
            name: name.into(),
            target: tag_object,
            is_annotated: true,
        }
    }

    /// Tag name with the `refs/tags/` prefix stripped
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix(TAG_REF_PREFIX)
            .unwrap_or(&self.name)
    }
}

/// Extract the version from a tag name (e.g., "sdk/nodejs/v2.1.0" -> "2.1.0")
///
/// Drops everything up to the last `/` and a single leading `v`.
pub fn strip_module_tag_prefixes(tag: &str) -> &str {
    let component = tag.rsplit_once('/').map_or(tag, |(_, last)| last);
    component.strip_prefix('v').unwrap_or(component)
}

/// Which tags a resolution is allowed to see
#[derive(Clone, Default)]
pub struct TagVisibility {
    pub prerelease_visible: bool,
    pub filter: Option<TagFilter>,
}

impl TagVisibility {
    pub fn new(prerelease_visible: bool, filter: Option<TagFilter>) -> Self {
        TagVisibility {
            prerelease_visible,
            filter,
        }
    }

    /// Whether a tag with this short name takes part in resolution
    ///
    /// With pre-releases hidden, any name containing `beta` or `rc` is
    /// skipped. The filter, when present, must accept the name.
    pub fn admits(&self, short_name: &str) -> bool {
        if !self.prerelease_visible && (short_name.contains("beta") || short_name.contains("rc")) {
            return false;
        }

        self.filter
            .as_ref()
            .map_or(true, |filter| filter(short_name))
    }
}

impl fmt::Debug for TagVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagVisibility")
            .field("prerelease_visible", &self.prerelease_visible)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
