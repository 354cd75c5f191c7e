use crate::domain::version::AbstractVersion;
use chrono::{DateTime, Utc};
use git2::Oid;

/// Length of the abbreviated commit id carried in version strings
pub const SHORT_COMMIT_LEN: usize = 8;

/// Everything the formatter needs from a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedState {
    pub version: AbstractVersion,
    /// The resolved commit carries a visible tag itself
    pub is_exact: bool,
    pub is_dirty: bool,
    /// First 8 hex characters of the commit id
    pub short_commit_id: String,
    /// Committer time of the resolved commit
    pub commit_timestamp: DateTime<Utc>,
}

/// Truncate a commit id to its first 8 hex characters
pub fn short_commit_id(id: Oid) -> String {
    id.to_string().chars().take(SHORT_COMMIT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit_id_truncates() {
        let oid = Oid::from_str("a1b2c3d4e5f60718293a4b5c6d7e8f9012345678").unwrap();
        assert_eq!(short_commit_id(oid), "a1b2c3d4");
    }

    #[test]
    fn test_short_commit_id_is_lowercase() {
        let oid = Oid::from_str("ABCDEF0123456789ABCDEF0123456789ABCDEF01").unwrap();
        let short = short_commit_id(oid);
        assert_eq!(short.len(), SHORT_COMMIT_LEN);
        assert_eq!(short, "abcdef01");
    }
}
