use crate::domain::TagCandidate;
use crate::error::{Result, VersError};
use crate::git::{CommitInfo, Repository, WorktreeStatus};
use chrono::{DateTime, TimeZone, Utc};
use git2::Oid;
use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Build a deterministic object id from a single byte, for tests
pub fn oid(byte: u8) -> Oid {
    Oid::from_bytes(&[byte; 20]).unwrap_or_else(|_| Oid::zero())
}

/// In-memory repository for testing without actual git operations
///
/// Has no working directory, so dirty detection always goes through
/// [Repository::working_tree_status].
pub struct MockRepository {
    commits: HashMap<Oid, CommitInfo>,
    tags: Vec<TagCandidate>,
    tag_objects: HashMap<Oid, Oid>,
    revisions: HashMap<String, Oid>,
    status: WorktreeStatus,
    tag_listing_error: Option<String>,
    tag_listings: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Vec::new(),
            tag_objects: HashMap::new(),
            revisions: HashMap::new(),
            status: WorktreeStatus::Clean,
            tag_listing_error: None,
            tag_listings: Cell::new(0),
        }
    }

    /// Add a commit with the given parents and committer time (unix seconds)
    pub fn add_commit(&mut self, id: Oid, parents: &[Oid], committer_time: i64) {
        let committer_time: DateTime<Utc> = Utc
            .timestamp_opt(committer_time, 0)
            .single()
            .unwrap_or_default();

        self.commits.insert(
            id,
            CommitInfo {
                id,
                committer_time,
                parents: parents.to_vec(),
            },
        );
    }

    /// Add a lightweight tag pointing straight at a commit
    pub fn add_tag(&mut self, name: impl Into<String>, commit: Oid) {
        let name = name.into();
        self.revisions.insert(name.clone(), commit);
        self.tags.push(TagCandidate::lightweight(
            format!("refs/tags/{}", name),
            commit,
        ));
    }

    /// Add an annotated tag: a tag object `tag_object` that points at `commit`
    pub fn add_annotated_tag(&mut self, name: impl Into<String>, tag_object: Oid, commit: Oid) {
        let name = name.into();
        self.revisions.insert(name.clone(), commit);
        self.tag_objects.insert(tag_object, commit);
        self.tags.push(TagCandidate::annotated(
            format!("refs/tags/{}", name),
            tag_object,
        ));
    }

    /// Make `spec` resolve to `commit`
    pub fn set_revision(&mut self, spec: impl Into<String>, commit: Oid) {
        self.revisions.insert(spec.into(), commit);
    }

    /// Point HEAD at a commit
    pub fn set_head(&mut self, commit: Oid) {
        self.set_revision("HEAD", commit);
    }

    pub fn set_status(&mut self, status: WorktreeStatus) {
        self.status = status;
    }

    /// Make every subsequent tag listing fail with an I/O error
    pub fn fail_tag_listing(&mut self, message: impl Into<String>) {
        self.tag_listing_error = Some(message.into());
    }

    /// How many times tags have been listed
    pub fn tag_listings(&self) -> usize {
        self.tag_listings.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn resolve_revision(&self, spec: &str) -> Result<Oid> {
        if let Some(id) = self.revisions.get(spec) {
            return Ok(*id);
        }

        Oid::from_str(spec)
            .ok()
            .filter(|id| self.commits.contains_key(id))
            .ok_or_else(|| VersError::not_found(format!("revision '{}'", spec)))
    }

    fn commit(&self, id: Oid) -> Result<CommitInfo> {
        self.commits
            .get(&id)
            .cloned()
            .ok_or_else(|| VersError::not_found(format!("commit {}", id)))
    }

    fn list_tags(&self) -> Result<Vec<TagCandidate>> {
        self.tag_listings.set(self.tag_listings.get() + 1);

        if let Some(message) = &self.tag_listing_error {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, message.clone()).into());
        }

        Ok(self.tags.clone())
    }

    fn dereference_annotated_tag(&self, tag_id: Oid) -> Result<Option<Oid>> {
        Ok(self.tag_objects.get(&tag_id).copied())
    }

    fn working_tree_status(&self) -> Result<WorktreeStatus> {
        Ok(self.status)
    }

    fn workdir(&self) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_revisions() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), &[], 1_700_000_000);
        repo.set_head(oid(1));

        assert_eq!(repo.resolve_revision("HEAD").unwrap(), oid(1));
        assert_eq!(repo.resolve_revision(&oid(1).to_string()).unwrap(), oid(1));
        assert!(repo.resolve_revision("main").unwrap_err().is_not_found());
    }

    #[test]
    fn test_mock_repository_commit() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), &[], 1_700_000_000);
        repo.add_commit(oid(2), &[oid(1)], 1_700_000_100);

        let info = repo.commit(oid(2)).unwrap();
        assert_eq!(info.parents, vec![oid(1)]);
        assert_eq!(info.committer_time.timestamp(), 1_700_000_100);
        assert!(repo.commit(oid(9)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", oid(1));
        repo.add_annotated_tag("v2.0.0", oid(20), oid(2));

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].short_name(), "v1.0.0");
        assert!(!tags[0].is_annotated);
        assert!(tags[1].is_annotated);
        assert_eq!(repo.dereference_annotated_tag(oid(20)).unwrap(), Some(oid(2)));
        assert_eq!(repo.dereference_annotated_tag(oid(1)).unwrap(), None);
        assert_eq!(repo.tag_listings(), 1);
    }

    #[test]
    fn test_mock_repository_tag_listing_failure() {
        let mut repo = MockRepository::new();
        repo.fail_tag_listing("packed-refs unreadable");
        assert!(repo.list_tags().is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert_eq!(repo.working_tree_status().unwrap(), WorktreeStatus::Clean);
        assert!(repo.workdir().is_none());
    }
}
