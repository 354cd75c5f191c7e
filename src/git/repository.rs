use crate::domain::TagCandidate;
use crate::error::{Result, VersError};
use crate::git::{CommitInfo, WorktreeStatus};
use chrono::{DateTime, TimeZone, Utc};
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Index-vs-worktree changes to tracked files; what `git diff-files` reports
fn worktree_changes() -> Status {
    Status::WT_MODIFIED | Status::WT_DELETED | Status::WT_TYPECHANGE | Status::WT_RENAMED
}

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

fn not_found_as(err: git2::Error, what: impl FnOnce() -> String) -> VersError {
    if matches!(err.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) {
        VersError::not_found(what())
    } else {
        VersError::Git(err)
    }
}

fn commit_time(seconds: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
        VersError::Git(git2::Error::from_str(&format!(
            "commit time {} is out of range",
            seconds
        )))
    })
}

impl super::Repository for Git2Repository {
    fn resolve_revision(&self, spec: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(spec)
            .map_err(|e| not_found_as(e, || format!("revision '{}'", spec)))?;

        let commit = object
            .peel_to_commit()
            .map_err(|e| not_found_as(e, || format!("commit for revision '{}'", spec)))?;

        Ok(commit.id())
    }

    fn commit(&self, id: Oid) -> Result<CommitInfo> {
        let commit = self
            .repo
            .find_commit(id)
            .map_err(|e| not_found_as(e, || format!("commit {}", id)))?;

        let seconds = commit.committer().when().seconds();
        let parents = commit.parent_ids().collect();

        Ok(CommitInfo {
            id,
            committer_time: commit_time(seconds)?,
            parents,
        })
    }

    fn list_tags(&self) -> Result<Vec<TagCandidate>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;

            // Symbolic references are not tags we can match against
            let (Some(name), Some(target)) = (reference.name(), reference.target()) else {
                continue;
            };

            let kind = self.repo.find_object(target, None)?.kind();
            tags.push(TagCandidate {
                name: name.to_string(),
                target,
                is_annotated: kind == Some(ObjectType::Tag),
            });
        }

        Ok(tags)
    }

    fn dereference_annotated_tag(&self, tag_id: Oid) -> Result<Option<Oid>> {
        match self.repo.find_tag(tag_id) {
            Ok(tag) => Ok(Some(tag.target_id())),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn working_tree_status(&self) -> Result<WorktreeStatus> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let changes = worktree_changes();
        let dirty = statuses
            .iter()
            .any(|entry| entry.status().intersects(changes));

        Ok(if dirty {
            WorktreeStatus::Dirty
        } else {
            WorktreeStatus::Clean
        })
    }

    fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }
}
