//! Repository access abstraction layer
//!
//! Version resolution only ever reads from a repository. This module defines
//! the small read-only surface it needs as the [Repository] trait, together
//! with [CommandRunner] for shelling out to the native `git` binary.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//! - [command::SystemCommandRunner]: runs processes with `std::process::Command`
//!
//! # Usage
//!
//! Resolution code is generic over [Repository] so it can run against
//! either implementation.
//!
//! ```rust
//! # use git_vers::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_vers::Result<()> {
//! let head = repo.resolve_revision("HEAD")?;
//! let commit = repo.commit(head)?;
//! println!("{} has {} parent(s)", head, commit.parents.len());
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::SystemCommandRunner;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagCandidate;
use crate::error::Result;
use chrono::{DateTime, Utc};
use git2::Oid;
use std::io;
use std::path::{Path, PathBuf};

/// Commit metadata needed for ancestry walks and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub id: Oid,
    pub committer_time: DateTime<Utc>,
    /// Parent ids, first parent first
    pub parents: Vec<Oid>,
}

/// Working tree state relative to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorktreeStatus {
    Clean,
    Dirty,
}

/// Read-only repository queries used by version resolution
///
/// ## Error Handling
///
/// Lookups of missing revisions or commits must fail with an error for which
/// [crate::error::VersError::is_not_found] is true. Other failures map to
/// [crate::error::VersError::Git] or [crate::error::VersError::Io].
///
/// ## Concurrency
///
/// Implementations are not required to be `Sync`. Concurrent resolutions
/// against one handle are only as safe as the implementation makes them.
pub trait Repository {
    /// Resolve a revision spec ("HEAD", a branch, a tag, a hash) to a commit id
    fn resolve_revision(&self, spec: &str) -> Result<Oid>;

    /// Look up a commit's committer time and parents
    fn commit(&self, id: Oid) -> Result<CommitInfo>;

    /// List every tag reference in the repository, in no particular order
    fn list_tags(&self) -> Result<Vec<TagCandidate>>;

    /// Follow an annotated tag object to the object it tags
    ///
    /// Returns `Ok(None)` when `tag_id` is not a tag object, i.e. the tag
    /// is lightweight.
    fn dereference_annotated_tag(&self, tag_id: Oid) -> Result<Option<Oid>>;

    /// Compare the working tree against the index
    fn working_tree_status(&self) -> Result<WorktreeStatus>;

    /// Root of the on-disk working tree, if the repository has one
    ///
    /// When present, dirty detection runs the native `git` tool there
    /// instead of calling [Repository::working_tree_status].
    fn workdir(&self) -> Option<PathBuf>;
}

/// Captured result of an external process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    /// The process exited with status 0
    pub success: bool,
}

/// Runs a single blocking external command
///
/// `Err` means the process could not be started at all; a non-zero exit is
/// reported through [CommandOutput::success].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], work_dir: &Path) -> io::Result<CommandOutput>;
}
