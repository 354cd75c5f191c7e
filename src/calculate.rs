//! The repository-backed entry point: resolve, bump, check dirtiness, format

use crate::analyzer::{bump, is_dirty, resolve_base_version};
use crate::domain::{short_commit_id, LanguageVersions, ResolvedState, TagFilter, TagVisibility, Version};
use crate::error::{Result, ResultExt};
use crate::formatter::{format_versions, FormatOptions};
use crate::git::{CommandRunner, Repository, SystemCommandRunner};
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

const DEFAULT_COMMITISH: &str = "HEAD";

/// Caller-supplied settings for one calculation
#[derive(Clone, Default)]
pub struct Options {
    /// Revision to resolve; empty means `HEAD`
    pub commitish: String,
    pub omit_commit_hash: bool,
    /// Replaces the computed major/minor/patch when set
    pub release_prefix: Option<Version>,
    /// Pre-release build: beta/rc tags become visible and the hash is dropped
    pub is_pre_release: bool,
    /// Predicate over tag short names; takes priority over `tag_pattern`
    pub tag_filter: Option<TagFilter>,
    /// Regex a tag short name must match, used when `tag_filter` is unset
    pub tag_pattern: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commitish(mut self, commitish: impl Into<String>) -> Self {
        self.commitish = commitish.into();
        self
    }

    pub fn omit_commit_hash(mut self, omit: bool) -> Self {
        self.omit_commit_hash = omit;
        self
    }

    pub fn release_prefix(mut self, prefix: Version) -> Self {
        self.release_prefix = Some(prefix);
        self
    }

    pub fn pre_release(mut self, is_pre_release: bool) -> Self {
        self.is_pre_release = is_pre_release;
        self
    }

    pub fn tag_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.tag_filter = Some(Arc::new(filter));
        self
    }

    pub fn tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.tag_pattern = Some(pattern.into());
        self
    }

    /// The revision to resolve, defaulting to `HEAD`
    pub fn effective_commitish(&self) -> &str {
        if self.commitish.is_empty() {
            DEFAULT_COMMITISH
        } else {
            &self.commitish
        }
    }

    /// The active tag filter, compiling `tag_pattern` when no filter was given
    pub fn normalized_filter(&self) -> Result<Option<TagFilter>> {
        if let Some(filter) = &self.tag_filter {
            return Ok(Some(Arc::clone(filter)));
        }

        match &self.tag_pattern {
            Some(pattern) => {
                let regex = Regex::new(pattern)?;
                Ok(Some(Arc::new(move |name: &str| regex.is_match(name))))
            }
            None => Ok(None),
        }
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            omit_commit_hash: self.omit_commit_hash,
            mark_as_pre_release: self.is_pre_release,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("commitish", &self.effective_commitish())
            .field("omit_commit_hash", &self.omit_commit_hash)
            .field("release_prefix", &self.release_prefix)
            .field("is_pre_release", &self.is_pre_release)
            .field("tag_filter", &self.tag_filter.as_ref().map(|_| "<fn>"))
            .field("tag_pattern", &self.tag_pattern)
            .finish()
    }
}

/// Calculate the version strings for a repository, using the system `git`
/// binary for the dirty check where the repository has a working tree.
pub fn calculate<R: Repository + ?Sized>(repo: &R, options: &Options) -> Result<LanguageVersions> {
    calculate_with_runner(repo, &SystemCommandRunner, options)
}

/// [calculate] with an explicit runner for native `git` invocations
#[instrument(skip(repo, runner))]
pub fn calculate_with_runner<R, C>(
    repo: &R,
    runner: &C,
    options: &Options,
) -> Result<LanguageVersions>
where
    R: Repository + ?Sized,
    C: CommandRunner + ?Sized,
{
    // The pattern is compiled before the repository is touched
    let filter = options.normalized_filter()?;
    let visibility = TagVisibility::new(options.is_pre_release, filter);

    let state = resolve_state(repo, runner, options, &visibility)
        .context("calculating version components")?;

    Ok(format_versions(&state, options.format_options()))
}

fn resolve_state<R, C>(
    repo: &R,
    runner: &C,
    options: &Options,
    visibility: &TagVisibility,
) -> Result<ResolvedState>
where
    R: Repository + ?Sized,
    C: CommandRunner + ?Sized,
{
    let commit_id = repo
        .resolve_revision(options.effective_commitish())
        .context("resolving commitish")?;
    let commit = repo.commit(commit_id).context("getting commit object")?;

    let base = resolve_base_version(repo, commit_id, visibility)
        .context("determining base version")?;
    debug!(base = %base.version, is_exact = base.is_exact, tag = ?base.tag, "base version");

    let version = bump(&base.version, base.is_exact, options.release_prefix)?;
    let dirty = is_dirty(repo, runner).context("checking if worktree is dirty")?;

    Ok(ResolvedState {
        version,
        is_exact: base.is_exact,
        is_dirty: dirty,
        short_commit_id: short_commit_id(commit_id),
        commit_timestamp: commit.committer_time,
    })
}

/// Whether `commitish` names something the repository can resolve
pub fn is_valid_commitish<R: Repository + ?Sized>(repo: &R, commitish: &str) -> bool {
    match repo.resolve_revision(commitish) {
        Ok(_) => true,
        Err(e) => {
            debug!(commitish, error = %e, "commitish does not resolve");
            false
        }
    }
}
