//! Main workflow orchestration logic
//!
//! Decides between converting a version string and calculating from a
//! repository, and applies the fallback version when no repository state is
//! available. Parsing stays in `main.rs` so the workflow can be driven
//! without clap.

use std::env;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::calculate::{calculate, is_valid_commitish, Options};
use crate::cli::input::is_version_string;
use crate::config::Defaults;
use crate::convert::calculate_from_string;
use crate::domain::{Language, LanguageVersions, Version};
use crate::error::{Result, ResultExt};
use crate::git::Git2Repository;

/// Arguments for one invocation
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Commitish to resolve, or a version string to convert
    pub commitish: Option<String>,

    pub language: Option<Language>,

    /// Repository path; the current directory when unset
    pub repo: Option<PathBuf>,

    /// Release version "X.Y.Z" overriding the computed one
    pub version_prefix: Option<String>,

    pub omit_commit_hash: bool,

    pub is_pre_release: bool,

    pub tag_pattern: Option<String>,

    pub json: bool,
}

impl RunArgs {
    /// Fill anything not given on the command line from config defaults.
    ///
    /// A flag that is set stays set; values given here replace the config's.
    pub fn with_defaults(mut self, defaults: &Defaults) -> Self {
        self.language = self.language.or(Some(defaults.language));
        self.omit_commit_hash |= defaults.omit_commit_hash;
        self.is_pre_release |= defaults.pre_release;
        self.json |= defaults.json;
        if self.tag_pattern.is_none() {
            self.tag_pattern = defaults.tag_pattern.clone();
        }
        if self.version_prefix.is_none() {
            self.version_prefix = defaults.version_prefix.clone();
        }
        self
    }

    fn commitish(&self) -> Option<&str> {
        self.commitish.as_deref().filter(|c| !c.is_empty())
    }
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub versions: LanguageVersions,

    /// Messages for the user that did not stop the run
    pub warnings: Vec<String>,

    /// No repository state was available; `versions` is the fixed fallback
    pub used_fallback: bool,
}

impl RunOutcome {
    fn calculated(versions: LanguageVersions, warnings: Vec<String>) -> Self {
        RunOutcome {
            versions,
            warnings,
            used_fallback: false,
        }
    }

    fn fallback(warnings: Vec<String>) -> Self {
        RunOutcome {
            versions: LanguageVersions::fallback(),
            warnings,
            used_fallback: true,
        }
    }
}

/// Main workflow
///
/// 1. A positional argument that looks like a version string is converted
///    directly, without touching any repository
/// 2. Otherwise the repository is opened; if that fails the fallback
///    version is returned
/// 3. An unresolvable commitish produces a warning
/// 4. The calculation runs; malformed input is an error, any other failure
///    gives the fallback version
pub fn run(args: &RunArgs) -> Result<RunOutcome> {
    if let Some(input) = args.commitish().filter(|c| is_version_string(c)) {
        debug!(input, "converting version string");
        let versions = calculate_from_string(input).context("converting version")?;
        return Ok(RunOutcome::calculated(versions, Vec::new()));
    }

    let release_prefix = args
        .version_prefix
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(Version::parse)
        .transpose()
        .context("parsing version prefix")?;

    let repo_path = match &args.repo {
        Some(path) => path.clone(),
        None => env::current_dir().context("getting current directory")?,
    };

    let repo = match Git2Repository::open(&repo_path) {
        Ok(repo) => repo,
        Err(e) => {
            debug!(path = %repo_path.display(), error = %e, "no repository, using fallback version");
            return Ok(RunOutcome::fallback(Vec::new()));
        }
    };

    let mut warnings = Vec::new();
    let mut options = Options::new()
        .omit_commit_hash(args.omit_commit_hash)
        .pre_release(args.is_pre_release);

    if let Some(commitish) = args.commitish() {
        if !is_valid_commitish(&repo, commitish) {
            warnings.push(format!(
                "'{}' does not exist in this git repository (not a valid branch, tag, or commit)",
                commitish
            ));
        }
        options = options.commitish(commitish);
    }
    if let Some(prefix) = release_prefix {
        options = options.release_prefix(prefix);
    }
    if let Some(pattern) = args.tag_pattern.as_deref().filter(|p| !p.is_empty()) {
        options = options.tag_pattern(pattern);
    }

    match calculate(&repo, &options) {
        Ok(versions) => Ok(RunOutcome::calculated(versions, warnings)),
        Err(e) if e.is_input_error() => Err(e),
        Err(e) => {
            warn!(error = %e, "version calculation failed, using fallback version");
            Ok(RunOutcome::fallback(warnings))
        }
    }
}
