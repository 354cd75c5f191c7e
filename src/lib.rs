//! Derive release versions from git history and render them for several
//! package ecosystems (generic semver, PEP440, npm, .NET, Go modules).
//!
//! ```no_run
//! use git_vers::{calculate, git::Git2Repository, Options};
//!
//! # fn main() -> git_vers::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! let versions = calculate(&repo, &Options::new().tag_pattern("^v"))?;
//! println!("{} / {}", versions.semver, versions.python);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod calculate;
pub mod cli;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod git;
pub mod logging;
pub mod pep440;
pub mod ui;

pub use calculate::{calculate, calculate_with_runner, Options};
pub use convert::calculate_from_string;
pub use domain::{Language, LanguageVersions};
pub use error::{Result, VersError};
pub use formatter::{format_versions, FormatOptions};
