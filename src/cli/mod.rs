//! Command-line workflow, kept separate from clap parsing in `main.rs`

pub mod input;
pub mod orchestration;

pub use input::{is_git_reference, is_version_string};
pub use orchestration::{run, RunArgs, RunOutcome};
