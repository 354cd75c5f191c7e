use crate::error::{Result, VersError};
use crate::git::{CommandRunner, Repository, WorktreeStatus};
use std::path::Path;
use tracing::{debug, instrument, warn};

const REFRESH_ARGS: [&str; 3] = ["update-index", "-q", "--refresh"];
// No whitespace-ignoring flags: the library status counts any content change
const DIFF_ARGS: [&str; 2] = ["diff-files", "--name-status"];

/// Whether the working tree differs from the index.
///
/// Repositories with an on-disk working tree are checked with the native
/// `git` binary; anything else falls back to the library status.
#[instrument(skip_all)]
pub fn is_dirty<R, C>(repo: &R, runner: &C) -> Result<bool>
where
    R: Repository + ?Sized,
    C: CommandRunner + ?Sized,
{
    match repo.workdir() {
        Some(root) => native_dirty(&root, runner),
        None => status_dirty(repo),
    }
}

/// Refresh the index, then list unstaged changes with `git diff-files`.
///
/// A failed refresh, or a diff that exits non-zero, counts as dirty.
pub fn native_dirty<C: CommandRunner + ?Sized>(root: &Path, runner: &C) -> Result<bool> {
    match runner.run("git", &REFRESH_ARGS, root) {
        Ok(output) if output.success => {}
        Ok(_) => {
            debug!("index refresh reported changes");
            return Ok(true);
        }
        Err(e) => {
            warn!(error = %e, "index refresh failed, assuming dirty");
            return Ok(true);
        }
    }

    let output = runner
        .run("git", &DIFF_ARGS, root)
        .map_err(|e| VersError::command("git diff-files", e.to_string()))?;

    if !output.success {
        debug!("diff-files exited non-zero");
        return Ok(true);
    }

    let dirty = !output.stdout.is_empty();
    debug!(dirty, "native working tree check");
    Ok(dirty)
}

/// Dirty check through [Repository::working_tree_status]
pub fn status_dirty<R: Repository + ?Sized>(repo: &R) -> Result<bool> {
    let dirty = repo.working_tree_status()? == WorktreeStatus::Dirty;
    debug!(dirty, "library working tree check");
    Ok(dirty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockRepository;
    use crate::git::CommandOutput;
    use std::cell::RefCell;
    use std::io;

    /// Replays canned results and records the commands it was asked to run
    struct ScriptedRunner {
        results: RefCell<Vec<io::Result<CommandOutput>>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(results: Vec<io::Result<CommandOutput>>) -> Self {
            ScriptedRunner {
                results: RefCell::new(results),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str], _work_dir: &Path) -> io::Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            self.results.borrow_mut().remove(0)
        }
    }

    fn ok(stdout: &str) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            stdout: stdout.as_bytes().to_vec(),
            success: true,
        })
    }

    fn exit_failure() -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            stdout: Vec::new(),
            success: false,
        })
    }

    #[test]
    fn test_native_clean() {
        let runner = ScriptedRunner::new(vec![ok(""), ok("")]);
        assert!(!native_dirty(Path::new("."), &runner).unwrap());
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "git update-index -q --refresh".to_string(),
                "git diff-files --name-status".to_string(),
            ]
        );
    }

    #[test]
    fn test_native_diff_output_is_dirty() {
        let runner = ScriptedRunner::new(vec![ok(""), ok("M\tsrc/lib.rs\n")]);
        assert!(native_dirty(Path::new("."), &runner).unwrap());
    }

    #[test]
    fn test_refresh_failure_is_dirty_without_diff() {
        let runner = ScriptedRunner::new(vec![exit_failure()]);
        assert!(native_dirty(Path::new("."), &runner).unwrap());
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_refresh_spawn_error_is_dirty() {
        let runner = ScriptedRunner::new(vec![Err(io::Error::new(
            io::ErrorKind::NotFound,
            "git not installed",
        ))]);
        assert!(native_dirty(Path::new("."), &runner).unwrap());
    }

    #[test]
    fn test_diff_exit_failure_is_dirty() {
        let runner = ScriptedRunner::new(vec![ok(""), exit_failure()]);
        assert!(native_dirty(Path::new("."), &runner).unwrap());
    }

    #[test]
    fn test_diff_spawn_error_propagates() {
        let runner = ScriptedRunner::new(vec![
            ok(""),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        ]);
        let err = native_dirty(Path::new("."), &runner).unwrap_err();
        assert!(err.to_string().contains("git diff-files"));
    }

    #[test]
    fn test_repository_without_workdir_uses_status() {
        let runner = ScriptedRunner::new(Vec::new());
        let mut repo = MockRepository::new();
        assert!(!is_dirty(&repo, &runner).unwrap());

        repo.set_status(WorktreeStatus::Dirty);
        assert!(is_dirty(&repo, &runner).unwrap());
        assert!(runner.calls.borrow().is_empty());
    }
}
