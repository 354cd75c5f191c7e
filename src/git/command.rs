use crate::git::{CommandOutput, CommandRunner};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs commands as child processes of the current one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    /// Run `program` in `work_dir`, capturing stdout and discarding stderr.
    ///
    /// No retries: the caller decides what a failure means.
    fn run(&self, program: &str, args: &[&str], work_dir: &Path) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        debug!(
            program,
            ?args,
            status = ?output.status.code(),
            stdout_len = output.stdout.len(),
            "command finished"
        );

        Ok(CommandOutput {
            stdout: output.stdout,
            success: output.status.success(),
        })
    }
}
