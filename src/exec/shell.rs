//! Process spawning behind the [`Shell`] seam.
use std::io;
use std::process::{Command, Output, Stdio};

/// Raw, undecoded output of an interpreter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    /// Bytes written to standard output.
    pub stdout: Vec<u8>,
    /// Bytes written to standard error.
    pub stderr: Vec<u8>,
    /// Interpreter exit code, if it exited normally.
    pub code: Option<i32>,
}

impl From<Output> for RawOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code(),
        }
    }
}

/// Starts processes on behalf of the [`Executor`](super::Executor).
#[cfg_attr(test, mockall::automock)]
pub trait Shell {
    /// Run `line` as a single shell invocation of `interpreter` and wait for
    /// it, capturing both streams.
    ///
    /// # Errors
    ///
    /// Returns the system error if the interpreter cannot be started.
    fn capture(&self, interpreter: &str, line: &str) -> io::Result<RawOutput>;

    /// Start `program` with `args` and return without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns the system error if the program cannot be started.
    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<()>;
}

/// [`Shell`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn capture(&self, interpreter: &str, line: &str) -> io::Result<RawOutput> {
        let output = interpreter_command(interpreter, line)
            .stdin(Stdio::null())
            .output()?;
        Ok(output.into())
    }

    // The broker outlives this call; its outcome is never observed.
    #[allow(clippy::zombie_processes)]
    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::debug!("dispatched {program} (pid {})", child.id());
        Ok(())
    }
}

/// `cmd /C "<line>"`.
///
/// `mklink` is a cmd builtin with no executable of its own, so the whole
/// line goes through the interpreter. The arguments are passed raw: cmd
/// strips the outer quote pair itself and the quoted paths inside survive
/// untouched, which the argv escaping of [`Command::arg`] would break.
#[cfg(windows)]
fn interpreter_command(interpreter: &str, line: &str) -> Command {
    use std::os::windows::process::CommandExt as _;
    let mut cmd = Command::new(interpreter);
    cmd.raw_arg("/C").raw_arg(format!("\"{line}\""));
    cmd
}

/// `sh -c <line>`.
#[cfg(not(windows))]
fn interpreter_command(interpreter: &str, line: &str) -> Command {
    let mut cmd = Command::new(interpreter);
    cmd.arg("-c").arg(line);
    cmd
}
