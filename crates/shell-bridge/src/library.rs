//! A sourced bash library and the calls made into it.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use nix::errno::Errno;
use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;
use tokio::process::Command;

use crate::ShellError;

pub const DEFAULT_SHELL: &str = "/bin/bash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `$0` is the library path, `$@` the call arguments.
const CALL_SCRIPT_PREFIX: &str = r#"source "$0" && "#;

/// A bash library file whose functions can be called one at a time.
#[derive(Debug, Clone)]
pub struct BashLibrary {
    shell: PathBuf,
    library: PathBuf,
    timeout: Duration,
}

/// Captured result of a finished call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutput {
    /// Exit code, `None` when the shell was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CallOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

impl BashLibrary {
    pub fn new(library: impl Into<PathBuf>) -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            library: library.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn library(&self) -> &Path {
        &self.library
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Source the library and call `function` with `args`.
    ///
    /// A non-zero exit is not an error here; inspect [`CallOutput::code`].
    /// The child is killed if it outlives the configured timeout.
    pub async fn call(&self, function: &str, args: &[&str]) -> Result<CallOutput, ShellError> {
        if !is_shell_identifier(function) {
            return Err(ShellError::InvalidFunction(function.to_string()));
        }

        let script = format!("{CALL_SCRIPT_PREFIX}{function} \"$@\"");
        let started = Instant::now();

        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(script)
            .arg(&self.library)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ShellError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;
        // the child leads its own group; pgid == pid
        let pgid = child.id();

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ShellError::Io {
                function: function.to_string(),
                source,
            })?,
            Err(_) => {
                if let Some(pgid) = pgid {
                    kill_process_group(pgid);
                }
                tracing::warn!(
                    function,
                    library = %self.library.display(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Shell call timed out"
                );
                return Err(ShellError::Timeout {
                    function: function.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        let result = CallOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(
            function,
            library = %self.library.display(),
            code = ?result.code,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Shell call finished"
        );

        Ok(result)
    }

    /// Like [`call`](Self::call), but a non-zero exit becomes [`ShellError::Failed`].
    pub async fn call_checked(
        &self,
        function: &str,
        args: &[&str],
    ) -> Result<CallOutput, ShellError> {
        let output = self.call(function, args).await?;
        if !output.success() {
            return Err(ShellError::Failed {
                function: function.to_string(),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }
}

/// SIGKILL every process left in the group, including children of the sourced function.
fn kill_process_group(pgid: u32) {
    let Ok(raw) = i32::try_from(pgid) else {
        return;
    };
    match killpg(Pid::from_raw(raw), Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(e) => tracing::warn!(pgid, error = %e, "Failed to kill shell process group"),
    }
}

fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
