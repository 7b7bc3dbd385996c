//! Calls functions from bash libraries with bounded run time.
//!
//! The appliance keeps its system knowledge in sourced bash libraries
//! (`libsettings.sh`, `libsysteminfo.sh`, ...). This crate runs one function
//! from such a library per call, passing arguments as positional parameters
//! so nothing caller-supplied is spliced into script text.

pub mod library;

use std::path::PathBuf;
use std::time::Duration;

pub use library::{BashLibrary, CallOutput, DEFAULT_SHELL, DEFAULT_TIMEOUT};

/// Unified error type for the shell-bridge crate.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Invalid shell function name: {0:?}")]
    InvalidFunction(String),

    #[error("Failed to spawn {}: {source}", .shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to collect output of {function}: {source}")]
    Io {
        function: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{function} timed out after {timeout:?}")]
    Timeout { function: String, timeout: Duration },

    #[error("{function} exited with status {code:?}: {stderr}")]
    Failed {
        function: String,
        code: Option<i32>,
        stderr: String,
    },
}
