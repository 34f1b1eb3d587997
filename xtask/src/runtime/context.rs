//! Shared command context passed into command families.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::path::{Path, PathBuf};

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    invocation_dir: PathBuf,
}

impl CommandContext {
    /// Create a context for the current process.
    ///
    /// Relative paths given on the command line resolve against the current directory.
    pub fn new() -> XtaskResult<Self> {
        let invocation_dir = std::env::current_dir().map_err(|err| {
            XtaskError::environment(format!("failed to read current directory: {err}"))
        })?;
        Ok(Self::at(invocation_dir))
    }

    /// Create a context that resolves relative paths against `invocation_dir`.
    pub fn at(invocation_dir: impl Into<PathBuf>) -> Self {
        Self {
            invocation_dir: invocation_dir.into(),
        }
    }

    /// Directory `cargo xtask` was invoked from.
    pub fn invocation_dir(&self) -> &Path {
        &self.invocation_dir
    }

    /// Resolve a user-supplied path against the invocation directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.invocation_dir.join(path)
        }
    }
}
