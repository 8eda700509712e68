use std::path::{Path, PathBuf};

/// Absolute path of a resolved executable and the extension that matched.
///
/// `extension` is `None` when the bare name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    pub path: PathBuf,
    pub extension: Option<String>,
}

impl ResolvedExecutable {
    pub fn new(path: PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of a single launch attempt that got as far as creating a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Started without waiting.
    Spawned { pid: Option<u32> },
    /// Waited for the child; `code` is `None` when it was killed by a signal.
    Exited { code: Option<i32>, success: bool },
    /// Waited past the deadline; the child was killed.
    TimedOut,
}

impl LaunchOutcome {
    /// False only for a child that exited unsuccessfully or timed out.
    pub fn is_success(&self) -> bool {
        match self {
            LaunchOutcome::Spawned { .. } => true,
            LaunchOutcome::Exited { success, .. } => *success,
            LaunchOutcome::TimedOut => false,
        }
    }
}
