// src/exec/backend.rs

//! Pluggable launch backend abstraction.
//!
//! The [`crate::launcher::Launcher`] talks to a `LaunchBackend` instead of
//! spawning processes directly. Production code uses [`ProcessBackend`];
//! tests can provide a backend that records what would have been launched.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::LaunchError;
use crate::exec::process::{launch, LaunchOptions};
use crate::types::LaunchOutcome;

/// A fully prepared launch: resolved path plus the raw argument line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Display name of the command being launched.
    pub name: String,
    pub path: PathBuf,
    pub arguments: String,
    pub options: LaunchOptions,
}

/// Trait abstracting how a launch request is carried out.
pub trait LaunchBackend: Send {
    fn launch(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome, LaunchError>> + Send + '_>>;
}

/// Backend that creates real OS processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchBackend for ProcessBackend {
    fn launch(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome, LaunchError>> + Send + '_>> {
        Box::pin(async move { launch(&request.path, &request.arguments, request.options).await })
    }
}
