use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use cmdlauncher::errors::LaunchError;
use cmdlauncher::exec::{LaunchBackend, LaunchRequest};
use cmdlauncher::types::LaunchOutcome;

/// A fake backend that:
/// - records every launch request it receives
/// - answers each one with a fixed outcome instead of spawning a process.
pub struct RecordingBackend {
    launched: Arc<Mutex<Vec<LaunchRequest>>>,
    outcome: LaunchOutcome,
}

impl RecordingBackend {
    /// Every launch "exits" successfully with code 0.
    pub fn new(launched: Arc<Mutex<Vec<LaunchRequest>>>) -> Self {
        Self::with_outcome(
            launched,
            LaunchOutcome::Exited {
                code: Some(0),
                success: true,
            },
        )
    }

    pub fn with_outcome(launched: Arc<Mutex<Vec<LaunchRequest>>>, outcome: LaunchOutcome) -> Self {
        Self { launched, outcome }
    }
}

impl LaunchBackend for RecordingBackend {
    fn launch(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome, LaunchError>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);
        let outcome = self.outcome;

        Box::pin(async move {
            {
                let mut guard = launched.lock().unwrap();
                guard.push(request);
            }
            Ok(outcome)
        })
    }
}

/// A backend whose process creation always fails with the given OS code.
pub struct FailingBackend {
    pub code: i32,
}

impl LaunchBackend for FailingBackend {
    fn launch(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome, LaunchError>> + Send + '_>> {
        let code = self.code;
        Box::pin(async move {
            Err(LaunchError::ProcessCreationFailed {
                path: request.path,
                code: Some(code),
                message: std::io::Error::from_raw_os_error(code).to_string(),
            })
        })
    }
}
