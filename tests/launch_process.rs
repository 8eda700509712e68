// tests/launch_process.rs

mod common;
use crate::common::{init_tracing, with_timeout};

use std::path::PathBuf;
use std::time::Duration;

use cmdlauncher::errors::LaunchError;
use cmdlauncher::exec::{launch, split_arguments, LaunchOptions};
use cmdlauncher::types::LaunchOutcome;

#[test]
fn argument_line_is_split_with_shell_quoting() {
    assert_eq!(
        split_arguments(r#"-Command "Get-Location | Out-Host" -NoExit"#),
        vec!["-Command", "Get-Location | Out-Host", "-NoExit"]
    );
    assert!(split_arguments("").is_empty());
}

#[test]
fn unbalanced_quotes_fall_back_to_whitespace() {
    assert_eq!(split_arguments(r#"say "hello world"#), vec!["say", "\"hello", "world"]);
}

#[tokio::test]
async fn missing_executable_fails_with_os_error() {
    init_tracing();

    let path = PathBuf::from("/definitely/not/a/real/binary");
    let result = launch(&path, "", LaunchOptions::default()).await;

    match result {
        Err(err @ LaunchError::ProcessCreationFailed { .. }) => {
            assert!(err.os_code().is_some());
            assert!(err.to_string().contains("failed to create process"));
        }
        other => panic!("Expected ProcessCreationFailed, got: {:?}", other),
    }
}

#[cfg(unix)]
mod unix {
    use super::*;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    #[tokio::test]
    async fn waits_for_successful_exit() {
        init_tracing();

        let outcome = with_timeout(launch(&sh(), "-c 'exit 0'", LaunchOptions::default()))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LaunchOutcome::Exited {
                code: Some(0),
                success: true
            }
        );
    }

    #[tokio::test]
    async fn reports_non_zero_exit_code() {
        init_tracing();

        let outcome = with_timeout(launch(&sh(), "-c 'exit 7'", LaunchOptions::default()))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LaunchOutcome::Exited {
                code: Some(7),
                success: false
            }
        );
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn no_wait_returns_immediately() {
        init_tracing();

        let options = LaunchOptions {
            wait: false,
            timeout: None,
        };
        let outcome = with_timeout(launch(&sh(), "-c 'sleep 1'", options))
            .await
            .unwrap();

        assert!(matches!(outcome, LaunchOutcome::Spawned { pid: Some(_) }));
    }

    #[tokio::test]
    async fn timeout_kills_long_running_child() {
        init_tracing();

        let options = LaunchOptions {
            wait: true,
            timeout: Some(Duration::from_millis(200)),
        };
        let outcome = with_timeout(launch(&sh(), "-c 'sleep 30'", options))
            .await
            .unwrap();

        assert_eq!(outcome, LaunchOutcome::TimedOut);
    }
}
