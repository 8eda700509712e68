// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`process`] creates one child process with `tokio::process::Command`,
//!   optionally waits for it, and maps spawn failures to
//!   [`crate::errors::LaunchError`].
//! - [`backend`] provides the `LaunchBackend` trait and the concrete
//!   `ProcessBackend` used in production, which tests can replace with a fake.

pub mod backend;
pub mod process;

pub use backend::{LaunchBackend, LaunchRequest, ProcessBackend};
pub use process::{launch, split_arguments, LaunchOptions};
