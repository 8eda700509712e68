#![allow(dead_code)]

pub use cmdlauncher_test_utils::builders;
pub use cmdlauncher_test_utils::{init_tracing, with_timeout};
