// src/config/mod.rs

//! Configuration loading and validation for cmdlauncher.
//!
//! Responsibilities:
//! - Parse individual command blocks (`command.rs`).
//! - Define the YAML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate the raw document into a `Configuration` (`validate.rs`).

pub mod command;
pub mod loader;
pub mod model;
pub mod validate;

pub use command::CommandSpec;
pub use loader::{
    default_config_path, load_from_path, load_from_str, write_default_config, DEFAULT_CONFIG,
};
pub use model::{Configuration, RawConfigFile};
