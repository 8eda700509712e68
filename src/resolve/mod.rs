// src/resolve/mod.rs

//! Executable lookup, mimicking how a shell finds a bare command name.
//!
//! - [`search`] holds the [`SearchContext`] (working directory, search path,
//!   extension list) and the helpers that build it from environment values.
//! - [`lookup`] walks that context in a fixed order and returns the first
//!   regular file that matches.

pub mod lookup;
pub mod search;

pub use lookup::resolve_executable;
pub use search::{default_extensions, parse_extension_list, split_search_path, SearchContext};
