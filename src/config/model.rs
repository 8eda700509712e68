// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::command::CommandSpec;

pub use serde_yaml::Value as YamlValue;

/// Configuration document as read from YAML, before validation.
///
/// ```yaml
/// version: 1
/// list:
///   - |-
///     power shell
///     powershell
///     -Command Get-Location
/// alias:
///   vi: nvim
/// bindings: [ctrl+alt+o]
/// ```
///
/// Every field is optional. `version` is kept as a raw YAML value so that a
/// non-integer can be reported as an invalid version rather than as a
/// generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub version: Option<YamlValue>,

    /// Command blocks, one per launchable command.
    #[serde(default)]
    pub list: Vec<String>,

    /// `alias: { from: to }` substitutions applied to executables.
    #[serde(default)]
    pub alias: BTreeMap<String, String>,

    #[serde(default)]
    pub bindings: Vec<String>,
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>`, so holding one means
/// every command block parsed and the version was an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    version: i64,
    commands: Vec<CommandSpec>,
    aliases: BTreeMap<String, String>,
    bindings: Vec<String>,
}

impl Configuration {
    pub(crate) fn new_unchecked(
        version: i64,
        commands: Vec<CommandSpec>,
        aliases: BTreeMap<String, String>,
        bindings: Vec<String>,
    ) -> Self {
        Self {
            version,
            commands,
            aliases,
            bindings,
        }
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// Commands in document order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Key-binding identifiers in document order.
    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }

    /// Display names in document order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(CommandSpec::name).collect()
    }

    /// First command whose display name equals `name`.
    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Replace `executable` by its alias target, if it has one.
    ///
    /// Substitution is a single lookup; an alias pointing at another alias is
    /// not followed.
    pub fn expand_alias<'a>(&'a self, executable: &'a str) -> &'a str {
        self.aliases
            .get(executable)
            .map(String::as_str)
            .unwrap_or(executable)
    }
}
