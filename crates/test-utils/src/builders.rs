#![allow(dead_code)]

use std::collections::BTreeMap;
use cmdlauncher::config::model::YamlValue;
use cmdlauncher::config::{Configuration, RawConfigFile};

/// Builder for `Configuration` to simplify test setup.
///
/// Goes through `RawConfigFile` so the result is validated the same way a
/// loaded file is.
pub struct ConfigBuilder {
    config: RawConfigFile,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                version: None,
                list: Vec::new(),
                alias: BTreeMap::new(),
                bindings: Vec::new(),
            },
        }
    }

    pub fn version(mut self, version: i64) -> Self {
        self.config.version = Some(YamlValue::Number(version.into()));
        self
    }

    /// Add a command as its three-line block.
    pub fn with_command(mut self, name: &str, executable: &str, arguments: &str) -> Self {
        self.config
            .list
            .push(CommandBlockBuilder::new(name, executable).args(arguments).build());
        self
    }

    /// Add a raw `list` entry verbatim.
    pub fn with_block(mut self, block: &str) -> Self {
        self.config.list.push(block.to_string());
        self
    }

    pub fn with_alias(mut self, from: &str, to: &str) -> Self {
        self.config.alias.insert(from.to_string(), to.to_string());
        self
    }

    pub fn with_binding(mut self, binding: &str) -> Self {
        self.config.bindings.push(binding.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> Configuration {
        Configuration::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `list` entry.
pub struct CommandBlockBuilder {
    name: String,
    executable: String,
    arguments: String,
    extra: Vec<String>,
    indent: String,
}

impl CommandBlockBuilder {
    pub fn new(name: &str, executable: &str) -> Self {
        Self {
            name: name.to_string(),
            executable: executable.to_string(),
            arguments: String::new(),
            extra: Vec::new(),
            indent: String::new(),
        }
    }

    pub fn args(mut self, arguments: &str) -> Self {
        self.arguments = arguments.to_string();
        self
    }

    /// Append a trailing line after the argument line.
    pub fn extra_line(mut self, line: &str) -> Self {
        self.extra.push(line.to_string());
        self
    }

    /// Prefix every line with `indent`.
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn build(self) -> String {
        std::iter::once(&self.name)
            .chain(std::iter::once(&self.executable))
            .chain(std::iter::once(&self.arguments))
            .chain(self.extra.iter())
            .map(|line| format!("{}{}", self.indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
