// src/config/validate.rs

use serde_yaml::Value;
use tracing::debug;

use crate::config::command::CommandSpec;
use crate::config::model::{Configuration, RawConfigFile};
use crate::errors::ConfigError;

impl TryFrom<RawConfigFile> for Configuration {
    type Error = ConfigError;

    /// Validate a raw document.
    ///
    /// Nothing is kept from a document that fails: the first bad field or
    /// command block aborts the whole conversion.
    fn try_from(raw: RawConfigFile) -> Result<Self, Self::Error> {
        let version = coerce_version(raw.version.as_ref())?;
        let commands = parse_commands(&raw.list)?;

        debug!(
            version,
            commands = commands.len(),
            aliases = raw.alias.len(),
            bindings = raw.bindings.len(),
            "configuration validated"
        );

        Ok(Configuration::new_unchecked(
            version,
            commands,
            raw.alias,
            raw.bindings,
        ))
    }
}

/// Turn the raw `version` value into an integer.
///
/// Missing and `null` both mean "not specified" and give 0. Integers and
/// strings holding a base-10 integer are accepted; anything else is an error.
fn coerce_version(value: Option<&Value>) -> Result<i64, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| ConfigError::InvalidVersion(n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidVersion(s.clone())),
        Some(other) => Err(ConfigError::InvalidVersion(describe(other))),
    }
}

fn parse_commands(list: &[String]) -> Result<Vec<CommandSpec>, ConfigError> {
    list.iter()
        .enumerate()
        .map(|(index, block)| {
            CommandSpec::parse(block)
                .map_err(|source| ConfigError::InvalidCommandEntry { index, source })
        })
        .collect()
}

fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(t) => format!("tagged value {}", t.tag),
        Value::Null | Value::Number(_) | Value::String(_) => {
            serde_yaml::to_string(value).unwrap_or_default().trim().to_string()
        }
    }
}
