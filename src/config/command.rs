// src/config/command.rs

//! Parsing of a single `list` entry into a [`CommandSpec`].
//!
//! An entry is a multi-line text block, usually written as a YAML literal
//! block scalar:
//!
//! ```yaml
//! list:
//!   - |-
//!     power shell
//!     powershell
//!     -Command Get-Location
//! ```
//!
//! Line 0 is the display name, line 1 the executable, line 2 the argument
//! line. Anything after the third line is ignored.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Minimum number of lines a command block must have.
const REQUIRED_LINES: usize = 3;

/// One launchable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    executable: String,
    arguments: String,
}

impl CommandSpec {
    /// Parse a command block.
    ///
    /// The whole block is trimmed first, then split on `'\n'`, then every line
    /// is trimmed on its own. Blank lines *inside* the block still count as
    /// lines, so an empty argument line can be written as a blank line as
    /// long as something follows it. The executable line must not be blank,
    /// so `"a\n\nb\nc"` is rejected even though it holds three non-blank
    /// lines.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.trim().split('\n').map(str::trim).collect();

        if lines.len() < REQUIRED_LINES {
            return Err(ParseError::MalformedCommandBlock { lines: lines.len() });
        }

        let (name, executable, arguments) = (lines[0], lines[1], lines[2]);
        if executable.is_empty() {
            return Err(ParseError::BlankExecutable {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            executable: executable.to_string(),
            arguments: arguments.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Raw argument line, handed to the child process as-is.
    pub fn arguments(&self) -> &str {
        &self.arguments
    }
}

impl FromStr for CommandSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandSpec::parse(s)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.name, self.executable, self.arguments)
    }
}
