use serde::{Deserialize, Serialize};
use std::fmt;

/// Release identifier read from the version file, e.g. `v1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Takes the first line of `contents` without trailing whitespace.
    /// `\n`, `\r\n` and a lone `\r` all end a line. Returns `None` when that line is empty.
    pub fn from_first_line(contents: &str) -> Option<Self> {
        let line = contents
            .split(['\r', '\n'])
            .next()
            .unwrap_or("")
            .trim_end();
        if line.is_empty() {
            None
        } else {
            Some(Self(line.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub version: ReleaseVersion,
    pub contents: String,
    pub placeholder_found: bool,
    /// `None` when nothing was stamped.
    pub link_line: Option<String>,
}

/// Installation prefixes reported by a Python interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterPrefixes {
    pub prefix: String,
    pub base_prefix: Option<String>,
    pub real_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionReason {
    MarkerVariable,
    PrefixMismatch,
    SamePrefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualEnvStatus {
    pub is_virtual_env: bool,
    pub reason: DetectionReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<InterpreterPrefixes>,
}

impl fmt::Display for VirtualEnvStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_virtual_env { "True" } else { "False" })
    }
}
