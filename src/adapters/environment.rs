use crate::domain::model::InterpreterPrefixes;
use crate::domain::ports::EnvironmentProbe;
use crate::utils::error::{Result, ToolError};
use std::process::Command;

const PREFIX_SCRIPT: &str = "import sys\n\
print(sys.prefix)\n\
print(getattr(sys, 'base_prefix', sys.prefix))\n\
print(getattr(sys, 'real_prefix', '') or '')\n";

/// Reads the real process environment and asks a Python interpreter for its prefixes.
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    python: String,
}

impl ProcessEnvironment {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl EnvironmentProbe for ProcessEnvironment {
    fn env_var_present(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }

    fn interpreter_prefixes(&self) -> Result<InterpreterPrefixes> {
        tracing::debug!("Querying prefixes from interpreter: {}", self.python);

        let output = Command::new(&self.python)
            .args(["-c", PREFIX_SCRIPT])
            .output()
            .map_err(|e| ToolError::InterpreterError {
                message: format!("failed to launch '{}': {}", self.python, e),
            })?;

        if !output.status.success() {
            return Err(ToolError::InterpreterError {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.python,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_prefix_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses the three lines printed by the prefix script.
///
/// A missing `base_prefix` line means the attribute is absent; an empty one is
/// kept as an empty string. An empty `real_prefix` line means absent.
pub fn parse_prefix_output(stdout: &str) -> Result<InterpreterPrefixes> {
    let mut lines = stdout.lines().map(str::trim_end);

    let prefix = match lines.next() {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => {
            return Err(ToolError::InterpreterError {
                message: "interpreter did not report sys.prefix".to_string(),
            })
        }
    };

    let base_prefix = lines.next().map(str::to_string);
    let real_prefix = lines
        .next()
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    Ok(InterpreterPrefixes {
        prefix,
        base_prefix,
        real_prefix,
    })
}
