use crate::core::changelog::{DEFAULT_PLACEHOLDER, DEFAULT_RELEASE_URL_TEMPLATE};
use crate::core::docs::DocsConfig;
use crate::core::venv::DEFAULT_MARKER_ENV_VARS;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_url_template, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "modcam-tools.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub changelog: ChangelogConfig,
    pub venv: VenvConfig,
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    pub version_file: String,
    pub changelog_file: String,
    pub placeholder: String,
    pub release_url_template: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            version_file: "VERSION".to_string(),
            changelog_file: "CHANGELOG.md".to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            release_url_template: DEFAULT_RELEASE_URL_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenvConfig {
    pub python: String,
    pub marker_env_vars: Vec<String>,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            marker_env_vars: DEFAULT_MARKER_ENV_VARS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ToolsConfig {
    /// Loads `explicit` if given (it must exist), else `modcam-tools.toml` when present, else defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ToolError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ChangelogConfig {
    fn validate(&self) -> Result<()> {
        validate_path("changelog.version_file", &self.version_file)?;
        validate_path("changelog.changelog_file", &self.changelog_file)?;
        validate_non_empty_string("changelog.placeholder", &self.placeholder)?;
        validate_url_template("changelog.release_url_template", &self.release_url_template)
    }
}

impl Validate for VenvConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("venv.python", &self.python)?;
        for marker in &self.marker_env_vars {
            validate_non_empty_string("venv.marker_env_vars", marker)?;
        }
        Ok(())
    }
}

impl Validate for ToolsConfig {
    fn validate(&self) -> Result<()> {
        self.changelog.validate()?;
        self.venv.validate()?;
        self.docs.validate()
    }
}
