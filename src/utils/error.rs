use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Version file not found: {path}")]
    VersionFileNotFound { path: String },

    #[error("Version file is empty: {path}")]
    EmptyVersion { path: String },

    #[error("Changelog not found: {path}")]
    ChangelogNotFound { path: String },

    #[error("Placeholder '{placeholder}' not found in {path}")]
    PlaceholderNotFound { placeholder: String, path: String },

    #[error("Interpreter error: {message}")]
    InterpreterError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Interpreter,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::IoError(_) | ToolError::SerializationError(_) => ErrorCategory::Io,
            ToolError::VersionFileNotFound { .. }
            | ToolError::EmptyVersion { .. }
            | ToolError::ChangelogNotFound { .. }
            | ToolError::PlaceholderNotFound { .. } => ErrorCategory::Input,
            ToolError::InterpreterError { .. } => ErrorCategory::Interpreter,
            ToolError::ConfigError { .. } | ToolError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ToolError::PlaceholderNotFound { .. } => ErrorSeverity::Medium,
            ToolError::IoError(_) | ToolError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::VersionFileNotFound { path } => {
                format!("Cannot read the release version: '{}' does not exist", path)
            }
            ToolError::EmptyVersion { path } => {
                format!("The first line of '{}' is empty", path)
            }
            ToolError::ChangelogNotFound { path } => {
                format!("Cannot stamp the changelog: '{}' does not exist", path)
            }
            ToolError::PlaceholderNotFound { placeholder, path } => {
                format!("'{}' has no '{}' section to stamp", path, placeholder)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::VersionFileNotFound { .. } | ToolError::EmptyVersion { .. } => {
                "Write the release tag (e.g. v1.2.3) on the first line of the version file"
            }
            ToolError::ChangelogNotFound { .. } => {
                "Run from the repository root or pass --changelog"
            }
            ToolError::PlaceholderNotFound { .. } => {
                "Add a '## [LATEST]' heading, or drop --strict if the changelog is already stamped"
            }
            ToolError::InterpreterError { .. } => {
                "Check that the interpreter given by --python is installed and on PATH"
            }
            ToolError::ConfigError { .. } | ToolError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
            ToolError::IoError(_) | ToolError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
