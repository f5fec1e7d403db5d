use crate::domain::model::InterpreterPrefixes;
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_to_string(&self, path: &str) -> Result<String>;
    /// Replaces the file at `path` with `contents`.
    fn write_string(&self, path: &str, contents: &str) -> Result<()>;
}

pub trait EnvironmentProbe {
    fn env_var_present(&self, name: &str) -> bool;
    fn interpreter_prefixes(&self) -> Result<InterpreterPrefixes>;
}
