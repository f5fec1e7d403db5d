pub mod changelog;
pub mod docs;
pub mod venv;

pub use crate::domain::model::{
    DetectionReason, InterpreterPrefixes, ReleaseVersion, StampOutcome, VirtualEnvStatus,
};
pub use crate::domain::ports::{EnvironmentProbe, Storage};
pub use crate::utils::error::Result;
