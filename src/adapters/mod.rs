// Adapters layer: concrete implementations of the domain ports.

pub mod environment;
pub mod storage;

pub use environment::ProcessEnvironment;
pub use storage::LocalStorage;
