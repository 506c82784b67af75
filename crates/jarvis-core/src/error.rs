//! Error types for the core assistant crate.

use thiserror::Error;

/// Errors returned by assistant construction and config loading.
///
/// Classification, extraction, and simulation are total by contract and
/// never surface here.
#[derive(Debug, Error)]
pub enum JarvisCoreError {
    /// A command pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),
    /// Parsing a config file failed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] json5::Error),
}
