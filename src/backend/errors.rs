//! Define error types for wrapper generation.
//!
//! Descriptors are validated when they are built, so generation only fails on configuration problems, on a
//! package the subject cannot be reached from, or on conflicts between subjects generated together.

use thiserror::Error;

use crate::config::ConfigError;

/// Error during wrapper generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid generator config: {0}")]
    Config(#[from] ConfigError),

    #[error("subject '{subject}' is in the unnamed package and cannot be extended from package '{package}'")]
    UnnamedPackageSubject { subject: String, package: String },

    #[error("subjects '{first}' and '{second}' both generate class '{class}'")]
    DuplicateClass {
        class: String,
        first: String,
        second: String,
    },
}
