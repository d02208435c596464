//! Generator configuration
//!
//! Defaults reproduce the layout the assertion library's own wrappers use: two-space indentation, the
//! `IteratingWrapper` suffix, `javax.annotation.Nullable` on nullable parameters and the
//! `com.google.common.truth` API package.

use serde::{Deserialize, Serialize};
use subjectgen_core::lang::{identifiers, truth};
use thiserror::Error;

/// Largest accepted indentation width.
pub const MAX_INDENT_WIDTH: usize = 8;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Appended to the subject's simple name to name the wrapper class
    pub wrapper_suffix: String,
    /// Fully-qualified annotation placed on parameters that accept null
    pub nullable_annotation: String,
    /// Package declaring `FailureStrategy` and `SubjectFactory`
    pub truth_package: String,
    /// Package for generated wrappers; defaults to the subject's own package
    pub package_override: Option<String>,
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("indent width must be between 1 and 8, got {0}")]
    IndentWidth(usize),

    #[error("wrapper suffix '{0}' cannot be appended to a Java class name")]
    WrapperSuffix(String),

    #[error("'{value}' is not a valid qualified name for {field}")]
    QualifiedName { field: &'static str, value: String },
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            wrapper_suffix: truth::ITERATING_WRAPPER_SUFFIX.to_string(),
            nullable_annotation: truth::NULLABLE_ANNOTATION.to_string(),
            truth_package: truth::TRUTH_PACKAGE.to_string(),
            package_override: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the wrapper class suffix
    pub fn with_wrapper_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.wrapper_suffix = suffix.into();
        self
    }

    /// Set the nullable annotation
    pub fn with_nullable_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.nullable_annotation = annotation.into();
        self
    }

    /// Set the package that declares the assertion API types
    pub fn with_truth_package(mut self, package: impl Into<String>) -> Self {
        self.truth_package = package.into();
        self
    }

    /// Emit wrappers into `package` instead of the subject's package
    pub fn with_package_override(mut self, package: impl Into<String>) -> Self {
        self.package_override = Some(package.into());
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::IndentWidth(self.indent_width));
        }
        // An empty suffix would make the wrapper extend itself
        if self.wrapper_suffix.is_empty() || !self.wrapper_suffix.chars().all(identifiers::is_identifier_part) {
            return Err(ConfigError::WrapperSuffix(self.wrapper_suffix.clone()));
        }
        check_qualified("nullable_annotation", &self.nullable_annotation)?;
        check_qualified("truth_package", &self.truth_package)?;
        if let Some(package) = &self.package_override {
            check_qualified("package_override", package)?;
        }
        Ok(())
    }
}

fn check_qualified(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if identifiers::is_qualified_name(value) {
        Ok(())
    } else {
        Err(ConfigError::QualifiedName {
            field,
            value: value.to_string(),
        })
    }
}
