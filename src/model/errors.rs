//! Define error types for descriptor validation.
//!
//! ## Notes
//!
//! - Descriptor errors are raised while a descriptor is built; a constructed descriptor is always valid.

use miette::Diagnostic;
use subjectgen_syntax::TypeSyntaxError;
use thiserror::Error;

/// A descriptor that cannot produce valid Java.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum DescriptorError {
    #[error("{what} must not be empty")]
    Empty { what: &'static str },

    #[error("'{name}' is not a valid Java identifier for {what}")]
    InvalidIdentifier { what: &'static str, name: String },

    #[error("'{0}' is not a valid package name")]
    InvalidPackage(String),

    #[error("invalid {context} type '{text}': {source}")]
    InvalidType {
        context: String,
        text: String,
        #[source]
        #[diagnostic_source]
        source: TypeSyntaxError,
    },

    #[error("{0} type cannot be void")]
    VoidType(String),

    #[error("{0} type cannot be varargs")]
    UnexpectedVarargs(String),

    #[error("method '{method}' declares varargs before its last parameter")]
    VarargsNotLast { method: String },

    #[error("method '{method}' declares more than one visibility modifier")]
    ConflictingVisibility { method: String },

    #[error("method '{0}' is declared more than once")]
    DuplicateMethod(String),
}

impl DescriptorError {
    /// The underlying type syntax error, if this error wraps one.
    pub fn type_syntax(&self) -> Option<&TypeSyntaxError> {
        match self {
            DescriptorError::InvalidType { source, .. } => Some(source),
            _ => None,
        }
    }
}
