//! JSON manifest loading
//!
//! A manifest lists the subjects to wrap and, optionally, generator configuration:
//!
//! ```json
//! {
//!   "config": { "nullable_annotation": "javax.annotation.Nullable" },
//!   "subjects": [
//!     {
//!       "package": "com.google.common.truth.codegen",
//!       "name": "BarSubject",
//!       "target": "java.lang.String",
//!       "methods": [
//!         { "name": "startsWith", "parameters": [{ "type": "java.lang.String", "nullable": true }] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted fields default to: `package` = unnamed package, `methods` = none, `returns` = `"void"`,
//! `modifiers` = `["public"]`, `nullable` = `false`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::descriptor::{
    MethodDescriptor, Modifier, Modifiers, ParameterDescriptor, SubjectDescriptor, parse_descriptor_type,
};
use super::errors::DescriptorError;
use crate::config::GeneratorConfig;

/// Maximum manifest size (16 MB)
pub const MAX_MANIFEST_SIZE: u64 = 16 * 1024 * 1024;

/// Errors raised while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest '{}' is too large ({size} bytes, max {} bytes)", .path.display(), MAX_MANIFEST_SIZE)]
    TooLarge { path: PathBuf, size: u64 },

    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("subject #{index} ('{name}'): {source}")]
    Subject {
        index: usize,
        name: String,
        #[source]
        source: DescriptorError,
    },

    #[error("subject #{index} ('{name}'), method '{method}': {source}")]
    Method {
        index: usize,
        name: String,
        method: String,
        #[source]
        source: DescriptorError,
    },
}

impl ManifestError {
    /// The descriptor error behind this manifest error, if any.
    pub fn descriptor_error(&self) -> Option<&DescriptorError> {
        match self {
            ManifestError::Subject { source, .. } | ManifestError::Method { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed, not yet validated, manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub config: GeneratorConfig,
    pub subjects: Vec<SubjectEntry>,
}

/// One subject as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectEntry {
    #[serde(default)]
    pub package: String,
    pub name: String,
    pub target: String,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

/// One method as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default = "default_returns")]
    pub returns: String,
    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<Modifier>,
}

/// One parameter as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterEntry {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub nullable: bool,
}

fn default_returns() -> String {
    "void".to_string()
}

fn default_modifiers() -> Vec<Modifier> {
    vec![Modifier::Public]
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a manifest file.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (I/O error)
    /// - The file exceeds `MAX_MANIFEST_SIZE`
    /// - The JSON does not match the manifest shape
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let io_error = |source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(io_error)?;
        if metadata.len() > MAX_MANIFEST_SIZE {
            return Err(ManifestError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
            });
        }

        let text = fs::read_to_string(path).map_err(io_error)?;
        let manifest = Self::from_json(&text)?;
        tracing::debug!(subjects = manifest.subjects.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Validate every entry into a descriptor, in manifest order.
    ///
    /// ## Errors
    /// The first invalid subject or method, with its position in the manifest.
    pub fn subjects(&self) -> Result<Vec<SubjectDescriptor>, ManifestError> {
        self.subjects
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_descriptor(index))
            .collect()
    }

    /// The generator configuration carried by the manifest.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl SubjectEntry {
    fn to_descriptor(&self, index: usize) -> Result<SubjectDescriptor, ManifestError> {
        let subject_error = |source| ManifestError::Subject {
            index,
            name: self.name.clone(),
            source,
        };

        let mut subject = SubjectDescriptor::parse(&self.package, &self.name, &self.target).map_err(subject_error)?;

        for method in &self.methods {
            let descriptor = method.to_descriptor().map_err(|source| ManifestError::Method {
                index,
                name: self.name.clone(),
                method: method.name.clone(),
                source,
            })?;
            subject.add_method(descriptor).map_err(subject_error)?;
        }
        Ok(subject)
    }
}

impl MethodEntry {
    fn to_descriptor(&self) -> Result<MethodDescriptor, DescriptorError> {
        let modifiers = Modifiers::from_list(&self.name, &self.modifiers)?;
        let returns = parse_descriptor_type("return", &self.returns)?;

        let mut method = MethodDescriptor::new(&self.name)?
            .returning(returns)?
            .with_modifiers(modifiers);
        for parameter in &self.parameters {
            method = method.with_parameter(ParameterDescriptor::parse(&parameter.ty, parameter.nullable)?)?;
        }
        Ok(method)
    }
}
