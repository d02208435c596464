//! Wrapper generation backend
//!
//! Turns validated subject descriptors into Java source and writes it out.
//!
//! ## Module Organization
//!
//! - `java_emitter.rs` - Low-level Java source line builder
//! - `wrapper.rs` - `IteratingWrapperClassBuilder`, the class template
//! - `source.rs` - `GeneratedSource`, the finished text of one class
//! - `writer.rs` - `SourceWriter`, lays sources out under a source root
//! - `errors.rs` - `GenerateError`

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod java_emitter;
pub mod source;
pub mod wrapper;
pub mod writer;

use std::collections::HashMap;

pub use errors::GenerateError;
pub use java_emitter::JavaEmitter;
pub use source::GeneratedSource;
pub use wrapper::IteratingWrapperClassBuilder;
pub use writer::{CheckStatus, SourceWriter, WriteOutcome};

use crate::config::GeneratorConfig;
use crate::model::SubjectDescriptor;

/// Generate the wrapper for one subject.
pub fn generate(subject: &SubjectDescriptor, config: &GeneratorConfig) -> Result<GeneratedSource, GenerateError> {
    IteratingWrapperClassBuilder::new(subject).with_config(config.clone()).build()
}

/// Generate wrappers for every subject, in order.
///
/// ## Errors
/// - [`GenerateError::Config`] when `config` does not validate.
/// - [`GenerateError::DuplicateClass`] when two subjects would produce the same wrapper class, e.g. nested
///   subjects with the same simple name in one package.
#[tracing::instrument(skip_all, fields(subjects = subjects.len()))]
pub fn generate_all(
    subjects: &[SubjectDescriptor],
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedSource>, GenerateError> {
    config.validate()?;

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut sources = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let source = generate(subject, config)?;
        let class = source.qualified_name();
        if let Some(first) = seen.insert(class.clone(), subject.canonical_name()) {
            return Err(GenerateError::DuplicateClass {
                class,
                first,
                second: subject.canonical_name(),
            });
        }
        sources.push(source);
    }
    Ok(sources)
}
