#![forbid(unsafe_code)]
//! Iterating wrapper generator for Java assertion subjects
//!
//! Given a description of an assertion subject class (its package, name, target type and assertion methods),
//! this crate emits the Java source of a companion class that applies every assertion to each element of an
//! `Iterable`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod model;
pub mod version;

pub use backend::{GenerateError, GeneratedSource, IteratingWrapperClassBuilder, SourceWriter, generate, generate_all};
pub use config::{ConfigError, GeneratorConfig};
pub use model::{Manifest, MethodDescriptor, ParameterDescriptor, SubjectDescriptor};
pub use subjectgen_syntax::{JavaType, TypeSyntaxError, parse_type};
