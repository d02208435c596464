//! Provide canonical Java vocabulary for the subjectgen type parser and code generator.
//!
//! This crate is intentionally small and dependency-free. It contains the spellings both the syntax crate and the
//! backend need to agree on: reserved words, primitive types and their boxed counterparts, identifier rules, and the
//! names of the assertion-library API the generated wrappers compile against.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no generator-specific types.

pub mod lang;

pub use lang::identifiers::{is_qualified_name, is_valid_identifier};
pub use lang::keywords::is_reserved;
pub use lang::primitives::{PrimitiveId, boxed_name};
