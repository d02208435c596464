//! Java language vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`primitives::PrimitiveId`]) and look up spellings via registry tables instead
//! of matching on string literals across the codebase.
//!
//! ## Examples
//! ```rust
//! use subjectgen_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("int"), Some(PrimitiveId::Int));
//! assert_eq!(primitives::boxed_name(PrimitiveId::Int), "java.lang.Integer");
//! ```

pub mod identifiers;
pub mod keywords;
pub mod primitives;
pub mod truth;
