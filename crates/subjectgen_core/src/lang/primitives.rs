//! Primitive type vocabulary and boxing.
//!
//! A subject's target is always a reference type, so primitive element types are boxed before they appear in
//! `Iterable<...>`, casts or loop variables.
//!
//! ## Examples
//! ```rust
//! use subjectgen_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("boolean"), Some(PrimitiveId::Boolean));
//! assert_eq!(primitives::from_str("Boolean"), None);
//! assert_eq!(primitives::as_str(PrimitiveId::Char), "char");
//! ```

/// Stable identifier for Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    pub spelling: &'static str,
    /// Fully-qualified name of the wrapper class.
    pub boxed: &'static str,
}

/// Registry of primitive types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Boolean, "boolean", "java.lang.Boolean"),
    info(PrimitiveId::Byte, "byte", "java.lang.Byte"),
    info(PrimitiveId::Short, "short", "java.lang.Short"),
    info(PrimitiveId::Int, "int", "java.lang.Integer"),
    info(PrimitiveId::Long, "long", "java.lang.Long"),
    info(PrimitiveId::Char, "char", "java.lang.Character"),
    info(PrimitiveId::Float, "float", "java.lang.Float"),
    info(PrimitiveId::Double, "double", "java.lang.Double"),
];

/// The `void` pseudo-type. Not a primitive, but spelled like one.
pub const VOID: &str = "void";

const fn info(id: PrimitiveId, spelling: &'static str, boxed: &'static str) -> PrimitiveInfo {
    PrimitiveInfo { id, spelling, boxed }
}

/// Resolve a spelling to a primitive id (case-sensitive).
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.spelling == name).map(|p| p.id)
}

/// Return the metadata entry for a primitive.
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    match PRIMITIVES.iter().find(|p| p.id == id) {
        Some(info) => info,
        None => unreachable!("every PrimitiveId has a registry entry"),
    }
}

/// Return the canonical spelling of a primitive.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).spelling
}

/// Return the fully-qualified wrapper class of a primitive.
pub fn boxed_name(id: PrimitiveId) -> &'static str {
    info_for(id).boxed
}
