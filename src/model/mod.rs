//! Descriptor model
//!
//! Validated descriptions of a subject class and the assertion methods it declares, plus the JSON manifest that
//! supplies them. Descriptors are checked when they are built, so the backend never sees a malformed one.
//!
//! ## Modules
//!
//! - `descriptor` - `SubjectDescriptor`, `MethodDescriptor`, `ParameterDescriptor`, modifiers
//! - `manifest` - JSON manifest loading (serde)
//! - `errors` - `DescriptorError`

pub mod descriptor;
pub mod errors;
pub mod manifest;

pub use descriptor::{MethodDescriptor, Modifier, Modifiers, ParameterDescriptor, SkipReason, SubjectDescriptor, Visibility};
pub use errors::DescriptorError;
pub use manifest::{Manifest, ManifestError};
