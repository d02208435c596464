//! Generator version information.
//!
//! The CLI reports this value for `--version`. It is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile
//! time.

/// The subjectgen version string (for example, `0.1.0`).
pub const SUBJECTGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
