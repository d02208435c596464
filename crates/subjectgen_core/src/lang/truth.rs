//! Names from the assertion-library API that generated wrappers compile against.
//!
//! These are the types the wrapper imports and the members it calls. They are kept here so the backend, the
//! config defaults and the tests agree on the same spellings.

/// Package that declares `FailureStrategy`, `Subject` and `SubjectFactory`.
pub const TRUTH_PACKAGE: &str = "com.google.common.truth";

/// Simple name of the failure-reporting strategy type.
pub const FAILURE_STRATEGY: &str = "FailureStrategy";

/// Simple name of the subject factory type.
pub const SUBJECT_FACTORY: &str = "SubjectFactory";

/// Factory method that produces a subject for a single value.
pub const GET_SUBJECT: &str = "getSubject";

/// Suffix that subject classes conventionally carry (`BarSubject`).
pub const SUBJECT_SUFFIX: &str = "Subject";

/// Suffix appended to the subject's simple name to name the wrapper class.
pub const ITERATING_WRAPPER_SUFFIX: &str = "IteratingWrapper";

/// Default annotation emitted on parameters that accept null.
pub const NULLABLE_ANNOTATION: &str = "javax.annotation.Nullable";

/// Imports every wrapper needs, in emission order.
pub const WRAPPER_IMPORTS: &[&str] = &[FAILURE_STRATEGY, SUBJECT_FACTORY];

/// Build the fully-qualified name of an API type inside `package`.
pub fn api_type(package: &str, simple: &str) -> String {
    format!("{}.{}", package, simple)
}
