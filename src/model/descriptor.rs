//! Subject, method and parameter descriptors.
//!
//! A [`SubjectDescriptor`] names an existing assertion subject class, the element type it asserts on, and the
//! assertion methods it declares. The backend turns it into an iterating wrapper.
//!
//! ## Notes
//!
//! - Only methods that are public, non-static, non-final and return `void` are wrapped. The rest stay in the
//!   descriptor so tooling can report why they were skipped (see [`MethodDescriptor::skip_reason`]).
//! - Generated parameter names are positional (`arg0`, `arg1`, ...), so descriptors do not carry names.
//!
//! ## Examples
//! ```rust
//! use subjectgen::model::{MethodDescriptor, ParameterDescriptor, SubjectDescriptor};
//!
//! let subject = SubjectDescriptor::parse("com.example", "BarSubject", "java.lang.String")
//!     .unwrap()
//!     .with_method(
//!         MethodDescriptor::new("startsWith")
//!             .unwrap()
//!             .with_parameter(ParameterDescriptor::parse("java.lang.String", true).unwrap())
//!             .unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(subject.type_name(), "Bar");
//! assert_eq!(subject.canonical_name(), "com.example.BarSubject");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use subjectgen_core::lang::{identifiers, truth};
use subjectgen_syntax::{JavaType, parse_type};

use super::errors::DescriptorError;

// ============================================================================
// Modifiers
// ============================================================================

/// A Java method modifier as spelled in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Synchronized,
}

/// Method visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Source keyword, or `None` for package-private.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::PackagePrivate => None,
            Visibility::Private => Some("private"),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("package-private"))
    }
}

/// The modifier set of a method. `Default` is a plain `public` instance method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_synchronized: bool,
}

impl Modifiers {
    /// Fold a modifier list into a set. Without a visibility keyword the method is package-private, as in Java.
    ///
    /// ## Errors
    /// [`DescriptorError::ConflictingVisibility`] when more than one visibility keyword is present.
    pub fn from_list(method: &str, list: &[Modifier]) -> Result<Self, DescriptorError> {
        let mut modifiers = Modifiers {
            visibility: Visibility::PackagePrivate,
            ..Modifiers::default()
        };
        let mut saw_visibility = false;

        for modifier in list {
            let visibility = match modifier {
                Modifier::Public => Some(Visibility::Public),
                Modifier::Protected => Some(Visibility::Protected),
                Modifier::Private => Some(Visibility::Private),
                Modifier::Static => {
                    modifiers.is_static = true;
                    None
                }
                Modifier::Final => {
                    modifiers.is_final = true;
                    None
                }
                Modifier::Abstract => {
                    modifiers.is_abstract = true;
                    None
                }
                Modifier::Synchronized => {
                    modifiers.is_synchronized = true;
                    None
                }
            };

            if let Some(visibility) = visibility {
                if saw_visibility && modifiers.visibility != visibility {
                    return Err(DescriptorError::ConflictingVisibility {
                        method: method.to_string(),
                    });
                }
                saw_visibility = true;
                modifiers.visibility = visibility;
            }
        }

        Ok(modifiers)
    }
}

/// Why a method is not wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotPublic(Visibility),
    Static,
    Final,
    /// A loop over many elements cannot produce a single return value.
    ReturnsValue(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotPublic(visibility) => write!(f, "{} methods cannot be wrapped", visibility),
            SkipReason::Static => f.write_str("static methods cannot be overridden"),
            SkipReason::Final => f.write_str("final methods cannot be overridden"),
            SkipReason::ReturnsValue(ty) => write!(f, "returns {}, only void methods are wrapped", ty),
        }
    }
}

// ============================================================================
// Parameters and methods
// ============================================================================

/// One parameter of an assertion method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    ty: JavaType,
    nullable: bool,
}

impl ParameterDescriptor {
    /// A parameter that rejects null.
    pub fn new(ty: JavaType) -> Self {
        Self { ty, nullable: false }
    }

    /// A parameter annotated as accepting null.
    pub fn nullable(ty: JavaType) -> Self {
        Self { ty, nullable: true }
    }

    /// Parse the parameter type from text.
    pub fn parse(ty: &str, nullable: bool) -> Result<Self, DescriptorError> {
        let ty = parse_descriptor_type("parameter", ty)?;
        Ok(Self { ty, nullable })
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// One assertion method declared by a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    return_type: JavaType,
    modifiers: Modifiers,
}

impl MethodDescriptor {
    /// A `public void name()` method; add parameters with [`with_parameter`](Self::with_parameter).
    pub fn new(name: &str) -> Result<Self, DescriptorError> {
        check_identifier("method name", name)?;
        Ok(Self {
            name: name.to_string(),
            parameters: Vec::new(),
            return_type: JavaType::Void,
            modifiers: Modifiers::default(),
        })
    }

    /// Append a parameter.
    ///
    /// ## Errors
    /// - [`DescriptorError::VoidType`] for a `void` parameter.
    /// - [`DescriptorError::VarargsNotLast`] when a parameter follows a varargs parameter.
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Result<Self, DescriptorError> {
        if parameter.ty.is_void() {
            return Err(DescriptorError::VoidType(format!(
                "parameter {} of '{}'",
                self.parameters.len(),
                self.name
            )));
        }
        if self.parameters.last().is_some_and(|p| p.ty.is_varargs()) {
            return Err(DescriptorError::VarargsNotLast { method: self.name });
        }
        self.parameters.push(parameter);
        Ok(self)
    }

    /// Set the return type.
    pub fn returning(mut self, return_type: JavaType) -> Result<Self, DescriptorError> {
        if return_type.is_varargs() {
            return Err(DescriptorError::UnexpectedVarargs(format!("return of '{}'", self.name)));
        }
        self.return_type = return_type;
        Ok(self)
    }

    /// Replace the modifier set.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Name and parameter types, e.g. `startsWith(java.lang.String)`. Two methods of one subject may not share a
    /// signature.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.ty.to_string()).collect();
        format!("{}({})", self.name, params.join(", "))
    }

    /// Why the method cannot be wrapped, or `None` if it can.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        if self.modifiers.visibility != Visibility::Public {
            Some(SkipReason::NotPublic(self.modifiers.visibility))
        } else if self.modifiers.is_static {
            Some(SkipReason::Static)
        } else if self.modifiers.is_final {
            Some(SkipReason::Final)
        } else if !self.return_type.is_void() {
            Some(SkipReason::ReturnsValue(self.return_type.to_string()))
        } else {
            None
        }
    }

    pub fn is_wrappable(&self) -> bool {
        self.skip_reason().is_none()
    }
}

// ============================================================================
// Subjects
// ============================================================================

/// An assertion subject class to wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDescriptor {
    package: String,
    /// Enclosing classes then the subject itself (`["Outer", "FooSubject"]`).
    class_path: Vec<String>,
    target: JavaType,
    methods: Vec<MethodDescriptor>,
}

impl SubjectDescriptor {
    /// Describe the subject `class_name` (dotted for nested classes) in `package`, asserting on `target`.
    ///
    /// An empty package means the unnamed package.
    ///
    /// ## Errors
    /// Returns a [`DescriptorError`] for an invalid package or class name, or a `void`/varargs target.
    pub fn new(package: &str, class_name: &str, target: JavaType) -> Result<Self, DescriptorError> {
        if !package.is_empty() && !identifiers::is_qualified_name(package) {
            return Err(DescriptorError::InvalidPackage(package.to_string()));
        }
        if class_name.is_empty() {
            return Err(DescriptorError::Empty {
                what: "subject class name",
            });
        }
        if !identifiers::is_qualified_name(class_name) {
            return Err(DescriptorError::InvalidIdentifier {
                what: "subject class name",
                name: class_name.to_string(),
            });
        }
        if target.is_void() {
            return Err(DescriptorError::VoidType("target".to_string()));
        }
        if target.is_varargs() {
            return Err(DescriptorError::UnexpectedVarargs("target".to_string()));
        }

        Ok(Self {
            package: package.to_string(),
            class_path: class_name.split('.').map(str::to_string).collect(),
            target,
            methods: Vec::new(),
        })
    }

    /// Like [`new`](Self::new), parsing the target type from text.
    pub fn parse(package: &str, class_name: &str, target: &str) -> Result<Self, DescriptorError> {
        let target = parse_descriptor_type("target", target)?;
        Self::new(package, class_name, target)
    }

    /// Add a method, builder style.
    pub fn with_method(mut self, method: MethodDescriptor) -> Result<Self, DescriptorError> {
        self.add_method(method)?;
        Ok(self)
    }

    /// Add a method.
    ///
    /// ## Errors
    /// [`DescriptorError::DuplicateMethod`] when a method with the same signature exists.
    pub fn add_method(&mut self, method: MethodDescriptor) -> Result<(), DescriptorError> {
        let signature = method.signature();
        if self.methods.iter().any(|m| m.signature() == signature) {
            return Err(DescriptorError::DuplicateMethod(signature));
        }
        self.methods.push(method);
        Ok(())
    }

    /// The package, empty for the unnamed package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Class name relative to the package (`Outer.FooSubject`).
    pub fn class_name(&self) -> String {
        self.class_path.join(".")
    }

    /// The innermost class name (`FooSubject`).
    pub fn simple_name(&self) -> &str {
        self.class_path.last().map(String::as_str).unwrap_or_default()
    }

    /// Fully-qualified source name (`com.example.Outer.FooSubject`).
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.class_name()
        } else {
            format!("{}.{}", self.package, self.class_name())
        }
    }

    /// The simple name without its `Subject` suffix (`BarSubject` → `Bar`).
    pub fn type_name(&self) -> &str {
        let simple = self.simple_name();
        match simple.strip_suffix(truth::SUBJECT_SUFFIX) {
            Some(stem) if !stem.is_empty() => stem,
            _ => simple,
        }
    }

    /// Whether the subject is declared inside another class.
    pub fn is_nested(&self) -> bool {
        self.class_path.len() > 1
    }

    /// The target type as declared.
    pub fn target(&self) -> &JavaType {
        &self.target
    }

    /// The element type of the wrapped iterable: the target, boxed if primitive.
    pub fn element_type(&self) -> JavaType {
        self.target.boxed()
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Methods that get a delegating override, in declaration order.
    pub fn wrapped_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| m.is_wrappable())
    }

    /// Methods left out of the wrapper, with the reason.
    pub fn skipped_methods(&self) -> impl Iterator<Item = (&MethodDescriptor, SkipReason)> {
        self.methods.iter().filter_map(|m| m.skip_reason().map(|reason| (m, reason)))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_identifier(what: &'static str, name: &str) -> Result<(), DescriptorError> {
    if name.is_empty() {
        return Err(DescriptorError::Empty { what });
    }
    if !identifiers::is_valid_identifier(name) {
        return Err(DescriptorError::InvalidIdentifier {
            what,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Parse a type written in a descriptor, attaching `context` to the error.
pub(crate) fn parse_descriptor_type(context: &str, text: &str) -> Result<JavaType, DescriptorError> {
    parse_type(text).map_err(|source| DescriptorError::InvalidType {
        context: context.to_string(),
        text: text.to_string(),
        source,
    })
}
