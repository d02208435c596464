//! Iterating wrapper class builder
//!
//! Turns a [`SubjectDescriptor`] into the source of a subclass that holds an `Iterable` of values and, for every
//! wrappable assertion method, loops over the values and delegates to a per-element subject obtained from the
//! `SubjectFactory`.
//!
//! ## Examples
//! ```rust
//! use subjectgen::backend::IteratingWrapperClassBuilder;
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
//!
//! let source = IteratingWrapperClassBuilder::new(&subject).build().unwrap();
//! assert_eq!(source.class_name(), "BarSubjectIteratingWrapper");
//! assert!(source.as_str().contains("public class BarSubjectIteratingWrapper extends BarSubject {"));
//! ```

use subjectgen_core::lang::truth;

use super::errors::GenerateError;
use super::java_emitter::JavaEmitter;
use super::source::GeneratedSource;
use crate::config::GeneratorConfig;
use crate::model::{MethodDescriptor, SubjectDescriptor};

/// Loop variable holding the current element.
const ITEM: &str = "item";
/// Field holding the iterable of elements.
const DATA: &str = "data";
/// Field and constructor parameter holding the subject factory.
const FACTORY: &str = "subjectFactory";
/// Inherited field and constructor parameter holding the failure strategy.
const STRATEGY: &str = "failureStrategy";
/// Local holding the per-element subject.
const SUBJECT: &str = "subject";

/// Builds the iterating wrapper for one subject.
#[derive(Debug, Clone)]
pub struct IteratingWrapperClassBuilder<'a> {
    subject: &'a SubjectDescriptor,
    config: GeneratorConfig,
}

impl<'a> IteratingWrapperClassBuilder<'a> {
    pub fn new(subject: &'a SubjectDescriptor) -> Self {
        Self {
            subject,
            config: GeneratorConfig::default(),
        }
    }

    /// Use `config` instead of the defaults.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Simple name of the generated class (`BarSubjectIteratingWrapper`).
    pub fn class_name(&self) -> String {
        format!("{}{}", self.subject.simple_name(), self.config.wrapper_suffix)
    }

    /// Package the wrapper is generated into.
    pub fn package(&self) -> &str {
        self.config
            .package_override
            .as_deref()
            .unwrap_or_else(|| self.subject.package())
    }

    /// Methods that get a delegating override, in declaration order.
    pub fn wrapped_methods(&self) -> impl Iterator<Item = &'a MethodDescriptor> + 'a {
        self.subject.wrapped_methods()
    }

    /// Render the wrapper class.
    ///
    /// Rendering is deterministic: the same subject and config always produce the same text.
    ///
    /// ## Errors
    /// - [`GenerateError::Config`] when the configuration does not validate.
    /// - [`GenerateError::UnnamedPackageSubject`] when a subject in the unnamed package would be wrapped into a
    ///   named package, which can never refer to it.
    #[tracing::instrument(skip_all, fields(subject = %self.subject.canonical_name()))]
    pub fn build(&self) -> Result<GeneratedSource, GenerateError> {
        self.config.validate()?;
        let package = self.package();
        if self.subject.package().is_empty() && !package.is_empty() {
            return Err(GenerateError::UnnamedPackageSubject {
                subject: self.subject.class_name(),
                package: package.to_string(),
            });
        }

        for (method, reason) in self.subject.skipped_methods() {
            tracing::debug!(method = %method.signature(), %reason, "skipping method");
        }

        let class_name = self.class_name();
        let mut e = JavaEmitter::with_indent_width(self.config.indent_width);

        if !package.is_empty() {
            e.package_decl(package);
            e.blank_line();
        }
        for api in truth::WRAPPER_IMPORTS {
            e.import(&truth::api_type(&self.config.truth_package, api));
        }
        // Without an import the superclass is named relative to its package (`Outer.FooSubject`).
        let superclass = if self.needs_subject_import(package) {
            e.import(&self.subject.canonical_name());
            self.subject.simple_name().to_string()
        } else {
            self.subject.class_name()
        };
        e.blank_line();

        e.class_def("public", &class_name, Some(&superclass), |e| {
            e.blank_line();
            self.emit_fields(e);
            e.blank_line();
            self.emit_constructor(e, &class_name);
            for method in self.wrapped_methods() {
                e.blank_line();
                self.emit_method(e, method);
            }
        });

        let wrapped = self.wrapped_methods().count();
        tracing::debug!(class = %class_name, wrapped, "built iterating wrapper");
        Ok(GeneratedSource::new(package, class_name, e.finish()))
    }

    /// `extends <Simple>` only resolves without an import when the subject is a top-level class of the same
    /// package. Classes in the unnamed package cannot be imported.
    fn needs_subject_import(&self, package: &str) -> bool {
        !self.subject.package().is_empty() && (self.subject.is_nested() || self.subject.package() != package)
    }

    fn emit_fields(&self, e: &mut JavaEmitter) {
        let element = self.subject.element_type();
        e.field("private final", truth::SUBJECT_FACTORY, FACTORY);
        e.field("private final", &format!("Iterable<{}>", element), DATA);
    }

    fn emit_constructor(&self, e: &mut JavaEmitter, class_name: &str) {
        let element = self.subject.element_type();
        let params = [
            (truth::FAILURE_STRATEGY.to_string(), STRATEGY.to_string()),
            (format!("{}<?, ?>", truth::SUBJECT_FACTORY), FACTORY.to_string()),
            (format!("Iterable<{}>", element), DATA.to_string()),
        ];
        e.constructor("public", class_name, &params, |e| {
            e.statement(&format!("super({}, ({})null)", STRATEGY, element));
            e.statement(&format!("this.{0} = {0}", FACTORY));
            e.statement(&format!("this.{0} = {0}", DATA));
        });
    }

    fn emit_method(&self, e: &mut JavaEmitter, method: &MethodDescriptor) {
        let element = self.subject.element_type().to_string();
        let canonical = self.subject.canonical_name();

        let mut params = Vec::with_capacity(method.parameters().len());
        let mut args = Vec::with_capacity(method.parameters().len());
        for (i, parameter) in method.parameters().iter().enumerate() {
            let arg = format!("arg{}", i);
            if parameter.is_nullable() {
                params.push(format!("@{} {} {}", self.config.nullable_annotation, parameter.ty(), arg));
            } else {
                params.push(format!("{} {}", parameter.ty(), arg));
            }
            args.push(arg);
        }

        e.method(&["@Override"], "public", "void", method.name(), &params.join(", "), |e| {
            e.for_each(&element, ITEM, DATA, |e| {
                e.statement(&format!(
                    "{0} {1} = ({0}){2}.{3}({4}, {5})",
                    canonical,
                    SUBJECT,
                    FACTORY,
                    truth::GET_SUBJECT,
                    STRATEGY,
                    ITEM
                ));
                e.statement(&format!("{}.{}({})", SUBJECT, method.name(), args.join(", ")));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::model::{Modifier, Modifiers, ParameterDescriptor};

    const TOP_BOILERPLATE: &str = "package com.google.common.truth.codegen;

import com.google.common.truth.FailureStrategy;
import com.google.common.truth.SubjectFactory;
";

    const SUBJECT_FACTORY_FIELD: &str = "private final SubjectFactory subjectFactory;";

    const FOO_WRAPPED_METHOD: &str = "  @Override public void endsWith(java.lang.String arg0) {
    for (java.lang.String item : data) {
      com.google.common.truth.codegen.IteratingWrapperClassBuilderTest.FooSubject subject = (com.google.common.truth.codegen.IteratingWrapperClassBuilderTest.FooSubject)subjectFactory.getSubject(failureStrategy, item);
      subject.endsWith(arg0);
    }
  }";

    const BAR_WRAPPED_METHOD: &str = "  @Override public void startsWith(@javax.annotation.Nullable java.lang.String arg0) {
    for (java.lang.String item : data) {
      com.google.common.truth.codegen.BarSubject subject = (com.google.common.truth.codegen.BarSubject)subjectFactory.getSubject(failureStrategy, item);
      subject.startsWith(arg0);
    }
  }";

    fn iterable_field(element: &str) -> String {
        format!("private final Iterable<{}> data;", element)
    }

    fn constructor(type_name: &str, element: &str) -> String {
        format!(
            "  public {0}SubjectIteratingWrapper(
      FailureStrategy failureStrategy,
      SubjectFactory<?, ?> subjectFactory,
      Iterable<{1}> data
  ) {{
    super(failureStrategy, ({1})null);
    this.subjectFactory = subjectFactory;
    this.data = data;
  }}",
            type_name, element
        )
    }

    fn class_declaration(type_name: &str) -> String {
        format!("public class {0}SubjectIteratingWrapper extends {0}Subject {{", type_name)
    }

    fn string_method(name: &str, nullable: bool) -> MethodDescriptor {
        MethodDescriptor::new(name)
            .unwrap()
            .with_parameter(ParameterDescriptor::parse("java.lang.String", nullable).unwrap())
            .unwrap()
    }

    fn bar_subject() -> SubjectDescriptor {
        SubjectDescriptor::parse("com.google.common.truth.codegen", "BarSubject", "java.lang.String")
            .unwrap()
            .with_method(string_method("startsWith", true))
            .unwrap()
    }

    fn foo_subject() -> SubjectDescriptor {
        SubjectDescriptor::parse(
            "com.google.common.truth.codegen",
            "IteratingWrapperClassBuilderTest.FooSubject",
            "java.lang.String",
        )
        .unwrap()
        .with_method(string_method("endsWith", false))
        .unwrap()
    }

    fn build(subject: &SubjectDescriptor) -> String {
        IteratingWrapperClassBuilder::new(subject).build().unwrap().to_string()
    }

    fn assert_wrapper(code: &str, type_name: &str, element: &str, method: &str) {
        assert!(code.starts_with(TOP_BOILERPLATE), "missing header in:\n{}", code);
        assert!(code.contains(SUBJECT_FACTORY_FIELD));
        assert!(code.contains(&iterable_field(element)));
        assert!(code.contains(&constructor(type_name, element)), "missing constructor in:\n{}", code);
        assert!(code.contains(&class_declaration(type_name)));
        assert!(code.contains(method), "missing wrapped method in:\n{}", code);
    }

    #[test]
    fn test_build_bar() {
        assert_wrapper(&build(&bar_subject()), "Bar", "java.lang.String", BAR_WRAPPED_METHOD);
    }

    #[test]
    fn test_build_nested_foo() {
        let code = build(&foo_subject());
        assert_wrapper(&code, "Foo", "java.lang.String", FOO_WRAPPED_METHOD);
        assert!(code.contains("import com.google.common.truth.codegen.IteratingWrapperClassBuilderTest.FooSubject;\n"));
    }

    #[test]
    fn test_full_layout() {
        let expected = format!(
            "{}
{}

  {}
  {}

{}

{}
}}
",
            TOP_BOILERPLATE,
            class_declaration("Bar"),
            SUBJECT_FACTORY_FIELD,
            iterable_field("java.lang.String"),
            constructor("Bar", "java.lang.String"),
            BAR_WRAPPED_METHOD
        );
        assert_eq!(build(&bar_subject()), expected);
    }

    #[test]
    fn test_build_is_idempotent() {
        let subject = foo_subject();
        let builder = IteratingWrapperClassBuilder::new(&subject);
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_class_name_and_package() {
        let subject = foo_subject();
        let builder = IteratingWrapperClassBuilder::new(&subject);
        assert_eq!(builder.class_name(), "FooSubjectIteratingWrapper");
        assert_eq!(builder.package(), "com.google.common.truth.codegen");

        let source = builder.build().unwrap();
        assert_eq!(
            source.qualified_name(),
            "com.google.common.truth.codegen.FooSubjectIteratingWrapper"
        );
    }

    #[test]
    fn test_multiple_methods_keep_order() {
        let subject = bar_subject()
            .with_method(string_method("endsWith", false))
            .unwrap()
            .with_method(MethodDescriptor::new("isEmpty").unwrap())
            .unwrap();
        let code = build(&subject);

        let starts = code.find("void startsWith(").unwrap();
        let ends = code.find("void endsWith(").unwrap();
        let empty = code.find("void isEmpty()").unwrap();
        assert!(starts < ends && ends < empty);
        assert!(code.contains("  }\n\n  @Override public void endsWith("));
        assert!(code.contains("      subject.isEmpty();\n"));
    }

    #[test]
    fn test_no_wrappable_methods_still_builds() {
        let subject = SubjectDescriptor::parse("com.example", "EmptySubject", "java.lang.Object").unwrap();
        let code = build(&subject);
        assert!(code.ends_with("    this.data = data;\n  }\n}\n"));
        assert!(!code.contains("@Override"));
    }

    #[test]
    fn test_skipped_methods_are_not_emitted() {
        let subject = bar_subject()
            .with_method(
                MethodDescriptor::new("named")
                    .unwrap()
                    .returning(subjectgen_syntax::JavaType::class("com.google.common.truth.codegen.BarSubject"))
                    .unwrap(),
            )
            .unwrap()
            .with_method(
                MethodDescriptor::new("fail")
                    .unwrap()
                    .with_modifiers(Modifiers::from_list("fail", &[Modifier::Protected]).unwrap()),
            )
            .unwrap();
        let code = build(&subject);
        assert!(!code.contains("named("));
        assert!(!code.contains("fail("));
        assert_eq!(code.matches("@Override").count(), 1);
    }

    #[test]
    fn test_primitive_target_is_boxed() {
        let subject = SubjectDescriptor::parse("com.example", "IntSubject", "int")
            .unwrap()
            .with_method(
                MethodDescriptor::new("isGreaterThan")
                    .unwrap()
                    .with_parameter(ParameterDescriptor::parse("int", false).unwrap())
                    .unwrap(),
            )
            .unwrap();
        let code = build(&subject);
        assert!(code.contains("private final Iterable<java.lang.Integer> data;"));
        assert!(code.contains("super(failureStrategy, (java.lang.Integer)null);"));
        assert!(code.contains("for (java.lang.Integer item : data) {"));
        assert!(code.contains("@Override public void isGreaterThan(int arg0) {"));
    }

    #[test]
    fn test_parameters_are_positional() {
        let subject = SubjectDescriptor::parse("com.example", "MapSubject", "java.util.Map<?, ?>")
            .unwrap()
            .with_method(
                MethodDescriptor::new("containsEntry")
                    .unwrap()
                    .with_parameter(ParameterDescriptor::parse("java.lang.Object", true).unwrap())
                    .unwrap()
                    .with_parameter(ParameterDescriptor::parse("java.lang.Object", true).unwrap())
                    .unwrap(),
            )
            .unwrap()
            .with_method(
                MethodDescriptor::new("containsKeys")
                    .unwrap()
                    .with_parameter(ParameterDescriptor::parse("java.lang.Object...", false).unwrap())
                    .unwrap(),
            )
            .unwrap();
        let code = build(&subject);
        assert!(code.contains(
            "containsEntry(@javax.annotation.Nullable java.lang.Object arg0, @javax.annotation.Nullable java.lang.Object arg1) {"
        ));
        assert!(code.contains("subject.containsEntry(arg0, arg1);"));
        assert!(code.contains("containsKeys(java.lang.Object... arg0) {"));
        assert!(code.contains("private final Iterable<java.util.Map<?, ?>> data;"));
    }

    #[test]
    fn test_package_override_imports_subject() {
        let subject = bar_subject();
        let config = GeneratorConfig::new().with_package_override("com.example.generated");
        let source = IteratingWrapperClassBuilder::new(&subject).with_config(config).build().unwrap();
        let code = source.as_str();
        assert!(code.starts_with("package com.example.generated;\n"));
        assert!(code.contains("import com.google.common.truth.codegen.BarSubject;\n"));
        assert_eq!(source.package(), "com.example.generated");
    }

    #[test]
    fn test_unnamed_package() {
        let subject = SubjectDescriptor::parse("", "BarSubject", "java.lang.String").unwrap();
        let code = build(&subject);
        assert!(code.starts_with("import com.google.common.truth.FailureStrategy;\n"));
        assert!(!code.contains("package "));
        assert!(!code.contains("import BarSubject;"));
    }

    #[test]
    fn test_unnamed_package_nested_subject_is_qualified() {
        let subject = SubjectDescriptor::parse("", "Outer.FooSubject", "java.lang.String")
            .unwrap()
            .with_method(string_method("endsWith", false))
            .unwrap();
        let code = build(&subject);
        assert!(code.contains("public class FooSubjectIteratingWrapper extends Outer.FooSubject {"));
        assert!(!code.contains("import Outer"));
        assert_eq!(code.matches("import ").count(), 2);
    }

    #[test]
    fn test_unnamed_package_subject_cannot_move_package() {
        let subject = SubjectDescriptor::parse("", "BarSubject", "java.lang.String").unwrap();
        let err = IteratingWrapperClassBuilder::new(&subject)
            .with_config(GeneratorConfig::new().with_package_override("gen"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnnamedPackageSubject {
                subject: "BarSubject".into(),
                package: "gen".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "subject 'BarSubject' is in the unnamed package and cannot be extended from package 'gen'"
        );
    }

    #[test]
    fn test_custom_config() {
        let subject = bar_subject();
        let config = GeneratorConfig::new()
            .with_indent_width(4)
            .with_wrapper_suffix("ForEach")
            .with_nullable_annotation("org.jspecify.annotations.Nullable");
        let code = IteratingWrapperClassBuilder::new(&subject)
            .with_config(config)
            .build()
            .unwrap()
            .to_string();
        assert!(code.contains("public class BarSubjectForEach extends BarSubject {"));
        assert!(code.contains("    @Override public void startsWith(@org.jspecify.annotations.Nullable java.lang.String arg0) {"));
        assert!(code.contains("\n            FailureStrategy failureStrategy,\n"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let subject = bar_subject();
        let err = IteratingWrapperClassBuilder::new(&subject)
            .with_config(GeneratorConfig::new().with_indent_width(0))
            .build()
            .unwrap_err();
        assert_eq!(err, GenerateError::Config(ConfigError::IndentWidth(0)));
    }

    #[test]
    fn test_one_loop_and_one_call_per_method() {
        let subject = bar_subject().with_method(string_method("endsWith", false)).unwrap();
        let code = build(&subject);
        assert_eq!(code.matches("for (java.lang.String item : data)").count(), 2);
        assert_eq!(code.matches("subject.startsWith(").count(), 1);
        assert_eq!(code.matches("subject.endsWith(").count(), 1);
    }
}
