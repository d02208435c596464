//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::path::{Component, Path};

use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::backend::{self, CheckStatus, GeneratedSource, SourceWriter};
use crate::config::GeneratorConfig;
use crate::model::{Manifest, ManifestError, SubjectDescriptor};

use super::{CliError, CliResult, ExitCode};

/// Source root used when `--out-dir` is not given.
pub const DEFAULT_OUT_DIR: &str = "generated";

// ============================================================================
// Shared preparation
// ============================================================================

/// A loaded manifest, validated and rendered.
pub struct PreparedSources {
    pub subjects: Vec<SubjectDescriptor>,
    pub sources: Vec<GeneratedSource>,
}

/// Load `manifest`, validate every subject and render its wrapper.
///
/// `package` overrides both the subject packages and any `package_override` in the manifest config.
pub fn prepare(manifest: &Path, package: Option<&str>) -> CliResult<PreparedSources> {
    let loaded = Manifest::load(manifest).map_err(|e| manifest_error(manifest, &e))?;
    let subjects = loaded.subjects().map_err(|e| manifest_error(manifest, &e))?;

    let mut config: GeneratorConfig = loaded.config().clone();
    if let Some(package) = package {
        config = config.with_package_override(package);
    }

    let sources = backend::generate_all(&subjects, &config)
        .map_err(|e| CliError::failure(format!("Error generating '{}': {}", manifest.display(), e)))?;
    Ok(PreparedSources { subjects, sources })
}

/// Validate the output directory to prevent path traversal attacks.
///
/// This function ensures:
/// - The path doesn't contain `..` components
/// - Absolute paths are allowed but logged
pub fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    if out_dir.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::failure(format!(
            "Output directory '{}' contains path traversal (..)",
            out_dir.display()
        )));
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

/// Format a manifest error, with a source snippet when a type failed to parse.
pub fn manifest_error(manifest: &Path, error: &ManifestError) -> CliError {
    let mut msg = format!("Error in '{}': {}", manifest.display(), error);
    if let Some(syntax) = error.descriptor_error().and_then(|e| e.type_syntax()) {
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, syntax).is_ok() {
            msg.push_str("\n\n");
            msg.push_str(rendered.trim_end());
        }
    }
    CliError::failure(msg)
}

// ============================================================================
// Commands
// ============================================================================

/// Write every wrapper below `out_dir`.
pub fn generate(manifest: &Path, out_dir: &Path, package: Option<&str>) -> CliResult<ExitCode> {
    validate_output_dir(out_dir)?;
    let prepared = prepare(manifest, package)?;
    let writer = SourceWriter::new(out_dir);

    let mut written = 0;
    for source in &prepared.sources {
        let outcome = writer
            .write(source)
            .map_err(|e| CliError::failure(format!("Error writing {}: {}", writer.path_for(source).display(), e)))?;
        if outcome.changed {
            println!("Generated: {}", outcome.path.display());
            written += 1;
        }
    }

    println!(
        "✓ {} wrapper(s) generated, {} unchanged",
        written,
        prepared.sources.len() - written
    );
    Ok(ExitCode::SUCCESS)
}

/// Print wrappers to stdout, optionally only the one for `subject`.
pub fn emit(manifest: &Path, subject: Option<&str>, package: Option<&str>) -> CliResult<ExitCode> {
    let prepared = prepare(manifest, package)?;
    print!("{}", emit_text(&prepared, subject)?);
    Ok(ExitCode::SUCCESS)
}

/// The text `emit` prints: each selected source, separated by a blank line.
pub fn emit_text(prepared: &PreparedSources, subject: Option<&str>) -> CliResult<String> {
    let selected: Vec<&GeneratedSource> = prepared
        .subjects
        .iter()
        .zip(&prepared.sources)
        .filter(|(descriptor, _)| subject.is_none_or(|name| matches_subject(descriptor, name)))
        .map(|(_, source)| source)
        .collect();

    if let Some(name) = subject {
        if selected.is_empty() {
            return Err(CliError::failure(format!("No subject named '{}' in manifest", name)));
        }
    }

    let texts: Vec<&str> = selected.iter().map(|s| s.as_str()).collect();
    Ok(texts.join("\n"))
}

/// `name` may be the type name (`Bar`), the simple, relative or canonical class name.
fn matches_subject(descriptor: &SubjectDescriptor, name: &str) -> bool {
    descriptor.type_name() == name
        || descriptor.simple_name() == name
        || descriptor.class_name() == name
        || descriptor.canonical_name() == name
}

/// Compare generated wrappers against `out_dir` without writing.
pub fn check(manifest: &Path, out_dir: &Path, package: Option<&str>) -> CliResult<ExitCode> {
    validate_output_dir(out_dir)?;
    let prepared = prepare(manifest, package)?;
    let writer = SourceWriter::new(out_dir);

    let mut outdated = 0;
    for source in &prepared.sources {
        let path = writer.path_for(source);
        let status = writer
            .check(source)
            .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
        match status {
            CheckStatus::UpToDate => {}
            CheckStatus::Missing => {
                println!("Missing: {}", path.display());
                outdated += 1;
            }
            CheckStatus::Stale => {
                println!("Stale: {}", path.display());
                outdated += 1;
            }
        }
    }

    if outdated > 0 {
        return Err(CliError::failure(format!(
            "\n{} of {} wrapper(s) out of date; run `subjectgen generate`",
            outdated,
            prepared.sources.len()
        )));
    }
    println!("✓ {} wrapper(s) up to date", prepared.sources.len());
    Ok(ExitCode::SUCCESS)
}

/// Print each subject with the methods it wraps and skips.
pub fn list(manifest: &Path) -> CliResult<ExitCode> {
    let prepared = prepare(manifest, None)?;
    print!("{}", list_text(&prepared));
    Ok(ExitCode::SUCCESS)
}

/// The text `list` prints.
pub fn list_text(prepared: &PreparedSources) -> String {
    let mut out = String::new();
    for (subject, source) in prepared.subjects.iter().zip(&prepared.sources) {
        let _ = writeln!(out, "{} -> {}", subject.canonical_name(), source.qualified_name());
        for method in subject.wrapped_methods() {
            let _ = writeln!(out, "  wrap {}", method.signature());
        }
        for (method, reason) in subject.skipped_methods() {
            let _ = writeln!(out, "  skip {} ({})", method.signature(), reason);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const MANIFEST: &str = r#"{
        "subjects": [
            {
                "package": "com.google.common.truth.codegen",
                "name": "BarSubject",
                "target": "java.lang.String",
                "methods": [
                    { "name": "startsWith", "parameters": [{ "type": "java.lang.String", "nullable": true }] },
                    { "name": "named", "returns": "com.google.common.truth.codegen.BarSubject" }
                ]
            },
            {
                "package": "com.google.common.truth.codegen",
                "name": "IteratingWrapperClassBuilderTest.FooSubject",
                "target": "java.lang.String",
                "methods": [ { "name": "endsWith", "parameters": [{ "type": "java.lang.String" }] } ]
            }
        ]
    }"#;

    fn write_manifest(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("subjects.json");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_validate_output_dir() {
        assert!(validate_output_dir(Path::new("generated/java")).is_ok());
        assert!(validate_output_dir(Path::new("../outside")).is_err());
        assert!(validate_output_dir(Path::new("a/../../b")).is_err());
    }

    #[test]
    fn test_prepare_renders_every_subject() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = prepare(&write_manifest(dir.path(), MANIFEST), None).unwrap();
        assert_eq!(prepared.sources.len(), 2);
        assert_eq!(prepared.sources[1].class_name(), "FooSubjectIteratingWrapper");
    }

    #[test]
    fn test_package_flag_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = prepare(&write_manifest(dir.path(), MANIFEST), Some("com.example.gen")).unwrap();
        assert!(prepared.sources.iter().all(|s| s.package() == "com.example.gen"));
    }

    #[test]
    fn test_emit_selects_subject() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = prepare(&write_manifest(dir.path(), MANIFEST), None).unwrap();

        let text = emit_text(&prepared, Some("FooSubject")).unwrap();
        assert!(text.contains("public class FooSubjectIteratingWrapper extends FooSubject {"));
        assert!(!text.contains("BarSubjectIteratingWrapper"));

        let all = emit_text(&prepared, None).unwrap();
        assert!(all.contains("BarSubjectIteratingWrapper"));
        assert!(all.contains("FooSubjectIteratingWrapper"));

        assert!(emit_text(&prepared, Some("BazSubject")).is_err());
    }

    #[test]
    fn test_emit_selects_by_type_name() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = prepare(&write_manifest(dir.path(), MANIFEST), None).unwrap();

        let bar = emit_text(&prepared, Some("Bar")).unwrap();
        assert!(bar.contains("public class BarSubjectIteratingWrapper extends BarSubject {"));
        assert!(!bar.contains("FooSubjectIteratingWrapper"));

        let foo = emit_text(&prepared, Some("Foo")).unwrap();
        assert!(foo.contains("public class FooSubjectIteratingWrapper extends FooSubject {"));

        assert!(emit_text(&prepared, Some("Baz")).is_err());
    }

    #[test]
    fn test_list_text() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = prepare(&write_manifest(dir.path(), MANIFEST), None).unwrap();
        let text = list_text(&prepared);
        assert!(text.starts_with(
            "com.google.common.truth.codegen.BarSubject -> com.google.common.truth.codegen.BarSubjectIteratingWrapper\n"
        ));
        assert!(text.contains("  wrap startsWith(java.lang.String)\n"));
        assert!(text.contains(
            "  skip named() (returns com.google.common.truth.codegen.BarSubject, only void methods are wrapped)\n"
        ));
    }

    #[test]
    fn test_generate_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path(), MANIFEST);
        let out = dir.path().join("out");

        assert!(check(&manifest, &out, None).is_err());
        assert_eq!(generate(&manifest, &out, None).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check(&manifest, &out, None).unwrap(), ExitCode::SUCCESS);

        let bar = out
            .join("com/google/common/truth/codegen")
            .join("BarSubjectIteratingWrapper.java");
        fs::write(&bar, "edited").unwrap();
        let err = check(&manifest, &out, None).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_type_error_is_rendered_with_snippet() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(
            dir.path(),
            r#"{ "subjects": [ { "name": "IntListSubject", "target": "java.util.List<int>" } ] }"#,
        );
        let err = prepare(&manifest, None).err().unwrap();
        assert!(err.message.contains("primitive type 'int' cannot be used as a type argument"));
        assert!(err.message.contains("java.util.List<int>"));
        assert!(err.message.contains("use the wrapper type 'java.lang.Integer' instead"));
    }

    #[test]
    fn test_missing_manifest() {
        let err = prepare(Path::new("no/such/manifest.json"), None).err().unwrap();
        assert!(err.message.starts_with("Error in 'no/such/manifest.json': cannot read manifest"));
    }
}
