//! Generated source buffer
//!
//! The finished text of one generated class. Lines are fixed when the emitter finishes; the rendered text is
//! derived from them once and never changes afterwards.

use std::fmt;
use std::path::PathBuf;

/// The rendered source of one generated Java class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    package: String,
    class_name: String,
    lines: Vec<String>,
    text: String,
}

impl GeneratedSource {
    /// Finalize emitted lines. The rendered text ends with a single newline.
    pub fn new(package: impl Into<String>, class_name: impl Into<String>, lines: Vec<String>) -> Self {
        let mut text = lines.join("\n");
        text.push('\n');
        Self {
            package: package.into(),
            class_name: class_name.into(),
            lines,
            text,
        }
    }

    /// Package of the generated class, empty for the unnamed package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple name of the generated class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Fully-qualified name of the generated class.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package, self.class_name)
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// `<ClassName>.java`
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }

    /// Path of the source file below a source root (`com/example/FooIteratingWrapper.java`).
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(self.file_name());
        path
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
