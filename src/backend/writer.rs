//! Source writer - lays generated classes out under a source root
//!
//! Each class lands at `<root>/<package as directories>/<Class>.java`. Writing creates missing directories and
//! skips files whose content is already current, so regenerating an unchanged tree touches nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::source::GeneratedSource;

/// State of one generated file on disk relative to freshly generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Missing,
    Stale,
}

impl CheckStatus {
    pub fn is_up_to_date(self) -> bool {
        self == CheckStatus::UpToDate
    }
}

/// Outcome of writing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// `false` when the file already held identical content.
    pub changed: bool,
}

/// Writes generated sources below a root directory.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    root: PathBuf,
}

impl SourceWriter {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `source` is written.
    pub fn path_for(&self, source: &GeneratedSource) -> PathBuf {
        self.root.join(source.relative_path())
    }

    /// Write `source`, creating parent directories as needed.
    #[tracing::instrument(skip_all, fields(class = %source.qualified_name()))]
    pub fn write(&self, source: &GeneratedSource) -> io::Result<WriteOutcome> {
        let path = self.path_for(source);
        if self.status_at(&path, source)?.is_up_to_date() {
            tracing::debug!(path = %path.display(), "unchanged");
            return Ok(WriteOutcome { path, changed: false });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source.as_str())?;
        tracing::info!(path = %path.display(), "wrote");
        Ok(WriteOutcome { path, changed: true })
    }

    /// Compare `source` against what is on disk without writing anything.
    pub fn check(&self, source: &GeneratedSource) -> io::Result<CheckStatus> {
        self.status_at(&self.path_for(source), source)
    }

    fn status_at(&self, path: &Path, source: &GeneratedSource) -> io::Result<CheckStatus> {
        match fs::read_to_string(path) {
            Ok(existing) if existing == source.as_str() => Ok(CheckStatus::UpToDate),
            Ok(_) => Ok(CheckStatus::Stale),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CheckStatus::Missing),
            // Non-UTF-8 content cannot match generated text
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(CheckStatus::Stale),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str) -> GeneratedSource {
        GeneratedSource::new("com.example", "BarSubjectIteratingWrapper", vec![text.to_string()])
    }

    #[test]
    fn test_write_creates_package_directories() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SourceWriter::new(dir.path());
        let outcome = writer.write(&sample("class A {}")).unwrap();

        assert!(outcome.changed);
        assert_eq!(
            outcome.path,
            dir.path().join("com").join("example").join("BarSubjectIteratingWrapper.java")
        );
        assert_eq!(fs::read_to_string(&outcome.path).unwrap(), "class A {}\n");
    }

    #[test]
    fn test_rewrite_unchanged_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SourceWriter::new(dir.path());
        writer.write(&sample("class A {}")).unwrap();
        let outcome = writer.write(&sample("class A {}")).unwrap();
        assert!(!outcome.changed);
    }

    #[test]
    fn test_check_states() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SourceWriter::new(dir.path());
        let source = sample("class A {}");

        assert_eq!(writer.check(&source).unwrap(), CheckStatus::Missing);
        writer.write(&source).unwrap();
        assert_eq!(writer.check(&source).unwrap(), CheckStatus::UpToDate);
        assert_eq!(writer.check(&sample("class B {}")).unwrap(), CheckStatus::Stale);
    }

    #[test]
    fn test_check_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SourceWriter::new(dir.path());
        writer.check(&sample("class A {}")).unwrap();
        assert!(!dir.path().join("com").exists());
    }
}
