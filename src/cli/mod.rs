//! CLI module for the wrapper generator
//!
//! ## Commands
//!
//! - `generate <manifest>` - Write one `.java` file per subject
//! - `emit <manifest>` - Print generated source to stdout
//! - `check <manifest>` - Fail if generated files are missing or stale
//! - `list <manifest>` - Show which methods each subject wraps or skips
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::SUBJECTGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generates iterating wrapper subjects for Java assertion libraries
#[derive(Parser, Debug)]
#[command(name = "subjectgen")]
#[command(version = SUBJECTGEN_VERSION)]
#[command(about = "Generates iterating wrapper subjects for Java assertion libraries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one .java file per subject
    Generate {
        /// Subject manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Source root for generated files
        #[arg(short, long, value_name = "OUT_DIR", default_value = commands::DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
        /// Generate every wrapper into this package
        #[arg(long, value_name = "PKG")]
        package: Option<String>,
    },

    /// Print generated source to stdout
    Emit {
        /// Subject manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Only emit the subject with this type (`Bar`), simple or canonical name
        #[arg(long, value_name = "NAME")]
        subject: Option<String>,
        /// Generate every wrapper into this package
        #[arg(long, value_name = "PKG")]
        package: Option<String>,
    },

    /// Exit with status 1 if generated files are missing or stale
    Check {
        /// Subject manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Source root holding generated files
        #[arg(short, long, value_name = "OUT_DIR", default_value = commands::DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
        /// Generate every wrapper into this package
        #[arg(long, value_name = "PKG")]
        package: Option<String>,
    },

    /// List wrapped and skipped methods per subject
    List {
        /// Subject manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            manifest,
            out_dir,
            package,
        } => commands::generate(&manifest, &out_dir, package.as_deref()),
        Command::Emit {
            manifest,
            subject,
            package,
        } => commands::emit(&manifest, subject.as_deref(), package.as_deref()),
        Command::Check {
            manifest,
            out_dir,
            package,
        } => commands::check(&manifest, &out_dir, package.as_deref()),
        Command::List { manifest } => commands::list(&manifest),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["subjectgen", "generate", "subjects.json"]).unwrap();
        if let Command::Generate {
            manifest,
            out_dir,
            package,
        } = cli.command
        {
            assert_eq!(manifest, PathBuf::from("subjects.json"));
            assert_eq!(out_dir, PathBuf::from(commands::DEFAULT_OUT_DIR));
            assert_eq!(package, None);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_with_options() {
        let cli = Cli::try_parse_from([
            "subjectgen",
            "generate",
            "subjects.json",
            "-o",
            "src/gen/java",
            "--package",
            "com.example.gen",
        ])
        .unwrap();
        if let Command::Generate { out_dir, package, .. } = cli.command {
            assert_eq!(out_dir, PathBuf::from("src/gen/java"));
            assert_eq!(package.as_deref(), Some("com.example.gen"));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["subjectgen", "emit", "subjects.json", "--subject", "BarSubject"]).unwrap();
        if let Command::Emit { subject, .. } = cli.command {
            assert_eq!(subject.as_deref(), Some("BarSubject"));
        } else {
            panic!("Expected Emit command");
        }
    }

    #[test]
    fn test_cli_parse_check_and_list() {
        let cli = Cli::try_parse_from(["subjectgen", "check", "subjects.json", "--out-dir", "out"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));

        let cli = Cli::try_parse_from(["subjectgen", "list", "subjects.json"]).unwrap();
        assert!(matches!(cli.command, Command::List { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["subjectgen"]).is_err());
        assert!(Cli::try_parse_from(["subjectgen", "generate"]).is_err());
    }
}
