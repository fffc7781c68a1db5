//! CLI module for the `angel` tool
//!
//! This module provides the command-line interface over the tokenizer and parser.
//!
//! ## Commands
//!
//! - `lex <file>` - Print one significant token per line
//! - `parse <file>` - Parse a whole script, report diagnostics and optionally dump the tree
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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

use std::io;
use std::path::PathBuf;
use std::process;

use angel_syntax::{ParseFailure, ParserConfig};
use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The input has syntax errors.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The input could not be read or the output could not be written.
    pub const IO: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// The CLI entry point catches these errors, prints them, and exits with [`CliError::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("{}: {failure}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        failure: ParseFailure,
    },
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Read { .. } | CliError::Write(_) => ExitCode::IO,
            CliError::Parse { .. } => ExitCode::FAILURE,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// AngelScript tokenizer and parser
#[derive(Parser, Debug)]
#[command(name = "angel")]
#[command(version = VERSION)]
#[command(about = "Tokenize and parse AngelScript sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the significant tokens of a file, one per line
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a whole script and report its diagnostics
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the syntax tree
        #[arg(long)]
        tree: bool,
        #[command(flatten)]
        options: ParserOptions,
    },
}

/// Flags mapped onto a [`ParserConfig`].
#[derive(Args, Debug, Default, Clone)]
pub struct ParserOptions {
    /// Names that take `<...>` arguments as types (repeatable; replaces the default `array`)
    #[arg(long = "template-type", value_name = "NAME")]
    pub template_types: Vec<String>,
    /// Reject `class @Foo` implicit handle declarations
    #[arg(long)]
    pub no_implicit_handles: bool,
    /// Reject `f(name = value)` named arguments
    #[arg(long)]
    pub no_legacy_named_args: bool,
    /// Deepest nesting of expressions, statements and types
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
}

impl ParserOptions {
    pub fn to_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new()
            .with_implicit_handle_types(!self.no_implicit_handles)
            .with_alternate_named_arg_syntax(!self.no_legacy_named_args);
        if !self.template_types.is_empty() {
            config = config.with_template_types(self.template_types.iter().cloned());
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_nesting_depth(depth);
        }
        config
    }
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
            eprintln!("error: {e}");
            process::exit(e.exit_code().0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Lex { file } => commands::lex_file(&file, &mut stdout),
        Command::Parse { file, tree, options } => commands::parse_file(&file, &options.to_config(), tree, &mut stdout),
    }
}

// ============================================================================
// Tests
// ============================================================================
