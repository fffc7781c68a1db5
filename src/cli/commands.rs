//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Dumps go to the given writer; diagnostics are rendered to stderr through `miette`.

use std::fs;
use std::io::Write;
use std::path::Path;

use angel_syntax::lexer::tokenize;
use angel_syntax::{Diagnostics, ParseOutput, ParserConfig, ScriptParser};

use super::{CliError, CliResult, ExitCode};

fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// lex
// ============================================================================

/// Tokenize a file and print `kind start..end text` per significant token.
pub fn lex_file(path: &Path, out: &mut dyn Write) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    write_tokens(&source, out)?;
    Ok(ExitCode::SUCCESS)
}

/// The token dump behind `angel lex`. The end sentinel is included.
pub fn write_tokens(source: &str, out: &mut dyn Write) -> CliResult<()> {
    for token in tokenize(source) {
        writeln!(
            out,
            "{:?} {}..{} {:?}",
            token.kind,
            token.span.start,
            token.span.end,
            token.text(source)
        )?;
    }
    Ok(())
}

// ============================================================================
// parse
// ============================================================================

/// Parse a whole script, print its tree when asked, and fail when an error was reported.
///
/// Warnings and infos are rendered but never fail the command.
pub fn parse_file(path: &Path, config: &ParserConfig, tree: bool, out: &mut dyn Write) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let output = parse_source(&source, config, tree, out)?;

    render_diagnostics(&path.display().to_string(), &source, &output.diagnostics);

    output.into_result().map_err(|failure| CliError::Parse {
        path: path.to_path_buf(),
        failure,
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Run a full-script parse and write the tree dump (if requested) to `out`.
pub fn parse_source(source: &str, config: &ParserConfig, tree: bool, out: &mut dyn Write) -> CliResult<ParseOutput> {
    let output = ScriptParser::new(config.clone()).parse_full_script(source);
    tracing::debug!(
        errors = output.diagnostics.errors().len(),
        warnings = output.diagnostics.warnings().len(),
        "parsed script"
    );
    if tree {
        write!(out, "{}", output.root.display(source))?;
    }
    Ok(output)
}

/// Print every diagnostic in source order as a `miette` report.
fn render_diagnostics(name: &str, source: &str, diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.sorted() {
        let report = miette::Report::new(diagnostic.to_report(name, source));
        eprintln!("{report:?}");
    }
}
