//! Debug commands: `parse` and `lex` for inspecting the front-end.

use std::process::ExitCode;

use arbor_diagnostic::ColorMode;
use arbor_ir::{ast, StringInterner, TokenKind};

use super::{read_or_report, report_to_stderr};

/// Parse a file and print its syntax tree as an outline.
pub fn parse_file(path: &str) -> ExitCode {
    let Some(content) = read_or_report(path) else {
        return ExitCode::FAILURE;
    };
    let interner = StringInterner::new();

    match arbor_parse::parse(&content, &interner) {
        Ok(program) => {
            print!("{}", ast::dump(&program, &interner));
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_to_stderr(&err.to_diagnostic(), path, &content, ColorMode::Auto);
            ExitCode::FAILURE
        }
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> ExitCode {
    let Some(content) = read_or_report(path) else {
        return ExitCode::FAILURE;
    };
    let interner = StringInterner::new();

    match arbor_lexer::lex(&content, &interner) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                match &token.kind {
                    TokenKind::Ident(name) => {
                        println!("  Ident({}) @ {}", interner.lookup(*name), token.span);
                    }
                    kind => println!("  {kind:?} @ {}", token.span),
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_to_stderr(&err.to_diagnostic(), path, &content, ColorMode::Auto);
            ExitCode::FAILURE
        }
    }
}
