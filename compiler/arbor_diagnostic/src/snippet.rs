//! Source excerpt rendering.
//!
//! Draws a diagnostic against the text it was produced from, with the
//! offending span underlined.

use std::fmt::Write as _;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Report, ReportKind, Source};

use crate::{Diagnostic, Severity};

/// Source text plus the name it is reported under.
#[derive(Copy, Clone, Debug)]
pub struct SourceText<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        SourceText { name, text }
    }

    /// Clamp a span to the text so a stale span never points past the end.
    fn clamp(&self, start: u32, end: u32) -> Range<usize> {
        let len = self.text.len();
        let start = (start as usize).min(len);
        let end = (end as usize).clamp(start, len);
        start..end
    }
}

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note | Severity::Help => ReportKind::Advice,
    }
}

/// Render `diagnostic` as a multi-line excerpt of `source`.
///
/// Diagnostics without labels still render a header and their notes.
pub fn render_snippet(diagnostic: &Diagnostic, source: &SourceText<'_>, colors: bool) -> String {
    let name = source.name.to_string();
    let offset = diagnostic
        .primary_span()
        .map_or(0, |span| source.clamp(span.start, span.end).start);

    let mut report = Report::build(report_kind(diagnostic.severity), name.clone(), offset)
        .with_config(
            Config::default()
                .with_color(colors)
                .with_index_type(IndexType::Byte),
        )
        .with_code(diagnostic.code.as_str())
        .with_message(&diagnostic.message);

    for label in &diagnostic.labels {
        let color = if label.is_primary {
            Color::Red
        } else {
            Color::Blue
        };
        report = report.with_label(
            ariadne::Label::new((name.clone(), source.clamp(label.span.start, label.span.end)))
                .with_message(&label.message)
                .with_color(color),
        );
    }

    // Ariadne only draws notes below a labelled excerpt.
    let has_labels = !diagnostic.labels.is_empty();
    if has_labels {
        for note in &diagnostic.notes {
            report = report.with_note(note);
        }
    }

    let mut out = Vec::new();
    let written = report
        .finish()
        .write((name, Source::from(source.text.to_string())), &mut out)
        .is_ok();
    let mut text = if written {
        String::from_utf8_lossy(&out).into_owned()
    } else {
        // Writing into a Vec only fails if ariadne cannot lay out the
        // excerpt; fall back to the one-line header.
        format!("{diagnostic}\n")
    };

    if !(written && has_labels) {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        for note in &diagnostic.notes {
            let _ = writeln!(text, "Note: {note}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use arbor_ir::Span;

    #[test]
    fn test_render_includes_code_message_and_label() {
        let source = SourceText::new("main.js", "var a = 1;\nvar a = 2;\n");
        let diag = Diagnostic::error(ErrorCode::E6001)
            .with_message("duplicate declaration: `a`")
            .with_label(Span::new(15, 16), "declared again here");

        let text = render_snippet(&diag, &source, false);
        assert!(text.contains("E6001"));
        assert!(text.contains("duplicate declaration: `a`"));
        assert!(text.contains("declared again here"));
        assert!(text.contains("main.js"));
        assert!(text.contains("var a = 2;"));
    }

    #[test]
    fn test_render_without_colors_has_no_escapes() {
        let source = SourceText::new("main.js", "1 % 2");
        let diag = Diagnostic::error(ErrorCode::E6003)
            .with_message("unsupported operator: %")
            .with_label(Span::new(0, 5), "here");

        let text = render_snippet(&diag, &source, false);
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_out_of_range_span_is_clamped() {
        let source = SourceText::new("main.js", "f()");
        let diag = Diagnostic::error(ErrorCode::E6004)
            .with_message("f is not a function")
            .with_label(Span::new(40, 90), "called here");

        let text = render_snippet(&diag, &source, false);
        assert!(text.contains("f is not a function"));
    }

    #[test]
    fn test_notes_are_rendered() {
        let source = SourceText::new("main.js", "");
        let diag = Diagnostic::error(ErrorCode::E6006)
            .with_message("maximum call stack size exceeded")
            .with_note("limit is 10000 nested calls");

        let text = render_snippet(&diag, &source, false);
        assert!(text.contains("maximum call stack size exceeded"));
        assert!(text.contains("limit is 10000 nested calls"));
    }

    #[test]
    fn test_unlabelled_notes_render_against_nonempty_source() {
        let source = SourceText::new("main.js", "f();");
        let diag = Diagnostic::error(ErrorCode::E6006)
            .with_message("maximum call stack size exceeded")
            .with_note("calls may nest at most 64 deep");

        let text = render_snippet(&diag, &source, false);
        assert_eq!(text.matches("calls may nest at most 64 deep").count(), 1);
    }

    #[test]
    fn test_labelled_notes_render_once() {
        let source = SourceText::new("main.js", "var a = 1;\nvar a = 2;\n");
        let diag = Diagnostic::error(ErrorCode::E6001)
            .with_message("duplicate declaration of `a`")
            .with_label(Span::new(15, 16), "declared again here")
            .with_note("each name can be declared once per scope");

        let text = render_snippet(&diag, &source, false);
        assert_eq!(text.matches("each name can be declared once per scope").count(), 1);
    }
}
