//! Error rendering using ariadne
//!
//! Draws a confl error over the source text it came from, with the primary
//! span, related spans (e.g. the first declaration of a duplicate name), the
//! diagnostic code, and help notes.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use confl::{load, render_error};
///
/// let source = "x: !(y + 1)";
/// if let Err(e) = load(source) {
///     render_error("config.dz", source, &e);
/// }
/// ```
pub fn render_error(name: &str, source: &str, error: &Error) {
    render_error_to_writer(name, source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(
    name: &str,
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(name, source, error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(name: &str, source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(name, source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(name: &str, source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(name, source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    name: &str,
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let kind = match error {
        Error::Syntax(_) => "Syntax error",
        Error::Semantic(_) => "Semantic error",
    };
    render_diagnostic(name, source, kind, &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    name: &str,
    source: &str,
    kind: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let report_kind = ReportKind::Custom(kind, ariadne::Color::Red);

    // ariadne needs a non-empty span to point at; widen empty ones by a char
    // unless that would run past the end of the source.
    let primary = widen(diag.span.0.clone(), source.len());

    let mut report = Report::build(report_kind, (name, primary.clone()))
        .with_code(&diag.code)
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    // Primary label with the main error span
    let color = colors.next();
    report = report.with_label(
        Label::new((name, primary))
            .with_message(&diag.message)
            .with_color(color),
    );

    // Related info as secondary labels
    for related in &diag.related {
        let color = colors.next();
        report = report.with_label(
            Label::new((name, widen(related.span.0.clone(), source.len())))
                .with_message(&related.message)
                .with_color(color),
        );
    }

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    // Render to the writer (need to reborrow to avoid moving)
    report.finish().write((name, Source::from(source)), &mut *writer)
}

fn widen(span: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    if span.start == span.end && span.end < len {
        span.start..span.end + 1
    } else {
        span
    }
}
