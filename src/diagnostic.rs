//! Human-readable reports for tuning text errors, rendered with `ariadne`.

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::error::TuningError;

const SOURCE_ID: &str = "tuning";

/// Render `err` against the text it came from.
///
/// Colour is disabled so the report can be dropped into a `<pre>` block as-is.
pub fn render_tuning_error(source: &str, err: &TuningError) -> String {
    let range = match err.span() {
        Some(span) => span.range(),
        None => 0..source.len(),
    };
    let label = match err {
        TuningError::UnexpectedChar { .. } => "separate notes with spaces or commas".to_string(),
        TuningError::InvalidNote { .. } => {
            "expected one of C C# D D# E F F# G G# A A# B".to_string()
        }
        TuningError::Empty => "no note names found".to_string(),
    };

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, range.clone()))
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string());
    // Zero-width labels have nothing to point at.
    if !range.is_empty() {
        report = report.with_label(Label::new((SOURCE_ID, range)).with_message(label));
    }

    let mut out = Vec::new();
    let written = report
        .finish()
        .write((SOURCE_ID, Source::from(source.to_string())), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(e) => {
            log::warn!("failed to render tuning diagnostic: {e}");
            err.to_string()
        }
    }
}
