//! Console and JSON rendering of a [`LinkMapping`].

mod payload;

pub use payload::{IssueLinkPayload, EXAMPLE_INWARD_ISSUE_KEY, EXAMPLE_OUTWARD_ISSUE_KEY};

use crate::matcher::{LinkMapping, MappingSummary, MatchKind, PhraseMatch};
use serde::Serialize;
use std::io::{self, Write};

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    mapping: &LinkMapping<'_>,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text_report(out, mapping),
        ReportFormat::Json => write_json_report(out, mapping),
    }
}

fn write_match_line<W: Write>(out: &mut W, entry: &PhraseMatch<'_>) -> io::Result<()> {
    match entry.result.kind {
        MatchKind::Exact => writeln!(
            out,
            "'{}' \u{2192} Parameter: '{}'",
            entry.phrase,
            entry.result.parameter()
        ),
        MatchKind::Partial => writeln!(
            out,
            "'{}' \u{2192} Parameter: '{}' (partial match)",
            entry.phrase,
            entry.result.parameter()
        ),
        MatchKind::None => writeln!(
            out,
            "'{}' \u{2192} NOT FOUND - may be custom or plugin-specific",
            entry.phrase
        ),
    }
}

/// Human-readable report: one line per phrase, a summary, then example
/// payloads for the matched phrases among the first three.
pub fn write_text_report<W: Write>(out: &mut W, mapping: &LinkMapping<'_>) -> io::Result<()> {
    writeln!(out, "=== JIRA LINK TYPES MAPPING ===")?;
    writeln!(out)?;
    writeln!(out, "Based on standard Jira installations and common plugins:")?;
    writeln!(out)?;

    for entry in mapping.matches() {
        write_match_line(out, entry)?;
    }

    let summary = mapping.summary();
    writeln!(out)?;
    writeln!(out, "=== SUMMARY ===")?;
    writeln!(out, "Total UI descriptions: {}", summary.total)?;
    writeln!(out, "Mapped: {}", summary.mapped)?;
    writeln!(out, "Not found: {}", summary.not_found)?;

    writeln!(out)?;
    writeln!(out, "=== USAGE EXAMPLES ===")?;
    writeln!(out, "For jira_create_issue_link tool:")?;
    for entry in mapping.examples() {
        writeln!(out)?;
        IssueLinkPayload::example(entry.result.parameter()).write_snippet(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonMapping<'r> {
    phrase: &'r str,
    parameter: &'r str,
    kind: MatchKind,
}

#[derive(Serialize)]
struct JsonReport<'r> {
    mappings: Vec<JsonMapping<'r>>,
    summary: MappingSummary,
    examples: Vec<IssueLinkPayload>,
}

/// Machine-readable report with the same content as the text report.
pub fn write_json_report<W: Write>(out: &mut W, mapping: &LinkMapping<'_>) -> io::Result<()> {
    let report = JsonReport {
        mappings: mapping
            .entries()
            .iter()
            .map(|e| JsonMapping {
                phrase: &e.phrase,
                parameter: e.result.parameter(),
                kind: e.result.kind,
            })
            .collect(),
        summary: mapping.summary(),
        examples: mapping
            .examples()
            .map(|e| IssueLinkPayload::example(e.result.parameter()))
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
