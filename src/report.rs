//! Plain-text report rendering.
//!
//! Display-only: the first 5 payload snippets and the first 10 IOCs per
//! category are shown, with long snippets shortened. Truncation here never
//! affects what was scored.

use crate::result::AnalysisReport;
use crate::signals::literal::truncate_chars;

/// Payload snippets shown per report.
const MAX_SNIPPETS_SHOWN: usize = 5;
/// IOC entries shown per category.
const MAX_IOCS_SHOWN: usize = 10;
/// Display length of one payload snippet.
const SNIPPET_DISPLAY_CHARS: usize = 100;

/// Render the full human-readable analysis report.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("=== PDF Malware Analysis Report ===\n".to_string());

    lines.push(">> Metadata".to_string());
    if report.metadata.is_empty() {
        lines.push("No metadata extracted.\n".to_string());
    } else {
        for (key, value) in &report.metadata {
            lines.push(format!("{key}:"));
            lines.push(format!("    {value}\n"));
        }
    }

    if !report.anomalies.is_empty() {
        lines.push(">> Metadata Anomalies".to_string());
        for anomaly in &report.anomalies {
            lines.push(format!("- {anomaly}"));
        }
        lines.push(String::new());
    }

    lines.push(">> Flagged Objects".to_string());
    lines.push(format!("Total pages: {}", report.page_count));
    for flagged in &report.flagged_objects {
        lines.push(format!("- page {}: {}", flagged.page, flagged.keyword));
    }
    lines.push(String::new());

    lines.push(">> Suspicious Keywords".to_string());
    lines.push(format!("Total keywords: {}", report.keyword_hits.len()));
    for (keyword, count) in &report.keyword_hits {
        lines.push(format!("- {keyword}: {count}"));
    }
    lines.push(String::new());

    lines.push(">> Embedded Payloads".to_string());
    lines.push(format!("Total payloads: {}", report.signals.len()));
    if !report.signals.is_empty() {
        lines.push("Payload snippets:".to_string());
        for signal in report.signals.iter().take(MAX_SNIPPETS_SHOWN) {
            let snippet = signal.snippet.trim();
            if !snippet.is_empty() {
                lines.push(format!("- {}...", truncate_chars(snippet, SNIPPET_DISPLAY_CHARS)));
            }
        }
    }
    lines.push(String::new());

    lines.push(">> Indicators of Compromise (IOCs)".to_string());
    lines.push(format!("Total IOCs: {}", report.iocs.total()));
    for (category, members) in report.iocs.iter() {
        lines.push(format!("{}:", capitalize(category.label())));
        for member in members.iter().take(MAX_IOCS_SHOWN) {
            lines.push(format!("- {member}"));
        }
    }
    lines.push(String::new());

    lines.push(">> Risk Assessment".to_string());
    lines.push(format!("Risk Score: {}", report.risk.score));
    lines.push(format!("Severity Level: {}", report.risk.severity.label()));
    if !report.risk.reasons.is_empty() {
        lines.push("Reasons:".to_string());
        for reason in &report.risk.reasons {
            lines.push(format!("- {reason}"));
        }
    }
    lines.push(String::new());

    lines.push("=== End of Report ===".to_string());
    lines.join("\n")
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
