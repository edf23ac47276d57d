//! End-to-end pipeline and loader tests.

use pdftriage::{
    analyze, analyze_file, read_document, render_report, IocCategory, LoadError, Severity,
    SignalKind,
};
use std::fs;

const SCRIPT_AND_URI: &[u8] =
    b"%PDF-1.4\n/JavaScript (alert(1))\n/URI (http://malicious-test.com/x)\n%%EOF";

#[test]
fn script_and_uri_document_end_to_end() {
    let report = analyze(SCRIPT_AND_URI);

    assert_eq!(report.signals.len(), 2);
    assert_eq!(report.signals[0].kind, SignalKind::JavaScriptAction);
    assert_eq!(report.signals[0].snippet, "(alert(1))");
    assert_eq!(report.signals[1].kind, SignalKind::UriAction);
    assert_eq!(report.signals[1].snippet, "(http://malicious-test.com/x)");

    let domains = report.iocs.get(IocCategory::Domains).expect("domains present");
    assert_eq!(domains.len(), 1);
    assert!(domains.contains("malicious-test.com"));

    // anomaly 10 + keywords 2*5 + signals 2*15 + IOCs 4*20, clamped
    assert_eq!(report.iocs.total(), 4);
    assert_eq!(report.risk.score, 100);
    assert_eq!(report.risk.severity, Severity::Critical);
    assert_eq!(
        report.risk.reasons,
        vec![
            "Metadata anomaly: Missing or empty Author field".to_string(),
            "Keyword /JavaScript detected 1 times".to_string(),
            "Keyword /URI detected 1 times".to_string(),
            "Payload type JavaScriptAction extracted".to_string(),
            "Payload type URIAction extracted".to_string(),
            "domains found: malicious-test.com".to_string(),
            "file_paths found: //malicious-test.com/x), /JavaScript, /URI".to_string(),
        ]
    );
}

#[test]
fn empty_input_degrades_gracefully() {
    let report = analyze(b"");
    assert!(report.signals.is_empty());
    assert!(report.iocs.is_empty());
    assert!(report.keyword_hits.is_empty());
    assert_eq!(report.page_count, 0);
    assert_eq!(report.size_bytes, 0);
    // only the missing-author anomaly contributes
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.risk.score, 10);
    assert_eq!(report.risk.severity, Severity::Low);
}

#[test]
fn binary_garbage_completes() {
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let report = analyze(&data);
    assert!(report.risk.score <= 100);
}

#[test]
fn analysis_is_idempotent() {
    let first = analyze(SCRIPT_AND_URI);
    let second = analyze(SCRIPT_AND_URI);
    assert_eq!(first.signals, second.signals);
    assert_eq!(first.iocs, second.iocs);
    assert_eq!(first.risk, second.risk);
}

#[test]
fn missing_file_is_a_precondition_failure() {
    let err = read_document("does/not/exist.pdf".as_ref()).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
    assert!(err.to_string().contains("does/not/exist.pdf"));
}

#[test]
fn analyze_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.pdf");
    fs::write(&path, SCRIPT_AND_URI).unwrap();
    let report = analyze_file(&path).unwrap();
    assert_eq!(report.size_bytes, SCRIPT_AND_URI.len());
    assert_eq!(report.risk.severity, Severity::Critical);
}

#[test]
fn report_shows_at_most_five_snippets() {
    let data = b"/OpenAction /OpenAction /OpenAction /OpenAction /OpenAction /OpenAction /OpenAction";
    let report = analyze(data);
    assert_eq!(report.signals.len(), 7);
    let text = render_report(&report);
    assert_eq!(text.matches("- /OpenAction...").count(), 5);
    assert!(text.contains("Total payloads: 7"));
}

#[test]
fn report_shows_at_most_ten_iocs_per_category() {
    let mut data = String::new();
    for i in 1..=12 {
        data.push_str(&format!("domain{i:02}.com "));
    }
    let report = analyze(data.as_bytes());
    assert_eq!(report.iocs.get(IocCategory::Domains).unwrap().len(), 12);
    let text = render_report(&report);
    assert!(text.contains("\n- domain10.com"));
    assert!(!text.contains("\n- domain11.com"));
    // scoring still counted all twelve
    assert!(text.contains("domain11.com, domain12.com"));
}
