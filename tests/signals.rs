//! Marker scanner tests.

use pdftriage::{scan_signals, SignalKind};

#[test]
fn script_and_uri_markers_extracted() {
    let data = b"%PDF-1.4\n/JavaScript (alert(1))\n/URI (http://malicious-test.com/x)\n%%EOF";
    let signals = scan_signals(data);
    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0].kind, SignalKind::JavaScriptAction);
    assert_eq!(signals[0].snippet, "(alert(1))");
    assert_eq!(signals[1].kind, SignalKind::UriAction);
    assert_eq!(signals[1].snippet, "(http://malicious-test.com/x)");
}

#[test]
fn marker_only_tokens_emit_themselves() {
    let data = b"<< /OpenAction 5 0 R >>\n<< /Type /EmbeddedFile >>";
    let signals = scan_signals(data);
    assert_eq!(signals.len(), 2);
    // table order: the embedded-file marker row precedes the open-action row
    assert_eq!(signals[0].kind, SignalKind::EmbeddedFileMarker);
    assert_eq!(signals[0].snippet, "/EmbeddedFile");
    assert_eq!(signals[1].kind, SignalKind::OpenAction);
    assert_eq!(signals[1].snippet, "/OpenAction");
}

#[test]
fn duplicates_are_retained_per_match() {
    let data = b"/OpenAction x /OpenAction y /OpenAction";
    assert_eq!(scan_signals(data).len(), 3);
}

#[test]
fn signals_are_grouped_by_marker_not_position() {
    let data = b"/URI (http://one.example.com) /JavaScript (x)";
    let kinds: Vec<SignalKind> = scan_signals(data).iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SignalKind::JavaScriptAction, SignalKind::UriAction]);
}

#[test]
fn snippet_capped_at_200_chars() {
    let mut data = b"/Launch (".to_vec();
    data.extend(std::iter::repeat(b'a').take(300));
    data.push(b')');
    let signals = scan_signals(&data);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].snippet.chars().count(), 200);
    assert!(signals[0].snippet.starts_with("(a"));
}

#[test]
fn launch_payload_extracted() {
    let signals = scan_signals(b"/Launch (cmd.exe /c calc)");
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::LaunchAction);
    assert_eq!(signals[0].snippet, "(cmd.exe /c calc)");
}

#[test]
fn js_marker_with_payload() {
    let signals = scan_signals(b"<< /S /JavaScript /JS (app.alert(9)) >>");
    // "/JavaScript" here has no parenthesised value; only "/JS" captures one
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::EmbeddedFile);
    assert_eq!(signals[0].snippet, "(app.alert(9))");
}

#[test]
fn invalid_utf8_is_substituted_not_fatal() {
    let data = b"/URI (http://abc.example.com/\xff\xfe)";
    let signals = scan_signals(data);
    assert_eq!(signals.len(), 1);
    assert!(signals[0].snippet.starts_with("(http://abc.example.com/"));
    assert!(signals[0].snippet.contains('\u{fffd}'));
}

#[test]
fn empty_input_yields_no_signals() {
    assert!(scan_signals(b"").is_empty());
}

#[test]
fn scan_is_deterministic() {
    let data = b"/JS (a) /URI(b) junk \x00\x01 /OpenAction /Launch (c)";
    assert_eq!(scan_signals(data), scan_signals(data));
}
