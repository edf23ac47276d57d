//! Marker table and scan loop.

use crate::result::{PayloadSignal, SignalKind};
use crate::signals::literal::{read_literal_string, truncate_chars};

/// Maximum snippet length in characters.
const MAX_SNIPPET_CHARS: usize = 200;

/// How a marker's evidence is captured.
enum Capture {
    /// Token, at least one whitespace character, then a parenthesised literal.
    LiteralAfterWs,
    /// Token, optional whitespace, then a parenthesised literal.
    Literal,
    /// The token itself is the evidence.
    Marker,
}

struct MarkerPattern {
    kind: SignalKind,
    token: &'static str,
    capture: Capture,
}

/// Fixed scan table. Row order is emission order: signals are grouped by
/// marker, in document order within each marker.
const MARKER_TABLE: &[MarkerPattern] = &[
    MarkerPattern { kind: SignalKind::JavaScriptAction, token: "/JavaScript", capture: Capture::LiteralAfterWs },
    MarkerPattern { kind: SignalKind::EmbeddedFile, token: "/JS", capture: Capture::LiteralAfterWs },
    MarkerPattern { kind: SignalKind::UriAction, token: "/URI", capture: Capture::Literal },
    MarkerPattern { kind: SignalKind::LaunchAction, token: "/Launch", capture: Capture::LiteralAfterWs },
    MarkerPattern { kind: SignalKind::EmbeddedFileMarker, token: "/EmbeddedFile", capture: Capture::Marker },
    MarkerPattern { kind: SignalKind::OpenAction, token: "/OpenAction", capture: Capture::Marker },
];

/// Scan raw document bytes for suspicious markers and extract their payload
/// snippets. Bytes that are not valid UTF-8 are decoded with replacement
/// characters; the scan itself cannot fail. One signal is emitted per match,
/// duplicates included.
pub fn scan_signals(data: &[u8]) -> Vec<PayloadSignal> {
    let decoded = String::from_utf8_lossy(data);
    let text: &str = &decoded;
    let mut signals = Vec::new();

    for pattern in MARKER_TABLE {
        let mut from = 0;
        while let Some(found) = text[from..].find(pattern.token) {
            let after_token = from + found + pattern.token.len();
            from = after_token;
            match pattern.capture {
                Capture::Marker => signals.push(PayloadSignal {
                    kind: pattern.kind,
                    snippet: pattern.token.to_string(),
                }),
                Capture::LiteralAfterWs | Capture::Literal => {
                    let ws_end = skip_ascii_whitespace(text, after_token);
                    if matches!(pattern.capture, Capture::LiteralAfterWs) && ws_end == after_token {
                        continue;
                    }
                    if let Some(value) = read_literal_string(text, ws_end) {
                        signals.push(PayloadSignal {
                            kind: pattern.kind,
                            snippet: truncate_chars(value, MAX_SNIPPET_CHARS).to_string(),
                        });
                        // resume after the consumed value, not inside it
                        from = ws_end + value.len();
                    }
                }
            }
        }
    }

    signals
}

fn skip_ascii_whitespace(text: &str, mut i: usize) -> usize {
    let bytes = text.as_bytes();
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}
