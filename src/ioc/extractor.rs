//! Category patterns, noise filters, and ordered de-duplication.

use regex::Regex;

use crate::result::{IocCategory, IocSet, PayloadSignal};

/// File-path matches longer than this are treated as binary noise.
pub const MAX_PATH_CHARS: usize = 120;

/// Domain matches whose leftmost label is shorter than this are treated as
/// accidental short-token hits.
pub const MIN_DOMAIN_LABEL_CHARS: usize = 3;

/// Extracts categorized IOCs with pre-compiled patterns.
///
/// Construct once and reuse across documents; the pattern table is immutable
/// and the extractor is freely shareable between threads.
pub struct IocExtractor {
    patterns: Vec<(IocCategory, Regex)>,
}

impl IocExtractor {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                // closed allow-list of top-level suffixes
                (
                    IocCategory::Domains,
                    Regex::new(
                        r"\b[a-zA-Z0-9.-]+\.(?:com|net|org|gov|edu|mil|info|biz|io|co|us|uk|de|fr|ru|cn|in|jp|au|ca|xyz)\b",
                    )
                    .unwrap(),
                ),
                // digit-count only; octet ranges are deliberately not validated
                (IocCategory::Ips, Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap()),
                (
                    IocCategory::Emails,
                    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
                ),
                // backslashes appear doubled inside PDF literal strings
                (
                    IocCategory::FilePaths,
                    Regex::new(r"(?:[A-Za-z]:\\\\[^\s]+|/[^ \n]+)").unwrap(),
                ),
                (
                    IocCategory::RegistryKeys,
                    Regex::new(r"HKEY_[A-Z_]+\\\\[^\s]+").unwrap(),
                ),
            ],
        }
    }

    /// Extract and filter IOCs from the payload snippets and the raw
    /// document. Snippets are scanned first (in scan order), then the full
    /// lossy-decoded document; results are de-duplicated across both in
    /// first-seen order. Categories with no surviving match are omitted.
    pub fn extract(&self, data: &[u8], signals: &[PayloadSignal]) -> IocSet {
        let mut corpus = String::new();
        for (i, signal) in signals.iter().enumerate() {
            if i > 0 {
                corpus.push('\n');
            }
            corpus.push_str(&signal.snippet);
        }
        corpus.push('\n');
        corpus.push_str(&String::from_utf8_lossy(data));

        let mut iocs = IocSet::default();
        for (category, pattern) in &self.patterns {
            for found in pattern.find_iter(&corpus) {
                let value = found.as_str().trim();
                if passes_filter(*category, value) {
                    iocs.insert(*category, value);
                }
            }
        }
        iocs
    }
}

impl Default for IocExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience over [`IocExtractor`].
pub fn extract_iocs(data: &[u8], signals: &[PayloadSignal]) -> IocSet {
    IocExtractor::new().extract(data, signals)
}

/// Per-category noise filter. Every member of the output set has passed this.
fn passes_filter(category: IocCategory, value: &str) -> bool {
    match category {
        IocCategory::Domains => value
            .split('.')
            .next()
            .is_some_and(|label| label.len() >= MIN_DOMAIN_LABEL_CHARS),
        IocCategory::FilePaths => value.chars().count() <= MAX_PATH_CHARS,
        _ => true,
    }
}
