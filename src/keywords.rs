//! Keyword frequency counting over raw document bytes.

use indexmap::IndexMap;

/// Tokens commonly abused in malicious documents, in display order.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "/JavaScript",
    "/JS",
    "/OpenAction",
    "/AA",
    "/Launch",
    "/EmbeddedFile",
    "/Names",
    "/URI",
    "/SubmitForm",
    "/GoToE",
    "/RichMedia",
    "/Movie",
    "/Sound",
    "/Action",
];

/// Count non-overlapping occurrences of each keyword over the lossy-decoded
/// document. Keywords with zero hits are omitted; the map keeps table order.
pub fn count_keywords(data: &[u8]) -> IndexMap<String, u32> {
    let text = String::from_utf8_lossy(data);
    let mut hits = IndexMap::new();
    for keyword in SUSPICIOUS_KEYWORDS {
        let count = text.matches(keyword).count() as u32;
        if count > 0 {
            hits.insert((*keyword).to_string(), count);
        }
    }
    hits
}
