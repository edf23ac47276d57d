//! Best-effort structure scan over raw document text.
//!
//! This does not parse the object graph. Info-dictionary keys are located by
//! token, page objects by `N G obj ... endobj` spans containing a
//! `/Type /Page` entry. Malformed or truncated documents yield whatever can
//! be found, down to nothing at all.

use indexmap::IndexMap;
use regex::Regex;

use crate::signals::literal::read_literal_string;
use crate::structure::DocumentStructure;

/// Info-dictionary keys worth extracting, in display order.
const INFO_KEYS: &[&str] = &[
    "/Title",
    "/Author",
    "/Subject",
    "/Keywords",
    "/Creator",
    "/Producer",
    "/CreationDate",
    "/ModDate",
];

pub struct RawDocumentStructure {
    text: String,
    object_span: Regex,
    page_type: Regex,
}

impl RawDocumentStructure {
    /// Decode raw bytes (lossily) and prepare the scan patterns.
    pub fn parse(data: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(data).into_owned(),
            object_span: Regex::new(r"(?s)\b\d+\s+\d+\s+obj\b(.*?)\bendobj").unwrap(),
            // \b keeps /Pages tree nodes from matching
            page_type: Regex::new(r"/Type\s*/Page\b").unwrap(),
        }
    }
}

impl DocumentStructure for RawDocumentStructure {
    fn trailer_metadata(&self) -> IndexMap<String, String> {
        let mut metadata = IndexMap::new();
        for key in INFO_KEYS {
            // later occurrences shadow earlier ones, as incremental updates do
            let mut value = None;
            for (pos, _) in self.text.match_indices(key) {
                if let Some(found) = read_value_after(&self.text, pos + key.len()) {
                    value = Some(found);
                }
            }
            if let Some(value) = value {
                metadata.insert((*key).to_string(), value);
            }
        }
        metadata
    }

    fn page_objects(&self) -> Vec<String> {
        self.object_span
            .captures_iter(&self.text)
            .filter_map(|span| {
                let body = span.get(1)?.as_str();
                self.page_type.is_match(body).then(|| body.to_string())
            })
            .collect()
    }
}

/// Read the parenthesised value following an info key, skipping whitespace.
/// The outer parentheses are stripped. None when no literal string follows.
fn read_value_after(text: &str, mut i: usize) -> Option<String> {
    let bytes = text.as_bytes();
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let literal = read_literal_string(text, i)?;
    Some(literal[1..literal.len() - 1].to_string())
}
