//! Suspicious-key flagging over page object dictionaries.

use crate::result::FlaggedObject;
use crate::signals::literal::truncate_chars;

/// Dictionary keys worth flagging when they appear in a page object.
pub const SUSPICIOUS_OBJECT_KEYS: &[&str] = &[
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
];

/// Snippet cap for flagged page dictionaries, in characters.
const MAX_OBJECT_SNIPPET_CHARS: usize = 300;

/// Flag every suspicious key present in each page dictionary. One entry per
/// (page, key) pair; pages are numbered from 1 in document order.
pub fn flag_page_objects(page_dicts: &[String]) -> Vec<FlaggedObject> {
    let mut flagged = Vec::new();
    for (index, dict) in page_dicts.iter().enumerate() {
        for key in SUSPICIOUS_OBJECT_KEYS {
            if dict.contains(key) {
                flagged.push(FlaggedObject {
                    page: index + 1,
                    keyword: (*key).to_string(),
                    snippet: truncate_chars(dict, MAX_OBJECT_SNIPPET_CHARS).to_string(),
                });
            }
        }
    }
    flagged
}
