//! Indicator-of-compromise extraction from payload snippets and raw content.

mod extractor;

pub use extractor::{extract_iocs, IocExtractor, MAX_PATH_CHARS, MIN_DOMAIN_LABEL_CHARS};
