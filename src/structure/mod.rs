//! Document structure access: trailer metadata and page object dictionaries.
//!
//! The pipeline only needs two narrow capabilities from a document's
//! structure, captured by [`DocumentStructure`] so consumers can be tested
//! against a fake without any real parsing. [`RawDocumentStructure`] is the
//! built-in implementation: a best-effort scan over raw text that degrades
//! to empty results on malformed input instead of failing.

use indexmap::IndexMap;

mod metadata;
mod objects;
mod raw;

pub use metadata::metadata_anomalies;
pub use objects::{flag_page_objects, SUSPICIOUS_OBJECT_KEYS};
pub use raw::RawDocumentStructure;

/// Narrow view of a document's structure.
pub trait DocumentStructure {
    /// Document information entries as key/value pairs (e.g. "/Author").
    fn trailer_metadata(&self) -> IndexMap<String, String>;

    /// Raw dictionary text of each page object, in document order.
    fn page_objects(&self) -> Vec<String>;
}
