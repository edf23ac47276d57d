//! # pdftriage
//!
//! Static triage of untrusted PDF files. Scans raw document bytes for
//! malware-indicative markers, extracts indicators of compromise, and folds
//! all evidence into a weighted risk score with a severity band and an
//! ordered rationale trail.
//!
//! The pipeline never parses the full object graph: every detection stage is
//! a total function over raw byte/text content and completes on arbitrary,
//! malformed, or truncated input. The only failure surfaced to callers is an
//! unreadable input file, checked once before any stage runs.
//!
//! ## Pipeline
//!
//! 1. best-effort structure scan (trailer metadata, page dictionaries);
//! 2. metadata anomaly checks and keyword frequency counts;
//! 3. marker scan ([`scan_signals`]): suspicious actions with payload snippets;
//! 4. IOC extraction ([`IocExtractor`]): domains, IPs, emails, paths, and
//!    registry keys, noise-filtered and de-duplicated;
//! 5. risk scoring ([`assess_risk`]): weighted, capped, deterministic.
//!
//! ## Example
//!
//! ```no_run
//! use pdftriage::{analyze_file, Severity};
//!
//! let report = analyze_file("invoice.pdf".as_ref()).unwrap();
//! if report.risk.severity >= Severity::High {
//!     for reason in &report.risk.reasons {
//!         println!("{reason}");
//!     }
//! }
//! ```
//!
//! Stages are also usable on their own (each takes raw bytes and the
//! outputs of its predecessors), e.g. to score evidence collected by a
//! different structure parser via [`analyze_with`].

mod result;

pub mod ioc;
pub mod keywords;
pub mod report;
pub mod risk;
pub mod signals;
pub mod structure;

pub use ioc::{extract_iocs, IocExtractor};
pub use keywords::count_keywords;
pub use report::render_report;
pub use result::{
    AnalysisReport, FlaggedObject, IocCategory, IocSet, PayloadSignal, RiskAssessment, Severity,
    SignalKind,
};
pub use risk::assess_risk;
pub use signals::scan_signals;
pub use structure::{flag_page_objects, metadata_anomalies, DocumentStructure, RawDocumentStructure};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a document could not be loaded. The single precondition failure of a
/// run; no stage after loading can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a document into memory, or report the precondition failure.
pub fn read_document(path: &Path) -> Result<Vec<u8>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Analyze in-memory document bytes with the built-in raw structure scan.
///
/// Total: any byte sequence (including empty) produces a full report.
pub fn analyze(data: &[u8]) -> AnalysisReport {
    let structure = RawDocumentStructure::parse(data);
    analyze_with(data, &structure)
}

/// Analyze document bytes against a caller-provided structure view.
pub fn analyze_with(data: &[u8], structure: &dyn DocumentStructure) -> AnalysisReport {
    let metadata = structure.trailer_metadata();
    let anomalies = metadata_anomalies(&metadata);
    let pages = structure.page_objects();
    let flagged_objects = flag_page_objects(&pages);
    let keyword_hits = count_keywords(data);
    let signals = scan_signals(data);
    let iocs = IocExtractor::new().extract(data, &signals);
    let risk = assess_risk(&anomalies, &keyword_hits, &signals, &iocs);

    AnalysisReport {
        metadata,
        anomalies,
        page_count: pages.len(),
        flagged_objects,
        keyword_hits,
        signals,
        iocs,
        risk,
        size_bytes: data.len(),
    }
}

/// Load one file and analyze it. Fails only when the file is missing or
/// unreadable; nothing after the read can error.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport, LoadError> {
    let bytes = read_document(path)?;
    Ok(analyze(&bytes))
}
