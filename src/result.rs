//! Analysis result types: payload signals, IOC sets, and the risk assessment.

use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Kind of suspicious marker found in raw document content.
///
/// One marker pattern exists per kind; the declaration order here is the
/// scan order, so signal sequences (and the reasons derived from them) are
/// stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SignalKind {
    /// `/JavaScript` action carrying a parenthesised script payload.
    JavaScriptAction,
    /// `/JS` abbreviated action carrying a parenthesised payload.
    EmbeddedFile,
    /// `/URI` action carrying a parenthesised target.
    UriAction,
    /// `/Launch` action carrying a parenthesised command payload.
    LaunchAction,
    /// Bare `/EmbeddedFile` marker (attachment present).
    EmbeddedFileMarker,
    /// Bare `/OpenAction` marker (auto-open trigger present).
    OpenAction,
}

impl SignalKind {
    /// Display label used in reasons and reports.
    pub fn label(self) -> &'static str {
        match self {
            SignalKind::JavaScriptAction => "JavaScriptAction",
            SignalKind::EmbeddedFile => "EmbeddedFile",
            SignalKind::UriAction => "URIAction",
            SignalKind::LaunchAction => "LaunchAction",
            SignalKind::EmbeddedFileMarker => "EmbeddedFileMarker",
            SignalKind::OpenAction => "OpenAction",
        }
    }
}

/// One suspicious marker match with its captured payload snippet.
///
/// Snippets are capped at 200 characters. Duplicate matches are retained;
/// one signal is emitted per match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PayloadSignal {
    pub kind: SignalKind,
    pub snippet: String,
}

/// Category of an extracted indicator of compromise. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IocCategory {
    Domains,
    Ips,
    Emails,
    FilePaths,
    RegistryKeys,
}

impl IocCategory {
    pub fn label(self) -> &'static str {
        match self {
            IocCategory::Domains => "domains",
            IocCategory::Ips => "ips",
            IocCategory::Emails => "emails",
            IocCategory::FilePaths => "file_paths",
            IocCategory::RegistryKeys => "registry_keys",
        }
    }
}

/// De-duplicated indicators of compromise, grouped by category.
///
/// Categories and members keep first-seen order, so iteration (and any
/// report built from it) is deterministic. A category with no surviving
/// members is never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IocSet {
    categories: IndexMap<IocCategory, IndexSet<String>>,
}

impl IocSet {
    /// Add one indicator. Returns false if it was already present.
    pub fn insert(&mut self, category: IocCategory, value: impl Into<String>) -> bool {
        self.categories.entry(category).or_default().insert(value.into())
    }

    /// Members of one category, in first-seen order. None if the category is absent.
    pub fn get(&self, category: IocCategory) -> Option<&IndexSet<String>> {
        self.categories.get(&category)
    }

    /// Iterate non-empty categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (IocCategory, &IndexSet<String>)> + '_ {
        self.categories.iter().map(|(category, members)| (*category, members))
    }

    /// Number of non-empty categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total indicator count across all categories.
    pub fn total(&self) -> usize {
        self.categories.values().map(|members| members.len()).sum()
    }
}

/// Risk tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Band mapping: < 30 Low, < 60 Medium, < 85 High, otherwise Critical.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => Severity::Low,
            30..=59 => Severity::Medium,
            60..=84 => Severity::High,
            _ => Severity::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Final weighted risk verdict with its rationale trail.
///
/// `reasons` lists every contributing item in scoring order: metadata
/// anomalies, keyword hits, payload signals, then IOC categories.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RiskAssessment {
    /// Clamped to [0, 100].
    pub score: u32,
    pub severity: Severity,
    pub reasons: Vec<String>,
}

/// A suspicious key found in a page object dictionary. Evidence only;
/// flagged objects never contribute to the score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlaggedObject {
    /// 1-based page number.
    pub page: usize,
    /// The suspicious dictionary key (e.g. "/JS").
    pub keyword: String,
    /// Leading raw text of the page dictionary, capped at 300 characters.
    pub snippet: String,
}

/// Everything one analysis run produced. Consumed by the report renderer
/// and the CLI's JSON output.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisReport {
    /// Document information entries found in raw content (e.g. "/Author").
    pub metadata: IndexMap<String, String>,
    pub anomalies: Vec<String>,
    pub page_count: usize,
    pub flagged_objects: Vec<FlaggedObject>,
    /// Keyword -> occurrence count, in keyword-table order. Zero counts omitted.
    pub keyword_hits: IndexMap<String, u32>,
    pub signals: Vec<PayloadSignal>,
    pub iocs: IocSet,
    pub risk: RiskAssessment,
    pub size_bytes: usize,
}
