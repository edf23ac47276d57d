//! Score accumulation, clamping, and the severity verdict.

use indexmap::IndexMap;

use crate::result::{IocSet, PayloadSignal, RiskAssessment, Severity};

/// Points per metadata anomaly.
pub const ANOMALY_WEIGHT: u32 = 10;
/// Points per keyword occurrence.
pub const KEYWORD_WEIGHT: u32 = 5;
/// Points per payload signal.
pub const SIGNAL_WEIGHT: u32 = 15;
/// Points per unique IOC entry.
pub const IOC_WEIGHT: u32 = 20;
/// Hard ceiling on the final score.
pub const MAX_SCORE: u32 = 100;

/// Fold all evidence into a clamped score, a severity band, and one reason
/// per contributing item.
///
/// Evidence blocks are applied in a fixed order (anomalies, keyword hits,
/// payload signals, IOC categories), each block appending reasons in its
/// source collection's iteration order. Missing or empty inputs simply
/// contribute nothing; this function cannot fail.
pub fn assess_risk(
    anomalies: &[String],
    keyword_hits: &IndexMap<String, u32>,
    signals: &[PayloadSignal],
    iocs: &IocSet,
) -> RiskAssessment {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    score += anomalies.len() as u32 * ANOMALY_WEIGHT;
    for anomaly in anomalies {
        reasons.push(format!("Metadata anomaly: {anomaly}"));
    }

    for (keyword, hits) in keyword_hits {
        score += hits * KEYWORD_WEIGHT;
        reasons.push(format!("Keyword {keyword} detected {hits} times"));
    }

    score += signals.len() as u32 * SIGNAL_WEIGHT;
    for signal in signals {
        reasons.push(format!("Payload type {} extracted", signal.kind.label()));
    }

    for (category, members) in iocs.iter() {
        score += members.len() as u32 * IOC_WEIGHT;
        let listed: Vec<&str> = members.iter().map(String::as_str).collect();
        reasons.push(format!("{} found: {}", category.label(), listed.join(", ")));
    }

    let score = score.min(MAX_SCORE);
    RiskAssessment {
        score,
        severity: Severity::from_score(score),
        reasons,
    }
}
