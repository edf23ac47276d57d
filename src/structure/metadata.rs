//! Anomaly rules over extracted document metadata.

use indexmap::IndexMap;

/// Creator/Producer substrings typical of scripted or anonymised generation.
const SUSPICIOUS_TOOL_VALUES: &[&str] = &["anonymous", "unknown", "reportlab"];

/// Apply the anomaly rules to an extracted metadata map. Each rule that
/// fires contributes one description string, in rule order.
pub fn metadata_anomalies(metadata: &IndexMap<String, String>) -> Vec<String> {
    let mut anomalies = Vec::new();

    if metadata.get("/Author").map_or(true, |author| author.is_empty()) {
        anomalies.push("Missing or empty Author field".to_string());
    }

    if let (Some(created), Some(modified)) =
        (metadata.get("/CreationDate"), metadata.get("/ModDate"))
    {
        if created == modified {
            anomalies.push("CreationDate == ModDate (suspicious)".to_string());
        }
    }

    for key in ["/Creator", "/Producer"] {
        if let Some(value) = metadata.get(key) {
            let lower = value.to_lowercase();
            if SUSPICIOUS_TOOL_VALUES.iter().any(|s| lower.contains(s)) {
                anomalies.push(format!("Suspicious {key} value: {value}"));
            }
        }
    }

    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn meta(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn missing_and_empty_author_both_flagged() {
        assert_eq!(metadata_anomalies(&meta(&[])).len(), 1);
        assert_eq!(metadata_anomalies(&meta(&[("/Author", "")])).len(), 1);
        assert!(metadata_anomalies(&meta(&[("/Author", "Jane")])).is_empty());
    }

    #[test]
    fn equal_dates_flagged() {
        let anomalies = metadata_anomalies(&meta(&[
            ("/Author", "Jane"),
            ("/CreationDate", "D:20240101000000"),
            ("/ModDate", "D:20240101000000"),
        ]));
        assert_eq!(anomalies, vec!["CreationDate == ModDate (suspicious)".to_string()]);
    }

    #[test]
    fn suspicious_producer_flagged_case_insensitively() {
        let anomalies =
            metadata_anomalies(&meta(&[("/Author", "Jane"), ("/Producer", "ReportLab v3")]));
        assert_eq!(anomalies, vec!["Suspicious /Producer value: ReportLab v3".to_string()]);
    }
}
