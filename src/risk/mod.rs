//! Weighted risk scoring over all collected evidence.

mod scorer;

pub use scorer::{
    assess_risk, ANOMALY_WEIGHT, IOC_WEIGHT, KEYWORD_WEIGHT, MAX_SCORE, SIGNAL_WEIGHT,
};
