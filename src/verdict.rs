use serde::Serialize;

const BASE_THRESHOLD: f64 = 6.0;
const SUSPICIOUS_TLD_THRESHOLD: f64 = 4.0;
const DOT_COM_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Display decision plus the presentation tier. Severity never gates
/// display; only `eligible` does.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verdict {
    pub severity: Severity,
    pub threshold: f64,
    pub eligible: bool,
}

pub struct ThresholdClassifier;

impl ThresholdClassifier {
    /// Dynamic threshold: more sensitive on abuse-heavy TLDs, less on
    /// plain .com hosts that already look mainstream.
    pub fn display_threshold(hostname: &str, has_suspicious_tld: bool) -> f64 {
        if has_suspicious_tld {
            SUSPICIOUS_TLD_THRESHOLD
        } else if hostname.to_lowercase().ends_with(".com") {
            DOT_COM_THRESHOLD
        } else {
            BASE_THRESHOLD
        }
    }

    pub fn severity(score: f64, has_suspicious_tld: bool) -> Severity {
        if score >= 10.0 || (has_suspicious_tld && score >= 6.0) {
            Severity::High
        } else if score >= 8.0 || (has_suspicious_tld && score >= 4.0) {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn classify(hostname: &str, score: f64, has_suspicious_tld: bool) -> Verdict {
        let threshold = Self::display_threshold(hostname, has_suspicious_tld);
        Verdict {
            severity: Self::severity(score, has_suspicious_tld),
            threshold,
            eligible: score >= threshold,
        }
    }
}
