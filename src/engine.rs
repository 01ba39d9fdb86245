use crate::config::ScamIndicators;
use crate::exclusion::{ExclusionFilter, SkipReason};
use crate::extractors::{
    DomainAgeHeuristic, DomainReputationAnalyzer, KeywordMatcher, PhoneNumberDetector,
    PopupDetector, UrlStructureAnalyzer,
};
use crate::score::{ScoreAggregator, ScoreBreakdown};
use crate::trust::TrustStore;
use crate::verdict::{ThresholdClassifier, Verdict};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Scans taking longer than this get a warning; extractor work is bounded
/// by text length and fixed table sizes and should finish well under it.
const SCAN_BUDGET_MS: u128 = 100;

/// One page snapshot, produced by the external extraction collaborators.
/// `element_attrs` holds the class/id attribute values of candidate
/// popup/modal elements; the core never queries a DOM itself.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub hostname: String,
    pub url: String,
    pub visible_text: String,
    pub element_attrs: Vec<String>,
}

impl PageContext {
    pub fn new(hostname: &str, url: &str, visible_text: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            url: url.to_string(),
            visible_text: visible_text.to_string(),
            element_attrs: Vec::new(),
        }
    }

    pub fn with_element_attrs(mut self, attrs: Vec<String>) -> Self {
        self.element_attrs = attrs;
        self
    }
}

/// "Could not analyze" is a hard error, distinct from "analyzed as safe".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    EmptyHostname,
    EmptyUrl,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::EmptyHostname => write!(f, "scan input has an empty hostname"),
            ScanError::EmptyUrl => write!(f, "scan input has an empty URL"),
        }
    }
}

impl std::error::Error for ScanError {}

/// Tagged scan outcome: either the exclusion filter fired before any
/// extractor ran, or every extractor ran and the breakdown is complete.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    Skipped { reason: SkipReason },
    Scored(ScanResult),
}

impl ScanOutcome {
    /// Composite score; a skipped scan is score zero by definition.
    pub fn score(&self) -> f64 {
        match self {
            ScanOutcome::Skipped { .. } => 0.0,
            ScanOutcome::Scored(result) => result.breakdown.total,
        }
    }

    pub fn is_display_eligible(&self) -> bool {
        match self {
            ScanOutcome::Skipped { .. } => false,
            ScanOutcome::Scored(result) => result.verdict.eligible,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub hostname: String,
    pub breakdown: ScoreBreakdown,
    pub verdict: Verdict,
}

/// Pure scoring pipeline: exclusion filter, then the signal extractors,
/// aggregation, and classification. Holds the compiled phone pattern and
/// the indicator tables; no mutable state.
pub struct ScanEngine {
    indicators: ScamIndicators,
    phone_detector: PhoneNumberDetector,
}

impl ScanEngine {
    pub fn new(indicators: ScamIndicators) -> Self {
        Self {
            indicators,
            phone_detector: PhoneNumberDetector::new(),
        }
    }

    pub fn scan(&self, ctx: &PageContext, trust: &TrustStore) -> Result<ScanOutcome, ScanError> {
        if ctx.hostname.trim().is_empty() {
            return Err(ScanError::EmptyHostname);
        }
        if ctx.url.trim().is_empty() {
            return Err(ScanError::EmptyUrl);
        }

        let started = Instant::now();
        let hostname = ctx.hostname.to_lowercase();

        if let Some(reason) =
            ExclusionFilter::should_skip(&self.indicators, trust, &hostname, &ctx.visible_text)
        {
            log::debug!("Skipping scan of {}: {}", hostname, reason.as_str());
            return Ok(ScanOutcome::Skipped { reason });
        }

        let text = ctx.visible_text.to_lowercase();

        let keywords = KeywordMatcher::find_matches(&self.indicators, &text);
        let phone_numbers = self.phone_detector.detect(&text);
        let has_popups = PopupDetector::has_popups(&ctx.element_attrs);
        let has_suspicious_tld = self.indicators.has_suspicious_tld(&hostname);
        let domain_reputation = DomainReputationAnalyzer::analyze(&self.indicators, &hostname);
        let domain_age = DomainAgeHeuristic::analyze(&self.indicators, &hostname);
        let url_analysis = UrlStructureAnalyzer::analyze(&self.indicators, &ctx.url);

        let breakdown = ScoreAggregator::aggregate(
            keywords,
            phone_numbers,
            has_popups,
            has_suspicious_tld,
            domain_reputation,
            domain_age,
            url_analysis,
        );
        let verdict = ThresholdClassifier::classify(&hostname, breakdown.total, has_suspicious_tld);

        log::debug!(
            "Scanned {}: score {:.1} (keywords {}/{}, phones {}, reputation {}), threshold {:.0}",
            hostname,
            breakdown.total,
            breakdown.keywords.high_risk.len(),
            breakdown.keywords.medium_risk.len(),
            breakdown.phone_numbers.len(),
            breakdown.domain_reputation_score,
            verdict.threshold,
        );

        let elapsed = started.elapsed().as_millis();
        if elapsed > SCAN_BUDGET_MS {
            log::warn!("Scan of {} took {}ms (budget {}ms)", hostname, elapsed, SCAN_BUDGET_MS);
        }

        Ok(ScanOutcome::Scored(ScanResult {
            hostname,
            breakdown,
            verdict,
        }))
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new(ScamIndicators::default())
    }
}
