use crate::extractors::{DomainAgeEstimate, DomainReputation, KeywordMatches, RiskLevel, UrlAnalysis};
use serde::Serialize;

const HIGH_RISK_KEYWORD_WEIGHT: f64 = 2.0;
const HIGH_RISK_KEYWORD_CAP: f64 = 4.0;
const MEDIUM_RISK_KEYWORD_WEIGHT: f64 = 0.5;
const MEDIUM_RISK_KEYWORD_CAP: f64 = 1.0;

const POPUP_CORROBORATED: f64 = 3.0;
const POPUP_ALONE: f64 = 1.0;
const PHONE_WITH_KEYWORDS: f64 = 2.0;
const PHONE_ALONE: f64 = 1.0;
const TLD_WITH_KEYWORDS: f64 = 2.0;
const TLD_ALONE: f64 = 1.0;

const CROSS_LAYER_BONUS: f64 = 3.0;
const COMPOUND_BONUS: f64 = 2.0;
const COMPOUND_REPUTATION_FLOOR: u32 = 5;

/// Every intermediate layer score, kept for explainability. The banner
/// renderer consumes this verbatim; nothing is recomputed downstream.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub keywords: KeywordMatches,
    pub phone_numbers: Vec<String>,
    pub has_popups: bool,
    pub has_suspicious_tld: bool,
    pub has_phone_with_scam_text: bool,
    pub domain_reputation: DomainReputation,
    pub domain_age: DomainAgeEstimate,
    pub url_analysis: UrlAnalysis,
    /// Content-layer keyword contribution.
    pub keyword_score: f64,
    /// Everything above the keyword contribution.
    pub context_score: f64,
    /// Sum of the three second-layer extractor scores, pre-multiplier.
    pub domain_reputation_score: u32,
    pub total: f64,
}

pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Two-layer composite: capped keyword score, context-sensitive
    /// popup/phone/TLD contributions, multiplied reputation layer, then
    /// the cross-layer and compound bonuses. No upper clamp.
    pub fn aggregate(
        keywords: KeywordMatches,
        phone_numbers: Vec<String>,
        has_popups: bool,
        has_suspicious_tld: bool,
        domain_reputation: DomainReputation,
        domain_age: DomainAgeEstimate,
        url_analysis: UrlAnalysis,
    ) -> ScoreBreakdown {
        let high_count = keywords.high_risk.len();
        let has_high_risk = high_count > 0;

        let keyword_score = (high_count as f64 * HIGH_RISK_KEYWORD_WEIGHT)
            .min(HIGH_RISK_KEYWORD_CAP)
            + (keywords.medium_risk.len() as f64 * MEDIUM_RISK_KEYWORD_WEIGHT)
                .min(MEDIUM_RISK_KEYWORD_CAP);
        let mut total = keyword_score;

        if has_popups {
            total += if has_high_risk || has_suspicious_tld {
                POPUP_CORROBORATED
            } else {
                POPUP_ALONE
            };
        }

        let has_phone_with_scam_text = !phone_numbers.is_empty() && has_high_risk;
        if has_phone_with_scam_text {
            total += PHONE_WITH_KEYWORDS;
        } else if !phone_numbers.is_empty() {
            total += PHONE_ALONE;
        }

        if has_suspicious_tld {
            total += if has_high_risk {
                TLD_WITH_KEYWORDS
            } else {
                TLD_ALONE
            };
        }

        let domain_reputation_score =
            domain_reputation.score + domain_age.score + url_analysis.score;
        if domain_reputation_score > 0 {
            let multiplier = match domain_reputation.overall_risk {
                RiskLevel::VeryHigh => 3,
                RiskLevel::High => 2,
                _ => 1,
            };
            total += (domain_reputation_score * multiplier) as f64;
        }

        // Corroborating layers beat a single strong one.
        if keyword_score > 0.0 && domain_reputation_score > 0 {
            total += CROSS_LAYER_BONUS;
        }

        let compound_indicators = [
            high_count >= 2,
            has_high_risk && has_suspicious_tld,
            has_high_risk && has_phone_with_scam_text,
            domain_reputation_score >= COMPOUND_REPUTATION_FLOOR,
        ];
        if compound_indicators.iter().filter(|hit| **hit).count() >= 2 {
            total += COMPOUND_BONUS;
        }

        ScoreBreakdown {
            context_score: total - keyword_score,
            keywords,
            phone_numbers,
            has_popups,
            has_suspicious_tld,
            has_phone_with_scam_text,
            domain_reputation,
            domain_age,
            url_analysis,
            keyword_score,
            domain_reputation_score,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::DomainReputationAnalyzer;
    use crate::config::ScamIndicators;

    fn keywords(high: &[&str], medium: &[&str]) -> KeywordMatches {
        KeywordMatches {
            high_risk: high.iter().map(|s| s.to_string()).collect(),
            medium_risk: medium.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn aggregate_content_only(
        kw: KeywordMatches,
        phones: Vec<String>,
        popups: bool,
        tld: bool,
    ) -> ScoreBreakdown {
        ScoreAggregator::aggregate(
            kw,
            phones,
            popups,
            tld,
            DomainReputation {
                score: 0,
                matched_patterns: vec![],
                matched_structures: vec![],
                matched_chars: vec![],
                suspicious_length: false,
                indicators: vec![],
                overall_risk: RiskLevel::Safe,
            },
            DomainAgeEstimate::default(),
            UrlAnalysis::default(),
        )
    }

    #[test]
    fn test_keyword_score_caps() {
        let b = aggregate_content_only(
            keywords(&["a", "b", "c"], &["d", "e", "f"]),
            vec![],
            false,
            false,
        );

        // 3 high = 6 capped at 4; 3 medium = 1.5 capped at 1
        assert_eq!(b.keyword_score, 4.0 + 1.0);
    }

    #[test]
    fn test_keyword_monotonicity() {
        let one = aggregate_content_only(keywords(&["a"], &[]), vec![], false, false);
        let two = aggregate_content_only(keywords(&["a", "b"], &[]), vec![], false, false);

        assert!(two.keyword_score >= one.keyword_score);
    }

    #[test]
    fn test_popup_context_sensitivity() {
        let corroborated =
            aggregate_content_only(keywords(&["virus detected"], &[]), vec![], true, false);
        let alone = aggregate_content_only(keywords(&[], &[]), vec![], true, false);

        assert_eq!(corroborated.context_score, 3.0);
        assert_eq!(alone.total, 1.0);
    }

    #[test]
    fn test_phone_co_occurrence() {
        let with_kw = aggregate_content_only(
            keywords(&["call support"], &[]),
            vec!["1-800-555-0100".to_string()],
            false,
            false,
        );
        let alone = aggregate_content_only(
            keywords(&[], &[]),
            vec!["1-800-555-0100".to_string()],
            false,
            false,
        );

        assert!(with_kw.has_phone_with_scam_text);
        assert_eq!(with_kw.context_score, 2.0);
        assert!(!alone.has_phone_with_scam_text);
        assert_eq!(alone.total, 1.0);
    }

    #[test]
    fn test_tld_contribution() {
        let with_kw =
            aggregate_content_only(keywords(&["virus detected"], &[]), vec![], false, true);
        let alone = aggregate_content_only(keywords(&[], &[]), vec![], false, true);

        assert_eq!(with_kw.context_score, 2.0);
        assert_eq!(alone.total, 1.0);
    }

    #[test]
    fn test_reputation_multiplier() {
        let indicators = ScamIndicators::default();
        // "support-" structure (3) + "support" pattern (2) = 5 -> High -> x2
        let rep = DomainReputationAnalyzer::analyze(&indicators, "support-desk.example");
        assert_eq!(rep.overall_risk, RiskLevel::High);

        let b = ScoreAggregator::aggregate(
            keywords(&[], &[]),
            vec![],
            false,
            false,
            rep,
            DomainAgeEstimate::default(),
            UrlAnalysis::default(),
        );

        // 5 * 2, reputation >= 5 alone is not enough for the compound bonus
        assert_eq!(b.total, 10.0);
    }

    #[test]
    fn test_cross_layer_bonus() {
        let indicators = ScamIndicators::default();
        let rep = DomainReputationAnalyzer::analyze(&indicators, "support-desk.example");
        let rep_score = rep.score;
        let multiplier = 2.0; // High risk band

        let b = ScoreAggregator::aggregate(
            keywords(&["virus detected"], &[]),
            vec![],
            false,
            false,
            rep,
            DomainAgeEstimate::default(),
            UrlAnalysis::default(),
        );

        assert!(b.total >= b.keyword_score + rep_score as f64 * multiplier + 3.0);
    }

    #[test]
    fn test_compound_bonus_requires_two_indicators() {
        // Single indicator: two high-risk keywords only.
        let single = aggregate_content_only(keywords(&["a", "b"], &[]), vec![], false, false);
        assert_eq!(single.context_score, 0.0);

        // Two indicators: >=2 high-risk keywords and keyword+TLD pair.
        let double = aggregate_content_only(keywords(&["a", "b"], &[]), vec![], false, true);
        // TLD with keywords (2) + compound bonus (2)
        assert_eq!(double.context_score, 4.0);
    }

    #[test]
    fn test_zero_signals_zero_score() {
        let b = aggregate_content_only(keywords(&[], &[]), vec![], false, false);

        assert_eq!(b.total, 0.0);
        assert_eq!(b.keyword_score, 0.0);
        assert_eq!(b.context_score, 0.0);
    }
}
