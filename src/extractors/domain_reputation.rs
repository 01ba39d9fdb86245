use crate::config::ScamIndicators;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    fn from_score(score: u32) -> Self {
        match score {
            s if s >= 8 => RiskLevel::VeryHigh,
            s if s >= 5 => RiskLevel::High,
            s if s >= 3 => RiskLevel::Medium,
            s if s >= 1 => RiskLevel::Low,
            _ => RiskLevel::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }
}

/// Lexical reputation assessment of a hostname. Every matched item is
/// retained for the evidence lists shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct DomainReputation {
    pub score: u32,
    pub matched_patterns: Vec<String>,
    pub matched_structures: Vec<String>,
    pub matched_chars: Vec<String>,
    pub suspicious_length: bool,
    pub indicators: Vec<String>,
    pub overall_risk: RiskLevel,
}

const PATTERN_WEIGHT: u32 = 2;
const STRUCTURE_WEIGHT: u32 = 3;
const CHAR_WEIGHT: u32 = 4;
const LENGTH_WEIGHT: u32 = 1;
const DIGIT_DOMINANCE_WEIGHT: u32 = 2;
const SPECIAL_CHAR_WEIGHT: u32 = 2;
const BRAND_WEIGHT: u32 = 3;

const MIN_DOMAIN_LENGTH: usize = 5;
const MAX_DOMAIN_LENGTH: usize = 50;

pub struct DomainReputationAnalyzer;

impl DomainReputationAnalyzer {
    pub fn analyze(indicators: &ScamIndicators, hostname: &str) -> DomainReputation {
        let domain = hostname.to_lowercase();
        let mut score = 0u32;
        let mut notes = Vec::new();

        let matched_patterns: Vec<String> = indicators
            .domain_patterns
            .iter()
            .filter(|p| domain.contains(p.as_str()))
            .cloned()
            .collect();
        score += matched_patterns.len() as u32 * PATTERN_WEIGHT;

        let matched_structures: Vec<String> = indicators
            .domain_structures
            .iter()
            .filter(|s| domain.contains(s.as_str()))
            .cloned()
            .collect();
        score += matched_structures.len() as u32 * STRUCTURE_WEIGHT;

        let matched_chars: Vec<String> = indicators
            .domain_chars
            .iter()
            .filter(|c| domain.contains(c.as_str()))
            .cloned()
            .collect();
        score += matched_chars.len() as u32 * CHAR_WEIGHT;

        // One length flag at most, short and long are mutually exclusive.
        let suspicious_length = if domain.len() < MIN_DOMAIN_LENGTH {
            score += LENGTH_WEIGHT;
            notes.push("Domain too short".to_string());
            true
        } else if domain.len() > MAX_DOMAIN_LENGTH {
            score += LENGTH_WEIGHT;
            notes.push("Domain too long".to_string());
            true
        } else {
            false
        };

        let digit_count = domain.chars().filter(|c| c.is_ascii_digit()).count();
        let letter_count = domain.chars().filter(|c| c.is_ascii_lowercase()).count();
        if digit_count > letter_count && domain.len() > 10 {
            score += DIGIT_DOMINANCE_WEIGHT;
            notes.push("Excessive numbers in domain".to_string());
        }

        let special_count = domain
            .chars()
            .filter(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '.' && *c != '-')
            .count();
        if special_count > 2 {
            score += SPECIAL_CHAR_WEIGHT;
            notes.push("Excessive special characters".to_string());
        }

        // Typosquatting: a brand token inside a hostname that is not itself
        // whitelisted is a classic scam setup ("microsoft-help.xyz").
        if !indicators.is_trusted_domain(&domain) {
            for brand in &indicators.brand_tokens {
                if domain.contains(brand.as_str()) {
                    score += BRAND_WEIGHT;
                    notes.push(format!("Possible typosquatting of {}", brand));
                }
            }
        }

        DomainReputation {
            overall_risk: RiskLevel::from_score(score),
            score,
            matched_patterns,
            matched_structures,
            matched_chars,
            suspicious_length,
            indicators: notes,
        }
    }
}
