use crate::config::ScamIndicators;
use serde::Serialize;

/// Keywords found in the page text, split by risk tier. Order follows the
/// table order so evidence output is stable across scans.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordMatches {
    pub high_risk: Vec<String>,
    pub medium_risk: Vec<String>,
}

impl KeywordMatches {
    pub fn is_empty(&self) -> bool {
        self.high_risk.is_empty() && self.medium_risk.is_empty()
    }
}

pub struct KeywordMatcher;

impl KeywordMatcher {
    /// Case-insensitive substring scan over both keyword tables. Each
    /// keyword is reported at most once regardless of repeat count.
    pub fn find_matches(indicators: &ScamIndicators, text: &str) -> KeywordMatches {
        let text_lower = text.to_lowercase();

        KeywordMatches {
            high_risk: Self::scan_table(&text_lower, &indicators.high_risk_keywords),
            medium_risk: Self::scan_table(&text_lower, &indicators.medium_risk_keywords),
        }
    }

    fn scan_table(text_lower: &str, table: &[String]) -> Vec<String> {
        table
            .iter()
            .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
            .cloned()
            .collect()
    }
}
