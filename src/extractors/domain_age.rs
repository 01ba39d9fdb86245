use crate::config::ScamIndicators;
use serde::Serialize;

/// Lexical stand-in for a registration-age lookup: hostnames carrying
/// tokens like "temp", "beta" or a recent year tend to be throwaway
/// registrations. This is a heuristic, not WHOIS data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainAgeEstimate {
    pub appears_new: bool,
    pub score: u32,
    pub indicators: Vec<String>,
}

pub struct DomainAgeHeuristic;

impl DomainAgeHeuristic {
    pub fn analyze(indicators: &ScamIndicators, hostname: &str) -> DomainAgeEstimate {
        let domain = hostname.to_lowercase();
        let mut estimate = DomainAgeEstimate::default();

        for token in &indicators.new_domain_tokens {
            if domain.contains(token.as_str()) {
                estimate.appears_new = true;
                estimate.score += 1;
                estimate
                    .indicators
                    .push(format!("New domain pattern: {}", token));
            }
        }

        estimate
    }
}
