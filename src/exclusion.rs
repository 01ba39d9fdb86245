use crate::config::ScamIndicators;
use crate::trust::TrustStore;
use serde::Serialize;

/// Why a scan was short-circuited before any extractor ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TrustedDomain,
    SearchEngine,
    UserTrusted,
    EducationalPlatform,
    EducationalContent,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TrustedDomain => "trusted domain",
            SkipReason::SearchEngine => "search engine",
            SkipReason::UserTrusted => "user-trusted domain",
            SkipReason::EducationalPlatform => "educational platform",
            SkipReason::EducationalContent => "educational content",
        }
    }
}

pub struct ExclusionFilter;

impl ExclusionFilter {
    /// Whitelist checks first (cheap hostname comparisons), the phrase scan
    /// over the page text last.
    pub fn should_skip(
        indicators: &ScamIndicators,
        trust: &TrustStore,
        hostname: &str,
        visible_text: &str,
    ) -> Option<SkipReason> {
        if indicators.is_trusted_domain(hostname) {
            return Some(SkipReason::TrustedDomain);
        }
        if indicators.is_search_engine(hostname) {
            return Some(SkipReason::SearchEngine);
        }
        if trust.matches(hostname) {
            return Some(SkipReason::UserTrusted);
        }
        if indicators.is_educational_platform(hostname) {
            return Some(SkipReason::EducationalPlatform);
        }

        let text_lower = visible_text.to_lowercase();
        if indicators
            .educational_phrases
            .iter()
            .any(|phrase| text_lower.contains(&phrase.to_lowercase()))
        {
            return Some(SkipReason::EducationalContent);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn empty_trust() -> TrustStore {
        TrustStore::new(Box::new(MemoryStore::default()))
    }

    #[test]
    fn test_trusted_domain_and_subdomain_skip() {
        let indicators = ScamIndicators::default();
        let trust = empty_trust();

        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "microsoft.com", ""),
            Some(SkipReason::TrustedDomain)
        );
        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "answers.microsoft.com", ""),
            Some(SkipReason::TrustedDomain)
        );
    }

    #[test]
    fn test_search_engine_skip() {
        let indicators = ScamIndicators::default();
        let trust = empty_trust();

        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "duckduckgo.com", ""),
            Some(SkipReason::SearchEngine)
        );
    }

    #[test]
    fn test_user_trusted_skip() {
        let indicators = ScamIndicators::default();
        let mut trust = empty_trust();
        trust.trust("my-own-site.example");

        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "my-own-site.example", ""),
            Some(SkipReason::UserTrusted)
        );
        // Subdomains are exempt under the same rule as the static tables.
        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "sub.my-own-site.example", ""),
            Some(SkipReason::UserTrusted)
        );
    }

    #[test]
    fn test_educational_platform_skip() {
        // reddit.com is both whitelisted and an always-educational platform;
        // the whitelist check wins, so clear it to reach the platform check.
        let mut indicators = ScamIndicators::default();
        indicators.trusted_domains.clear();
        let trust = empty_trust();

        assert_eq!(
            ExclusionFilter::should_skip(&indicators, &trust, "old.reddit.com", ""),
            Some(SkipReason::EducationalPlatform)
        );
    }

    #[test]
    fn test_educational_phrase_skip() {
        let indicators = ScamIndicators::default();
        let trust = empty_trust();

        assert_eq!(
            ExclusionFilter::should_skip(
                &indicators,
                &trust,
                "security-blog.example",
                "How To Spot tech support scams before they spot you",
            ),
            Some(SkipReason::EducationalContent)
        );
    }

    #[test]
    fn test_no_skip_for_unknown_host() {
        let indicators = ScamIndicators::default();
        let trust = empty_trust();

        assert_eq!(
            ExclusionFilter::should_skip(
                &indicators,
                &trust,
                "scam-support.xyz",
                "your computer is infected call now",
            ),
            None
        );
    }
}
