use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Static rule tables driving every extractor. Loaded once at startup and
/// never mutated; a YAML file can override the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScamIndicators {
    pub high_risk_keywords: Vec<String>,
    pub medium_risk_keywords: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub trusted_domains: Vec<String>,
    pub search_engine_domains: Vec<String>,
    pub educational_platforms: Vec<String>,
    pub educational_phrases: Vec<String>,
    pub domain_patterns: Vec<String>,
    pub domain_structures: Vec<String>,
    pub domain_chars: Vec<String>,
    pub new_domain_tokens: Vec<String>,
    pub brand_tokens: Vec<String>,
    pub suspicious_url_params: Vec<String>,
    pub suspicious_url_paths: Vec<String>,
    pub suspicious_extensions: Vec<String>,
}

impl ScamIndicators {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path.as_ref())?;
        let indicators: ScamIndicators = serde_yaml::from_str(&content)?;
        log::info!(
            "Loaded indicator tables from {} ({} high-risk keywords, {} trusted domains)",
            path.as_ref().display(),
            indicators.high_risk_keywords.len(),
            indicators.trusted_domains.len()
        );
        Ok(indicators)
    }

    pub fn to_yaml(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Whitelisted domain or subdomain of one. Never flagged.
    pub fn is_trusted_domain(&self, hostname: &str) -> bool {
        matches_domain_list(hostname, &self.trusted_domains)
    }

    pub fn is_search_engine(&self, hostname: &str) -> bool {
        matches_domain_list(hostname, &self.search_engine_domains)
    }

    pub fn is_educational_platform(&self, hostname: &str) -> bool {
        matches_domain_list(hostname, &self.educational_platforms)
    }

    pub fn has_suspicious_tld(&self, hostname: &str) -> bool {
        match tld_of(hostname) {
            Some(tld) => self.suspicious_tlds.iter().any(|t| t == tld),
            None => false,
        }
    }
}

/// Last label of the hostname, or None for a bare single-label host.
pub fn tld_of(hostname: &str) -> Option<&str> {
    let mut parts = hostname.rsplit('.');
    let last = parts.next()?;
    parts.next()?;
    Some(last)
}

/// Exact match or subdomain match (hostname ends with ".entry").
pub fn matches_domain_list(hostname: &str, entries: &[String]) -> bool {
    let host = hostname.to_lowercase();
    entries.iter().any(|entry| {
        let entry = entry.to_lowercase();
        host == entry || host.ends_with(&format!(".{}", entry))
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScamIndicators {
    fn default() -> Self {
        ScamIndicators {
            high_risk_keywords: to_strings(&[
                "virus detected",
                "security alert",
                "illegal website",
                "hack attempt",
                "call support",
                "tech support",
                "microsoft support",
                "apple support",
                "your computer is infected",
                "critical alert",
                "security warning",
                "system error",
                "windows error",
                "mac error",
                "license expired",
                "renew license",
                "your account is locked",
                "suspicious activity",
                "unauthorized access",
                "your device is at risk",
                "immediate action required",
                "security breach",
                "data breach",
                "your information is at risk",
                "call now",
                "toll-free",
                "1-800",
                "1-888",
                "1-877",
                "1-866",
                "1-855",
                "1-844",
                "call immediately",
                "do not ignore",
                "your data will be deleted",
                "government notice",
                "fbi warning",
                "police report",
                "bank account suspended",
                "unauthorized payment",
                "illegal content detected",
                "your files are encrypted",
                "malware infection",
                "system compromised",
                "dangerous website",
            ]),
            medium_risk_keywords: to_strings(&[
                "warning",
                "alert",
                "error",
                "problem",
                "issue",
                "help",
                "support",
                "contact",
                "call",
                "phone",
                "number",
                "assistance",
                "service",
                "technical",
                "computer",
                "device",
                "system",
                "security",
                "protection",
                "scan",
                "detect",
                "remove",
                "fix",
                "repair",
                "renew",
                "expired",
                "subscription",
                "account",
                "login",
                "password",
                "verify",
                "confirm",
                "popup",
                "popup alert",
                "auto-renew",
                "your system has been compromised",
                "free trial",
                "limited time",
                "act now",
                "upgrade",
                "important update",
                "attention",
                "service required",
                "your session has expired",
                "auto-debit",
                "unusual login attempt",
            ]),
            suspicious_tlds: to_strings(&[
                "xyz", "top", "online", "support", "click", "gq", "tk", "ml", "cf", "ga",
            ]),
            trusted_domains: to_strings(&[
                "microsoft.com",
                "apple.com",
                "google.com",
                "youtube.com",
                "facebook.com",
                "twitter.com",
                "x.com",
                "linkedin.com",
                "reddit.com",
                "stackoverflow.com",
                "github.com",
                "wikipedia.org",
                "wikimedia.org",
                "medium.com",
                "quora.com",
                "techcrunch.com",
                "wired.com",
                "theverge.com",
                "arstechnica.com",
                "cnet.com",
                "pcmag.com",
                "howtogeek.com",
                "gmail.com",
                "outlook.com",
                "yahoo.com",
                "protonmail.com",
                "dropbox.com",
                "onedrive.live.com",
                "drive.google.com",
                "chase.com",
                "bankofamerica.com",
                "wellsfargo.com",
                "irs.gov",
                "ssa.gov",
                "usps.com",
                "fedex.com",
                "ups.com",
            ]),
            search_engine_domains: to_strings(&[
                "google.com",
                "bing.com",
                "yahoo.com",
                "search.yahoo.com",
                "search.bing.com",
                "duckduckgo.com",
                "startpage.com",
                "search.brave.com",
                "brave.com",
                "ecosia.org",
                "google.ca",
                "ask.com",
                "aol.com",
                "yandex.com",
            ]),
            educational_platforms: to_strings(&[
                "twitter.com",
                "x.com",
                "facebook.com",
                "linkedin.com",
                "reddit.com",
                "quora.com",
                "stackoverflow.com",
            ]),
            educational_phrases: to_strings(&[
                "how to spot",
                "how to identify",
                "warning signs of",
                "common scams",
                "scam alert",
                "fraud prevention",
                "security tips",
                "how to protect",
                "scam awareness",
                "educational",
                "tutorial",
                "guide",
                "article",
                "blog post",
                "discussion",
                "forum",
                "community",
                "help center",
                "support center",
                "knowledge base",
                "documentation",
                "question",
                "answer",
                "asked",
                "answered",
                "quora",
                "discussion thread",
                "forum post",
                "community post",
                "user comment",
                "user response",
                "expert answer",
                "tweet",
                "thread",
                "retweet",
                "reply",
                "quote tweet",
                "social media post",
                "status update",
                "timeline",
                "shared experience",
                "my story",
                "i was scammed",
                "report scam",
                "how i recovered",
                "reddit thread",
            ]),
            domain_patterns: to_strings(&[
                "support", "help", "assist", "fix", "repair", "secure", "security", "virus",
                "malware", "clean", "scan", "protect", "defend", "guard", "microsoft", "windows",
                "apple", "mac", "ios", "android", "bank", "credit", "card", "account", "login",
                "verify", "urgent", "critical", "warning", "alert", "danger", "risk", "free",
                "trial", "limited", "offer", "discount", "save", "click", "visit", "go",
                "redirect", "link", "url",
            ]),
            domain_structures: to_strings(&[
                "support-",
                "help-",
                "assist-",
                "fix-",
                "repair-",
                "secure-",
                "virus-",
                "malware-",
                "clean-",
                "scan-",
                "protect-",
                "defend-",
                "microsoft-",
                "windows-",
                "apple-",
                "mac-",
                "ios-",
                "android-",
                "bank-",
                "credit-",
                "card-",
                "account-",
                "login-",
                "verify-",
                "urgent-",
                "critical-",
                "warning-",
                "alert-",
                "danger-",
                "risk-",
                "free-",
                "trial-",
                "limited-",
                "offer-",
                "discount-",
                "save-",
                "-support",
                "-help",
                "-assist",
                "-fix",
                "-repair",
                "-secure",
                "-virus",
                "-malware",
                "-clean",
                "-scan",
                "-protect",
                "-defend",
                "-microsoft",
                "-windows",
                "-apple",
                "-mac",
                "-ios",
                "-android",
                "-bank",
                "-credit",
                "-card",
                "-account",
                "-login",
                "-verify",
                "-urgent",
                "-critical",
                "-warning",
                "-alert",
                "-danger",
                "-risk",
                "-free",
                "-trial",
                "-limited",
                "-offer",
                "-discount",
                "-save",
            ]),
            domain_chars: to_strings(&[
                "--", "---", "____", "0000", "1111", "2222", "3333", "4444", "5555", "6666",
                "7777", "8888", "9999", "aaaa", "bbbb", "cccc", "dddd", "eeee", "ffff", "gggg",
                "hhhh", "iiii", "jjjj", "kkkk", "llll", "mmmm", "nnnn", "oooo", "pppp", "qqqq",
                "rrrr", "ssss", "tttt", "uuuu", "vvvv", "wwww", "xxxx", "yyyy", "zzzz",
            ]),
            new_domain_tokens: to_strings(&[
                "temp", "new", "fresh", "recent", "latest", "updated", "2024", "2023", "2022",
                "2021", "2020", "v1", "v2", "v3", "beta", "alpha", "test",
            ]),
            brand_tokens: to_strings(&[
                "microsoft", "apple", "google", "facebook", "amazon", "paypal", "ebay",
            ]),
            suspicious_url_params: to_strings(&[
                "support", "help", "fix", "repair", "virus", "malware", "clean",
            ]),
            suspicious_url_paths: to_strings(&[
                "support", "help", "assist", "fix", "repair", "secure", "virus", "malware",
            ]),
            suspicious_extensions: to_strings(&[".exe", ".zip", ".rar", ".scr", ".bat", ".cmd"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_domain_list() {
        let domains = vec!["microsoft.com".to_string(), "irs.gov".to_string()];

        assert!(matches_domain_list("microsoft.com", &domains));
        assert!(matches_domain_list("support.microsoft.com", &domains));
        assert!(matches_domain_list("IRS.GOV", &domains));
        assert!(!matches_domain_list("microsoft.com.evil.xyz", &domains));
        assert!(!matches_domain_list("notmicrosoft.com", &domains));
    }

    #[test]
    fn test_tld_of() {
        assert_eq!(tld_of("scam-support.xyz"), Some("xyz"));
        assert_eq!(tld_of("a.b.example.com"), Some("com"));
        assert_eq!(tld_of("localhost"), None);
    }

    #[test]
    fn test_suspicious_tld() {
        let indicators = ScamIndicators::default();

        assert!(indicators.has_suspicious_tld("scam-support.xyz"));
        assert!(indicators.has_suspicious_tld("free-fix.tk"));
        assert!(!indicators.has_suspicious_tld("example.com"));
        assert!(!indicators.has_suspicious_tld("localhost"));
    }

    #[test]
    fn test_trusted_and_search_domains() {
        let indicators = ScamIndicators::default();

        assert!(indicators.is_trusted_domain("microsoft.com"));
        assert!(indicators.is_trusted_domain("answers.microsoft.com"));
        assert!(indicators.is_search_engine("www.google.com"));
        assert!(indicators.is_search_engine("duckduckgo.com"));
        assert!(!indicators.is_trusted_domain("microsoft-support.xyz"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let indicators = ScamIndicators::default();
        let yaml = indicators.to_yaml().unwrap();
        let parsed: ScamIndicators = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.high_risk_keywords, indicators.high_risk_keywords);
        assert_eq!(parsed.suspicious_tlds, indicators.suspicious_tlds);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = "suspicious_tlds:\n  - zip\n";
        let parsed: ScamIndicators = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.suspicious_tlds, vec!["zip".to_string()]);
        assert!(!parsed.high_risk_keywords.is_empty());
    }
}
