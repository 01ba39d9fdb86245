use crate::config::ScamIndicators;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Default, Serialize)]
pub struct UrlAnalysis {
    pub score: u32,
    pub suspicious_params: Vec<String>,
    pub suspicious_paths: Vec<String>,
    pub indicators: Vec<String>,
}

const PARAM_WEIGHT: u32 = 2;
const PATH_WEIGHT: u32 = 1;
const DEPTH_WEIGHT: u32 = 1;
const EXTENSION_WEIGHT: u32 = 3;
const INVALID_URL_WEIGHT: u32 = 1;
const MAX_PATH_DEPTH: usize = 5;

pub struct UrlStructureAnalyzer;

impl UrlStructureAnalyzer {
    /// Malformed input is recovered locally: a small fixed penalty plus an
    /// indicator, never an error. Callers can always aggregate the result.
    pub fn analyze(indicators: &ScamIndicators, raw_url: &str) -> UrlAnalysis {
        let mut analysis = UrlAnalysis::default();

        let url = match Url::parse(raw_url) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Unparsable URL {:?}: {}", raw_url, e);
                analysis.score += INVALID_URL_WEIGHT;
                analysis
                    .indicators
                    .push("Invalid URL structure".to_string());
                return analysis;
            }
        };

        for (key, value) in url.query_pairs() {
            let key_lower = key.to_lowercase();
            let value_lower = value.to_lowercase();
            for param in &indicators.suspicious_url_params {
                if key_lower.contains(param.as_str()) || value_lower.contains(param.as_str()) {
                    analysis.suspicious_params.push(format!("{}={}", key, value));
                    analysis.score += PARAM_WEIGHT;
                }
            }
        }

        let path_lower = url.path().to_lowercase();
        let segments: Vec<&str> = path_lower.split('/').filter(|s| !s.is_empty()).collect();

        for segment in &segments {
            for path in &indicators.suspicious_url_paths {
                if segment.contains(path.as_str()) {
                    analysis.suspicious_paths.push(segment.to_string());
                    analysis.score += PATH_WEIGHT;
                }
            }
        }

        if segments.len() > MAX_PATH_DEPTH {
            analysis.score += DEPTH_WEIGHT;
            analysis.indicators.push("Excessive URL depth".to_string());
        }

        for ext in &indicators.suspicious_extensions {
            if path_lower.contains(ext.as_str()) {
                analysis.score += EXTENSION_WEIGHT;
                analysis
                    .indicators
                    .push(format!("Suspicious file extension: {}", ext));
            }
        }

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url() {
        let indicators = ScamIndicators::default();
        let analysis =
            UrlStructureAnalyzer::analyze(&indicators, "https://example.org/articles/rust");

        assert_eq!(analysis.score, 0);
        assert!(analysis.suspicious_params.is_empty());
        assert!(analysis.suspicious_paths.is_empty());
    }

    #[test]
    fn test_suspicious_query_params() {
        let indicators = ScamIndicators::default();
        let analysis = UrlStructureAnalyzer::analyze(
            &indicators,
            "https://example.org/?action=virus-removal&id=5",
        );

        assert_eq!(analysis.suspicious_params, vec!["action=virus-removal"]);
        assert_eq!(analysis.score, 2);
    }

    #[test]
    fn test_suspicious_path_segments() {
        let indicators = ScamIndicators::default();
        let analysis =
            UrlStructureAnalyzer::analyze(&indicators, "https://example.org/support/repair-now");

        assert_eq!(analysis.suspicious_paths, vec!["support", "repair-now"]);
        assert_eq!(analysis.score, 2);
    }

    #[test]
    fn test_excessive_depth() {
        let indicators = ScamIndicators::default();
        let analysis =
            UrlStructureAnalyzer::analyze(&indicators, "https://example.org/a/b/c/d/e/f");

        assert!(analysis
            .indicators
            .iter()
            .any(|i| i == "Excessive URL depth"));
        assert_eq!(analysis.score, 1);
    }

    #[test]
    fn test_suspicious_extension() {
        let indicators = ScamIndicators::default();
        let analysis =
            UrlStructureAnalyzer::analyze(&indicators, "https://example.org/downloads/setup.exe");

        assert_eq!(analysis.score, 3);
        assert!(analysis
            .indicators
            .iter()
            .any(|i| i.contains(".exe")));
    }

    #[test]
    fn test_malformed_url_fails_softly() {
        let indicators = ScamIndicators::default();
        let analysis = UrlStructureAnalyzer::analyze(&indicators, "not a url at all");

        assert_eq!(analysis.score, 1);
        assert_eq!(analysis.indicators, vec!["Invalid URL structure"]);
    }
}
