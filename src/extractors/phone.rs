use regex::Regex;

/// Finds North-American toll-free style numbers in page text. Scam pages
/// push these hard ("call now: 1-888-555-0142") so the literal matches are
/// kept as evidence.
pub struct PhoneNumberDetector {
    pattern: Regex,
}

impl PhoneNumberDetector {
    pub fn new() -> Self {
        // Optional leading "1" separator, toll-free prefix, 3+4 digits.
        let pattern = Regex::new(
            r"\b(1[-.\s]?)?(800|888|877|866|855|844|833|822)[-.\s]?\d{3}[-.\s]?\d{4}\b",
        )
        .expect("phone pattern is valid");
        Self { pattern }
    }

    /// Non-overlapping matches in order of appearance. Empty input yields
    /// an empty list.
    pub fn detect(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for PhoneNumberDetector {
    fn default() -> Self {
        Self::new()
    }
}
