pub mod domain_age;
pub mod domain_reputation;
pub mod keywords;
pub mod phone;
pub mod popup;
pub mod url_structure;

pub use domain_age::{DomainAgeEstimate, DomainAgeHeuristic};
pub use domain_reputation::{DomainReputation, DomainReputationAnalyzer, RiskLevel};
pub use keywords::{KeywordMatcher, KeywordMatches};
pub use phone::PhoneNumberDetector;
pub use popup::PopupDetector;
pub use url_structure::{UrlAnalysis, UrlStructureAnalyzer};
