pub mod config;
pub mod cooldown;
pub mod debounce;
pub mod engine;
pub mod exclusion;
pub mod extractors;
pub mod score;
pub mod session;
pub mod storage;
pub mod trust;
pub mod verdict;

pub use config::ScamIndicators;
pub use engine::{PageContext, ScanEngine, ScanError, ScanOutcome, ScanResult};
pub use session::{ScanSession, SessionDecision};
pub use trust::TrustStore;
pub use verdict::Severity;
