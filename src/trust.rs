use crate::storage::{StoreBackend, StoredState};
use std::collections::HashSet;
use url::Url;

/// User-controlled allow-list plus the false-positive report list, backed
/// by an injected store. Persistence failures are logged and tolerated;
/// the in-memory view stays authoritative for the session.
pub struct TrustStore {
    backend: Box<dyn StoreBackend>,
    trusted: HashSet<String>,
    false_positives: HashSet<String>,
}

impl TrustStore {
    pub fn new(backend: Box<dyn StoreBackend>) -> Self {
        let state = match backend.load() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to load trust store, starting empty: {}", e);
                StoredState::default()
            }
        };

        Self {
            backend,
            trusted: state.trusted_domains.into_iter().collect(),
            false_positives: state.false_positives.into_iter().collect(),
        }
    }

    /// Exact hostname membership.
    pub fn contains(&self, hostname: &str) -> bool {
        self.trusted.contains(&hostname.to_lowercase())
    }

    /// Exact match or subdomain of a trusted entry, the same rule the
    /// static whitelist uses.
    pub fn matches(&self, hostname: &str) -> bool {
        let host = hostname.to_lowercase();
        if self.trusted.contains(&host) {
            return true;
        }
        self.trusted
            .iter()
            .any(|entry| host.ends_with(&format!(".{}", entry)))
    }

    /// Effective immediately; the next scan of this hostname scores zero.
    pub fn trust(&mut self, hostname: &str) -> bool {
        let added = self.trusted.insert(hostname.to_lowercase());
        if added {
            log::info!("Added {} to trusted domains", hostname);
            self.persist();
        }
        added
    }

    /// Extracts the hostname from the reported URL and records it,
    /// deduplicated. Returns false when the domain was already reported.
    pub fn report_false_positive(&mut self, reported_url: &str) -> Result<bool, url::ParseError> {
        let url = Url::parse(reported_url)?;
        let hostname = url
            .host_str()
            .ok_or(url::ParseError::EmptyHost)?
            .to_lowercase();

        let added = self.false_positives.insert(hostname.clone());
        if added {
            log::info!("Recorded false-positive report for {}", hostname);
            self.persist();
        }
        Ok(added)
    }

    pub fn trusted_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.trusted.iter().cloned().collect();
        domains.sort();
        domains
    }

    pub fn false_positives(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.false_positives.iter().cloned().collect();
        domains.sort();
        domains
    }

    fn persist(&mut self) {
        let state = StoredState {
            trusted_domains: self.trusted_domains(),
            false_positives: self.false_positives(),
        };
        if let Err(e) = self.backend.save(&state) {
            log::warn!("Trust store persistence failed, keeping in-memory state: {}", e);
        }
    }
}
