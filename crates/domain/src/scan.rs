use std::sync::Arc;

/// One completed enumeration for a domain, as returned to callers and as
/// persisted in the scan store.
///
/// `subdomains` is sorted ascending (bytewise) and duplicate-free. A record
/// is written once per domain and never refreshed: repeat requests read the
/// stored list until the store is cleared out-of-band.
#[derive(Debug, Clone)]
pub struct ScanRecord {
    pub domain: Arc<str>,
    pub subdomains: Vec<String>,
    pub created_at: Option<String>,
}

impl ScanRecord {
    pub fn new(domain: &str, subdomains: Vec<String>) -> Self {
        Self {
            domain: Arc::from(domain),
            subdomains,
            created_at: Some(chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    pub fn subdomain_count(&self) -> usize {
        self.subdomains.len()
    }
}
