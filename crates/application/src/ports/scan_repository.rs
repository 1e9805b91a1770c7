use async_trait::async_trait;
use subrecon_domain::{DomainError, ScanRecord};

/// Repository interface for the persistent scan store.
///
/// The store is a single table keyed by domain string. Records are written
/// once per domain and overwritten unconditionally; there is no TTL and no
/// conditional-write semantics, so concurrent writers for the same domain
/// race with last-write-wins.
#[async_trait]
pub trait ScanRepository: Send + Sync {
    /// Point lookup by domain.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ScanRecord))` - If a scan was stored for this domain
    /// * `Ok(None)` - If the domain was never scanned (not an error)
    /// * `Err(DomainError::StorageError)` - On connectivity or
    ///   serialization problems, distinct from "not found"
    async fn get(&self, domain: &str) -> Result<Option<ScanRecord>, DomainError>;

    /// Writes the record for its domain, replacing any existing one.
    async fn put(&self, record: &ScanRecord) -> Result<(), DomainError>;

    /// Returns every stored scan, newest first. Full-table scan; cost grows
    /// linearly with store size.
    async fn get_all(&self) -> Result<Vec<ScanRecord>, DomainError>;
}
