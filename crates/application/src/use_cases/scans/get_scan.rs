use std::sync::Arc;
use subrecon_domain::{DomainError, ScanRecord};

use crate::ports::ScanRepository;

/// Read-only lookup of a stored scan; never triggers enumeration.
pub struct GetScanUseCase {
    repository: Arc<dyn ScanRepository>,
}

impl GetScanUseCase {
    pub fn new(repository: Arc<dyn ScanRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, domain: &str) -> Result<Option<ScanRecord>, DomainError> {
        self.repository.get(domain).await
    }
}
