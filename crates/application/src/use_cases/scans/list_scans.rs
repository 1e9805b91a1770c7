use std::sync::Arc;
use subrecon_domain::{DomainError, ScanRecord};

use crate::ports::ScanRepository;

pub struct ListScansUseCase {
    repository: Arc<dyn ScanRepository>,
}

impl ListScansUseCase {
    pub fn new(repository: Arc<dyn ScanRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<ScanRecord>, DomainError> {
        self.repository.get_all().await
    }
}
