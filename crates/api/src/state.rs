use std::sync::Arc;
use subrecon_application::use_cases::{EnumerateDomainUseCase, GetScanUseCase, ListScansUseCase};

#[derive(Clone)]
pub struct AppState {
    pub enumerate_domain: Arc<EnumerateDomainUseCase>,
    pub get_scan: Arc<GetScanUseCase>,
    pub list_scans: Arc<ListScansUseCase>,
}
