pub mod enumerate_domain;
pub mod get_scan;
pub mod list_scans;

pub use enumerate_domain::EnumerateDomainUseCase;
pub use get_scan::GetScanUseCase;
pub use list_scans::ListScansUseCase;
