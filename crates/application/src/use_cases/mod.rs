pub mod scans;

// Re-export use cases
pub use scans::{EnumerateDomainUseCase, GetScanUseCase, ListScansUseCase};
