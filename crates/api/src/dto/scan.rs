use serde::{Deserialize, Serialize};
use subrecon_domain::ScanRecord;

/// Request DTO for starting an enumeration
#[derive(Debug, Clone, Deserialize)]
pub struct EnumerateRequest {
    #[serde(default)]
    pub domain: String,
}

/// Response DTO for one stored scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub domain: String,
    pub subdomains: Vec<String>,
    pub count: usize,
    pub created_at: Option<String>,
}

impl ScanResponse {
    pub fn from_record(record: ScanRecord) -> Self {
        Self {
            domain: record.domain.to_string(),
            count: record.subdomain_count(),
            created_at: record.created_at.clone(),
            subdomains: record.subdomains,
        }
    }
}

/// Error body shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
