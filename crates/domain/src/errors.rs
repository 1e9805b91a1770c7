use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Enumeration tool '{tool}' failed: {reason}")]
    ToolFailure { tool: String, reason: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("No subdomains found for domain: {0}")]
    NoSubdomainsFound(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
