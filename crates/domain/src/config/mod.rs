//! Configuration module for subrecon
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP port and binding
//! - `tools`: External enumeration tool locations
//! - `enumeration`: Merge policy and concurrency limits
//! - `database`: Scan store configuration
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod enumeration;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod tools;

pub use database::DatabaseConfig;
pub use enumeration::EnumerationConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use tools::ToolsConfig;
