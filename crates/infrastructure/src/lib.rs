//! Subrecon Infrastructure Layer
pub mod database;
pub mod repositories;
pub mod tools;

pub use repositories::SqliteScanRepository;
pub use tools::CommandToolRunner;
